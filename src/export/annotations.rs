//! Scale bar and north arrow emission.
//!
//! Both annotations are laid out against the page surface at fixed offsets
//! from the margins, independent of map content. The scale bar length is
//! the only scale-dependent quantity and must stay geometrically consistent
//! with the chosen map scale.

use glam::DVec2;

use super::ops::{DrawOp, PageLayout, StrokeStyle, TextAlign};

/// Candidate scale-bar lengths in meters, ascending.
pub const SCALE_BAR_STEPS: [f64; 13] = [
    1.0, 2.0, 5.0, 10.0, 20.0, 50.0, 100.0, 200.0, 500.0, 1000.0, 2000.0, 5000.0, 10000.0,
];

/// Pick the scale-bar length for an export of the given real-world width.
///
/// The largest candidate strictly shorter than a quarter of the width wins;
/// areas under 4 m fall back to the smallest candidate so the bar never
/// degenerates to zero or negative length.
pub fn scale_bar_length(real_width_m: f64) -> f64 {
    let mut length = SCALE_BAR_STEPS[0];
    for &step in &SCALE_BAR_STEPS {
        if step < real_width_m / 4.0 {
            length = step;
        }
    }
    length
}

/// Append the scale bar near the bottom-left margin.
///
/// A horizontal segment with end ticks and a centered length label above
/// it. Omitted entirely when the page-to-ground ratio is degenerate; a bar
/// of non-finite length must never reach the backend.
pub fn push_scale_bar(
    ops: &mut Vec<DrawOp>,
    layout: &PageLayout,
    real_width_m: f64,
    meters_per_unit: f64,
) {
    if !meters_per_unit.is_finite() || meters_per_unit <= 0.0 {
        return;
    }
    let length_m = scale_bar_length(real_width_m);
    let length_units = length_m / meters_per_unit;
    let x = layout.margin + 12.0;
    let y = layout.height - layout.margin - 24.0;

    ops.push(DrawOp::StrokeStyle(StrokeStyle {
        color: [0, 0, 0],
        width: 1.0,
        dash: None,
    }));
    ops.push(DrawOp::MoveTo(DVec2::new(x, y)));
    ops.push(DrawOp::LineTo(DVec2::new(x + length_units, y)));
    ops.push(DrawOp::Stroke);
    // end ticks
    ops.push(DrawOp::MoveTo(DVec2::new(x, y - 3.0)));
    ops.push(DrawOp::LineTo(DVec2::new(x, y + 3.0)));
    ops.push(DrawOp::Stroke);
    ops.push(DrawOp::MoveTo(DVec2::new(x + length_units, y - 3.0)));
    ops.push(DrawOp::LineTo(DVec2::new(x + length_units, y + 3.0)));
    ops.push(DrawOp::Stroke);
    ops.push(DrawOp::Text {
        content: format!("{} m", length_m),
        position: DVec2::new(x + length_units / 2.0, y - 4.0),
        size: 10.0,
        align: TextAlign::Center,
    });
}

/// Append the north arrow glyph near the top-left margin.
///
/// Vertical shaft, two angled head strokes and an "N" label. The projection
/// keeps true north page-up (central meridian 0), so the glyph needs no
/// bearing correction.
pub fn push_north_arrow(ops: &mut Vec<DrawOp>, layout: &PageLayout) {
    let x = layout.margin + 24.0;
    let y = layout.margin + 32.0;
    let tip = y - 18.0;

    ops.push(DrawOp::StrokeStyle(StrokeStyle {
        color: [0, 0, 0],
        width: 1.2,
        dash: None,
    }));
    ops.push(DrawOp::MoveTo(DVec2::new(x, y)));
    ops.push(DrawOp::LineTo(DVec2::new(x, tip)));
    ops.push(DrawOp::Stroke);
    ops.push(DrawOp::MoveTo(DVec2::new(x, tip)));
    ops.push(DrawOp::LineTo(DVec2::new(x - 4.0, tip + 7.0)));
    ops.push(DrawOp::Stroke);
    ops.push(DrawOp::MoveTo(DVec2::new(x, tip)));
    ops.push(DrawOp::LineTo(DVec2::new(x + 4.0, tip + 7.0)));
    ops.push(DrawOp::Stroke);
    ops.push(DrawOp::Text {
        content: "N".to_string(),
        position: DVec2::new(x, tip - 4.0),
        size: 12.0,
        align: TextAlign::Center,
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn picks_largest_step_under_quarter_width() {
        // 1000 m wide => quarter is 250, largest candidate below is 200
        assert_eq!(scale_bar_length(1000.0), 200.0);
        assert_eq!(scale_bar_length(100.0), 20.0);
        assert_eq!(scale_bar_length(1_000_000.0), 10000.0);
    }

    #[test]
    fn tiny_areas_fall_back_to_one_meter() {
        assert_eq!(scale_bar_length(3.0), 1.0);
        assert_eq!(scale_bar_length(4.0), 1.0);
        assert_eq!(scale_bar_length(0.0), 1.0);
        assert_eq!(scale_bar_length(-5.0), 1.0);
    }

    #[test]
    fn quarter_bound_is_strict() {
        // exactly 800 => quarter is 200; 200 is not strictly less, pick 100
        assert_eq!(scale_bar_length(800.0), 100.0);
    }

    #[test]
    fn scale_bar_ops_have_expected_shape() {
        let layout = PageLayout {
            width: 210.0,
            height: 297.0,
            margin: 10.0,
        };
        let mut ops = Vec::new();
        // 1000 m over 190 drawable units
        push_scale_bar(&mut ops, &layout, 1000.0, 1000.0 / 190.0);
        let texts: Vec<_> = ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::Text { content, .. } => Some(content.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(texts, ["200 m"]);
        // three stroked segments: bar plus two ticks
        let strokes = ops.iter().filter(|op| **op == DrawOp::Stroke).count();
        assert_eq!(strokes, 3);
        // bar spans 200 m worth of page units
        match (&ops[1], &ops[2]) {
            (DrawOp::MoveTo(a), DrawOp::LineTo(b)) => {
                assert!((b.x - a.x - 200.0 / (1000.0 / 190.0)).abs() < 1e-9);
                assert_eq!(a.y, b.y);
            }
            other => panic!("unexpected ops {:?}", other),
        }
    }

    #[test]
    fn degenerate_ratio_emits_no_bar() {
        let layout = PageLayout {
            width: 210.0,
            height: 297.0,
            margin: 10.0,
        };
        let mut ops = Vec::new();
        push_scale_bar(&mut ops, &layout, 0.0, 0.0);
        push_scale_bar(&mut ops, &layout, f64::NAN, f64::NAN);
        assert!(ops.is_empty());
    }

    #[test]
    fn north_arrow_is_fixed_geometry() {
        let layout = PageLayout {
            width: 210.0,
            height: 297.0,
            margin: 10.0,
        };
        let mut ops = Vec::new();
        push_north_arrow(&mut ops, &layout);
        // shaft + two head strokes
        let strokes = ops.iter().filter(|op| **op == DrawOp::Stroke).count();
        assert_eq!(strokes, 3);
        match ops.last() {
            Some(DrawOp::Text { content, align, .. }) => {
                assert_eq!(content, "N");
                assert_eq!(*align, TextAlign::Center);
            }
            other => panic!("expected label, got {:?}", other),
        }
    }
}
