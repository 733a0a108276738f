//! SVG document backend for rendered plans.
//!
//! Replays a drawing-op sequence into a standalone SVG sized in physical
//! millimeters, suitable for print-grade output. One consumer of the op
//! interface; any other backend (PDF, plotter) replays the same stream.

use std::fmt::Write as _;
use std::path::Path;

use crate::error::PlanResult;

use super::ops::{DrawOp, RenderedPlan, Rgb, StrokeStyle, TextAlign};

/// Decimal precision for coordinate values.
const PRECISION: usize = 2;

/// Convert an RGB color to a CSS hex color string (#RRGGBB).
fn color_to_hex(c: Rgb) -> String {
    format!("#{:02x}{:02x}{:02x}", c[0], c[1], c[2])
}

/// Format a coordinate with the fixed precision.
fn fmt_coord(value: f64) -> String {
    format!("{:.prec$}", value, prec = PRECISION)
}

/// Escape text for XML/SVG.
fn escape_xml(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

fn push_path(svg: &mut String, d: &str, style: &StrokeStyle) {
    let _ = write!(
        svg,
        "  <path d=\"{}\" fill=\"none\" stroke=\"{}\" stroke-width=\"{}\"",
        d.trim_end(),
        color_to_hex(style.color),
        fmt_coord(style.width)
    );
    if let Some([dash, gap]) = style.dash {
        let _ = write!(
            svg,
            " stroke-dasharray=\"{},{}\"",
            fmt_coord(dash),
            fmt_coord(gap)
        );
    }
    svg.push_str(" stroke-linecap=\"round\" stroke-linejoin=\"round\"/>\n");
}

/// Serialize a rendered plan as a standalone SVG document.
///
/// The root element carries the page size in millimeters and a viewBox in
/// page units, so the document prints at true physical scale.
pub fn svg_document(plan: &RenderedPlan) -> String {
    let page = plan.page;
    let mut svg = String::with_capacity(512 + 48 * plan.ops.len());
    svg.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    let _ = writeln!(
        svg,
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}mm\" height=\"{h}mm\" viewBox=\"0 0 {w} {h}\">",
        w = page.width,
        h = page.height
    );

    let mut style = StrokeStyle::default();
    let mut path = String::new();
    for op in &plan.ops {
        match op {
            DrawOp::StrokeStyle(s) => style = s.clone(),
            DrawOp::MoveTo(p) => {
                let _ = write!(path, "M{},{} ", fmt_coord(p.x), fmt_coord(p.y));
            }
            DrawOp::LineTo(p) => {
                let _ = write!(path, "L{},{} ", fmt_coord(p.x), fmt_coord(p.y));
            }
            DrawOp::Stroke => {
                if !path.is_empty() {
                    push_path(&mut svg, &path, &style);
                    path.clear();
                }
            }
            DrawOp::Text {
                content,
                position,
                size,
                align,
            } => {
                let anchor = match align {
                    TextAlign::Left => "start",
                    TextAlign::Center => "middle",
                };
                let _ = writeln!(
                    svg,
                    "  <text x=\"{}\" y=\"{}\" font-family=\"sans-serif\" font-size=\"{}\" text-anchor=\"{}\" fill=\"#000000\">{}</text>",
                    fmt_coord(position.x),
                    fmt_coord(position.y),
                    fmt_coord(*size),
                    anchor,
                    escape_xml(content)
                );
            }
        }
    }

    svg.push_str("</svg>\n");
    svg
}

/// Write the SVG document for a rendered plan to disk.
pub fn save_svg(plan: &RenderedPlan, path: &Path) -> PlanResult<()> {
    std::fs::write(path, svg_document(plan))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::ops::PageLayout;
    use glam::DVec2;

    fn a4_page() -> PageLayout {
        PageLayout {
            width: 210.0,
            height: 297.0,
            margin: 10.0,
        }
    }

    #[test]
    fn empty_plan_is_a_valid_document() {
        let plan = RenderedPlan {
            page: a4_page(),
            ops: Vec::new(),
        };
        let svg = svg_document(&plan);
        assert!(svg.starts_with("<?xml version"));
        assert!(svg.contains("width=\"210mm\" height=\"297mm\""));
        assert!(svg.contains("viewBox=\"0 0 210 297\""));
        assert!(svg.trim_end().ends_with("</svg>"));
    }

    #[test]
    fn one_path_per_stroke_op() {
        let plan = RenderedPlan {
            page: a4_page(),
            ops: vec![
                DrawOp::StrokeStyle(StrokeStyle {
                    color: [255, 102, 0],
                    width: 0.7,
                    dash: None,
                }),
                DrawOp::MoveTo(DVec2::new(10.0, 10.0)),
                DrawOp::LineTo(DVec2::new(20.0, 20.0)),
                DrawOp::Stroke,
                DrawOp::MoveTo(DVec2::new(30.0, 30.0)),
                DrawOp::LineTo(DVec2::new(40.0, 40.0)),
                DrawOp::Stroke,
            ],
        };
        let svg = svg_document(&plan);
        assert_eq!(svg.matches("<path").count(), 2);
        assert!(svg.contains("stroke=\"#ff6600\""));
        assert!(svg.contains("d=\"M10.00,10.00 L20.00,20.00\""));
    }

    #[test]
    fn dashed_style_emits_dasharray() {
        let plan = RenderedPlan {
            page: a4_page(),
            ops: vec![
                DrawOp::StrokeStyle(StrokeStyle {
                    color: [68, 68, 68],
                    width: 0.7,
                    dash: Some([2.0, 2.0]),
                }),
                DrawOp::MoveTo(DVec2::new(0.0, 0.0)),
                DrawOp::LineTo(DVec2::new(5.0, 5.0)),
                DrawOp::Stroke,
            ],
        };
        let svg = svg_document(&plan);
        assert!(svg.contains("stroke-dasharray=\"2.00,2.00\""));
    }

    #[test]
    fn text_is_anchored_and_escaped() {
        let plan = RenderedPlan {
            page: a4_page(),
            ops: vec![DrawOp::Text {
                content: "<200 m>".to_string(),
                position: DVec2::new(50.0, 260.0),
                size: 10.0,
                align: TextAlign::Center,
            }],
        };
        let svg = svg_document(&plan);
        assert!(svg.contains("text-anchor=\"middle\""));
        assert!(svg.contains("&lt;200 m&gt;"));
        assert!(!svg.contains("<200"));
    }

    #[test]
    fn stroke_without_path_emits_nothing() {
        let plan = RenderedPlan {
            page: a4_page(),
            ops: vec![DrawOp::Stroke, DrawOp::Stroke],
        };
        let svg = svg_document(&plan);
        assert_eq!(svg.matches("<path").count(), 0);
    }
}
