//! Export orchestration: classified features plus annotations become one
//! ordered op sequence.
//!
//! Stateless and pure given its four inputs; two calls with identical
//! inputs yield identical sequences.

use crate::geo::GeoBoundingBox;
use crate::osm::{features_in_category, line_features, FeatureCategory, LineFeature, RawElement};
use crate::paper::ExportOptions;

use super::annotations;
use super::ops::{DrawOp, PageLayout, RenderedPlan, StrokeStyle};
use super::page::PageMapper;

/// Stroke width shared by all feature layers, page units.
const FEATURE_STROKE_WIDTH: f64 = 0.7;

/// Bottom-to-top stacking order, matching the interactive preview. Draw
/// order never depends on input order.
const DRAW_ORDER: [FeatureCategory; 4] = [
    FeatureCategory::Water,
    FeatureCategory::Railways,
    FeatureCategory::Streets,
    FeatureCategory::Buildings,
];

/// Pen for one category layer.
fn category_style(category: FeatureCategory) -> StrokeStyle {
    match category {
        FeatureCategory::Water => StrokeStyle {
            color: [51, 153, 255],
            width: FEATURE_STROKE_WIDTH,
            dash: None,
        },
        FeatureCategory::Railways => StrokeStyle {
            color: [68, 68, 68],
            width: FEATURE_STROKE_WIDTH,
            dash: Some([2.0, 2.0]),
        },
        FeatureCategory::Streets => StrokeStyle {
            color: [255, 102, 0],
            width: FEATURE_STROKE_WIDTH,
            dash: None,
        },
        FeatureCategory::Buildings => StrokeStyle {
            color: [136, 136, 136],
            width: FEATURE_STROKE_WIDTH,
            dash: None,
        },
    }
}

/// Append one feature's page path.
///
/// A move starts at the first mappable point; any unmappable point breaks
/// the path without connecting across the gap, and a new move starts at the
/// next mappable one. A feature that leaves and re-enters the sheet never
/// strokes a spurious segment across it. Zero mappable points draw nothing.
fn push_feature_path(ops: &mut Vec<DrawOp>, mapper: &PageMapper, feature: &LineFeature) {
    let mut pending_move = true;
    let mut drew_any = false;
    for coordinate in &feature.coordinates {
        match mapper.to_page(coordinate.x, coordinate.y) {
            Some(point) => {
                if pending_move {
                    ops.push(DrawOp::MoveTo(point));
                    pending_move = false;
                } else {
                    ops.push(DrawOp::LineTo(point));
                }
                drew_any = true;
            }
            None => pending_move = true,
        }
    }
    if drew_any {
        ops.push(DrawOp::Stroke);
    }
}

/// Render one export from a snapshot of the session state.
///
/// Selected categories are drawn bottom-to-top in the fixed stacking
/// order, one stroke style per non-empty layer, then the scale bar and
/// north arrow. An empty element collection still produces a valid,
/// annotated blank sheet.
pub fn render(
    bbox: &GeoBoundingBox,
    elements: &[RawElement],
    categories: &[FeatureCategory],
    options: &ExportOptions,
) -> RenderedPlan {
    let layout = PageLayout::for_options(options);
    let mapper = PageMapper::new(bbox, layout);
    let features = line_features(elements);
    log::debug!(
        "export: {} elements resolved to {} line features",
        elements.len(),
        features.len()
    );

    let mut ops = Vec::new();
    for category in DRAW_ORDER {
        if !categories.contains(&category) {
            continue;
        }
        let layer = features_in_category(&features, category);
        let mut layer_ops = Vec::new();
        for feature in &layer {
            push_feature_path(&mut layer_ops, &mapper, feature);
        }
        // everything may have been clipped away
        if layer_ops.is_empty() {
            continue;
        }
        log::debug!(
            "export: {} {} features on sheet",
            layer.len(),
            category.name()
        );
        ops.push(DrawOp::StrokeStyle(category_style(category)));
        ops.append(&mut layer_ops);
    }

    annotations::push_scale_bar(
        &mut ops,
        &layout,
        mapper.extent().width(),
        mapper.meters_per_unit(),
    );
    annotations::push_north_arrow(&mut ops, &layout);

    RenderedPlan { page: layout, ops }
}
