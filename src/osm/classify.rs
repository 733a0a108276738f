//! Tag-based feature classification shared by preview and export.
//!
//! One predicate per category, evaluated independently: a feature may
//! belong to several categories and is then drawn once per matching layer.
//! Any renderer (interactive preview, print export) consults these same
//! predicates, so what the user sees is what prints.

use std::collections::{BTreeMap, HashMap};

use glam::DVec2;

use super::RawElement;

/// Line-feature categories selectable for fetch and export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum FeatureCategory {
    Water,
    Streets,
    Buildings,
    Railways,
}

impl FeatureCategory {
    /// Every category, in the order the selector UI lists them.
    pub const ALL: [FeatureCategory; 4] = [
        FeatureCategory::Water,
        FeatureCategory::Streets,
        FeatureCategory::Buildings,
        FeatureCategory::Railways,
    ];

    /// Stable lowercase token, also the CLI selection name.
    pub fn name(self) -> &'static str {
        match self {
            FeatureCategory::Water => "water",
            FeatureCategory::Streets => "streets",
            FeatureCategory::Buildings => "buildings",
            FeatureCategory::Railways => "railways",
        }
    }

    /// Parse a category token, case-insensitive.
    pub fn parse(token: &str) -> Option<Self> {
        match token.to_ascii_lowercase().as_str() {
            "water" => Some(FeatureCategory::Water),
            "streets" => Some(FeatureCategory::Streets),
            "buildings" => Some(FeatureCategory::Buildings),
            "railways" => Some(FeatureCategory::Railways),
            _ => None,
        }
    }

    /// Tag predicate deciding layer membership.
    ///
    /// The water predicate is wider than the water fetch filter: waterway
    /// lines pulled in by other selections still classify as water.
    pub fn matches(self, tags: &BTreeMap<String, String>) -> bool {
        match self {
            FeatureCategory::Water => {
                tags.contains_key("waterway")
                    || tags.get("natural").is_some_and(|v| v == "water")
            }
            FeatureCategory::Streets => tags.contains_key("highway"),
            FeatureCategory::Buildings => tags.contains_key("building"),
            FeatureCategory::Railways => tags.get("railway").is_some_and(|v| v == "rail"),
        }
    }

    /// Overpass QL way filter fetching this category.
    pub fn overpass_filter(self) -> &'static str {
        match self {
            FeatureCategory::Water => r#"way["natural"="water"]"#,
            FeatureCategory::Streets => r#"way["highway"]"#,
            FeatureCategory::Buildings => r#"way["building"]"#,
            FeatureCategory::Railways => r#"way["railway"="rail"]"#,
        }
    }
}

/// A way resolved into an ordered coordinate sequence with its tags.
#[derive(Debug, Clone, PartialEq)]
pub struct LineFeature {
    /// (lon, lat) pairs in way order.
    pub coordinates: Vec<DVec2>,
    pub tags: BTreeMap<String, String>,
}

/// Resolve ways against the node table, preserving element order.
///
/// Nodes are collected in one pass, then each way's references are looked
/// up. Dangling references are skipped silently; ways left with fewer than
/// two coordinates are dropped as degenerate geometry.
pub fn line_features(elements: &[RawElement]) -> Vec<LineFeature> {
    let mut nodes: HashMap<i64, DVec2> = HashMap::new();
    for element in elements {
        if let RawElement::Node { id, lon, lat } = element {
            nodes.insert(*id, DVec2::new(*lon, *lat));
        }
    }

    let mut features = Vec::new();
    for element in elements {
        if let RawElement::Way {
            nodes: node_ids,
            tags,
            ..
        } = element
        {
            let coordinates: Vec<DVec2> = node_ids
                .iter()
                .filter_map(|id| nodes.get(id).copied())
                .collect();
            if coordinates.len() > 1 {
                features.push(LineFeature {
                    coordinates,
                    tags: tags.clone(),
                });
            }
        }
    }
    features
}

/// Features matching `category`, preserving input order.
pub fn features_in_category(
    features: &[LineFeature],
    category: FeatureCategory,
) -> Vec<&LineFeature> {
    features
        .iter()
        .filter(|feature| category.matches(&feature.tags))
        .collect()
}
