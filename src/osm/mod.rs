//! OpenStreetMap element model and Overpass payload decoding.
//!
//! The fetch collaborator hands the pipeline one Overpass `out:json`
//! response; this module defines its typed shape. Elements are read-only to
//! the pipeline.

pub mod classify;
pub mod query;

pub use classify::{features_in_category, line_features, FeatureCategory, LineFeature};
pub use query::overpass_query;

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::error::PlanResult;

/// One element of an Overpass `out:json` response.
///
/// Relations can appear in mixed payloads; they carry no line geometry here
/// and are skipped by the classifier rather than failing the decode.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum RawElement {
    Node {
        id: i64,
        lon: f64,
        lat: f64,
    },
    Way {
        id: i64,
        /// Ordered node references; may dangle in partial data.
        #[serde(default)]
        nodes: Vec<i64>,
        #[serde(default)]
        tags: BTreeMap<String, String>,
    },
    Relation {
        id: i64,
    },
}

/// Top-level Overpass response body.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OsmPayload {
    #[serde(default)]
    pub elements: Vec<RawElement>,
}

/// Decode an Overpass JSON payload into typed elements.
pub fn decode_payload(json: &str) -> PlanResult<OsmPayload> {
    Ok(serde_json::from_str(json)?)
}
