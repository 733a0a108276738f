//! Overpass QL query construction.
//!
//! Builds the single union query the fetch collaborator submits; the
//! network round trip itself lives outside the crate. Keeping the query
//! fragments next to the classification predicates keeps fetch volume
//! proportional to the user's category selection.

use crate::geo::GeoBoundingBox;

use super::FeatureCategory;

/// Build an Overpass QL query for the selected categories within `bbox`.
///
/// Overpass expects the box as (south,west,north,east). All per-category
/// queries are grouped in one union block so the server answers everything
/// in a single round trip; the recursion footer pulls in the member nodes
/// of every matched way.
pub fn overpass_query(bbox: &GeoBoundingBox, categories: &[FeatureCategory]) -> String {
    let bbox_str = format!(
        "{},{},{},{}",
        bbox.min_lat, bbox.min_lon, bbox.max_lat, bbox.max_lon
    );
    let mut query = String::from("[out:json][timeout:25];\n(\n");
    for category in categories {
        query.push_str(category.overpass_filter());
        query.push('(');
        query.push_str(&bbox_str);
        query.push_str(");\n");
    }
    query.push_str(");\nout body;>;\nout skel qt;");
    query
}
