//! Central error handling for the export pipeline.
//!
//! Provides a unified PlanError enum covering the crate's fallible edges:
//! decoding fetched payloads and writing finished documents. Geometry and
//! classification never fail; malformed input degrades to "draw nothing"
//! instead (partial OSM data is expected and common).

/// Centralized error type for pipeline operations
#[derive(thiserror::Error, Debug)]
pub enum PlanError {
    #[error("Decode error: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for pipeline operations
pub type PlanResult<T> = Result<T, PlanError>;
