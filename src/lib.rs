//! Print-ready site plan export for OpenStreetMap vector data.
//!
//! Frames a geographic area, projects fetched OSM line features through an
//! ellipsoidal Mercator projection, clips them onto a scaled paper sheet and
//! emits backend-agnostic drawing instructions together with cartographic
//! annotations (scale bar, north arrow). A bundled SVG writer turns the
//! instruction stream into a millimeter-accurate document.
//!
//! The interactive map display, the Overpass network client and the final
//! document rasterizer are external collaborators: the crate only defines
//! the values exchanged with them (`GeoBoundingBox`, `RawElement`,
//! `DrawOp` + `PageLayout`).

pub mod cli;
pub mod error;
pub mod export;
pub mod geo;
pub mod osm;
pub mod paper;
pub mod session;

pub use error::{PlanError, PlanResult};
pub use export::{
    render, save_svg, svg_document, DrawOp, PageLayout, RenderedPlan, StrokeStyle, TextAlign,
};
pub use geo::{preset_bbox, GeoBoundingBox};
pub use osm::{
    decode_payload, line_features, overpass_query, FeatureCategory, LineFeature, OsmPayload,
    RawElement,
};
pub use paper::{ExportOptions, Orientation, PaperSize};
pub use session::PlanSession;
