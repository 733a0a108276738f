// src/geo/mod.rs
// Geographic bounding-box geometry for paper-scaled exports
// RELEVANT FILES: src/geo/mercator.rs, src/paper.rs, src/session.rs

pub mod mercator;

pub use mercator::{planar_extent, project, unproject, PlanarRect};

use glam::DVec2;

use crate::paper::ExportOptions;

/// Mean spherical earth radius in meters. Informational sizing only; the
/// export projection does not use it.
const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Meters per degree of latitude in the preset conversion.
const METERS_PER_DEG_LAT: f64 = 111_320.0;

/// Equatorial circumference in meters; divided by 360 for longitude degrees.
const EQUATOR_CIRCUMFERENCE_M: f64 = 40_075_000.0;

/// Axis-aligned geographic rectangle in WGS84 degrees.
///
/// Invariant: `min_lon < max_lon` and `min_lat < max_lat`. The box is always
/// replaced wholesale; the pipeline reads value snapshots and never holds a
/// reference across calls, so later edits cannot affect an in-flight export.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoBoundingBox {
    pub min_lon: f64,
    pub min_lat: f64,
    pub max_lon: f64,
    pub max_lat: f64,
}

impl GeoBoundingBox {
    /// Create a box from (min_lon, min_lat, max_lon, max_lat).
    pub fn new(min_lon: f64, min_lat: f64, max_lon: f64, max_lat: f64) -> Self {
        Self {
            min_lon,
            min_lat,
            max_lon,
            max_lat,
        }
    }

    /// Center point as (lon, lat).
    pub fn center(&self) -> DVec2 {
        DVec2::new(
            (self.min_lon + self.max_lon) / 2.0,
            (self.min_lat + self.max_lat) / 2.0,
        )
    }

    /// The four corners in (lon, lat), counter-clockwise from the
    /// south-west.
    pub fn corners(&self) -> [DVec2; 4] {
        [
            DVec2::new(self.min_lon, self.min_lat),
            DVec2::new(self.max_lon, self.min_lat),
            DVec2::new(self.max_lon, self.max_lat),
            DVec2::new(self.min_lon, self.max_lat),
        ]
    }

    /// Approximate (width, height) in meters on a spherical earth.
    ///
    /// Width is measured along the box's mean latitude, scaled by its
    /// cosine. Good enough for on-screen sizing readouts; the export path
    /// goes through the Mercator projection instead.
    pub fn size_meters(&self) -> (f64, f64) {
        let mean_lat = (self.min_lat + self.max_lat) / 2.0;
        let d_lon = (self.max_lon - self.min_lon).to_radians();
        let d_lat = (self.max_lat - self.min_lat).to_radians();
        let width = EARTH_RADIUS_M * d_lon * mean_lat.to_radians().cos();
        let height = EARTH_RADIUS_M * d_lat;
        (width.abs(), height.abs())
    }

    /// The same box moved to a new center, keeping its half-extents.
    pub fn centered_on(&self, lon: f64, lat: f64) -> Self {
        let d_lon = (self.max_lon - self.min_lon) / 2.0;
        let d_lat = (self.max_lat - self.min_lat) / 2.0;
        Self {
            min_lon: lon - d_lon,
            min_lat: lat - d_lat,
            max_lon: lon + d_lon,
            max_lat: lat + d_lat,
        }
    }
}

/// Compute the box covering exactly one paper sheet at the given settings,
/// centered on `center` (lon, lat degrees).
///
/// Page millimeters become ground meters through the scale, then degrees
/// through fixed meters-per-degree factors at the center latitude. The
/// equirectangular conversion is exact at the equator and drifts with
/// |latitude|; that drift is accepted for city-scale site plans rather than
/// corrected with geodesic formulas.
pub fn preset_bbox(center: DVec2, options: &ExportOptions) -> GeoBoundingBox {
    let (width_m, height_m) = options.coverage_meters();
    let meters_per_deg_lon = EQUATOR_CIRCUMFERENCE_M * center.y.to_radians().cos() / 360.0;
    let d_lat = height_m / 2.0 / METERS_PER_DEG_LAT;
    let d_lon = width_m / 2.0 / meters_per_deg_lon;
    GeoBoundingBox::new(
        center.x - d_lon,
        center.y - d_lat,
        center.x + d_lon,
        center.y + d_lat,
    )
}
