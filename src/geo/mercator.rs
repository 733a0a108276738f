//! Ellipsoidal Mercator projection for metric print export.
//!
//! The single conformal projection the pipeline uses: WGS84 ellipsoid,
//! central meridian 0, unit meters (the classic `+proj=merc +lon_0=0 +k=1
//! +datum=WGS84` parameterization). Conformality keeps angles locally true,
//! so north stays page-up and no bearing correction is needed anywhere
//! downstream.

use glam::DVec2;

use super::GeoBoundingBox;

/// WGS84 semi-major axis in meters.
pub const WGS84_A: f64 = 6_378_137.0;

/// WGS84 first eccentricity squared.
pub const WGS84_E2: f64 = 0.006_694_379_990_14;

/// Project geographic degrees to planar Mercator meters.
///
/// Deterministic and reversible via [`unproject`] within well under a
/// centimeter at site-plan latitudes. Diverges toward the poles like every
/// Mercator variant; callers stay within [-85, 85].
pub fn project(lon: f64, lat: f64) -> DVec2 {
    let e = WGS84_E2.sqrt();
    let phi = lat.to_radians();
    let e_sin = e * phi.sin();
    let ts = (std::f64::consts::FRAC_PI_4 + phi / 2.0).tan()
        * ((1.0 - e_sin) / (1.0 + e_sin)).powf(e / 2.0);
    DVec2::new(WGS84_A * lon.to_radians(), WGS84_A * ts.ln())
}

/// Invert [`project`], returning (lon, lat) degrees.
///
/// The latitude has no closed form on the ellipsoid; the conformal
/// latitude is inverted by fixed-point iteration, which converges in a
/// handful of rounds.
pub fn unproject(point: DVec2) -> (f64, f64) {
    let e = WGS84_E2.sqrt();
    let t = (-point.y / WGS84_A).exp();
    let mut phi = std::f64::consts::FRAC_PI_2 - 2.0 * t.atan();
    for _ in 0..8 {
        let e_sin = e * phi.sin();
        let next = std::f64::consts::FRAC_PI_2
            - 2.0 * (t * ((1.0 - e_sin) / (1.0 + e_sin)).powf(e / 2.0)).atan();
        if (next - phi).abs() < 1e-12 {
            phi = next;
            break;
        }
        phi = next;
    }
    ((point.x / WGS84_A).to_degrees(), phi.to_degrees())
}

/// Axis-aligned rectangle in projected meters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlanarRect {
    /// Minimum corner (south-west).
    pub min: DVec2,
    /// Maximum corner (north-east).
    pub max: DVec2,
}

impl PlanarRect {
    /// Create a rectangle from min/max corners.
    pub fn new(min: DVec2, max: DVec2) -> Self {
        Self { min, max }
    }

    /// Width of the rectangle.
    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    /// Height of the rectangle.
    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    /// Inclusive containment test.
    pub fn contains(&self, point: DVec2) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
    }

    /// Expand the rectangle to include a point.
    pub fn expand_to_include(&mut self, point: DVec2) {
        self.min.x = self.min.x.min(point.x);
        self.min.y = self.min.y.min(point.y);
        self.max.x = self.max.x.max(point.x);
        self.max.y = self.max.y.max(point.y);
    }
}

/// The planar export rectangle for a geographic box.
///
/// All four corners are projected and the axis-aligned min/max taken: a
/// geographic rectangle is not an exact planar rectangle once projected at
/// non-zero latitude spans, so the bounding box of the projected corners is
/// the accepted approximation.
pub fn planar_extent(bbox: &GeoBoundingBox) -> PlanarRect {
    let corners = bbox.corners();
    let first = project(corners[0].x, corners[0].y);
    let mut rect = PlanarRect::new(first, first);
    for corner in &corners[1..] {
        rect.expand_to_include(project(corner.x, corner.y));
    }
    rect
}
