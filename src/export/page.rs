//! Planar export rectangle and page coordinate mapping.
//!
//! Geographic coordinates go through the Mercator projection, are clipped
//! against the planar export rectangle, and land in page units inside the
//! margins. Points outside the rectangle map to `None` ("do not draw").

use glam::DVec2;

use crate::geo::{mercator, GeoBoundingBox, PlanarRect};

use super::ops::PageLayout;

/// Maps geographic coordinates onto the drawable page area.
#[derive(Debug, Clone)]
pub struct PageMapper {
    extent: PlanarRect,
    layout: PageLayout,
}

impl PageMapper {
    /// Build a mapper for one export snapshot.
    ///
    /// The export rectangle is the axis-aligned planar bounding box of the
    /// geographic box's four projected corners.
    pub fn new(bbox: &GeoBoundingBox, layout: PageLayout) -> Self {
        Self {
            extent: mercator::planar_extent(bbox),
            layout,
        }
    }

    /// The planar export rectangle in Mercator meters.
    pub fn extent(&self) -> &PlanarRect {
        &self.extent
    }

    /// Ground meters represented by one page unit of drawable width.
    ///
    /// Not finite and positive when the export rectangle is degenerate;
    /// callers must treat that as "nothing mappable".
    pub fn meters_per_unit(&self) -> f64 {
        self.extent.width() / self.layout.drawable_width()
    }

    /// Map a geographic coordinate into page coordinates.
    ///
    /// Returns `None` for points outside the export rectangle, and for
    /// every point when the rectangle has zero width or height, so a
    /// degenerate box draws nothing instead of propagating NaN.
    pub fn to_page(&self, lon: f64, lat: f64) -> Option<DVec2> {
        let width = self.extent.width();
        let height = self.extent.height();
        if width <= 0.0 || height <= 0.0 {
            return None;
        }
        let p = mercator::project(lon, lat);
        if !self.extent.contains(p) {
            return None;
        }
        let nx = (p.x - self.extent.min.x) / width;
        let ny = (p.y - self.extent.min.y) / height;
        // page y grows downward while planar y grows north
        Some(DVec2::new(
            self.layout.margin + nx * self.layout.drawable_width(),
            self.layout.margin + (1.0 - ny) * self.layout.drawable_height(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::ops::PAGE_MARGIN;

    fn a4_layout() -> PageLayout {
        PageLayout {
            width: 210.0,
            height: 297.0,
            margin: PAGE_MARGIN,
        }
    }

    fn berlin_mapper() -> PageMapper {
        let bbox = GeoBoundingBox::new(13.375, 52.515, 13.405, 52.525);
        PageMapper::new(&bbox, a4_layout())
    }

    #[test]
    fn corners_map_to_margin_extremes() {
        let mapper = berlin_mapper();
        let layout = a4_layout();

        let sw = mapper.to_page(13.375, 52.515).unwrap();
        assert!((sw.x - layout.margin).abs() < 1e-6);
        assert!((sw.y - (layout.height - layout.margin)).abs() < 1e-6);

        let ne = mapper.to_page(13.405, 52.525).unwrap();
        assert!((ne.x - (layout.width - layout.margin)).abs() < 1e-6);
        assert!((ne.y - layout.margin).abs() < 1e-6);
    }

    #[test]
    fn outside_points_are_undefined() {
        let mapper = berlin_mapper();
        assert!(mapper.to_page(13.374, 52.52).is_none());
        assert!(mapper.to_page(13.406, 52.52).is_none());
        assert!(mapper.to_page(13.39, 52.514).is_none());
        assert!(mapper.to_page(13.39, 52.526).is_none());
    }

    #[test]
    fn interior_point_lands_inside_margins() {
        let mapper = berlin_mapper();
        let layout = a4_layout();
        let p = mapper.to_page(13.39, 52.52).unwrap();
        assert!(p.x > layout.margin && p.x < layout.width - layout.margin);
        assert!(p.y > layout.margin && p.y < layout.height - layout.margin);
    }

    #[test]
    fn north_maps_to_smaller_page_y() {
        let mapper = berlin_mapper();
        let south = mapper.to_page(13.39, 52.516).unwrap();
        let north = mapper.to_page(13.39, 52.524).unwrap();
        assert!(north.y < south.y);
    }

    #[test]
    fn degenerate_extent_maps_nothing() {
        // zero-width box: every point is undefined, no NaN escapes
        let bbox = GeoBoundingBox::new(13.39, 52.515, 13.39, 52.525);
        let mapper = PageMapper::new(&bbox, a4_layout());
        assert!(mapper.to_page(13.39, 52.52).is_none());
        assert!(mapper.to_page(13.39, 52.515).is_none());
    }
}
