//! Session state owning the bounding box, selection and fetched data.
//!
//! The UI layer mutates this value through explicit calls and reads the
//! updated box back after each change; every export renders from a value
//! snapshot, so later edits never affect an in-flight render. Fetch and
//! export are decoupled on purpose: exporting with data fetched for an
//! earlier box is allowed and the freshness is not validated here.

use crate::export::{render, RenderedPlan};
use crate::geo::{preset_bbox, GeoBoundingBox};
use crate::osm::{overpass_query, FeatureCategory, RawElement};
use crate::paper::ExportOptions;

/// Default frame over central Berlin.
pub const DEFAULT_BBOX: GeoBoundingBox = GeoBoundingBox {
    min_lon: 13.375,
    min_lat: 52.515,
    max_lon: 13.405,
    max_lat: 52.525,
};

/// Mutable state for one planning session.
#[derive(Debug, Clone)]
pub struct PlanSession {
    bbox: GeoBoundingBox,
    categories: Vec<FeatureCategory>,
    options: ExportOptions,
    elements: Vec<RawElement>,
}

impl Default for PlanSession {
    fn default() -> Self {
        Self {
            bbox: DEFAULT_BBOX,
            categories: vec![FeatureCategory::Water, FeatureCategory::Streets],
            options: ExportOptions::default(),
            elements: Vec::new(),
        }
    }
}

impl PlanSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn bbox(&self) -> GeoBoundingBox {
        self.bbox
    }

    pub fn options(&self) -> ExportOptions {
        self.options
    }

    pub fn categories(&self) -> &[FeatureCategory] {
        &self.categories
    }

    /// Replace the box wholesale (bbox editor input).
    pub fn set_bbox(&mut self, bbox: GeoBoundingBox) {
        self.bbox = bbox;
    }

    /// Apply new export settings and recompute the box from the current
    /// center.
    ///
    /// Deliberately destructive: any manually edited box shape is
    /// overwritten so the paper settings and the displayed frame never
    /// silently diverge. Returns the updated box for the map display.
    pub fn set_options(&mut self, options: ExportOptions) -> GeoBoundingBox {
        self.options = options;
        self.apply_preset()
    }

    /// Recompute the box for the current settings from the current center.
    pub fn apply_preset(&mut self) -> GeoBoundingBox {
        self.bbox = preset_bbox(self.bbox.center(), &self.options);
        log::debug!(
            "preset bbox for 1:{} {} {}: [{}, {}, {}, {}]",
            self.options.scale,
            self.options.paper.name(),
            self.options.orientation.name(),
            self.bbox.min_lon,
            self.bbox.min_lat,
            self.bbox.max_lon,
            self.bbox.max_lat
        );
        self.bbox
    }

    /// Move the box to a new center, keeping its half-extents.
    pub fn center_on(&mut self, lon: f64, lat: f64) -> GeoBoundingBox {
        self.bbox = self.bbox.centered_on(lon, lat);
        self.bbox
    }

    /// Replace the category selection, dropping duplicates.
    pub fn set_categories(&mut self, categories: &[FeatureCategory]) {
        self.categories.clear();
        for &category in categories {
            if !self.categories.contains(&category) {
                self.categories.push(category);
            }
        }
    }

    /// Toggle one category in or out of the selection.
    pub fn toggle_category(&mut self, category: FeatureCategory) {
        if let Some(index) = self.categories.iter().position(|&c| c == category) {
            self.categories.remove(index);
        } else {
            self.categories.push(category);
        }
    }

    /// Store a fetch result for the current selection.
    pub fn set_elements(&mut self, elements: Vec<RawElement>) {
        self.elements = elements;
    }

    pub fn clear_elements(&mut self) {
        self.elements.clear();
    }

    /// Overpass query for the current box and selection, for the fetch
    /// collaborator.
    pub fn overpass_query(&self) -> String {
        overpass_query(&self.bbox, &self.categories)
    }

    /// Render the export from the current snapshot.
    pub fn export(&self) -> RenderedPlan {
        render(&self.bbox, &self.elements, &self.categories, &self.options)
    }
}
