//! Drawing instruction model handed to document backends.
//!
//! The orchestrator emits a flat, ordered op sequence in page coordinates;
//! a backend replays it onto its page surface (the bundled SVG writer, a
//! PDF library, a plotter driver). Pure output with no further lifecycle.

use glam::DVec2;

use crate::paper::ExportOptions;

/// RGB stroke color, 0-255 per channel.
pub type Rgb = [u8; 3];

/// Fixed inset in page units reserved on all four sides of the sheet.
pub const PAGE_MARGIN: f64 = 10.0;

/// Horizontal anchoring for text placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAlign {
    Left,
    Center,
}

/// Pen state applied to all subsequent paths.
#[derive(Debug, Clone, PartialEq)]
pub struct StrokeStyle {
    pub color: Rgb,
    /// Stroke width in page units.
    pub width: f64,
    /// Dash/gap lengths in page units; solid when absent.
    pub dash: Option<[f64; 2]>,
}

impl Default for StrokeStyle {
    fn default() -> Self {
        Self {
            color: [0, 0, 0],
            width: 1.0,
            dash: None,
        }
    }
}

/// One primitive drawing operation.
///
/// Positions are page units with the origin at the top-left corner and y
/// increasing downward.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    /// Set the pen for subsequent paths.
    StrokeStyle(StrokeStyle),
    /// Begin a path segment.
    MoveTo(DVec2),
    /// Extend the current path segment.
    LineTo(DVec2),
    /// Stroke and discard the accumulated path.
    Stroke,
    /// Place a text run.
    Text {
        content: String,
        position: DVec2,
        /// Font size in points.
        size: f64,
        align: TextAlign,
    },
}

/// Page metadata accompanying an op sequence.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageLayout {
    /// Sheet width in page units.
    pub width: f64,
    /// Sheet height in page units.
    pub height: f64,
    /// Inset reserved on all sides.
    pub margin: f64,
}

impl PageLayout {
    /// Layout for the given export settings: paper millimeters as page
    /// units, with the fixed margin.
    pub fn for_options(options: &ExportOptions) -> Self {
        let (width, height) = options.page_size_mm();
        Self {
            width,
            height,
            margin: PAGE_MARGIN,
        }
    }

    /// Horizontal extent available to map content.
    pub fn drawable_width(&self) -> f64 {
        self.width - 2.0 * self.margin
    }

    /// Vertical extent available to map content.
    pub fn drawable_height(&self) -> f64 {
        self.height - 2.0 * self.margin
    }
}

/// A fully rendered plan: page metadata plus the ordered op sequence.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedPlan {
    pub page: PageLayout,
    pub ops: Vec<DrawOp>,
}
