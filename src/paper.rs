//! Paper sizes, orientation and export settings.

/// ISO A-series paper sizes selectable for export.
///
/// Only A3 and A4 carry physical dimensions in the geometry engine; the
/// larger sizes are selectable in a UI but fall back to A4 dimensions
/// instead of failing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaperSize {
    A0,
    A1,
    A2,
    A3,
    A4,
}

impl PaperSize {
    /// Physical (width, height) in millimeters, portrait orientation.
    pub fn dimensions_mm(self) -> (f64, f64) {
        match self {
            PaperSize::A3 => (297.0, 420.0),
            PaperSize::A4 => (210.0, 297.0),
            // undefined in the geometry engine, fall back to A4
            PaperSize::A0 | PaperSize::A1 | PaperSize::A2 => (210.0, 297.0),
        }
    }

    /// Stable lowercase token, used by selection UIs and the CLI.
    pub fn name(self) -> &'static str {
        match self {
            PaperSize::A0 => "a0",
            PaperSize::A1 => "a1",
            PaperSize::A2 => "a2",
            PaperSize::A3 => "a3",
            PaperSize::A4 => "a4",
        }
    }

    /// Parse a size token, case-insensitive.
    pub fn parse(token: &str) -> Option<Self> {
        match token.to_ascii_lowercase().as_str() {
            "a0" => Some(PaperSize::A0),
            "a1" => Some(PaperSize::A1),
            "a2" => Some(PaperSize::A2),
            "a3" => Some(PaperSize::A3),
            "a4" => Some(PaperSize::A4),
            _ => None,
        }
    }
}

/// Sheet orientation; landscape swaps the paper's width and height.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Orientation {
    #[default]
    Portrait,
    Landscape,
}

impl Orientation {
    /// Stable lowercase token.
    pub fn name(self) -> &'static str {
        match self {
            Orientation::Portrait => "portrait",
            Orientation::Landscape => "landscape",
        }
    }

    /// Parse an orientation token, case-insensitive.
    pub fn parse(token: &str) -> Option<Self> {
        match token.to_ascii_lowercase().as_str() {
            "portrait" => Some(Orientation::Portrait),
            "landscape" => Some(Orientation::Landscape),
            _ => None,
        }
    }
}

/// Scale, paper size and orientation for one export.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExportOptions {
    /// Ground meters represented by one page unit (a 1:N map scale).
    pub scale: u32,
    pub paper: PaperSize,
    pub orientation: Orientation,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            scale: 5000,
            paper: PaperSize::A4,
            orientation: Orientation::Portrait,
        }
    }
}

impl ExportOptions {
    /// Page (width, height) in millimeters with orientation applied.
    pub fn page_size_mm(&self) -> (f64, f64) {
        let (w, h) = self.paper.dimensions_mm();
        match self.orientation {
            Orientation::Portrait => (w, h),
            Orientation::Landscape => (h, w),
        }
    }

    /// Ground (width, height) in meters covered by one full sheet.
    pub fn coverage_meters(&self) -> (f64, f64) {
        let (w_mm, h_mm) = self.page_size_mm();
        let scale = self.scale as f64;
        (w_mm / 1000.0 * scale, h_mm / 1000.0 * scale)
    }
}
