// src/cli/args.rs
// Export CLI configuration and argument parsing

use std::path::PathBuf;

use crate::geo::GeoBoundingBox;
use crate::osm::FeatureCategory;
use crate::paper::{ExportOptions, Orientation, PaperSize};

/// Errors produced while parsing command-line arguments.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("missing value for {0}")]
    MissingValue(&'static str),

    #[error("unknown flag: {0}")]
    UnknownFlag(String),

    #[error("invalid {what}: {value}")]
    Invalid { what: &'static str, value: String },
}

/// Parsed command line for one export run.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportCliConfig {
    /// Overpass JSON payload to draw; annotations-only sheet when absent.
    pub input: Option<PathBuf>,
    /// Output SVG path.
    pub output: PathBuf,
    /// Explicit export frame; the default Berlin frame when absent.
    pub bbox: Option<GeoBoundingBox>,
    pub options: ExportOptions,
    pub categories: Vec<FeatureCategory>,
    /// Recompute the frame from the paper settings before exporting.
    pub preset: bool,
}

impl Default for ExportCliConfig {
    fn default() -> Self {
        Self {
            input: None,
            output: PathBuf::from("plan.svg"),
            bbox: None,
            options: ExportOptions::default(),
            categories: vec![FeatureCategory::Water, FeatureCategory::Streets],
            preset: false,
        }
    }
}

impl ExportCliConfig {
    pub const USAGE: &'static str = "\
Usage: plan_export [OPTIONS]

Options:
  --input <file>          Overpass JSON payload to draw
  --output <file>         output SVG path (default: plan.svg)
  --bbox <w,s,e,n>        export frame as minLon,minLat,maxLon,maxLat
  --scale <n>             map scale 1:n (default: 5000)
  --paper <a0..a4>        paper size (default: a4)
  --orientation <o>       portrait or landscape (default: portrait)
  --types <list>          comma-separated categories:
                          water,streets,buildings,railways
  --preset                recompute the frame from the paper settings
  -h, --help              print this help";

    /// Parse raw arguments (without the program name).
    pub fn parse(args: &[String]) -> Result<Self, CliError> {
        let mut config = Self::default();
        let mut i = 0;
        while i < args.len() {
            match args[i].as_str() {
                "--input" => {
                    config.input = Some(PathBuf::from(value(args, &mut i, "--input")?));
                }
                "--output" => {
                    config.output = PathBuf::from(value(args, &mut i, "--output")?);
                }
                "--bbox" => {
                    config.bbox = Some(parse_bbox(value(args, &mut i, "--bbox")?)?);
                }
                "--scale" => {
                    let raw = value(args, &mut i, "--scale")?;
                    let scale = raw.parse::<u32>().ok().filter(|&s| s > 0).ok_or_else(|| {
                        CliError::Invalid {
                            what: "scale",
                            value: raw.to_string(),
                        }
                    })?;
                    config.options.scale = scale;
                }
                "--paper" => {
                    let raw = value(args, &mut i, "--paper")?;
                    config.options.paper =
                        PaperSize::parse(raw).ok_or_else(|| CliError::Invalid {
                            what: "paper size",
                            value: raw.to_string(),
                        })?;
                }
                "--orientation" => {
                    let raw = value(args, &mut i, "--orientation")?;
                    config.options.orientation =
                        Orientation::parse(raw).ok_or_else(|| CliError::Invalid {
                            what: "orientation",
                            value: raw.to_string(),
                        })?;
                }
                "--types" => {
                    let raw = value(args, &mut i, "--types")?;
                    config.categories = parse_categories(raw)?;
                }
                "--preset" => config.preset = true,
                other => return Err(CliError::UnknownFlag(other.to_string())),
            }
            i += 1;
        }
        Ok(config)
    }
}

fn value<'a>(args: &'a [String], i: &mut usize, flag: &'static str) -> Result<&'a str, CliError> {
    *i += 1;
    args.get(*i)
        .map(String::as_str)
        .ok_or(CliError::MissingValue(flag))
}

fn parse_bbox(raw: &str) -> Result<GeoBoundingBox, CliError> {
    let invalid = || CliError::Invalid {
        what: "bbox",
        value: raw.to_string(),
    };
    let parts: Vec<f64> = raw
        .split(',')
        .map(|part| part.trim().parse::<f64>())
        .collect::<Result<_, _>>()
        .map_err(|_| invalid())?;
    if parts.len() != 4 || parts[0] >= parts[2] || parts[1] >= parts[3] {
        return Err(invalid());
    }
    Ok(GeoBoundingBox::new(parts[0], parts[1], parts[2], parts[3]))
}

fn parse_categories(raw: &str) -> Result<Vec<FeatureCategory>, CliError> {
    raw.split(',')
        .map(|token| {
            FeatureCategory::parse(token.trim()).ok_or_else(|| CliError::Invalid {
                what: "category",
                value: token.to_string(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_args(spec: &[&str]) -> Vec<String> {
        spec.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn defaults_without_flags() {
        let config = ExportCliConfig::parse(&[]).unwrap();
        assert_eq!(config, ExportCliConfig::default());
    }

    #[test]
    fn parse_full_invocation() {
        let args = make_args(&[
            "--input",
            "osm.json",
            "--output",
            "site.svg",
            "--bbox",
            "13.375,52.515,13.405,52.525",
            "--scale",
            "2500",
            "--paper",
            "a3",
            "--orientation",
            "landscape",
            "--types",
            "streets,railways",
            "--preset",
        ]);
        let config = ExportCliConfig::parse(&args).unwrap();
        assert_eq!(config.input, Some(PathBuf::from("osm.json")));
        assert_eq!(config.output, PathBuf::from("site.svg"));
        assert_eq!(
            config.bbox,
            Some(GeoBoundingBox::new(13.375, 52.515, 13.405, 52.525))
        );
        assert_eq!(config.options.scale, 2500);
        assert_eq!(config.options.paper, PaperSize::A3);
        assert_eq!(config.options.orientation, Orientation::Landscape);
        assert_eq!(
            config.categories,
            [FeatureCategory::Streets, FeatureCategory::Railways]
        );
        assert!(config.preset);
    }

    #[test]
    fn reject_unknown_flag() {
        let err = ExportCliConfig::parse(&make_args(&["--frobnicate"])).unwrap_err();
        assert!(err.to_string().contains("unknown flag"));
    }

    #[test]
    fn reject_zero_scale() {
        let err = ExportCliConfig::parse(&make_args(&["--scale", "0"])).unwrap_err();
        assert!(err.to_string().contains("invalid scale"));
    }

    #[test]
    fn reject_inverted_bbox() {
        let err =
            ExportCliConfig::parse(&make_args(&["--bbox", "13.4,52.5,13.3,52.6"])).unwrap_err();
        assert!(err.to_string().contains("invalid bbox"));
    }

    #[test]
    fn reject_unknown_category() {
        let err = ExportCliConfig::parse(&make_args(&["--types", "water,parks"])).unwrap_err();
        assert!(err.to_string().contains("invalid category"));
    }

    #[test]
    fn missing_value_is_reported() {
        let err = ExportCliConfig::parse(&make_args(&["--scale"])).unwrap_err();
        assert!(err.to_string().contains("missing value for --scale"));
    }
}
