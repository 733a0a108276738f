//! Command-line front end for one-shot exports.
//!
//! Wires argument parsing, a plan session and the SVG backend together for
//! the `plan_export` binary. The library API stays the primary surface; the
//! binary exists so an export can be produced without a host application.

pub mod args;

pub use args::{CliError, ExportCliConfig};

use std::error::Error;

use crate::export::save_svg;
use crate::osm::decode_payload;
use crate::session::PlanSession;

/// Entry point for the `plan_export` binary.
pub fn run_export_cli() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let raw_args: Vec<String> = std::env::args().skip(1).collect();
    if raw_args.iter().any(|arg| arg == "--help" || arg == "-h") {
        println!("{}", ExportCliConfig::USAGE);
        return Ok(());
    }
    let config = ExportCliConfig::parse(&raw_args)
        .map_err(|err| format!("{err}\n\n{}", ExportCliConfig::USAGE))?;

    let mut session = PlanSession::new();
    session.set_categories(&config.categories);
    session.set_options(config.options);
    if let Some(bbox) = config.bbox {
        session.set_bbox(bbox);
        if config.preset {
            session.apply_preset();
        }
    }

    if let Some(path) = &config.input {
        let json = std::fs::read_to_string(path)?;
        let payload = decode_payload(&json)?;
        log::info!("loaded {} elements from {}", payload.elements.len(), path.display());
        session.set_elements(payload.elements);
    }

    let plan = session.export();
    save_svg(&plan, &config.output)?;
    log::info!(
        "wrote {} drawing ops to {}",
        plan.ops.len(),
        config.output.display()
    );
    Ok(())
}
