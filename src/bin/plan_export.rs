use std::error::Error;

use planforge::cli::run_export_cli;

fn main() -> Result<(), Box<dyn Error>> {
    run_export_cli()
}
