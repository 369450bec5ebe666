mod cli;
mod settings;

use anyhow::Result;
use cli::{OutputFormat, parse_cli, print_json, print_plain};
use settings::ResolvedConfig;
use tracing::info;

use gewaesserkarte::{Catalog, logging, theme};

fn main() -> Result<()> {
	let cli = parse_cli();

	if cli.list_themes {
		for name in theme::names() {
			println!("{name}");
		}
		return Ok(());
	}

	logging::initialize()?;

	let resolved = settings::load(&cli)?;

	if cli.print_config {
		resolved.print_summary();
	}

	run_map(cli.output, resolved)
}

/// Load the catalog, run the map to completion, and print the outcome in the
/// chosen format.
fn run_map(format: OutputFormat, settings: ResolvedConfig) -> Result<()> {
	let catalog = match &settings.catalog_path {
		Some(path) => Catalog::from_path(path)?,
		None => Catalog::builtin()?,
	};
	info!(waters = catalog.len(), "catalog loaded");

	let outcome = gewaesserkarte::run(catalog, settings.ui)?;

	match format {
		OutputFormat::Plain => print_plain(&outcome),
		OutputFormat::Json => print_json(&outcome)?,
	}

	Ok(())
}
