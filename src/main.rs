mod cli;
mod settings;
mod workflow;

use anyhow::Result;
use cli::{OutputFormat, parse_cli, print_json, print_plain};
use settings::ResolvedConfig;
use workflow::SearchWorkflow;

fn main() -> Result<()> {
	let cli = parse_cli();
	omnisearch::logging::initialize(cli.verbose);

	let resolved = settings::load(&cli)?;

	if cli.print_config {
		resolved.print_summary();
	}

	run_search(cli.output, resolved)
}

/// Execute the search workflow and print output in the chosen format.
fn run_search(format: OutputFormat, settings: ResolvedConfig) -> Result<()> {
	let workflow = SearchWorkflow::from_config(settings)?;
	let session = workflow.run()?;

	match format {
		OutputFormat::Plain => print_plain(&session),
		OutputFormat::Json => print_json(&session)?,
	}

	Ok(())
}
