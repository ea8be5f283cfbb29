mod cli;
mod settings;
mod workflow;

use std::time::Duration;

use anyhow::Result;
use cli::{Command, OutputFormat, Report, parse_cli, print_json, print_plain};
use settings::ResolvedConfig;
use workflow::{SearchWorkflow, replay_scroll};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
	let cli = parse_cli();
	navsearch::logging::initialize(cli.verbose);

	let resolved = settings::load(&cli)?;

	if cli.print_config {
		resolved.print_summary();
	}

	let report = run_command(&cli.command, &resolved).await?;
	print_report(cli.output, &report)
}

async fn run_command(command: &Command, settings: &ResolvedConfig) -> Result<Report> {
	match command {
		Command::Search(args) => {
			let interval = Duration::from_millis(args.type_interval_ms);
			let workflow = SearchWorkflow::from_config(settings, interval)?;
			Ok(Report::Search(workflow.run(&args.text).await?))
		}
		Command::Scroll(args) => Ok(Report::Scroll(replay_scroll(
			settings.scroll,
			args.viewport,
			&args.offsets,
		))),
	}
}

/// Print the report in the chosen format.
fn print_report(format: OutputFormat, report: &Report) -> Result<()> {
	match format {
		OutputFormat::Plain => print_plain(report),
		OutputFormat::Json => print_json(report)?,
	}

	Ok(())
}
