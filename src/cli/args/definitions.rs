use std::path::PathBuf;

use clap::{ArgAction, Args, ColorChoice, Parser, Subcommand};

use super::options::{OutputFormat, ScopeArg};
use super::styles::{cli_styles, long_version};

/// Command-line arguments accepted by the `navsearch` binary.
#[derive(Parser, Debug)]
#[command(
	name = "navsearch",
	version,
	long_version = long_version(),
	about = "Drive the marketplace header search against a catalog API",
	color = ColorChoice::Auto,
	styles = cli_styles()
)]
pub(crate) struct CliArgs {
	#[arg(
		short,
		long = "config",
		value_name = "FILE",
		env = "NAVSEARCH_CONFIG",
		global = true,
		action = ArgAction::Append,
		help = "Additional configuration file to merge (default: none)"
	)]
	pub(crate) config: Vec<PathBuf>,
	#[arg(
		short = 'n',
		long = "no-config",
		global = true,
		help = "Skip loading default configuration files (default: disabled)"
	)]
	pub(crate) no_config: bool,
	#[arg(
		short = 'b',
		long = "base-url",
		value_name = "URL",
		global = true,
		help = "Catalog API base URL (default: http://localhost:8080/api)"
	)]
	pub(crate) base_url: Option<String>,
	#[arg(
		short = 'l',
		long = "limit",
		value_name = "NUM",
		global = true,
		help = "Rows requested per collection (default: 8)"
	)]
	pub(crate) limit: Option<usize>,
	#[arg(
		long = "debounce-ms",
		value_name = "MS",
		global = true,
		help = "Quiet period after the last keystroke (default: 300)"
	)]
	pub(crate) debounce_ms: Option<u64>,
	#[arg(
		short = 'p',
		long = "print-config",
		global = true,
		help = "Print the resolved configuration before running (default: disabled)"
	)]
	pub(crate) print_config: bool,
	#[arg(
		short = 'o',
		long = "output",
		value_enum,
		global = true,
		default_value_t = OutputFormat::Plain,
		help = "Choose how to print the result"
	)]
	pub(crate) output: OutputFormat,
	#[arg(
		short = 'v',
		long = "verbose",
		global = true,
		help = "Log debug diagnostics to stderr unless NAVSEARCH_LOG is set"
	)]
	pub(crate) verbose: bool,
	#[command(subcommand)]
	pub(crate) command: Command,
}

#[derive(Subcommand, Debug)]
pub(crate) enum Command {
	/// Type a query into the header search and print what the panel shows.
	Search(SearchArgs),
	/// Replay scroll offsets through the header placement machine.
	Scroll(ScrollArgs),
}

#[derive(Args, Debug)]
pub(crate) struct SearchArgs {
	#[arg(value_name = "TEXT", help = "Text typed into the search box")]
	pub(crate) text: String,
	#[arg(
		short = 's',
		long,
		value_enum,
		help = "Restrict the search to one collection (default: configured scope)"
	)]
	pub(crate) scope: Option<ScopeArg>,
	#[arg(
		short = 't',
		long = "type-interval",
		value_name = "MS",
		default_value_t = 0,
		help = "Delay between simulated keystrokes; 0 pastes the text at once"
	)]
	pub(crate) type_interval_ms: u64,
}

#[derive(Args, Debug)]
pub(crate) struct ScrollArgs {
	#[arg(
		long,
		value_name = "PX",
		default_value_t = 800.0,
		help = "Viewport height in pixels"
	)]
	pub(crate) viewport: f64,
	#[arg(
		value_name = "OFFSET",
		required = true,
		allow_negative_numbers = true,
		help = "Scroll offsets, one per animation frame"
	)]
	pub(crate) offsets: Vec<f64>,
}

impl CliArgs {
	/// Scope chosen on the command line, if the subcommand takes one.
	pub(crate) fn scope(&self) -> Option<ScopeArg> {
		match &self.command {
			Command::Search(args) => args.scope,
			Command::Scroll(_) => None,
		}
	}
}
