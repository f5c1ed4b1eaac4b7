use std::path::PathBuf;

use clap::{ArgAction, ColorChoice, Parser};

use super::options::{KindArg, OutputFormat, TabArg};
use super::styles::{cli_styles, long_version};

/// Command-line arguments accepted by the `omnisearch` binary.
#[derive(Parser, Debug)]
#[command(
	name = "omnisearch",
	version,
	long_version = long_version(),
	about = "Search people and files with per-tab counts and match highlighting",
	color = ColorChoice::Auto,
	styles = cli_styles()
)]
pub(crate) struct CliArgs {
	#[arg(value_name = "QUERY", help = "Text to search for (default: empty)")]
	pub(crate) query: Option<String>,
	#[arg(
		short,
		long = "config",
		value_name = "FILE",
		env = "OMNISEARCH_CONFIG",
		action = ArgAction::Append,
		help = "Additional configuration file to merge (default: none)"
	)]
	pub(crate) config: Vec<PathBuf>,
	#[arg(
		short = 'n',
		long = "no-config",
		help = "Skip loading default configuration files (default: disabled)"
	)]
	pub(crate) no_config: bool,
	#[arg(
		short = 'd',
		long = "data",
		value_name = "FILE",
		help = "Load people and files from a JSON or TOML dataset (default: built-in demo data)"
	)]
	pub(crate) data: Option<PathBuf>,
	#[arg(
		short = 't',
		long = "tab",
		value_enum,
		help = "Select a result tab once results settle (default: all)"
	)]
	pub(crate) tab: Option<TabArg>,
	#[arg(
		short = 'e',
		long = "enable",
		value_enum,
		value_delimiter = ',',
		value_name = "KIND",
		help = "Enable source filters (default: files,people)"
	)]
	pub(crate) enable: Vec<KindArg>,
	#[arg(
		short = 'x',
		long = "disable",
		value_enum,
		value_delimiter = ',',
		value_name = "KIND",
		help = "Disable source filters (default: chats,lists)"
	)]
	pub(crate) disable: Vec<KindArg>,
	#[arg(
		long = "latency-ms",
		value_name = "MS",
		help = "Simulated search latency in milliseconds (default: 800)"
	)]
	pub(crate) latency_ms: Option<u64>,
	#[arg(
		short = 'p',
		long = "print-config",
		help = "Print the resolved configuration before running (default: disabled)"
	)]
	pub(crate) print_config: bool,
	#[arg(
		short = 'o',
		long = "output",
		value_enum,
		default_value_t = OutputFormat::Plain,
		help = "Choose how to print the result"
	)]
	pub(crate) output: OutputFormat,
	#[arg(
		short = 'v',
		long = "verbose",
		action = ArgAction::Count,
		help = "Increase log verbosity; repeat for more detail (default: warnings only)"
	)]
	pub(crate) verbose: u8,
}
