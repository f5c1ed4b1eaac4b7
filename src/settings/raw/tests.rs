use std::time::Duration;

use clap::Parser;
use omnisearch::{DEFAULT_LATENCY, Tab};

use super::RawConfig;
use crate::cli::CliArgs;

fn raw_from_toml(text: &str) -> RawConfig {
	toml::from_str(text).expect("raw config")
}

#[test]
fn cli_overrides_take_precedence() {
	let cli = CliArgs::parse_from([
		"omnisearch",
		"sarah",
		"--tab",
		"people",
		"--latency-ms",
		"50",
		"--data",
		"/tmp/people.json",
		"--enable",
		"lists",
	]);

	let mut config = raw_from_toml(
		r#"
[search]
latency_ms = 900

[ui]
initial_query = "adam"
initial_tab = "files"
"#,
	);
	config.apply_cli_overrides(&cli);

	assert_eq!(config.search.latency_ms, Some(50));
	assert_eq!(config.ui.initial_query.as_deref(), Some("sarah"));
	assert_eq!(config.ui.initial_tab.as_deref(), Some("people"));
	assert_eq!(config.data.path, cli.data);
	assert_eq!(config.filters.lists, Some(true));
}

#[test]
fn disable_wins_over_enable() {
	let cli = CliArgs::parse_from(["omnisearch", "--enable", "chats", "--disable", "chats"]);
	let mut config = RawConfig::default();
	config.apply_cli_overrides(&cli);
	assert_eq!(config.filters.chats, Some(false));
}

#[test]
fn resolve_fills_defaults() {
	let cli = CliArgs::parse_from(["omnisearch", "--no-config", "--data", "/tmp/data.json"]);
	let mut config = RawConfig::default();
	config.apply_cli_overrides(&cli);
	let resolved = config.resolve(&cli).expect("resolve");

	assert_eq!(resolved.query, "");
	assert_eq!(resolved.initial_tab, Tab::All);
	assert_eq!(resolved.latency, DEFAULT_LATENCY);
	assert!(resolved.filters.files && resolved.filters.people);
	assert!(!resolved.filters.chats && !resolved.filters.lists);
}

#[test]
fn config_file_filters_are_applied() {
	let cli = CliArgs::parse_from(["omnisearch", "--data", "/tmp/data.json"]);
	let config = raw_from_toml(
		r#"
[search]
latency_ms = 120

[filters]
people = false
chats = true
"#,
	);
	let resolved = config.resolve(&cli).expect("resolve");
	assert_eq!(resolved.latency, Duration::from_millis(120));
	assert!(!resolved.filters.people);
	assert!(resolved.filters.chats);
	assert!(resolved.filters.files);
}

#[test]
fn unknown_initial_tab_reports_its_origin() {
	let cli = CliArgs::parse_from(["omnisearch", "--data", "/tmp/data.json"]);
	let config = raw_from_toml("[ui]\ninitial_tab = \"inbox\"\n");
	let message = config.resolve(&cli).unwrap_err().to_string();
	assert!(message.contains("ui.initial_tab"));
	assert!(message.contains("configuration key"));
	assert!(message.contains("inbox"));
}

#[test]
fn disabled_initial_tab_is_rejected() {
	let cli = CliArgs::parse_from(["omnisearch", "--tab", "chats", "--data", "/tmp/data.json"]);
	let mut config = RawConfig::default();
	config.apply_cli_overrides(&cli);
	let message = config.resolve(&cli).unwrap_err().to_string();
	assert!(message.contains("CLI flag `--tab`"));
}
