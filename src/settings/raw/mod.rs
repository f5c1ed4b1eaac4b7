use std::env;

use anyhow::{Error, Result};
use serde::Deserialize;

use crate::cli::CliArgs;

use super::resolved::{ConfigError, ConfigSources, ResolvedConfig, SettingSource};

mod filters;
mod search;
mod ui;

use filters::FiltersSection;
use search::{DataSection, SearchSection};
use ui::UiSection;

/// Mirror of the configuration file representation before CLI overrides and
/// validation are applied.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct RawConfig {
	search: SearchSection,
	filters: FiltersSection,
	data: DataSection,
	ui: UiSection,
}

impl RawConfig {
	/// Apply CLI overrides on top of the raw configuration values.
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		self.search.apply_cli_overrides(cli);
		self.filters.apply_cli_overrides(cli);
		self.data.apply_cli_overrides(cli);
		self.ui.apply_cli_overrides(cli);
	}

	/// Convert the raw configuration into a [`ResolvedConfig`], validating and
	/// filling defaults where required.
	pub(super) fn resolve(self, cli: &CliArgs) -> Result<ResolvedConfig> {
		let sources = ConfigSources {
			latency: detect_source(
				cli.latency_ms.is_some(),
				self.search.latency_ms.is_some(),
				"OMNISEARCH__SEARCH__LATENCY_MS",
				"--latency-ms",
				"search.latency_ms",
			),
			initial_tab: detect_source(
				cli.tab.is_some(),
				self.ui.initial_tab.is_some(),
				"OMNISEARCH__UI__INITIAL_TAB",
				"--tab",
				"ui.initial_tab",
			),
		};

		let initial_tab = self
			.ui
			.initial_tab()
			.map_err(|(value, reason)| {
				ConfigError::invalid("ui.initial_tab", value, sources.source_for_initial_tab(), reason)
			})
			.map_err(Error::new)?;

		let config = ResolvedConfig {
			query: self.ui.initial_query.unwrap_or_default(),
			initial_tab,
			filters: self.filters.resolve(),
			latency: self.search.latency(),
			data_path: self.data.resolve(),
		};

		config.validate(&sources).map_err(Error::new)?;

		Ok(config)
	}
}

fn detect_source(
	cli_present: bool,
	value_present: bool,
	env_var: &'static str,
	cli_flag: &'static str,
	key: &'static str,
) -> Option<SettingSource> {
	if !value_present {
		return None;
	}

	if cli_present {
		return Some(SettingSource::CliFlag(cli_flag));
	}

	if env::var_os(env_var).is_some() {
		return Some(SettingSource::Environment(env_var));
	}

	Some(SettingSource::ConfigKey(key))
}

#[cfg(test)]
mod tests;
