use std::time::Duration;

use super::{ConfigError, ConfigSources, ResolvedConfig};

const MAX_LATENCY: Duration = Duration::from_secs(60);

pub(super) fn validate(
	config: &ResolvedConfig,
	sources: &ConfigSources,
) -> Result<(), ConfigError> {
	if config.latency > MAX_LATENCY {
		return Err(ConfigError::invalid(
			"search.latency_ms",
			config.latency.as_millis().to_string(),
			sources.source_for_latency(),
			"must not exceed 60000",
		));
	}

	if !config.filters.allows(config.initial_tab) {
		return Err(ConfigError::invalid(
			"ui.initial_tab",
			config.initial_tab.id(),
			sources.source_for_initial_tab(),
			"the tab's source filter is disabled",
		));
	}

	Ok(())
}
