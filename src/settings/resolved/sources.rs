use std::fmt;

#[derive(Debug, Clone)]
pub(crate) enum SettingSource {
	CliFlag(&'static str),
	Environment(&'static str),
	ConfigKey(&'static str),
}

impl fmt::Display for SettingSource {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::CliFlag(flag) => write!(f, "CLI flag `{flag}`"),
			Self::Environment(var) => write!(f, "environment variable `{var}`"),
			Self::ConfigKey(key) => write!(f, "configuration key `{key}`"),
		}
	}
}

/// Where each validated setting came from, for error messages.
#[derive(Debug, Default, Clone)]
pub(crate) struct ConfigSources {
	pub(crate) latency: Option<SettingSource>,
	pub(crate) initial_tab: Option<SettingSource>,
}

impl ConfigSources {
	pub(crate) fn source_for_latency(&self) -> SettingSource {
		self.latency
			.clone()
			.unwrap_or(SettingSource::ConfigKey("search.latency_ms"))
	}

	pub(crate) fn source_for_initial_tab(&self) -> SettingSource {
		self.initial_tab
			.clone()
			.unwrap_or(SettingSource::ConfigKey("ui.initial_tab"))
	}
}
