use omnisearch::Tab;
use serde::Deserialize;

use crate::cli::CliArgs;

/// `[ui]` section.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct UiSection {
	pub(super) initial_query: Option<String>,
	pub(super) initial_tab: Option<String>,
}

impl UiSection {
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(query) = cli.query.clone() {
			self.initial_query = Some(query);
		}
		if let Some(tab) = cli.tab {
			self.initial_tab = Some(tab.as_str().to_string());
		}
	}

	/// Parse the configured tab; on failure returns the offending value and
	/// the reason.
	pub(super) fn initial_tab(&self) -> Result<Tab, (String, String)> {
		match &self.initial_tab {
			None => Ok(Tab::All),
			Some(value) => value
				.parse::<Tab>()
				.map_err(|err| (value.clone(), err.to_string())),
		}
	}
}
