use std::path::PathBuf;
use std::time::Duration;

use omnisearch::{DEFAULT_LATENCY, app_dirs};
use serde::Deserialize;

use crate::cli::CliArgs;

const DATASET_FILE_NAMES: [&str; 2] = ["dataset.json", "dataset.toml"];

/// `[search]` section.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct SearchSection {
	pub(super) latency_ms: Option<u64>,
}

impl SearchSection {
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(value) = cli.latency_ms {
			self.latency_ms = Some(value);
		}
	}

	pub(super) fn latency(&self) -> Duration {
		self.latency_ms
			.map(Duration::from_millis)
			.unwrap_or(DEFAULT_LATENCY)
	}
}

/// `[data]` section.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct DataSection {
	pub(super) path: Option<PathBuf>,
}

impl DataSection {
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(path) = cli.data.clone() {
			self.path = Some(path);
		}
	}

	/// The configured dataset, else a `dataset.{json,toml}` in the data
	/// directory when one exists. `None` selects the built-in demo data.
	pub(super) fn resolve(self) -> Option<PathBuf> {
		self.path.or_else(default_dataset)
	}
}

fn default_dataset() -> Option<PathBuf> {
	let dir = app_dirs::get_data_dir().ok()?;
	DATASET_FILE_NAMES
		.iter()
		.map(|name| dir.join(name))
		.find(|path| path.is_file())
}
