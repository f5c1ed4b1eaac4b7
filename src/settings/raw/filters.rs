use omnisearch::{FilterSettings, SourceKind};
use serde::Deserialize;

use crate::cli::CliArgs;

/// `[filters]` section; unset flags keep their defaults.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct FiltersSection {
	pub(super) files: Option<bool>,
	pub(super) people: Option<bool>,
	pub(super) chats: Option<bool>,
	pub(super) lists: Option<bool>,
}

impl FiltersSection {
	/// `--enable` is applied before `--disable`, so disabling wins.
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		for kind in &cli.enable {
			*self.flag_mut(kind.kind()) = Some(true);
		}
		for kind in &cli.disable {
			*self.flag_mut(kind.kind()) = Some(false);
		}
	}

	pub(super) fn resolve(&self) -> FilterSettings {
		let defaults = FilterSettings::default();
		FilterSettings {
			files: self.files.unwrap_or(defaults.files),
			people: self.people.unwrap_or(defaults.people),
			chats: self.chats.unwrap_or(defaults.chats),
			lists: self.lists.unwrap_or(defaults.lists),
		}
	}

	fn flag_mut(&mut self, kind: SourceKind) -> &mut Option<bool> {
		match kind {
			SourceKind::Files => &mut self.files,
			SourceKind::People => &mut self.people,
			SourceKind::Chats => &mut self.chats,
			SourceKind::Lists => &mut self.lists,
		}
	}
}
