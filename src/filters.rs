//! User-toggleable source filters.

use serde::{Deserialize, Serialize};

use crate::types::{SourceKind, Tab};

/// Enabled flag per [`SourceKind`].
///
/// Files and people start enabled, chats and lists start disabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterSettings {
	pub files: bool,
	pub people: bool,
	pub chats: bool,
	pub lists: bool,
}

impl Default for FilterSettings {
	fn default() -> Self {
		Self {
			files: true,
			people: true,
			chats: false,
			lists: false,
		}
	}
}

impl FilterSettings {
	#[must_use]
	pub const fn is_enabled(&self, kind: SourceKind) -> bool {
		match kind {
			SourceKind::Files => self.files,
			SourceKind::People => self.people,
			SourceKind::Chats => self.chats,
			SourceKind::Lists => self.lists,
		}
	}

	pub fn set(&mut self, kind: SourceKind, enabled: bool) {
		*self.flag_mut(kind) = enabled;
	}

	/// Flip the flag for `kind` and return its new value.
	pub fn toggle(&mut self, kind: SourceKind) -> bool {
		let flag = self.flag_mut(kind);
		*flag = !*flag;
		*flag
	}

	/// Whether `tab` may be the active tab under these settings.
	#[must_use]
	pub fn allows(&self, tab: Tab) -> bool {
		tab.kind().is_none_or(|kind| self.is_enabled(kind))
	}

	/// Every kind paired with its flag, in tab order.
	pub fn iter(&self) -> impl Iterator<Item = (SourceKind, bool)> + '_ {
		SourceKind::all()
			.into_iter()
			.map(|kind| (kind, self.is_enabled(kind)))
	}

	fn flag_mut(&mut self, kind: SourceKind) -> &mut bool {
		match kind {
			SourceKind::Files => &mut self.files,
			SourceKind::People => &mut self.people,
			SourceKind::Chats => &mut self.chats,
			SourceKind::Lists => &mut self.lists,
		}
	}
}
