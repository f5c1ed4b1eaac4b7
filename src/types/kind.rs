use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The closed set of categories an item can belong to.
///
/// Only [`SourceKind::Files`] and [`SourceKind::People`] are backed by data;
/// chats and lists exist so that filters, tabs and counts share one shape.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
	Files,
	People,
	Chats,
	Lists,
}

impl SourceKind {
	/// Stable string identifier, used in configuration and on the command line.
	#[must_use]
	pub const fn id(self) -> &'static str {
		match self {
			SourceKind::Files => "files",
			SourceKind::People => "people",
			SourceKind::Chats => "chats",
			SourceKind::Lists => "lists",
		}
	}

	#[must_use]
	pub const fn label(self) -> &'static str {
		match self {
			SourceKind::Files => "Files",
			SourceKind::People => "People",
			SourceKind::Chats => "Chats",
			SourceKind::Lists => "Lists",
		}
	}

	/// All kinds in tab order.
	#[must_use]
	pub const fn all() -> [SourceKind; 4] {
		[
			SourceKind::Files,
			SourceKind::People,
			SourceKind::Chats,
			SourceKind::Lists,
		]
	}
}

impl fmt::Display for SourceKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.id())
	}
}

/// Returned when a kind or tab name is outside the closed set.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown {what} '{name}' (expected one of: {expected})")]
pub struct ParseKindError {
	what: &'static str,
	name: String,
	expected: &'static str,
}

impl FromStr for SourceKind {
	type Err = ParseKindError;

	fn from_str(value: &str) -> Result<Self, Self::Err> {
		SourceKind::all()
			.into_iter()
			.find(|kind| kind.id().eq_ignore_ascii_case(value.trim()))
			.ok_or_else(|| ParseKindError {
				what: "source kind",
				name: value.to_string(),
				expected: "files, people, chats, lists",
			})
	}
}

/// A selectable result tab: the `all` aggregate or a single source kind.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tab {
	#[default]
	All,
	Files,
	People,
	Chats,
	Lists,
}

impl Tab {
	/// The source kind this tab narrows to, or `None` for [`Tab::All`].
	#[must_use]
	pub const fn kind(self) -> Option<SourceKind> {
		match self {
			Tab::All => None,
			Tab::Files => Some(SourceKind::Files),
			Tab::People => Some(SourceKind::People),
			Tab::Chats => Some(SourceKind::Chats),
			Tab::Lists => Some(SourceKind::Lists),
		}
	}

	#[must_use]
	pub const fn id(self) -> &'static str {
		match self.kind() {
			None => "all",
			Some(kind) => kind.id(),
		}
	}

	#[must_use]
	pub const fn label(self) -> &'static str {
		match self.kind() {
			None => "All",
			Some(kind) => kind.label(),
		}
	}

	/// Whether this tab shows results for `kind`.
	#[must_use]
	pub fn includes(self, kind: SourceKind) -> bool {
		self.kind().is_none_or(|own| own == kind)
	}
}

impl From<SourceKind> for Tab {
	fn from(kind: SourceKind) -> Self {
		match kind {
			SourceKind::Files => Tab::Files,
			SourceKind::People => Tab::People,
			SourceKind::Chats => Tab::Chats,
			SourceKind::Lists => Tab::Lists,
		}
	}
}

impl fmt::Display for Tab {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.id())
	}
}

impl FromStr for Tab {
	type Err = ParseKindError;

	fn from_str(value: &str) -> Result<Self, Self::Err> {
		if value.trim().eq_ignore_ascii_case("all") {
			return Ok(Tab::All);
		}
		value.parse::<SourceKind>().map(Tab::from).map_err(|_| ParseKindError {
			what: "tab",
			name: value.to_string(),
			expected: "all, files, people, chats, lists",
		})
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn kinds_parse_case_insensitively() {
		assert_eq!("People".parse::<SourceKind>(), Ok(SourceKind::People));
		assert_eq!(" lists ".parse::<SourceKind>(), Ok(SourceKind::Lists));
	}

	#[test]
	fn unknown_kind_is_rejected() {
		let err = "groups".parse::<SourceKind>().unwrap_err();
		assert!(err.to_string().contains("unknown source kind 'groups'"));
	}

	#[test]
	fn all_is_a_tab_but_not_a_kind() {
		assert_eq!("all".parse::<Tab>(), Ok(Tab::All));
		assert!("all".parse::<SourceKind>().is_err());
		assert!("inbox".parse::<Tab>().unwrap_err().to_string().contains("tab"));
	}

	#[test]
	fn tab_round_trips_through_kind() {
		for kind in SourceKind::all() {
			assert_eq!(Tab::from(kind).kind(), Some(kind));
			assert_eq!(Tab::from(kind).id(), kind.id());
		}
		assert_eq!(Tab::All.kind(), None);
	}

	#[test]
	fn all_tab_includes_every_kind() {
		assert!(Tab::All.includes(SourceKind::People));
		assert!(Tab::Files.includes(SourceKind::Files));
		assert!(!Tab::Files.includes(SourceKind::People));
	}
}
