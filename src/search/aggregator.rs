use serde::Serialize;

use super::MatchResult;
use crate::types::{SourceKind, Tab};

/// Number of matches per tab.
///
/// `chats` and `lists` have no backing data and stay zero. Filter settings are
/// not consulted here; they only decide which tabs and groups are shown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CategoryCounts {
	pub all: usize,
	pub files: usize,
	pub people: usize,
	pub chats: usize,
	pub lists: usize,
}

impl CategoryCounts {
	#[must_use]
	pub const fn for_kind(&self, kind: SourceKind) -> usize {
		match kind {
			SourceKind::Files => self.files,
			SourceKind::People => self.people,
			SourceKind::Chats => self.chats,
			SourceKind::Lists => self.lists,
		}
	}

	#[must_use]
	pub const fn for_tab(&self, tab: Tab) -> usize {
		match tab.kind() {
			None => self.all,
			Some(kind) => self.for_kind(kind),
		}
	}
}

/// Count the matches in `result` per category.
#[must_use]
pub fn aggregate(result: &MatchResult) -> CategoryCounts {
	let files = result.files.len();
	let people = result.people.len();
	CategoryCounts {
		all: files + people,
		files,
		people,
		chats: 0,
		lists: 0,
	}
}
