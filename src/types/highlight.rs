use serde::Serialize;

use crate::search::FoldedNeedle;

/// Whether a [`Segment`] matched the query.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SegmentKind {
	Matched,
	Plain,
}

/// A contiguous run of the highlighted text, borrowed from the original.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Segment<'a> {
	pub text: &'a str,
	pub kind: SegmentKind,
}

impl<'a> Segment<'a> {
	#[must_use]
	pub const fn plain(text: &'a str) -> Self {
		Self {
			text,
			kind: SegmentKind::Plain,
		}
	}

	#[must_use]
	pub const fn matched(text: &'a str) -> Self {
		Self {
			text,
			kind: SegmentKind::Matched,
		}
	}

	#[must_use]
	pub fn is_matched(&self) -> bool {
		self.kind == SegmentKind::Matched
	}
}

/// Split `text` into matched and plain segments for `query`.
///
/// Occurrences are found case-insensitively, left to right and without
/// overlap. The query is a literal string; no character in it carries pattern
/// meaning. Matched segments keep the casing of `text`, and concatenating the
/// segments always yields `text` again.
#[must_use]
pub fn highlight<'a>(text: &'a str, query: &str) -> Vec<Segment<'a>> {
	if query.trim().is_empty() {
		return vec![Segment::plain(text)];
	}
	let Some(needle) = FoldedNeedle::new(query) else {
		return vec![Segment::plain(text)];
	};

	let mut segments = Vec::new();
	let mut cursor = 0;
	while let Some(found) = needle.find_in(text, cursor) {
		if found.start > cursor {
			segments.push(Segment::plain(&text[cursor..found.start]));
		}
		segments.push(Segment::matched(&text[found.clone()]));
		cursor = found.end;
	}

	if cursor < text.len() || segments.is_empty() {
		segments.push(Segment::plain(&text[cursor..]));
	}

	segments
}
