use serde::Serialize;

use crate::filters::FilterSettings;
use crate::search::MatchResult;
use crate::types::{Segment, SourceKind, Tab, highlight};

/// What the result area should show right now.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", content = "groups", rename_all = "snake_case")]
pub enum ResultView<'a> {
	/// Empty query: the result area is collapsed.
	Hidden,
	/// Placeholder rows while the latency window runs.
	Loading,
	NoResults,
	Results(Vec<ResultGroup<'a>>),
}

/// Rows of one source kind, in item source order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResultGroup<'a> {
	pub kind: SourceKind,
	pub rows: Vec<ResultRow<'a>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResultRow<'a> {
	pub id: u64,
	pub name: Vec<Segment<'a>>,
	pub detail: String,
}

/// Group settled matches for `tab`, skipping filtered-out and empty groups.
pub(super) fn result_groups<'a>(
	results: &'a MatchResult,
	query: &str,
	tab: Tab,
	filters: &FilterSettings,
) -> Vec<ResultGroup<'a>> {
	let shown = |kind: SourceKind| tab.includes(kind) && filters.is_enabled(kind);
	let mut groups = Vec::with_capacity(2);

	if shown(SourceKind::People) && !results.people.is_empty() {
		let rows = results
			.people
			.iter()
			.map(|person| ResultRow {
				id: person.id,
				name: highlight(&person.name, query),
				detail: person.status.clone(),
			})
			.collect();
		groups.push(ResultGroup {
			kind: SourceKind::People,
			rows,
		});
	}

	if shown(SourceKind::Files) && !results.files.is_empty() {
		let rows = results
			.files
			.iter()
			.map(|file| ResultRow {
				id: file.id,
				name: highlight(&file.name, query),
				detail: file.subtitle(),
			})
			.collect();
		groups.push(ResultGroup {
			kind: SourceKind::Files,
			rows,
		});
	}

	groups
}
