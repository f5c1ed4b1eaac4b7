//! Derive the tab bar from the filter settings and the current counts.

use serde::Serialize;

use crate::filters::FilterSettings;
use crate::search::CategoryCounts;
use crate::types::{SourceKind, Tab};

/// One entry in the tab bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TabEntry {
	pub tab: Tab,
	pub label: &'static str,
	pub count: usize,
}

/// The tabs to offer, in display order.
///
/// `All` always comes first; each kind follows only while its filter is
/// enabled.
#[must_use]
pub fn visible_tabs(settings: &FilterSettings, counts: &CategoryCounts) -> Vec<TabEntry> {
	let kinds = SourceKind::all()
		.into_iter()
		.filter(|&kind| settings.is_enabled(kind))
		.map(Tab::from);

	std::iter::once(Tab::All)
		.chain(kinds)
		.map(|tab| TabEntry {
			tab,
			label: tab.label(),
			count: counts.for_tab(tab),
		})
		.collect()
}
