use std::fmt::Write;

use anyhow::Result;
use omnisearch::{ResultView, SearchSession, Segment, SegmentKind, Tab, TabEntry};
use serde_json::json;
use unicode_width::UnicodeWidthStr;

/// Print a plain-text rendering of the settled session.
pub(crate) fn print_plain(session: &SearchSession) {
	print!("{}", render_plain(session));
}

/// Render the tab bar and result groups as plain text.
///
/// Matched segments are wrapped in brackets; the active tab is marked with
/// `*`.
pub(crate) fn render_plain(session: &SearchSession) -> String {
	let mut out = String::new();
	let _ = writeln!(out, "{}", render_tabs(&session.tabs(), session.active_tab()));

	match session.view() {
		ResultView::Hidden => {
			let total = session.counts().all;
			let _ = writeln!(out, "Type a query to search {total} items");
		}
		ResultView::Loading => {
			let _ = writeln!(out, "Searching…");
		}
		ResultView::NoResults => {
			let _ = writeln!(out, "No results found");
		}
		ResultView::Results(groups) => {
			for group in groups {
				let _ = writeln!(out);
				let _ = writeln!(out, "{}", group.kind.label());
				let names: Vec<String> = group.rows.iter().map(|row| mark(&row.name)).collect();
				let width = names.iter().map(|name| name.width()).max().unwrap_or(0);
				for (name, row) in names.iter().zip(&group.rows) {
					let pad = width - name.width();
					let _ = writeln!(out, "  {name}{:pad$}  {}", "", row.detail);
				}
			}
		}
	}

	out
}

fn render_tabs(tabs: &[TabEntry], active: Tab) -> String {
	tabs.iter()
		.map(|entry| {
			let marker = if entry.tab == active { "*" } else { "" };
			format!("{marker}{} ({})", entry.label, entry.count)
		})
		.collect::<Vec<_>>()
		.join("  ")
}

fn mark(segments: &[Segment<'_>]) -> String {
	segments
		.iter()
		.map(|segment| match segment.kind {
			SegmentKind::Matched => format!("[{}]", segment.text),
			SegmentKind::Plain => segment.text.to_string(),
		})
		.collect()
}

/// Format the session as a JSON document.
pub(crate) fn format_session_json(session: &SearchSession) -> Result<String> {
	let payload = json!({
		"query": session.query(),
		"phase": session.phase(),
		"active_tab": session.active_tab(),
		"filters": session.filters(),
		"counts": session.counts(),
		"tabs": session.tabs(),
		"view": session.view(),
	});

	Ok(serde_json::to_string_pretty(&payload)?)
}

/// Print the JSON representation of the session.
pub(crate) fn print_json(session: &SearchSession) -> Result<()> {
	println!("{}", format_session_json(session)?);
	Ok(())
}
