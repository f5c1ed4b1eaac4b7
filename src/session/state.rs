use std::fmt;

use serde::Serialize;

use crate::types::Tab;

/// Where the session is in its query lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
	/// The query is empty; nothing is shown.
	Idle,
	/// A non-empty query is waiting out the latency window.
	Loading,
	/// Results for the current query are available.
	Settled,
}

impl fmt::Display for Phase {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(match self {
			Phase::Idle => "idle",
			Phase::Loading => "loading",
			Phase::Settled => "settled",
		})
	}
}

/// Observable session state handed to the rendering layer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SessionState {
	pub query: String,
	pub active_tab: Tab,
	pub is_loading: bool,
	pub is_filter_panel_open: bool,
}

impl SessionState {
	#[must_use]
	pub fn phase(&self) -> Phase {
		if self.query.is_empty() {
			Phase::Idle
		} else if self.is_loading {
			Phase::Loading
		} else {
			Phase::Settled
		}
	}
}
