//! The search session: query text, loading phase, active tab and filters.
//!
//! Every user event is processed to completion before the next one. The only
//! deferred work is the settle that ends the simulated latency window; it is
//! modelled as a generation-stamped [`SettleTicket`] so that a superseded
//! query can never apply its results.

mod error;
mod state;
mod timer;
mod view;

use std::time::Duration;

use tracing::{debug, trace};

pub use error::SessionError;
pub use state::{Phase, SessionState};
pub use timer::SettleTicket;
pub use view::{ResultGroup, ResultRow, ResultView};

use crate::filters::FilterSettings;
use crate::search::{CategoryCounts, MatchResult, aggregate, match_source};
use crate::source::{Catalog, ItemSource};
use crate::tabs::{TabEntry, visible_tabs};
use crate::types::{Segment, SourceKind, Tab, highlight};
use timer::LatencyTimer;

/// Delay between a query change and its results, in session clock time.
pub const DEFAULT_LATENCY: Duration = Duration::from_millis(800);

/// One isolated search session over an [`ItemSource`].
#[derive(Debug)]
pub struct SearchSession<S = Catalog> {
	source: S,
	state: SessionState,
	filters: FilterSettings,
	results: MatchResult,
	counts: CategoryCounts,
	timer: LatencyTimer,
	latency: Duration,
	clock: Duration,
}

impl<S: ItemSource> SearchSession<S> {
	/// Start an idle session with default filters and latency.
	pub fn new(source: S) -> Self {
		let results = match_source("", &source);
		let counts = aggregate(&results);
		Self {
			source,
			state: SessionState::default(),
			filters: FilterSettings::default(),
			results,
			counts,
			timer: LatencyTimer::default(),
			latency: DEFAULT_LATENCY,
			clock: Duration::ZERO,
		}
	}

	#[must_use]
	pub fn with_latency(mut self, latency: Duration) -> Self {
		self.latency = latency;
		self
	}

	#[must_use]
	pub fn with_filters(mut self, filters: FilterSettings) -> Self {
		self.filters = filters;
		self.enforce_tab_invariant();
		self
	}

	/// Replace the query text.
	///
	/// An empty query returns to [`Phase::Idle`] at once. Any other change
	/// enters [`Phase::Loading`] and schedules a settle one latency window
	/// from now, superseding whatever settle was pending. Setting the query it
	/// already has is a no-op. Returns the ticket of the newly scheduled
	/// settle, if one is still pending.
	pub fn set_query(&mut self, query: impl Into<String>) -> Option<SettleTicket> {
		let query = query.into();
		if query == self.state.query {
			return None;
		}
		self.state.query = query;

		if self.state.query.is_empty() {
			self.timer.cancel();
			self.state.is_loading = false;
			self.recompute();
			debug!("query cleared; session idle");
			return None;
		}

		let ticket = self.timer.schedule(self.clock.saturating_add(self.latency));
		self.state.is_loading = true;
		debug!(
			query = %self.state.query,
			deadline = ?ticket.deadline(),
			"query changed; loading"
		);

		if self.latency.is_zero() {
			self.settle(ticket);
			return None;
		}
		Some(ticket)
	}

	/// Shorthand for `set_query("")`.
	pub fn clear(&mut self) {
		self.set_query(String::new());
	}

	/// Advance the session clock and deliver the pending settle once due.
	pub fn advance(&mut self, elapsed: Duration) {
		self.clock = self.clock.saturating_add(elapsed);
		if let Some(ticket) = self.timer.due(self.clock) {
			self.settle(ticket);
		}
	}

	/// Deliver a settle callback.
	///
	/// Applies the current query's results when `ticket` is the live one and
	/// returns `true`. A stale ticket changes nothing and returns `false`.
	pub fn settle(&mut self, ticket: SettleTicket) -> bool {
		if !self.timer.fire(ticket) {
			trace!(deadline = ?ticket.deadline(), "discarding stale settle");
			return false;
		}

		self.recompute();
		self.state.is_loading = false;
		self.enforce_tab_invariant();
		debug!(
			query = %self.state.query,
			all = self.counts.all,
			files = self.counts.files,
			people = self.counts.people,
			"results settled"
		);
		true
	}

	/// Switch the active tab. Only allowed once results have settled and only
	/// for `all` or an enabled kind.
	///
	/// # Errors
	///
	/// Returns [`SessionError::NotSettled`] outside [`Phase::Settled`] and
	/// [`SessionError::TabDisabled`] for a filtered-out kind.
	pub fn set_active_tab(&mut self, tab: Tab) -> Result<(), SessionError> {
		let phase = self.phase();
		if phase != Phase::Settled {
			return Err(SessionError::NotSettled { phase });
		}
		if !self.filters.allows(tab) {
			return Err(SessionError::TabDisabled { tab });
		}
		if self.state.active_tab != tab {
			debug!(%tab, "active tab changed");
			self.state.active_tab = tab;
		}
		Ok(())
	}

	/// Flip the filter for `kind` and return its new value.
	///
	/// Disabling the kind of the active tab moves the session back to `all`,
	/// whatever the loading phase.
	pub fn toggle_filter(&mut self, kind: SourceKind) -> bool {
		let enabled = self.filters.toggle(kind);
		debug!(%kind, enabled, "filter toggled");
		self.enforce_tab_invariant();
		enabled
	}

	/// Set the filter for `kind` explicitly; same reset rule as [`Self::toggle_filter`].
	pub fn set_filter(&mut self, kind: SourceKind, enabled: bool) {
		if self.filters.is_enabled(kind) != enabled {
			self.toggle_filter(kind);
		}
	}

	/// Open or close the filter panel. Returns whether it is now open.
	pub fn toggle_filter_panel(&mut self) -> bool {
		self.state.is_filter_panel_open = !self.state.is_filter_panel_open;
		self.state.is_filter_panel_open
	}

	#[must_use]
	pub fn state(&self) -> &SessionState {
		&self.state
	}

	#[must_use]
	pub fn phase(&self) -> Phase {
		self.state.phase()
	}

	#[must_use]
	pub fn query(&self) -> &str {
		&self.state.query
	}

	#[must_use]
	pub fn active_tab(&self) -> Tab {
		self.state.active_tab
	}

	#[must_use]
	pub fn filters(&self) -> &FilterSettings {
		&self.filters
	}

	/// Counts from the last recompute.
	#[must_use]
	pub fn counts(&self) -> CategoryCounts {
		self.counts
	}

	/// Matches from the last recompute. While loading these still belong to
	/// the previous query.
	#[must_use]
	pub fn results(&self) -> &MatchResult {
		&self.results
	}

	#[must_use]
	pub fn source(&self) -> &S {
		&self.source
	}

	#[must_use]
	pub fn latency(&self) -> Duration {
		self.latency
	}

	/// Current session clock reading.
	#[must_use]
	pub fn now(&self) -> Duration {
		self.clock
	}

	/// The pending settle, if the latency window is running.
	#[must_use]
	pub fn pending_settle(&self) -> Option<SettleTicket> {
		self.timer.pending()
	}

	/// Clock time left until the pending settle is due.
	#[must_use]
	pub fn time_until_settle(&self) -> Option<Duration> {
		self.timer
			.pending()
			.map(|ticket| ticket.deadline().saturating_sub(self.clock))
	}

	#[must_use]
	pub fn tabs(&self) -> Vec<TabEntry> {
		visible_tabs(&self.filters, &self.counts)
	}

	/// Highlight `text` against the current query.
	#[must_use]
	pub fn highlight<'a>(&self, text: &'a str) -> Vec<Segment<'a>> {
		highlight(text, &self.state.query)
	}

	#[must_use]
	pub fn view(&self) -> ResultView<'_> {
		match self.phase() {
			Phase::Idle => ResultView::Hidden,
			Phase::Loading => ResultView::Loading,
			Phase::Settled if self.counts.all == 0 => ResultView::NoResults,
			Phase::Settled => ResultView::Results(view::result_groups(
				&self.results,
				&self.state.query,
				self.state.active_tab,
				&self.filters,
			)),
		}
	}

	fn recompute(&mut self) {
		self.results = match_source(&self.state.query, &self.source);
		self.counts = aggregate(&self.results);
	}

	fn enforce_tab_invariant(&mut self) {
		if !self.filters.allows(self.state.active_tab) {
			debug!(tab = %self.state.active_tab, "active tab filtered out; resetting to all");
			self.state.active_tab = Tab::All;
		}
	}
}
