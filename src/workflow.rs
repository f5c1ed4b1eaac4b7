use std::thread;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use omnisearch::{Catalog, Phase, SearchSession, Tab};
use tracing::{debug, info, warn};

use crate::settings::ResolvedConfig;

/// Upper bound on a single sleep while waiting for the latency window.
const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Coordinates building a session from configuration and driving it to a
/// settled result.
pub(crate) struct SearchWorkflow {
	session: SearchSession,
	query: String,
	initial_tab: Tab,
}

impl SearchWorkflow {
	pub(crate) fn from_config(config: ResolvedConfig) -> Result<Self> {
		let ResolvedConfig {
			query,
			initial_tab,
			filters,
			latency,
			data_path,
		} = config;

		let catalog = match data_path {
			Some(path) => Catalog::from_path(&path)
				.with_context(|| format!("failed to load dataset {}", path.display()))?,
			None => Catalog::demo(),
		};

		let session = SearchSession::new(catalog)
			.with_latency(latency)
			.with_filters(filters);

		Ok(Self {
			session,
			query,
			initial_tab,
		})
	}

	/// Submit the query, wait out the latency window in real time and select
	/// the requested tab.
	pub(crate) fn run(mut self) -> Result<SearchSession> {
		self.session.set_query(self.query.as_str());
		self.wait_until_settled();

		if self.initial_tab != Tab::All {
			if self.session.phase() == Phase::Settled {
				self.session
					.set_active_tab(self.initial_tab)
					.with_context(|| format!("failed to select tab '{}'", self.initial_tab))?;
			} else {
				warn!(tab = %self.initial_tab, "ignoring tab selection for an empty query");
			}
		}

		Ok(self.session)
	}

	fn wait_until_settled(&mut self) {
		let mut last = Instant::now();
		while let Some(remaining) = self.session.time_until_settle() {
			debug!(?remaining, "waiting for results");
			thread::sleep(remaining.min(POLL_INTERVAL));
			let now = Instant::now();
			self.session.advance(now.duration_since(last));
			last = now;
		}
		info!(
			query = %self.session.query(),
			results = self.session.counts().all,
			"search settled"
		);
	}
}

#[cfg(test)]
mod tests {
	use omnisearch::{FilterSettings, ResultView, SourceKind};

	use super::*;

	fn config(query: &str, tab: Tab) -> ResolvedConfig {
		ResolvedConfig {
			query: query.into(),
			initial_tab: tab,
			filters: FilterSettings::default(),
			latency: Duration::from_millis(5),
			data_path: None,
		}
	}

	#[test]
	fn run_settles_and_selects_tab() {
		let session = SearchWorkflow::from_config(config("sarah", Tab::People))
			.expect("workflow")
			.run()
			.expect("run");
		assert_eq!(session.phase(), Phase::Settled);
		assert_eq!(session.active_tab(), Tab::People);
		let ResultView::Results(groups) = session.view() else {
			panic!("expected results");
		};
		assert_eq!(groups.len(), 1);
		assert_eq!(groups[0].kind, SourceKind::People);
	}

	#[test]
	fn empty_query_stays_idle_and_keeps_all_tab() {
		let session = SearchWorkflow::from_config(config("", Tab::Files))
			.expect("workflow")
			.run()
			.expect("run");
		assert_eq!(session.phase(), Phase::Idle);
		assert_eq!(session.active_tab(), Tab::All);
	}

	#[test]
	fn missing_dataset_is_reported() {
		let mut config = config("a", Tab::All);
		config.data_path = Some("/definitely/not/here.json".into());
		let err = SearchWorkflow::from_config(config).err().expect("error");
		assert!(err.to_string().contains("failed to load dataset"));
	}
}
