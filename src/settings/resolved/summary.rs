use std::fmt::Write;

use super::ResolvedConfig;

pub(super) fn summary(config: &ResolvedConfig) -> String {
	let mut out = String::new();
	let _ = writeln!(out, "Effective configuration:");
	if config.query.is_empty() {
		let _ = writeln!(out, "  Query: (empty)");
	} else {
		let _ = writeln!(out, "  Query: {}", config.query);
	}
	let _ = writeln!(out, "  Initial tab: {}", config.initial_tab);
	let _ = writeln!(out, "  Latency: {} ms", config.latency.as_millis());
	for (kind, enabled) in config.filters.iter() {
		let _ = writeln!(out, "  Filter {kind}: {}", bool_to_word(enabled));
	}
	match &config.data_path {
		Some(path) => {
			let _ = writeln!(out, "  Dataset: {}", path.display());
		}
		None => {
			let _ = writeln!(out, "  Dataset: (built-in demo data)");
		}
	}
	out
}

fn bool_to_word(value: bool) -> &'static str {
	if value { "yes" } else { "no" }
}

#[cfg(test)]
mod tests {
	use std::path::PathBuf;

	use omnisearch::{DEFAULT_LATENCY, FilterSettings, Tab};

	use super::*;

	#[test]
	fn bool_to_word_matches_expectations() {
		assert_eq!(bool_to_word(true), "yes");
		assert_eq!(bool_to_word(false), "no");
	}

	#[test]
	fn summary_lists_every_setting() {
		let config = ResolvedConfig {
			query: "sarah".into(),
			initial_tab: Tab::People,
			filters: FilterSettings::default(),
			latency: DEFAULT_LATENCY,
			data_path: Some(PathBuf::from("/tmp/data.json")),
		};

		let text = summary(&config);
		assert!(text.contains("Query: sarah"));
		assert!(text.contains("Initial tab: people"));
		assert!(text.contains("Latency: 800 ms"));
		assert!(text.contains("Filter chats: no"));
		assert!(text.contains("Filter files: yes"));
		assert!(text.contains("Dataset: /tmp/data.json"));
	}
}
