use serde::Serialize;

use super::FoldedNeedle;
use crate::source::ItemSource;
use crate::types::{FileItem, Person};

/// Items that expose the display name used for matching.
pub trait Named {
	fn name(&self) -> &str;
}

impl Named for Person {
	fn name(&self) -> &str {
		&self.name
	}
}

impl Named for FileItem {
	fn name(&self) -> &str {
		&self.name
	}
}

/// Per-source matches for one query, in item source order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MatchResult {
	pub people: Vec<Person>,
	pub files: Vec<FileItem>,
}

impl MatchResult {
	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.people.is_empty() && self.files.is_empty()
	}
}

/// Filter `people` and `files` down to the items whose name contains `query`.
///
/// Matching is a case-insensitive literal substring test. A blank query keeps
/// every item. The relative order of each collection is preserved.
#[must_use]
pub fn match_items(query: &str, people: &[Person], files: &[FileItem]) -> MatchResult {
	let needle = if query.trim().is_empty() {
		None
	} else {
		FoldedNeedle::new(query)
	};

	MatchResult {
		people: filter_by_name(needle.as_ref(), people),
		files: filter_by_name(needle.as_ref(), files),
	}
}

/// [`match_items`] over both collections of an [`ItemSource`].
#[must_use]
pub fn match_source<S>(query: &str, source: &S) -> MatchResult
where
	S: ItemSource + ?Sized,
{
	match_items(query, source.people(), source.files())
}

fn filter_by_name<T>(needle: Option<&FoldedNeedle>, items: &[T]) -> Vec<T>
where
	T: Named + Clone,
{
	match needle {
		None => items.to_vec(),
		Some(needle) => items
			.iter()
			.filter(|item| needle.is_in(item.name()))
			.cloned()
			.collect(),
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::source::Catalog;

	fn names<T: Named>(items: &[T]) -> Vec<&str> {
		items.iter().map(Named::name).collect()
	}

	#[test]
	fn empty_query_returns_everything_in_order() {
		let catalog = Catalog::demo();
		let result = match_source("", &catalog);
		assert_eq!(result.people, catalog.people());
		assert_eq!(result.files, catalog.files());
	}

	#[test]
	fn whitespace_query_matches_everything() {
		let catalog = Catalog::demo();
		let result = match_source("  ", &catalog);
		assert_eq!(result.people.len(), catalog.people().len());
		assert_eq!(result.files.len(), catalog.files().len());
	}

	#[test]
	fn sarah_matches_one_person_and_no_files() {
		let result = match_source("sarah", &Catalog::demo());
		assert_eq!(names(&result.people), vec!["Sarah Wilson"]);
		assert!(result.files.is_empty());
	}

	#[test]
	fn matching_is_case_insensitive_and_order_preserving() {
		let result = match_source("DRIB", &Catalog::demo());
		assert_eq!(names(&result.people), vec!["Caroline Dribsson", "Adam Cadribean"]);
		assert_eq!(names(&result.files), vec!["final_dribbble_presentation.jpg"]);
	}

	#[test]
	fn every_match_contains_the_query() {
		let catalog = Catalog::demo();
		for query in ["a", "e", "_", ".", "design", "an", "s"] {
			let result = match_source(query, &catalog);
			let lowered = query.to_lowercase();
			assert!(result.people.iter().all(|p| p.name.to_lowercase().contains(&lowered)));
			assert!(result.files.iter().all(|f| f.name.to_lowercase().contains(&lowered)));

			let expected: Vec<_> = catalog
				.files()
				.iter()
				.filter(|f| f.name.to_lowercase().contains(&lowered))
				.collect();
			assert_eq!(result.files.iter().collect::<Vec<_>>(), expected);
		}
	}

	#[test]
	fn only_name_field_is_searched() {
		// "Documents" is a location, not a file name.
		let result = match_source("documents", &Catalog::demo());
		assert!(result.is_empty());
	}

	#[test]
	fn query_is_not_trimmed_for_matching() {
		let result = match_source("sarah ", &Catalog::demo());
		assert_eq!(names(&result.people), vec!["Sarah Wilson"]);
		let result = match_source(" sarah", &Catalog::demo());
		assert!(result.people.is_empty());
	}

	#[test]
	fn matching_is_deterministic() {
		let catalog = Catalog::demo();
		assert_eq!(match_source("ra", &catalog), match_source("ra", &catalog));
	}
}
