//! Read-only providers of the people and file collections.

mod demo;
mod error;
mod loader;

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

pub use error::CatalogError;

use crate::types::{FileItem, Person, SourceKind};

/// Read-only, ordered access to the searchable collections.
///
/// Ids are unique within each collection. The search core never writes
/// through this trait.
pub trait ItemSource {
	fn people(&self) -> &[Person];
	fn files(&self) -> &[FileItem];
}

/// Owned in-memory [`ItemSource`].
///
/// Deserialization goes through [`Catalog::new`], so duplicate ids are
/// rejected there too.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "CatalogDocument")]
pub struct Catalog {
	people: Vec<Person>,
	files: Vec<FileItem>,
}

/// Unvalidated on-disk shape of a [`Catalog`].
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct CatalogDocument {
	people: Vec<Person>,
	files: Vec<FileItem>,
}

impl TryFrom<CatalogDocument> for Catalog {
	type Error = CatalogError;

	fn try_from(document: CatalogDocument) -> Result<Self, Self::Error> {
		Self::new(document.people, document.files)
	}
}

impl Catalog {
	/// Build a catalog, rejecting duplicate ids within a collection.
	///
	/// # Errors
	///
	/// Returns [`CatalogError::DuplicateId`] when two people or two files share
	/// an id.
	pub fn new(people: Vec<Person>, files: Vec<FileItem>) -> Result<Self, CatalogError> {
		let catalog = Self { people, files };
		catalog.validate()?;
		Ok(catalog)
	}

	/// The built-in demo dataset.
	#[must_use]
	pub fn demo() -> Self {
		Self {
			people: demo::people(),
			files: demo::files(),
		}
	}

	fn validate(&self) -> Result<(), CatalogError> {
		ensure_unique(SourceKind::People, self.people.iter().map(|person| person.id))?;
		ensure_unique(SourceKind::Files, self.files.iter().map(|file| file.id))
	}
}

impl ItemSource for Catalog {
	fn people(&self) -> &[Person] {
		&self.people
	}

	fn files(&self) -> &[FileItem] {
		&self.files
	}
}

fn ensure_unique(kind: SourceKind, ids: impl Iterator<Item = u64>) -> Result<(), CatalogError> {
	let mut seen = HashSet::new();
	for id in ids {
		if !seen.insert(id) {
			return Err(CatalogError::DuplicateId { kind, id });
		}
	}
	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn demo_catalog_is_valid() {
		let catalog = Catalog::demo();
		assert_eq!(catalog.people().len(), 3);
		assert_eq!(catalog.files().len(), 6);
		assert!(catalog.validate().is_ok());
	}

	#[test]
	fn duplicate_person_ids_are_rejected() {
		let people = vec![
			Person::new(1, "Ann", "Active", "", true),
			Person::new(1, "Bob", "Active", "", true),
		];
		let err = Catalog::new(people, Vec::new()).unwrap_err();
		assert!(matches!(err, CatalogError::DuplicateId {
			kind: SourceKind::People,
			id: 1
		}));
	}

	#[test]
	fn deserializing_rejects_duplicate_ids() {
		let json = r#"{"people": [
			{"id": 4, "name": "Ann", "status": "Active", "avatar": "", "isActive": true},
			{"id": 4, "name": "Bob", "status": "Away", "avatar": "", "isActive": false}
		]}"#;
		let err = serde_json::from_str::<Catalog>(json).unwrap_err();
		assert!(err.to_string().contains("duplicate"), "{err}");

		let catalog: Catalog = serde_json::from_str(r#"{"files": []}"#).expect("valid");
		assert!(catalog.people().is_empty());
	}

	#[test]
	fn ids_only_need_to_be_unique_per_collection() {
		let people = vec![Person::new(1, "Ann", "Active", "", true)];
		let files = vec![FileItem::new(1, "a.txt", "Docs", "Edited 1d ago", "document")];
		assert!(Catalog::new(people, files).is_ok());
	}
}
