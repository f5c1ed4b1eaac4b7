use std::fs;
use std::path::Path;

use tracing::debug;

use super::{Catalog, CatalogDocument, CatalogError};

impl Catalog {
	/// Load a dataset from a `.json` or `.toml` document shaped like
	/// `{ "people": [...], "files": [...] }`.
	///
	/// # Errors
	///
	/// Returns an error when the file cannot be read, has an unsupported
	/// extension, fails to parse, or contains duplicate ids.
	pub fn from_path(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
		let path = path.as_ref();
		let format = DatasetFormat::detect(path).ok_or_else(|| CatalogError::UnsupportedFormat {
			path: path.to_path_buf(),
		})?;
		let text = fs::read_to_string(path).map_err(|source| CatalogError::Read {
			path: path.to_path_buf(),
			source,
		})?;

		let document: CatalogDocument = match format {
			DatasetFormat::Json => serde_json::from_str(&text).map_err(|source| CatalogError::Json {
				path: path.to_path_buf(),
				source,
			})?,
			DatasetFormat::Toml => toml::from_str(&text).map_err(|source| CatalogError::Toml {
				path: path.to_path_buf(),
				source,
			})?,
		};
		let catalog = Catalog::try_from(document)?;

		debug!(
			path = %path.display(),
			people = catalog.people.len(),
			files = catalog.files.len(),
			"loaded dataset"
		);
		Ok(catalog)
	}
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum DatasetFormat {
	Json,
	Toml,
}

impl DatasetFormat {
	fn detect(path: &Path) -> Option<Self> {
		let extension = path.extension()?.to_str()?;
		if extension.eq_ignore_ascii_case("json") {
			Some(Self::Json)
		} else if extension.eq_ignore_ascii_case("toml") {
			Some(Self::Toml)
		} else {
			None
		}
	}
}

#[cfg(test)]
mod tests {
	use std::io::Write;

	use tempfile::Builder;

	use super::*;
	use crate::source::ItemSource;
	use crate::types::SourceKind;

	fn write_temp(suffix: &str, contents: &str) -> tempfile::NamedTempFile {
		let mut file = Builder::new().suffix(suffix).tempfile().expect("tempfile");
		file.write_all(contents.as_bytes()).expect("write");
		file
	}

	#[test]
	fn loads_json_dataset() {
		let file = write_temp(
			".json",
			r#"{
				"people": [{"id": 7, "name": "Nia Park", "status": "Active", "avatar": "nia.png", "isActive": true}],
				"files": [{"id": 1, "name": "notes.md", "location": "Docs", "lastEdited": "Edited 1d ago", "type": "document"}]
			}"#,
		);
		let catalog = Catalog::from_path(file.path()).expect("load");
		assert_eq!(catalog.people()[0].name, "Nia Park");
		assert!(catalog.people()[0].is_active);
		assert_eq!(catalog.files()[0].kind, "document");
	}

	#[test]
	fn loads_toml_dataset_with_missing_collection() {
		let file = write_temp(
			".toml",
			r#"
[[files]]
id = 1
name = "roadmap.key"
location = "Planning"
lastEdited = "Edited 4d ago"
type = "slides"
"#,
		);
		let catalog = Catalog::from_path(file.path()).expect("load");
		assert!(catalog.people().is_empty());
		assert_eq!(catalog.files()[0].name, "roadmap.key");
	}

	#[test]
	fn rejects_unknown_extension() {
		let file = write_temp(".yaml", "people: []");
		let err = Catalog::from_path(file.path()).unwrap_err();
		assert!(matches!(err, CatalogError::UnsupportedFormat { .. }));
	}

	#[test]
	fn reports_parse_errors() {
		let file = write_temp(".json", "{ not json");
		let err = Catalog::from_path(file.path()).unwrap_err();
		assert!(matches!(err, CatalogError::Json { .. }));
	}

	#[test]
	fn rejects_duplicate_ids_on_load() {
		let file = write_temp(
			".json",
			r#"{"files": [
				{"id": 2, "name": "a", "location": "x", "lastEdited": "y", "type": "z"},
				{"id": 2, "name": "b", "location": "x", "lastEdited": "y", "type": "z"}
			]}"#,
		);
		let err = Catalog::from_path(file.path()).unwrap_err();
		assert!(matches!(err, CatalogError::DuplicateId {
			kind: SourceKind::Files,
			id: 2
		}));
	}

	#[test]
	fn missing_file_is_a_read_error() {
		let err = Catalog::from_path("/definitely/not/here.json").unwrap_err();
		assert!(matches!(err, CatalogError::Read { .. }));
	}
}
