use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::types::SourceKind;

/// Errors raised while building or loading a [`Catalog`](super::Catalog).
#[derive(Debug, Error)]
pub enum CatalogError {
	/// Two items of the same collection share an id.
	#[error("duplicate {kind} id {id}")]
	DuplicateId { kind: SourceKind, id: u64 },

	#[error("failed to read dataset {path}")]
	Read {
		path: PathBuf,
		#[source]
		source: io::Error,
	},

	#[error("unsupported dataset format for {path} (expected .json or .toml)")]
	UnsupportedFormat { path: PathBuf },

	#[error("failed to parse JSON dataset {path}")]
	Json {
		path: PathBuf,
		#[source]
		source: serde_json::Error,
	},

	#[error("failed to parse TOML dataset {path}")]
	Toml {
		path: PathBuf,
		#[source]
		source: toml::de::Error,
	},
}
