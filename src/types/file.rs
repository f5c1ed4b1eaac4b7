use serde::{Deserialize, Serialize};

/// A file entry offered by the item source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileItem {
	pub id: u64,
	pub name: String,
	pub location: String,
	#[serde(rename = "lastEdited")]
	pub last_edited_label: String,
	#[serde(rename = "type")]
	pub kind: String,
}

impl FileItem {
	#[must_use]
	pub fn new(
		id: u64,
		name: impl Into<String>,
		location: impl Into<String>,
		last_edited_label: impl Into<String>,
		kind: impl Into<String>,
	) -> Self {
		Self {
			id,
			name: name.into(),
			location: location.into(),
			last_edited_label: last_edited_label.into(),
			kind: kind.into(),
		}
	}

	/// Secondary line shown under the file name, e.g. `in Documents • Edited 3d ago`.
	#[must_use]
	pub fn subtitle(&self) -> String {
		format!("in {} • {}", self.location, self.last_edited_label)
	}
}
