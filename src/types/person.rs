use serde::{Deserialize, Serialize};

/// A person entry offered by the item source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Person {
	pub id: u64,
	pub name: String,
	pub status: String,
	/// Opaque locator for the avatar image; never dereferenced by the search core.
	#[serde(rename = "avatar")]
	pub avatar_ref: String,
	pub is_active: bool,
}

impl Person {
	#[must_use]
	pub fn new(
		id: u64,
		name: impl Into<String>,
		status: impl Into<String>,
		avatar_ref: impl Into<String>,
		is_active: bool,
	) -> Self {
		Self {
			id,
			name: name.into(),
			status: status.into(),
			avatar_ref: avatar_ref.into(),
			is_active,
		}
	}
}
