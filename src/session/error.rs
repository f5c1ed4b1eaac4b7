use thiserror::Error;

use super::Phase;
use crate::types::Tab;

/// Rejected session transitions. The session state is left untouched.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum SessionError {
	/// Tabs can only be switched once results have settled.
	#[error("cannot switch tabs while the session is {phase}")]
	NotSettled { phase: Phase },

	/// The tab's source kind is currently filtered out.
	#[error("tab '{tab}' is disabled by the current filters")]
	TabDisabled { tab: Tab },
}
