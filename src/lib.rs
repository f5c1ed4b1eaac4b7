//! Incremental search over people and files.
//!
//! A [`SearchSession`] owns the query, the simulated loading window, the
//! active tab and the source filters. Matching, counting and highlighting are
//! pure functions that the session recomputes whenever a query settles; the
//! rendering layer reads the session state, the tab bar and the
//! [`ResultView`].

pub mod app_dirs;
pub mod filters;
pub mod logging;
pub mod search;
pub mod session;
pub mod source;
pub mod tabs;
pub mod types;

pub use filters::FilterSettings;
pub use search::{CategoryCounts, MatchResult, aggregate, match_items, match_source};
pub use session::{
	DEFAULT_LATENCY, Phase, ResultGroup, ResultRow, ResultView, SearchSession, SessionError,
	SessionState, SettleTicket,
};
pub use source::{Catalog, CatalogError, ItemSource};
pub use tabs::{TabEntry, visible_tabs};
pub use types::{
	FileItem, ParseKindError, Person, Segment, SegmentKind, SourceKind, Tab, highlight,
};
