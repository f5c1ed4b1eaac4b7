//! Query matching over the item source and the per-category counts derived
//! from it.
//!
//! Both stages are pure: identical inputs always give identical outputs, and
//! results are rebuilt from scratch on every settle instead of being patched.

mod aggregator;
mod fold;
mod matcher;

pub use aggregator::{CategoryCounts, aggregate};
pub(crate) use fold::FoldedNeedle;
pub use matcher::{MatchResult, Named, match_items, match_source};
