//! Types shared by the item source, the search pipeline and the session.

mod file;
mod highlight;
mod kind;
mod person;

pub use file::FileItem;
pub use highlight::{Segment, SegmentKind, highlight};
pub use kind::{ParseKindError, SourceKind, Tab};
pub use person::Person;
