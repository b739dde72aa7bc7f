//! Records emitted by the algoscope engines.
//!
//! Engines compute a complete trace eagerly and hand it to a renderer, which
//! decides how to pace playback. Every type here is a plain value: nothing in
//! a trace refers back to engine state.

mod search;
mod sort;
mod traversal;

pub use search::{SearchResult, SearchStep};
pub use sort::{Frame, SortEvent, SortTrace};
pub use traversal::TraversalResult;
