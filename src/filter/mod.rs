//! Filter/rank engine for outline and completion lists.
//!
//! The engine matches a free-text query against any [`FilterableItem`],
//! keeps full matches, and orders them by how tight the match is.
//!
//! ```text
//! query ─► FilterEngine::apply ─► Vec<RankedItem> ─► RankedList ─► render callback
//! ```
//!
//! # Modules
//!
//! - [`item`]: Item capability trait and per-item results
//! - [`matcher`]: Case-folding and token matching primitives
//! - [`engine`]: Query evaluation, scoring and ordering
//! - [`list`]: Selection and windowing over ranked results

pub mod engine;
pub mod item;
pub mod list;
pub mod matcher;

pub use engine::{FilterEngine, LENGTH_WEIGHT, SPAN_PENALTY};
pub use item::{FilterMatch, FilterableItem, MatchRange, RankedItem};
pub use list::{RankedList, RowState};
pub use matcher::MatchMode;
