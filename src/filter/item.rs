//! Filterable item capability and per-item filter results.
//!
//! Any type that exposes a display text can be filtered by implementing
//! [`FilterableItem`]. The engine pairs each item with a [`RankedItem`] that
//! carries the match outcome: whether every query token was found, which
//! character spans matched, and the dispersion level used for ordering.

use serde::Serialize;

/// Capability required by the filter engine.
///
/// Only the display text takes part in matching. Disabled items are still
/// matched and listed; the flag is carried through to the result so a
/// renderer can skip highlight drawing and mute the row.
pub trait FilterableItem {
    /// Text matched against the query.
    fn display_text(&self) -> &str;

    /// Whether the item is shown muted and without highlights.
    fn is_disabled(&self) -> bool {
        false
    }
}

impl FilterableItem for str {
    fn display_text(&self) -> &str {
        self
    }
}

impl FilterableItem for String {
    fn display_text(&self) -> &str {
        self.as_str()
    }
}

impl<T: FilterableItem + ?Sized> FilterableItem for &T {
    fn display_text(&self) -> &str {
        (**self).display_text()
    }

    fn is_disabled(&self) -> bool {
        (**self).is_disabled()
    }
}

/// A matched span of the display text, in character positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct MatchRange {
    /// Character index where the span starts.
    pub start: usize,
    /// Number of characters covered.
    pub length: usize,
}

impl MatchRange {
    /// Creates a span covering `length` characters from `start`.
    #[must_use]
    pub const fn new(start: usize, length: usize) -> Self {
        Self { start, length }
    }

    /// Exclusive end position of the span.
    #[must_use]
    pub const fn end(&self) -> usize {
        self.start + self.length
    }
}

/// Outcome of matching one display text against a query.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FilterMatch {
    /// Merged spans sorted by start. Empty for an empty query.
    pub matched_ranges: Vec<MatchRange>,
    /// True iff every query token was found.
    pub fully_matches: bool,
    /// Lower is tighter. Ascending sort key.
    pub dispersion_level: f64,
}

impl FilterMatch {
    /// The result every item gets for an empty query.
    #[must_use]
    pub const fn everything() -> Self {
        Self {
            matched_ranges: Vec::new(),
            fully_matches: true,
            dispersion_level: 0.0,
        }
    }
}

/// An item paired with its filter result.
///
/// Produced by [`FilterEngine`](super::FilterEngine). `index` is the item's
/// position in the input sequence and breaks ties between equal dispersion
/// levels.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedItem<T> {
    /// The filtered item (usually a reference into the input slice).
    pub item: T,
    /// Position of the item in the input sequence.
    pub index: usize,
    /// Copied from [`FilterableItem::is_disabled`].
    pub is_disabled: bool,
    /// Match outcome for the current query.
    #[serde(flatten)]
    pub outcome: FilterMatch,
}

impl<T> RankedItem<T> {
    /// Character spans that matched, sorted by start.
    #[must_use]
    pub fn matched_ranges(&self) -> &[MatchRange] {
        &self.outcome.matched_ranges
    }

    /// True iff every query token was found.
    #[must_use]
    pub const fn fully_matches(&self) -> bool {
        self.outcome.fully_matches
    }

    /// Sort key for ranking. Lower is better.
    #[must_use]
    pub const fn dispersion_level(&self) -> f64 {
        self.outcome.dispersion_level
    }

    /// Whether a renderer should draw highlight frames for this row.
    #[must_use]
    pub fn draws_highlights(&self) -> bool {
        !self.is_disabled && !self.outcome.matched_ranges.is_empty()
    }

    /// Replaces the carried item, keeping the match outcome.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> RankedItem<U> {
        RankedItem {
            item: f(self.item),
            index: self.index,
            is_disabled: self.is_disabled,
            outcome: self.outcome,
        }
    }
}

impl<T: Clone> RankedItem<&T> {
    /// Detaches the result from the input slice by cloning the item.
    #[must_use]
    pub fn cloned(self) -> RankedItem<T> {
        self.map(Clone::clone)
    }
}

impl<T: FilterableItem> FilterableItem for RankedItem<T> {
    fn display_text(&self) -> &str {
        self.item.display_text()
    }

    fn is_disabled(&self) -> bool {
        self.is_disabled
    }
}
