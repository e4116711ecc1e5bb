//! Ranked list component.
//!
//! [`RankedList`] owns a master item list, the current query, and the derived
//! ranked results with a selection cursor. It replaces the inheritance chain of
//! a GUI list widget with composition: matching is delegated to a
//! [`FilterEngine`], and drawing is delegated to a callback handed to
//! [`RankedList::render_with`].
//!
//! # Example
//!
//! ```rust
//! use ablstyle::filter::{FilterEngine, RankedList};
//!
//! let mut list = RankedList::new(
//!     vec!["DEFINE VARIABLE".to_string(), "FIND FIRST".to_string()],
//!     FilterEngine::default(),
//! );
//! list.set_query("find");
//! list.render_with(10, |row, state| {
//!     println!("{} {}", if state.is_selected { ">" } else { " " }, row.item);
//! });
//! ```

use super::engine::FilterEngine;
use super::item::{FilterableItem, RankedItem};
use std::fmt;
use std::ops::Range;

/// Per-row information passed to the render callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowState {
    /// Position of the row within the ranked results.
    pub position: usize,
    /// Whether the row holds the selection cursor.
    pub is_selected: bool,
    /// False for disabled rows and rows without matched ranges.
    pub draw_highlights: bool,
}

type Predicate<T> = Box<dyn Fn(&T) -> bool + Send + Sync>;

/// Filterable, rankable list with a selection cursor.
pub struct RankedList<T> {
    /// Master list in insertion order.
    items: Vec<T>,
    /// Query as typed by the user.
    query: String,
    engine: FilterEngine,
    predicate: Option<Predicate<T>>,
    /// Items matching the query, best first.
    results: Vec<RankedItem<T>>,
    /// Zero-based index into `results`; clamped after every refresh.
    selected_index: usize,
}

impl<T: FilterableItem + Clone> RankedList<T> {
    /// Creates a list showing every item (empty query).
    #[must_use]
    pub fn new(items: Vec<T>, engine: FilterEngine) -> Self {
        let mut list = Self {
            items,
            query: String::new(),
            engine,
            predicate: None,
            results: Vec::new(),
            selected_index: 0,
        };
        list.refresh();
        list
    }

    /// Installs an extra filter evaluated after the text match.
    pub fn set_predicate(&mut self, predicate: impl Fn(&T) -> bool + Send + Sync + 'static) {
        self.predicate = Some(Box::new(predicate));
        self.refresh();
    }

    /// Removes the extra filter.
    pub fn clear_predicate(&mut self) {
        self.predicate = None;
        self.refresh();
    }

    /// Replaces the master list and recomputes the results.
    pub fn set_items(&mut self, items: Vec<T>) {
        self.items = items;
        self.refresh();
    }

    /// Updates the query and recomputes the results.
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
        self.refresh();
    }

    /// Current query text.
    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Master list in insertion order.
    #[must_use]
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Ranked results for the current query, best first.
    #[must_use]
    pub fn results(&self) -> &[RankedItem<T>] {
        &self.results
    }

    /// Index of the selection within [`results`](Self::results).
    #[must_use]
    pub const fn selected_index(&self) -> usize {
        self.selected_index
    }

    /// Currently selected result, if any.
    #[must_use]
    pub fn selected(&self) -> Option<&RankedItem<T>> {
        self.results.get(self.selected_index)
    }

    /// Moves the selection down by one, wrapping to the top.
    pub fn move_selection_down(&mut self) {
        if self.results.is_empty() {
            return;
        }
        self.selected_index = (self.selected_index + 1) % self.results.len();
    }

    /// Moves the selection up by one, wrapping to the bottom.
    pub fn move_selection_up(&mut self) {
        if self.results.is_empty() {
            return;
        }
        if self.selected_index == 0 {
            self.selected_index = self.results.len() - 1;
        } else {
            self.selected_index -= 1;
        }
    }

    /// Window of result positions to show in `rows` lines.
    ///
    /// Centres the selection when possible and fills the window when the
    /// selection is close to the end.
    #[must_use]
    pub fn visible_window(&self, rows: usize) -> Range<usize> {
        let total = self.results.len();
        let mut start = self.selected_index.saturating_sub(rows / 2);
        let end = (start + rows).min(total);

        if end - start < rows && total >= rows {
            start = end.saturating_sub(rows);
        }

        start..end
    }

    /// Calls `draw` for every visible row, top to bottom.
    pub fn render_with<F>(&self, rows: usize, mut draw: F)
    where
        F: FnMut(&RankedItem<T>, RowState),
    {
        for position in self.visible_window(rows) {
            let row = &self.results[position];
            draw(
                row,
                RowState {
                    position,
                    is_selected: position == self.selected_index,
                    draw_highlights: row.draws_highlights(),
                },
            );
        }
    }

    fn refresh(&mut self) {
        let ranked = match &self.predicate {
            Some(predicate) => self
                .engine
                .apply_with(self.query.as_str(), &self.items, |item| predicate(item)),
            None => self.engine.apply(self.query.as_str(), &self.items),
        };

        self.results = ranked.into_iter().map(RankedItem::cloned).collect();

        if self.results.is_empty() {
            self.selected_index = 0;
        } else {
            self.selected_index = self.selected_index.min(self.results.len() - 1);
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for RankedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RankedList")
            .field("query", &self.query)
            .field("engine", &self.engine)
            .field("items", &self.items.len())
            .field("results", &self.results.len())
            .field("selected_index", &self.selected_index)
            .finish_non_exhaustive()
    }
}
