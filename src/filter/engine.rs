//! Query evaluation and ranking.
//!
//! [`FilterEngine::apply`] keeps the items whose display text contains every
//! whitespace-separated query token and orders them by dispersion level. The
//! engine holds no state between calls: applying the same query to the same
//! items always gives the same sequence.
//!
//! # Dispersion level
//!
//! ```text
//! dispersion = Σ span.start + (spans - 1) × SPAN_PENALTY + matched_chars × LENGTH_WEIGHT
//! ```
//!
//! An exact prefix covered by a single span scores `matched_chars × 0.01`,
//! which is below any match that starts later (at least `1.0` more) or needs a
//! second span (at least `10.0` more).

use super::item::{FilterMatch, FilterableItem, MatchRange, RankedItem};
use super::matcher::{merge_spans, FoldedText, MatchMode, Matcher, Token};

/// Cost of every span beyond the first.
pub const SPAN_PENALTY: f64 = 10.0;

/// Cost per matched character.
pub const LENGTH_WEIGHT: f64 = 0.01;

/// Stateless filter/rank engine.
///
/// # Example
///
/// ```rust
/// use ablstyle::filter::{FilterEngine, MatchMode};
///
/// let items = vec!["apple pie".to_string(), "pie crust".to_string()];
/// let engine = FilterEngine::new(MatchMode::Substring);
/// let ranked = engine.apply("pie", &items);
/// assert_eq!(ranked[0].item, "pie crust");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FilterEngine {
    mode: MatchMode,
}

impl FilterEngine {
    /// Creates an engine using the given matching primitive.
    #[must_use]
    pub const fn new(mode: MatchMode) -> Self {
        Self { mode }
    }

    /// Matching primitive in use.
    #[must_use]
    pub const fn mode(&self) -> MatchMode {
        self.mode
    }

    /// Matches a single display text against `query`.
    #[must_use]
    pub fn evaluate(&self, query: &str, text: &str) -> FilterMatch {
        let tokens = tokenize(query);
        evaluate_tokens(&Matcher::new(self.mode), &tokens, text)
    }

    /// Evaluates every item without filtering or reordering.
    ///
    /// Useful for lists that keep non-matching rows visible but greyed out.
    /// A `None` query behaves like an empty one.
    pub fn rank<'q, 'a, T: FilterableItem>(
        &self,
        query: impl Into<Option<&'q str>>,
        items: &'a [T],
    ) -> Vec<RankedItem<&'a T>> {
        let query = query.into().unwrap_or_default();
        let tokens = tokenize(query);
        let matcher = Matcher::new(self.mode);

        items
            .iter()
            .enumerate()
            .map(|(index, item)| RankedItem {
                item,
                index,
                is_disabled: item.is_disabled(),
                outcome: evaluate_tokens(&matcher, &tokens, item.display_text()),
            })
            .collect()
    }

    /// Filters `items` to full matches, ordered by ascending dispersion level.
    ///
    /// Ties keep their input order. An empty or `None` query returns every
    /// item in input order.
    pub fn apply<'q, 'a, T: FilterableItem>(
        &self,
        query: impl Into<Option<&'q str>>,
        items: &'a [T],
    ) -> Vec<RankedItem<&'a T>> {
        self.apply_with(query, items, |_| true)
    }

    /// Like [`apply`](Self::apply) with an extra caller predicate.
    ///
    /// The predicate only runs on items that already match the query.
    pub fn apply_with<'q, 'a, T, P>(
        &self,
        query: impl Into<Option<&'q str>>,
        items: &'a [T],
        predicate: P,
    ) -> Vec<RankedItem<&'a T>>
    where
        T: FilterableItem,
        P: Fn(&T) -> bool,
    {
        let query = query.into().unwrap_or_default();

        let _span = tracing::debug_span!("filter_apply",
            total_items = items.len(),
            query_len = query.len(),
            mode = %self.mode
        )
        .entered();

        let mut ranked: Vec<RankedItem<&'a T>> = self
            .rank(query, items)
            .into_iter()
            .filter(|ranked| ranked.fully_matches() && predicate(ranked.item))
            .collect();

        ranked.sort_by(|a, b| a.dispersion_level().total_cmp(&b.dispersion_level()));

        tracing::debug!(matched_count = ranked.len(), "filter applied");
        ranked
    }
}

/// Splits the trimmed query on whitespace. Tokens fold their own case.
fn tokenize(query: &str) -> Vec<Token> {
    query.trim().split_whitespace().map(Token::new).collect()
}

fn evaluate_tokens(matcher: &Matcher, tokens: &[Token], text: &str) -> FilterMatch {
    if tokens.is_empty() {
        return FilterMatch::everything();
    }

    let folded = FoldedText::new(text);
    let mut spans = Vec::new();
    let mut fully_matches = true;

    for token in tokens {
        match matcher.find(&folded, token) {
            Some(found) => spans.extend(found),
            None => fully_matches = false,
        }
    }

    let matched_ranges = merge_spans(spans);
    let dispersion_level = dispersion_level(&matched_ranges);

    FilterMatch {
        matched_ranges,
        fully_matches,
        dispersion_level,
    }
}

#[allow(clippy::cast_precision_loss)]
fn dispersion_level(spans: &[MatchRange]) -> f64 {
    if spans.is_empty() {
        return 0.0;
    }
    let starts: usize = spans.iter().map(|s| s.start).sum();
    let matched: usize = spans.iter().map(|s| s.length).sum();
    let extra_spans = spans.len() - 1;

    starts as f64 + extra_spans as f64 * SPAN_PENALTY + matched as f64 * LENGTH_WEIGHT
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts<T: FilterableItem>(ranked: &[RankedItem<&T>]) -> Vec<String> {
        ranked
            .iter()
            .map(|r| r.item.display_text().to_string())
            .collect()
    }

    #[test]
    fn empty_query_keeps_everything_in_order() {
        let items = vec!["b", "a", "c"];
        let ranked = FilterEngine::default().apply("   ", &items);
        assert_eq!(texts(&ranked), vec!["b", "a", "c"]);
        assert!(ranked.iter().all(|r| r.matched_ranges().is_empty()));
        assert!(ranked.iter().all(|r| r.dispersion_level() == 0.0));
    }

    #[test]
    fn absent_query_is_empty_query() {
        let items = vec!["x"];
        let ranked = FilterEngine::default().apply(None, &items);
        assert_eq!(ranked.len(), 1);
    }

    #[test]
    fn every_token_must_match() {
        let engine = FilterEngine::default();
        let outcome = engine.evaluate("run proc", "RUN my-proc.p");
        assert!(outcome.fully_matches);
        assert_eq!(
            outcome.matched_ranges,
            vec![MatchRange::new(0, 3), MatchRange::new(7, 4)]
        );

        let partial = engine.evaluate("run class", "RUN my-proc.p");
        assert!(!partial.fully_matches);
        assert_eq!(partial.matched_ranges, vec![MatchRange::new(0, 3)]);
    }

    #[test]
    fn prefix_beats_later_start() {
        let items = vec!["xpie", "pie"];
        let ranked = FilterEngine::default().apply("pie", &items);
        assert_eq!(texts(&ranked), vec!["pie", "xpie"]);
        assert!(ranked[0].dispersion_level() < ranked[1].dispersion_level());
    }

    #[test]
    fn single_span_beats_disjoint_spans() {
        let engine = FilterEngine::default();
        let tight = engine.evaluate("for each", "foreach customer");
        let loose = engine.evaluate("for each", "for x each");
        assert_eq!(tight.matched_ranges.len(), 1);
        assert_eq!(loose.matched_ranges.len(), 2);
        assert!(tight.dispersion_level < loose.dispersion_level);
    }

    #[test]
    fn ties_keep_input_order() {
        let items = vec!["define a", "define b", "define c"];
        let ranked = FilterEngine::default().apply("define", &items);
        let indexes: Vec<usize> = ranked.iter().map(|r| r.index).collect();
        assert_eq!(indexes, vec![0, 1, 2]);
    }

    #[test]
    fn predicate_runs_only_on_matches() {
        let items = vec!["alpha", "beta", "alphabet"];
        let seen = std::cell::RefCell::new(Vec::new());
        let ranked = FilterEngine::default().apply_with("alpha", &items, |item| {
            seen.borrow_mut().push(item.to_string());
            item.len() > 5
        });
        assert_eq!(texts(&ranked), vec!["alphabet"]);
        assert_eq!(*seen.borrow(), vec!["alpha", "alphabet"]);
    }

    #[test]
    fn empty_input_gives_empty_output() {
        let items: Vec<String> = Vec::new();
        assert!(FilterEngine::default().apply("x", &items).is_empty());
    }
}
