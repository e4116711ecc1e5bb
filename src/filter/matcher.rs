//! Token matching primitives.
//!
//! Text is case-folded once per item into a [`FoldedText`], which remembers the
//! original character position of every folded character. Matching a token
//! then yields spans in original character positions, so highlight ranges stay
//! valid even when lower-casing changes the character count.

use super::item::MatchRange;
use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Primitive used to look for a single query token in a display text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchMode {
    /// First occurrence of the token as a contiguous substring.
    #[default]
    Substring,
    /// Skim-style subsequence match; may report several spans per token.
    Fuzzy,
}

impl MatchMode {
    /// Configuration name of the mode.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Substring => "substring",
            Self::Fuzzy => "fuzzy",
        }
    }
}

impl fmt::Display for MatchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MatchMode {
    type Err = crate::AblStyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "substring" | "contains" => Ok(Self::Substring),
            "fuzzy" | "subsequence" => Ok(Self::Fuzzy),
            other => Err(crate::AblStyleError::Config(format!(
                "unknown match mode: {other}"
            ))),
        }
    }
}

/// Lower-cased view of a display text.
pub(crate) struct FoldedText {
    chars: Vec<char>,
    folded: String,
    /// Original character position for each entry of `chars`.
    origin: Vec<usize>,
}

impl FoldedText {
    pub(crate) fn new(text: &str) -> Self {
        let mut chars = Vec::with_capacity(text.len());
        let mut origin = Vec::with_capacity(text.len());
        for (position, c) in text.chars().enumerate() {
            for lower in c.to_lowercase() {
                chars.push(lower);
                origin.push(position);
            }
        }
        let folded = chars.iter().collect();
        Self { chars, folded, origin }
    }

    /// Maps folded positions `[from, to)` back to an original span.
    fn span(&self, from: usize, to: usize) -> MatchRange {
        let start = self.origin[from];
        let end = self.origin[to - 1] + 1;
        MatchRange::new(start, end - start)
    }
}

/// A query token, folded char by char exactly like [`FoldedText`].
///
/// `str::to_lowercase` maps a word-final `Σ` to `ς` while `char::to_lowercase`
/// always gives `σ`; both sides must use the latter to compare equal.
pub(crate) struct Token {
    text: String,
    chars: Vec<char>,
}

impl Token {
    pub(crate) fn new(text: &str) -> Self {
        let chars: Vec<char> = text.chars().flat_map(char::to_lowercase).collect();
        Self {
            text: chars.iter().collect(),
            chars,
        }
    }
}

/// Stateful matcher built once per filter pass.
pub(crate) enum Matcher {
    Substring,
    Fuzzy(SkimMatcherV2),
}

impl Matcher {
    pub(crate) fn new(mode: MatchMode) -> Self {
        match mode {
            MatchMode::Substring => Self::Substring,
            MatchMode::Fuzzy => Self::Fuzzy(SkimMatcherV2::default().ignore_case()),
        }
    }

    /// Spans used to match `token`, or `None` when it is absent.
    pub(crate) fn find(&self, haystack: &FoldedText, token: &Token) -> Option<Vec<MatchRange>> {
        if token.chars.is_empty() {
            return Some(Vec::new());
        }
        match self {
            Self::Substring => haystack
                .chars
                .windows(token.chars.len())
                .position(|window| window == token.chars.as_slice())
                .map(|at| vec![haystack.span(at, at + token.chars.len())]),
            Self::Fuzzy(skim) => skim
                .fuzzy_indices(&haystack.folded, &token.text)
                .map(|(_score, indices)| coalesce(haystack, &indices)),
        }
    }
}

/// Collapses runs of consecutive folded indices into spans.
fn coalesce(haystack: &FoldedText, indices: &[usize]) -> Vec<MatchRange> {
    let mut spans = Vec::new();
    let mut run: Option<(usize, usize)> = None;

    for &idx in indices {
        run = match run {
            None => Some((idx, idx)),
            Some((start, prev)) if idx == prev + 1 => Some((start, idx)),
            Some((start, prev)) => {
                spans.push(haystack.span(start, prev + 1));
                Some((idx, idx))
            }
        };
    }

    if let Some((start, prev)) = run {
        spans.push(haystack.span(start, prev + 1));
    }

    spans
}

/// Sorts spans by start and merges the ones that overlap or touch.
pub(crate) fn merge_spans(mut spans: Vec<MatchRange>) -> Vec<MatchRange> {
    spans.sort_unstable();
    let mut merged: Vec<MatchRange> = Vec::with_capacity(spans.len());
    for span in spans {
        match merged.last_mut() {
            Some(last) if span.start <= last.end() => {
                let end = last.end().max(span.end());
                last.length = end - last.start;
            }
            _ => merged.push(span),
        }
    }
    merged
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn substring_reports_first_occurrence() {
        let text = FoldedText::new("Apple Pie Apple");
        let spans = Matcher::new(MatchMode::Substring).find(&text, &Token::new("apple"));
        assert_eq!(spans, Some(vec![MatchRange::new(0, 5)]));
    }

    #[test]
    fn substring_misses_scattered_letters() {
        let text = FoldedText::new("pineapple");
        let spans = Matcher::new(MatchMode::Substring).find(&text, &Token::new("pie"));
        assert_eq!(spans, None);
    }

    #[test]
    fn fuzzy_reports_subsequence_spans() {
        let text = FoldedText::new("pineapple");
        let spans = Matcher::new(MatchMode::Fuzzy)
            .find(&text, &Token::new("pie"))
            .unwrap_or_default();
        assert!(!spans.is_empty());
        let covered: usize = spans.iter().map(|s| s.length).sum();
        assert_eq!(covered, 3);
    }

    #[test]
    fn spans_map_back_to_original_positions() {
        // 'İ' lower-cases to two chars; the match after it must still point at
        // the original character index.
        let text = FoldedText::new("İab");
        let spans = Matcher::new(MatchMode::Substring).find(&text, &Token::new("ab"));
        assert_eq!(spans, Some(vec![MatchRange::new(1, 2)]));
    }

    #[test]
    fn final_sigma_folds_like_the_item_text() {
        let text = FoldedText::new("ΟΔΟΣ");
        for mode in [MatchMode::Substring, MatchMode::Fuzzy] {
            let spans = Matcher::new(mode).find(&text, &Token::new("ΟΔΟΣ"));
            assert_eq!(spans, Some(vec![MatchRange::new(0, 4)]), "{mode}");
        }
    }

    #[test]
    fn merge_joins_overlapping_and_adjacent_spans() {
        let merged = merge_spans(vec![
            MatchRange::new(6, 2),
            MatchRange::new(0, 3),
            MatchRange::new(2, 2),
            MatchRange::new(4, 1),
        ]);
        assert_eq!(merged, vec![MatchRange::new(0, 5), MatchRange::new(6, 2)]);
    }

    #[test]
    fn mode_parses_from_config_names() {
        assert_eq!("Fuzzy".parse::<MatchMode>().ok(), Some(MatchMode::Fuzzy));
        assert!("regex".parse::<MatchMode>().is_err());
    }
}
