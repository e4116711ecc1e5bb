//! Fixed set of themeable style keys.
//!
//! The key set is known ahead of time and does not depend on the resource
//! being parsed. Names are matched case-insensitively and ignore `-`, `_` and
//! spaces, so `keyword-class-1`, `Keyword1` and `KEYWORD_1` are one key.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A category of syntax or UI element whose colors are themeable.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub enum StyleKey {
    Default,
    Comment,
    Number,
    Operator,
    Keyword1,
    Keyword2,
    Keyword3,
    Keyword4,
    Keyword5,
    Keyword6,
    Keyword7,
    Keyword8,
    StringDelimiter1,
    StringDelimiter2,
    StringDelimiter3,
    StringDelimiter4,
    StringDelimiter5,
    StringDelimiter6,
    StringDelimiter7,
    StringDelimiter8,
    Preprocessor,
    Include,
    Selection,
    CaretLine,
    Whitespace,
    FoldMargin,
    MatchHighlight,
    ErrorSeverity0,
    ErrorSeverity1,
    ErrorSeverity2,
    ErrorSeverity3,
    ErrorSeverity4,
}

impl StyleKey {
    /// Every key, in declaration order.
    pub const ALL: [Self; 32] = [
        Self::Default,
        Self::Comment,
        Self::Number,
        Self::Operator,
        Self::Keyword1,
        Self::Keyword2,
        Self::Keyword3,
        Self::Keyword4,
        Self::Keyword5,
        Self::Keyword6,
        Self::Keyword7,
        Self::Keyword8,
        Self::StringDelimiter1,
        Self::StringDelimiter2,
        Self::StringDelimiter3,
        Self::StringDelimiter4,
        Self::StringDelimiter5,
        Self::StringDelimiter6,
        Self::StringDelimiter7,
        Self::StringDelimiter8,
        Self::Preprocessor,
        Self::Include,
        Self::Selection,
        Self::CaretLine,
        Self::Whitespace,
        Self::FoldMargin,
        Self::MatchHighlight,
        Self::ErrorSeverity0,
        Self::ErrorSeverity1,
        Self::ErrorSeverity2,
        Self::ErrorSeverity3,
        Self::ErrorSeverity4,
    ];

    /// Canonical name used when writing theme resources.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Default => "Default",
            Self::Comment => "Comment",
            Self::Number => "Number",
            Self::Operator => "Operator",
            Self::Keyword1 => "Keyword1",
            Self::Keyword2 => "Keyword2",
            Self::Keyword3 => "Keyword3",
            Self::Keyword4 => "Keyword4",
            Self::Keyword5 => "Keyword5",
            Self::Keyword6 => "Keyword6",
            Self::Keyword7 => "Keyword7",
            Self::Keyword8 => "Keyword8",
            Self::StringDelimiter1 => "StringDelimiter1",
            Self::StringDelimiter2 => "StringDelimiter2",
            Self::StringDelimiter3 => "StringDelimiter3",
            Self::StringDelimiter4 => "StringDelimiter4",
            Self::StringDelimiter5 => "StringDelimiter5",
            Self::StringDelimiter6 => "StringDelimiter6",
            Self::StringDelimiter7 => "StringDelimiter7",
            Self::StringDelimiter8 => "StringDelimiter8",
            Self::Preprocessor => "Preprocessor",
            Self::Include => "Include",
            Self::Selection => "Selection",
            Self::CaretLine => "CaretLine",
            Self::Whitespace => "Whitespace",
            Self::FoldMargin => "FoldMargin",
            Self::MatchHighlight => "MatchHighlight",
            Self::ErrorSeverity0 => "ErrorSeverity0",
            Self::ErrorSeverity1 => "ErrorSeverity1",
            Self::ErrorSeverity2 => "ErrorSeverity2",
            Self::ErrorSeverity3 => "ErrorSeverity3",
            Self::ErrorSeverity4 => "ErrorSeverity4",
        }
    }

    /// Looks a key up by name; `None` for names outside the fixed set.
    ///
    /// # Example
    ///
    /// ```rust
    /// use ablstyle::theme::StyleKey;
    ///
    /// assert_eq!(StyleKey::from_name("keyword-class-3"), Some(StyleKey::Keyword3));
    /// assert_eq!(StyleKey::from_name("caret_line"), Some(StyleKey::CaretLine));
    /// assert_eq!(StyleKey::from_name("sparkles"), None);
    /// ```
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let wanted = normalize(name);
        let wanted = wanted.replacen("keywordclass", "keyword", 1);
        Self::ALL
            .into_iter()
            .find(|key| normalize(key.name()) == wanted)
    }

    /// Keyword class key for `class` in `1..=8`.
    #[must_use]
    pub const fn keyword(class: u8) -> Option<Self> {
        match class {
            1 => Some(Self::Keyword1),
            2 => Some(Self::Keyword2),
            3 => Some(Self::Keyword3),
            4 => Some(Self::Keyword4),
            5 => Some(Self::Keyword5),
            6 => Some(Self::Keyword6),
            7 => Some(Self::Keyword7),
            8 => Some(Self::Keyword8),
            _ => None,
        }
    }

    /// Error key for `severity` in `0..=4`.
    #[must_use]
    pub const fn error_severity(severity: u8) -> Option<Self> {
        match severity {
            0 => Some(Self::ErrorSeverity0),
            1 => Some(Self::ErrorSeverity1),
            2 => Some(Self::ErrorSeverity2),
            3 => Some(Self::ErrorSeverity3),
            4 => Some(Self::ErrorSeverity4),
            _ => None,
        }
    }
}

fn normalize(name: &str) -> String {
    name.chars()
        .filter(|c| !matches!(c, '-' | '_' | ' '))
        .flat_map(char::to_lowercase)
        .collect()
}

impl fmt::Display for StyleKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for StyleKey {
    type Err = crate::AblStyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s)
            .ok_or_else(|| crate::AblStyleError::Config(format!("unknown style key: {s}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_canonical_name_round_trips() {
        for key in StyleKey::ALL {
            assert_eq!(StyleKey::from_name(key.name()), Some(key));
        }
    }

    #[test]
    fn hyphenated_aliases_resolve() {
        assert_eq!(StyleKey::from_name("string-delimiter-8"), Some(StyleKey::StringDelimiter8));
        assert_eq!(StyleKey::from_name("error-severity-0"), Some(StyleKey::ErrorSeverity0));
        assert_eq!(StyleKey::from_name("COMMENT"), Some(StyleKey::Comment));
    }

    #[test]
    fn numbered_constructors_stay_in_range() {
        assert_eq!(StyleKey::keyword(8), Some(StyleKey::Keyword8));
        assert_eq!(StyleKey::keyword(0), None);
        assert_eq!(StyleKey::error_severity(5), None);
    }
}
