//! Line-oriented theme resource parser.
//!
//! # Format
//!
//! ```text
//! >Default
//! Comment	#008000	unset	2
//! Keyword1	#0000FF	unset	1
//! >Dark
//! Comment	#6A9955	#1E1E1E	2
//! ```
//!
//! - A line starting with `>` opens a theme; the rest of the line, trimmed, is
//!   its name.
//! - Any other line is split on tabs into exactly four fields: style key,
//!   foreground color, background color and the font flag integer (bit 0 bold,
//!   bit 1 italic).
//!
//! Parsing is lenient. A line with the wrong field count, a bad color or a
//! non-numeric font value is skipped and parsing continues; so are lines
//! before the first `>` marker. Keys outside [`StyleKey`](super::StyleKey) are ignored.

use super::color::{Color, ParseColorError};
use super::model::{FontFlags, Theme, ThemeEntry};
use thiserror::Error;

/// Reason a single resource line was skipped.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LineError {
    /// An entry line came before the first `>` marker.
    #[error("line appears before any theme marker")]
    OutsideTheme,
    /// The line did not split into exactly four tab-separated fields.
    #[error("expected 4 tab-separated fields, found {0}")]
    FieldCount(usize),
    /// The foreground token is not a color.
    #[error("foreground: {0}")]
    ForeColor(ParseColorError),
    /// The background token is not a color.
    #[error("background: {0}")]
    BackColor(ParseColorError),
    /// The font field is not an integer in `0..=255`.
    #[error("font type is not a small integer: {0:?}")]
    FontType(String),
}

/// A line the parser recovered from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedLine {
    /// One-based line number in the resource.
    pub line_number: usize,
    /// Why the line was dropped.
    pub reason: LineError,
}

/// Parsed themes plus the lines that were skipped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseReport {
    /// Themes in resource order.
    pub themes: Vec<Theme>,
    /// Lines dropped by the parser, in resource order.
    pub skipped: Vec<SkippedLine>,
    /// Well-formed lines naming a key outside the fixed key set.
    pub unknown_keys: Vec<String>,
}

/// Parses every theme in `resource_text`.
///
/// # Example
///
/// ```rust
/// use ablstyle::theme::{load_themes, Color, StyleKey};
///
/// let themes = load_themes(">ThemeA\ncomment\t#FF0000\t#000000\t1\n");
/// let comment = themes[0].get(StyleKey::Comment).copied().unwrap_or_default();
/// assert_eq!(comment.fore_color, Color::rgb(255, 0, 0));
/// assert!(comment.is_bold());
/// ```
#[must_use]
pub fn load_themes(resource_text: &str) -> Vec<Theme> {
    parse_themes_with_report(resource_text).themes
}

/// Parses every theme and reports the lines that were skipped.
#[must_use]
pub fn parse_themes_with_report(resource_text: &str) -> ParseReport {
    let _span = tracing::debug_span!("parse_themes", bytes = resource_text.len()).entered();

    let mut report = ParseReport::default();
    let mut current: Option<Theme> = None;

    for (idx, line) in resource_text.lines().enumerate() {
        let line_number = idx + 1;

        if let Some(name) = line.strip_prefix('>') {
            if let Some(done) = current.take() {
                report.themes.push(done);
            }
            current = Some(Theme::new(name.trim()));
            continue;
        }

        if line.trim().is_empty() {
            continue;
        }

        let outcome = match current.as_mut() {
            None => Err(LineError::OutsideTheme),
            Some(theme) => parse_entry(line).map(|(key, entry)| {
                if !theme.set_by_name(key, entry) {
                    tracing::debug!(line_number, key, "ignoring unknown style key");
                    report.unknown_keys.push(key.to_string());
                }
            }),
        };

        if let Err(reason) = outcome {
            tracing::debug!(line_number, reason = %reason, "skipping theme line");
            report.skipped.push(SkippedLine {
                line_number,
                reason,
            });
        }
    }

    if let Some(done) = current {
        report.themes.push(done);
    }

    tracing::debug!(
        theme_count = report.themes.len(),
        skipped_count = report.skipped.len(),
        "themes parsed"
    );
    report
}

/// Splits one entry line into its key name and entry.
fn parse_entry(line: &str) -> Result<(&str, ThemeEntry), LineError> {
    let fields: Vec<&str> = line.split('\t').collect();
    let &[key, fore, back, font] = fields.as_slice() else {
        return Err(LineError::FieldCount(fields.len()));
    };

    let fore_color = Color::parse_html(fore).map_err(LineError::ForeColor)?;
    let back_color = Color::parse_html(back).map_err(LineError::BackColor)?;
    let bits = font
        .trim()
        .parse::<u8>()
        .map_err(|_| LineError::FontType(font.trim().to_string()))?;

    Ok((
        key.trim(),
        ThemeEntry::new(fore_color, back_color, FontFlags::from_bits_retain(bits)),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::StyleKey;

    #[test]
    fn lines_before_first_marker_are_ignored() {
        let report = parse_themes_with_report("comment\t#FF0000\t#000000\t1\n>Only\n");
        assert_eq!(report.themes.len(), 1);
        assert!(report.themes[0].is_empty());
        assert_eq!(report.skipped[0].reason, LineError::OutsideTheme);
    }

    #[test]
    fn bad_color_skips_only_that_line() {
        let text = ">T\ncomment\t#XYZ\t#000000\t1\nnumber\t#010203\tunset\t0\n";
        let report = parse_themes_with_report(text);
        let theme = &report.themes[0];
        assert!(theme.get(StyleKey::Comment).is_none());
        assert_eq!(
            theme.get(StyleKey::Number).map(|e| e.fore_color),
            Some(Color::rgb(1, 2, 3))
        );
        assert_eq!(report.skipped.len(), 1);
        assert_eq!(report.skipped[0].line_number, 2);
    }

    #[test]
    fn css_color_names_keep_the_line() {
        let report = parse_themes_with_report(">T\ncomment\tcoral\tlightblue\t0\n");
        assert!(report.skipped.is_empty());
        let entry = report.themes[0].get(StyleKey::Comment).copied().unwrap_or_default();
        assert_eq!(entry.fore_color, Color::rgb(0xFF, 0x7F, 0x50));
        assert_eq!(entry.back_color, Color::rgb(0xAD, 0xD8, 0xE6));
    }

    #[test]
    fn non_numeric_font_skips_the_line() {
        let report = parse_themes_with_report(">T\ncomment\tred\tblack\tbold\n");
        assert_eq!(
            report.skipped[0].reason,
            LineError::FontType("bold".to_string())
        );
    }

    #[test]
    fn unknown_keys_are_harmless() {
        let report = parse_themes_with_report(">T\nsparkles\t#FFFFFF\t#000000\t0\n");
        assert!(report.skipped.is_empty());
        assert_eq!(report.unknown_keys, vec!["sparkles".to_string()]);
        assert!(report.themes[0].is_empty());
    }

    #[test]
    fn crlf_resources_parse() {
        let themes = load_themes(">T\r\ncomment\t#FF0000\t#000000\t3\r\n");
        let entry = themes[0].get(StyleKey::Comment).copied().unwrap_or_default();
        assert!(entry.is_bold() && entry.is_italic());
    }
}
