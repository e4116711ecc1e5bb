//! Theme resource writer.
//!
//! Emits the same line format the parser reads, so a written resource parses
//! back to equal themes. Entries are written in [`StyleKey::ALL`] order.

use super::key::StyleKey;
use super::model::Theme;
use std::fmt::Write as _;

/// Serializes `themes` into the line-oriented resource format.
///
/// # Example
///
/// ```rust
/// use ablstyle::theme::{load_themes, write_themes};
///
/// let themes = load_themes(">Mono\ncomment\t#808080\tunset\t2\n");
/// let text = write_themes(&themes);
/// assert_eq!(text, ">Mono\nComment\t#808080\tunset\t2\n");
/// assert_eq!(load_themes(&text), themes);
/// ```
#[must_use]
pub fn write_themes<I, T>(themes: I) -> String
where
    I: IntoIterator<Item = T>,
    T: AsRef<Theme>,
{
    let mut out = String::new();
    for theme in themes {
        let theme = theme.as_ref();
        let _ = writeln!(out, ">{}", theme.name);
        for key in StyleKey::ALL {
            if let Some(entry) = theme.get(key) {
                let _ = writeln!(
                    out,
                    "{}\t{}\t{}\t{}",
                    key.name(),
                    entry.fore_color,
                    entry.back_color,
                    entry.font.bits()
                );
            }
        }
    }
    out
}
