//! Theme records: named collections of style entries.

use super::color::Color;
use super::key::StyleKey;
use bitflags::bitflags;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

bitflags! {
    /// Font weight flags of a style entry.
    ///
    /// Unknown bits read from a resource are retained so that writing the
    /// theme back preserves them.
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
    #[serde(transparent)]
    pub struct FontFlags: u8 {
        const BOLD = 0b01;
        const ITALIC = 0b10;
    }
}

/// Colors and font flags for one style key.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ThemeEntry {
    /// Foreground color; [`Color::Unset`] inherits.
    pub fore_color: Color,
    /// Background color; [`Color::Unset`] inherits.
    pub back_color: Color,
    /// Bold/italic flags.
    pub font: FontFlags,
}

impl ThemeEntry {
    /// Creates an entry.
    #[must_use]
    pub const fn new(fore_color: Color, back_color: Color, font: FontFlags) -> Self {
        Self {
            fore_color,
            back_color,
            font,
        }
    }

    #[must_use]
    pub fn is_bold(&self) -> bool {
        self.font.contains(FontFlags::BOLD)
    }

    #[must_use]
    pub fn is_italic(&self) -> bool {
        self.font.contains(FontFlags::ITALIC)
    }

    /// Fills unset colors from `fallback`. Font flags are kept from `self`.
    ///
    /// A set color in `self` is never replaced, and an unset color in
    /// `fallback` never replaces anything.
    #[must_use]
    pub const fn inherit_from(self, fallback: &Self) -> Self {
        Self {
            fore_color: self.fore_color.or(fallback.fore_color),
            back_color: self.back_color.or(fallback.back_color),
            font: self.font,
        }
    }
}

/// A named theme mapping style keys to entries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Theme {
    /// Name taken from the `>` marker line.
    pub name: String,
    entries: BTreeMap<StyleKey, ThemeEntry>,
}

impl Theme {
    /// Creates an empty theme.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            entries: BTreeMap::new(),
        }
    }

    /// Entry for `key`, if the theme sets one.
    #[must_use]
    pub fn get(&self, key: StyleKey) -> Option<&ThemeEntry> {
        self.entries.get(&key)
    }

    /// Sets the entry for `key`, replacing any previous one.
    pub fn set(&mut self, key: StyleKey, entry: ThemeEntry) {
        self.entries.insert(key, entry);
    }

    /// Sets the entry for a key given by name.
    ///
    /// Returns `false` and changes nothing when the name is not a known key.
    pub fn set_by_name(&mut self, name: &str, entry: ThemeEntry) -> bool {
        StyleKey::from_name(name).map_or(false, |key| {
            self.set(key, entry);
            true
        })
    }

    /// Entries in key order.
    pub fn entries(&self) -> impl Iterator<Item = (StyleKey, &ThemeEntry)> {
        self.entries.iter().map(|(key, entry)| (*key, entry))
    }

    /// Number of keys the theme sets.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl AsRef<Self> for Theme {
    fn as_ref(&self) -> &Self {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_key_assignment_is_a_no_op() {
        let mut theme = Theme::new("Plain");
        assert!(!theme.set_by_name("sparkles", ThemeEntry::default()));
        assert!(theme.is_empty());
        assert!(theme.set_by_name("comment", ThemeEntry::default()));
        assert_eq!(theme.len(), 1);
    }

    #[test]
    fn inheritance_never_lets_unset_win() {
        let white = Color::rgb(255, 255, 255);
        let black = Color::rgb(0, 0, 0);
        let entry = ThemeEntry::new(Color::Unset, black, FontFlags::ITALIC);
        let fallback = ThemeEntry::new(white, Color::Unset, FontFlags::BOLD);

        let resolved = entry.inherit_from(&fallback);
        assert_eq!(resolved.fore_color, white);
        assert_eq!(resolved.back_color, black);
        assert!(resolved.is_italic());
        assert!(!resolved.is_bold());
    }
}
