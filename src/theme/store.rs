//! Theme resolution store.
//!
//! [`ThemeStore`] owns a theme resource and the index of the active theme.
//! The resource is parsed on first access and cached until [`reset`] is
//! called. Access goes through an internal `Mutex`, so concurrent first
//! accesses parse the resource once.
//!
//! # Resolution order
//!
//! [`ThemeStore::resolve_inherited`] applies the sentinel chain: the entry's
//! own colors, then the active theme's [`StyleKey::Default`] entry, then the
//! host colors supplied by the caller. Unset colors never override.
//!
//! [`reset`]: ThemeStore::reset

use super::key::StyleKey;
use super::model::{Theme, ThemeEntry};
use super::parse::load_themes;
use crate::domain::error::{AblStyleError, Result};
use std::path::Path;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Theme resource compiled into the binary.
pub const BUILTIN_THEMES: &str = include_str!("../../themes/syntax-themes.txt");

/// Name of the theme used when a resource defines none.
const FALLBACK_THEME_NAME: &str = "Default";

struct StoreState {
    source: String,
    /// Parsed themes; `None` until first access or after a reset.
    themes: Option<Vec<Arc<Theme>>>,
    /// Raw selected index. May be out of range until the next access heals it.
    active_index: i64,
}

/// Lazily parsed, process-scoped theme collection with one active theme.
///
/// # Example
///
/// ```rust
/// use ablstyle::theme::{StyleKey, ThemeEntry, ThemeStore};
///
/// let store = ThemeStore::new(">Light\ncomment\t#008000\tunset\t2\n");
/// let comment = store.resolve(StyleKey::Comment, ThemeEntry::default());
/// assert!(comment.is_italic());
/// ```
pub struct ThemeStore {
    state: Mutex<StoreState>,
}

impl ThemeStore {
    /// Creates a store over `source`. Nothing is parsed yet.
    #[must_use]
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            state: Mutex::new(StoreState {
                source: source.into(),
                themes: None,
                active_index: 0,
            }),
        }
    }

    /// Creates a store over the built-in theme resource.
    #[must_use]
    pub fn builtin() -> Self {
        Self::new(BUILTIN_THEMES)
    }

    /// Creates a store over the contents of a theme file.
    ///
    /// # Errors
    ///
    /// Returns [`AblStyleError::Io`] if the file cannot be read.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        tracing::debug!(path = ?path, "reading theme resource");
        let source = std::fs::read_to_string(path)?;
        Ok(Self::new(source))
    }

    fn lock(&self) -> MutexGuard<'_, StoreState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Parses the source if needed and returns the cached themes.
    fn parsed(state: &mut StoreState) -> &[Arc<Theme>] {
        if state.themes.is_none() {
            let mut themes: Vec<Arc<Theme>> =
                load_themes(&state.source).into_iter().map(Arc::new).collect();
            if themes.is_empty() {
                tracing::warn!("theme resource defines no theme, using an empty default");
                themes.push(Arc::new(Theme::new(FALLBACK_THEME_NAME)));
            }
            tracing::info!(theme_count = themes.len(), "theme resource loaded");
            state.themes = Some(themes);
        }
        state.themes.as_deref().unwrap_or_default()
    }

    /// Clamps the stored index into range and returns it.
    fn healed_index(state: &mut StoreState) -> usize {
        let count = Self::parsed(state).len();
        match usize::try_from(state.active_index) {
            Ok(index) if index < count => index,
            _ => {
                tracing::warn!(
                    active_index = state.active_index,
                    theme_count = count,
                    "active theme index out of range, resetting to 0"
                );
                state.active_index = 0;
                0
            }
        }
    }

    /// All themes, in resource order.
    #[must_use]
    pub fn themes(&self) -> Vec<Arc<Theme>> {
        let mut state = self.lock();
        Self::parsed(&mut state).to_vec()
    }

    /// Theme names, in resource order.
    #[must_use]
    pub fn theme_names(&self) -> Vec<String> {
        let mut state = self.lock();
        Self::parsed(&mut state)
            .iter()
            .map(|theme| theme.name.clone())
            .collect()
    }

    /// Number of themes (at least one).
    #[must_use]
    pub fn theme_count(&self) -> usize {
        let mut state = self.lock();
        Self::parsed(&mut state).len()
    }

    /// The active theme. An out-of-range index is reset to `0` first.
    #[must_use]
    pub fn active_theme(&self) -> Arc<Theme> {
        let mut state = self.lock();
        let index = Self::healed_index(&mut state);
        Arc::clone(&Self::parsed(&mut state)[index])
    }

    /// The stored active index, as last set or healed.
    #[must_use]
    pub fn active_index(&self) -> i64 {
        self.lock().active_index
    }

    /// Stores a new active index. Out-of-range values are healed on access.
    pub fn set_active_index(&self, index: i64) {
        self.lock().active_index = index;
    }

    /// Activates the first theme whose name matches, ignoring case.
    ///
    /// Returns `false` and leaves the selection alone when none matches.
    pub fn select_by_name(&self, name: &str) -> bool {
        let mut state = self.lock();
        let position = Self::parsed(&mut state)
            .iter()
            .position(|theme| theme.name.eq_ignore_ascii_case(name.trim()));
        match position.and_then(|p| i64::try_from(p).ok()) {
            Some(index) => {
                state.active_index = index;
                true
            }
            None => false,
        }
    }

    /// Activates a theme by name, or by index when `selector` is an integer.
    ///
    /// # Errors
    ///
    /// Returns [`AblStyleError::Theme`] when `selector` is neither an integer
    /// nor a known theme name.
    pub fn select(&self, selector: &str) -> Result<()> {
        if let Ok(index) = selector.trim().parse::<i64>() {
            self.set_active_index(index);
            return Ok(());
        }
        if self.select_by_name(selector) {
            Ok(())
        } else {
            Err(AblStyleError::Theme(format!("no theme named {selector:?}")))
        }
    }

    /// Entry for `key` in the active theme, or `default` when unset.
    #[must_use]
    pub fn resolve(&self, key: StyleKey, default: ThemeEntry) -> ThemeEntry {
        self.active_theme().get(key).copied().unwrap_or(default)
    }

    /// Entry for `key` with unset colors filled from the theme's default
    /// style, then from `host`.
    #[must_use]
    pub fn resolve_inherited(&self, key: StyleKey, host: ThemeEntry) -> ThemeEntry {
        let theme = self.active_theme();
        let default_style = theme
            .get(StyleKey::Default)
            .copied()
            .unwrap_or(host)
            .inherit_from(&host);

        match theme.get(key) {
            Some(entry) => entry.inherit_from(&default_style),
            None => default_style,
        }
    }

    /// Drops the parsed themes; the next access parses the source again.
    pub fn reset(&self) {
        tracing::debug!("theme cache reset");
        self.lock().themes = None;
    }

    /// Swaps in a new resource and resets the cache.
    pub fn replace_source(&self, source: impl Into<String>) {
        let mut state = self.lock();
        state.source = source.into();
        state.themes = None;
        tracing::debug!(bytes = state.source.len(), "theme resource replaced");
    }
}

impl Default for ThemeStore {
    fn default() -> Self {
        Self::builtin()
    }
}

impl std::fmt::Debug for ThemeStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.lock();
        f.debug_struct("ThemeStore")
            .field("source_bytes", &state.source.len())
            .field("parsed", &state.themes.as_ref().map(Vec::len))
            .field("active_index", &state.active_index)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::{Color, FontFlags};

    const TWO_THEMES: &str =
        ">ThemeA\ncomment\t#FF0000\t#000000\t1\n>ThemeB\ncomment\t#00FF00\t#FFFFFF\t0\n";

    #[test]
    fn builtin_resource_has_themes() {
        let store = ThemeStore::builtin();
        assert!(store.theme_count() >= 2);
        assert_eq!(store.active_theme().name, "Default");
    }

    #[test]
    fn empty_resource_falls_back_to_default_theme() {
        let store = ThemeStore::new("");
        assert_eq!(store.theme_names(), vec!["Default".to_string()]);
        let fallback = ThemeEntry::new(Color::rgb(9, 9, 9), Color::Unset, FontFlags::empty());
        assert_eq!(store.resolve(StyleKey::Comment, fallback), fallback);
    }

    #[test]
    fn select_accepts_names_and_indexes() {
        let store = ThemeStore::new(TWO_THEMES);
        assert!(store.select("themeb").is_ok());
        assert_eq!(store.active_index(), 1);
        assert!(store.select("0").is_ok());
        assert_eq!(store.active_theme().name, "ThemeA");
        assert!(store.select("ThemeC").is_err());
        assert_eq!(store.active_index(), 0);
    }

    #[test]
    fn reset_reparses_replaced_source() {
        let store = ThemeStore::new(TWO_THEMES);
        assert_eq!(store.theme_count(), 2);
        store.replace_source(">Solo\n");
        assert_eq!(store.theme_names(), vec!["Solo".to_string()]);
    }
}
