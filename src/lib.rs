//! ablstyle: list filtering and syntax theme resolution for OpenEdge ABL tooling.
//!
//! The crate provides the editor-independent core of an ABL editor plugin:
//! - A filter/rank engine that matches free-text queries against list items,
//!   reports matched character ranges, and orders results by match tightness
//! - A ranked list component with selection and windowing, rendering through a
//!   caller-supplied callback
//! - A theme store that lazily parses a line-oriented theme resource and
//!   resolves colors and font flags per style key
//! - A code outline model whose nodes plug into the filter engine
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Command line front end (main.rs)                   │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ Filter        │   │ Theme         │   │ Outline       │
//! │ (filter/)     │   │ (theme/)      │   │ (outline/)    │
//! │ - Matching    │   │ - Parsing     │   │ - Node model  │
//! │ - Ranking     │   │ - Store       │   │ - Dump parser │
//! │ - List        │   │ - Resolution  │   │               │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Domain (domain/) + Observability (observability/)  │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`filter`]: Filter/rank engine and ranked list
//! - [`theme`]: Theme parsing, storage and resolution
//! - [`outline`]: Code explorer node model
//! - [`domain`]: Error types
//! - [`observability`]: Tracing subscriber setup
//!
//! # Configuration
//!
//! Configuration comes from `key=value` pairs (see [`Config::from_map`]) or a
//! TOML file:
//!
//! ```toml
//! theme_file = "/home/me/.config/ablstyle/themes.txt"
//! active_theme = "Dark"
//! match_mode = "fuzzy"
//! trace_level = "debug"
//! log_file = "/tmp/ablstyle.log"
//! ```
//!
//! # Example
//!
//! ```rust
//! use ablstyle::{initialize, Config};
//! use ablstyle::filter::FilterEngine;
//! use ablstyle::theme::{StyleKey, ThemeEntry};
//!
//! let store = initialize(&Config::default())?;
//! let highlight = store.resolve(StyleKey::MatchHighlight, ThemeEntry::default());
//!
//! let items = vec!["FIND FIRST customer".to_string(), "DEFINE QUERY".to_string()];
//! let ranked = FilterEngine::default().apply("find", &items);
//! assert_eq!(ranked.len(), 1);
//! # let _ = highlight;
//! # Ok::<(), ablstyle::AblStyleError>(())
//! ```

#![allow(clippy::multiple_crate_versions)]

pub mod domain;
pub mod filter;
pub mod observability;
pub mod outline;
pub mod theme;

pub use domain::{AblStyleError, Result};
pub use filter::{FilterEngine, FilterableItem, MatchMode, RankedItem, RankedList};
pub use outline::{OutlineItem, OutlineKind};
pub use theme::{Theme, ThemeEntry, ThemeStore};

use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Runtime configuration.
///
/// Every field is optional; unset fields use the built-in theme resource, the
/// first theme, substring matching and `info` logging to stderr.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Path to a theme resource. Built-in themes are used when unset.
    pub theme_file: Option<PathBuf>,

    /// Theme to activate, by name or by index.
    #[serde(alias = "theme")]
    pub active_theme: Option<String>,

    /// Matching primitive for filtering.
    #[serde(alias = "mode")]
    pub match_mode: Option<MatchMode>,

    /// Log level filter.
    ///
    /// Options: `trace`, `debug`, `info`, `warn`, `error`. Default: `"info"`
    pub trace_level: Option<String>,

    /// Log file; stderr when unset.
    pub log_file: Option<PathBuf>,
}

impl Config {
    /// Parses configuration from a string map.
    ///
    /// Parsing is lenient: an unrecognized `mode` falls back to the default
    /// with a debug log, and empty values count as unset.
    ///
    /// # Keys
    ///
    /// - `theme_file`: Path → `Option<PathBuf>`
    /// - `theme`: Name or index → `Option<String>`
    /// - `mode`: `substring` or `fuzzy` → `Option<MatchMode>`
    /// - `trace_level`: String → `Option<String>`
    /// - `log_file`: Path → `Option<PathBuf>`
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use ablstyle::{Config, MatchMode};
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("theme".to_string(), "Dark".to_string());
    /// map.insert("mode".to_string(), "fuzzy".to_string());
    ///
    /// let config = Config::from_map(&map);
    /// assert_eq!(config.active_theme.as_deref(), Some("Dark"));
    /// assert_eq!(config.match_mode, Some(MatchMode::Fuzzy));
    /// ```
    #[must_use]
    pub fn from_map(map: &BTreeMap<String, String>) -> Self {
        let value = |key: &str| {
            map.get(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let match_mode = value("mode").and_then(|mode| {
            mode.parse::<MatchMode>()
                .map_err(|e| tracing::debug!(error = %e, "ignoring match mode"))
                .ok()
        });

        Self {
            theme_file: value("theme_file").map(PathBuf::from),
            active_theme: value("theme"),
            match_mode,
            trace_level: value("trace_level"),
            log_file: value("log_file").map(PathBuf::from),
        }
    }

    /// Parses configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`AblStyleError::Toml`] on syntax errors, type mismatches or
    /// unknown keys.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Reads and parses a TOML configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`AblStyleError::Io`] if the file cannot be read and
    /// [`AblStyleError::Toml`] if it cannot be parsed.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        tracing::debug!(path = ?path, "reading configuration");
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    /// Returns `self` with every field set in `overrides` replaced.
    #[must_use]
    pub fn merge(self, overrides: Self) -> Self {
        Self {
            theme_file: overrides.theme_file.or(self.theme_file),
            active_theme: overrides.active_theme.or(self.active_theme),
            match_mode: overrides.match_mode.or(self.match_mode),
            trace_level: overrides.trace_level.or(self.trace_level),
            log_file: overrides.log_file.or(self.log_file),
        }
    }

    /// Filter engine for the configured match mode.
    #[must_use]
    pub fn engine(&self) -> FilterEngine {
        FilterEngine::new(self.match_mode.unwrap_or_default())
    }
}

/// Builds the theme store described by `config`.
///
/// Loads the theme file, or the built-in resource when none is configured,
/// then activates `active_theme`. An unknown theme name is logged and the
/// first theme stays active.
///
/// # Errors
///
/// Returns [`AblStyleError::Io`] if the theme file cannot be read.
pub fn initialize(config: &Config) -> Result<ThemeStore> {
    tracing::debug!("initializing theme store");

    let store = match &config.theme_file {
        Some(path) => ThemeStore::from_file(path)?,
        None => ThemeStore::builtin(),
    };

    if let Some(selector) = &config.active_theme {
        if let Err(e) = store.select(selector) {
            tracing::warn!(theme = %selector, error = %e, "failed to select theme, using first");
        }
    }

    Ok(store)
}
