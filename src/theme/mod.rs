//! Syntax theme resolution.
//!
//! Themes are loaded from a plain-text resource (see [`parse`] for the format)
//! and expose one [`ThemeEntry`] per [`StyleKey`]: a foreground color, a
//! background color and font flags. Colors may be [`Color::Unset`], meaning the
//! default style or the host color applies.
//!
//! # Built-in Themes
//!
//! - `Default`: Light theme close to the editor defaults
//! - `Dark`: Dark background with muted keyword colors
//! - `Solarized`: Solarized light palette
//!
//! # Modules
//!
//! - [`color`]: HTML color tokens and the unset sentinel
//! - [`key`]: The fixed style key set
//! - [`model`]: Theme and entry records
//! - [`parse`]: Lenient resource parser
//! - [`store`]: Lazy, resettable store with an active theme
//! - [`writer`]: Resource serializer

pub mod color;
pub mod key;
pub mod model;
pub mod parse;
pub mod store;
pub mod writer;

pub use color::{Color, ParseColorError};
pub use key::StyleKey;
pub use model::{FontFlags, Theme, ThemeEntry};
pub use parse::{load_themes, parse_themes_with_report, LineError, ParseReport, SkippedLine};
pub use store::{ThemeStore, BUILTIN_THEMES};
pub use writer::write_themes;
