//! Error types for the ablstyle crate.
//!
//! This module defines the centralized error type [`AblStyleError`] and a type alias
//! [`Result`] for convenient error handling throughout the crate. All errors are
//! implemented using the `thiserror` crate for automatic `Error` trait implementation.
//!
//! Malformed lines inside a theme resource never surface here: the parser
//! recovers from them locally (see [`crate::theme::parse`]).

use thiserror::Error;

/// The main error type for ablstyle operations.
///
/// Consolidates the failures that escape to a caller: reading theme or
/// configuration files, decoding configuration, and rejecting unknown names
/// supplied by the user.
///
/// # Examples
///
/// ```
/// use ablstyle::AblStyleError;
///
/// fn validate_mode(mode: &str) -> Result<(), AblStyleError> {
///     Err(AblStyleError::Config(format!("unknown match mode: {mode}")))
/// }
///
/// assert!(validate_mode("regex").is_err());
/// ```
#[derive(Debug, Error)]
pub enum AblStyleError {
    /// Filesystem or I/O operation failed.
    ///
    /// Wraps errors from standard library I/O operations, typically when a theme
    /// resource, configuration file or log file cannot be read or written.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Theme lookup or selection failed.
    ///
    /// Occurs when a caller asks for a theme or style key that does not exist.
    #[error("Theme error: {0}")]
    Theme(String),

    /// Configuration is invalid.
    ///
    /// Occurs when configuration values are malformed in a way that cannot be
    /// recovered by falling back to a default.
    #[error("Configuration error: {0}")]
    Config(String),

    /// TOML configuration could not be decoded.
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// JSON output could not be encoded.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized `Result` type for ablstyle operations.
///
/// This is a type alias for `std::result::Result<T, AblStyleError>`.
pub type Result<T> = std::result::Result<T, AblStyleError>;
