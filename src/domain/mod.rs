//! Domain layer shared by the filter and theme modules.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases

pub mod error;

pub use error::{AblStyleError, Result};
