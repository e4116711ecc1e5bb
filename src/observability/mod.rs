//! Structured logging setup.
//!
//! All modules log through `tracing` macros: debug spans around filtering and
//! parsing, debug events for skipped resource lines, and warnings when state
//! is self-healed. This module installs the subscriber that turns those into
//! output.
//!
//! # Configuration
//!
//! The log level is controlled via:
//! 1. `RUST_LOG` environment variable (highest priority)
//! 2. `trace_level` configuration option
//! 3. Default: `"info"`
//!
//! With `log_file` set, output goes to a size-rotated file (10 MB, 3 backups);
//! otherwise to stderr.
//!
//! # Modules
//!
//! - [`init`]: Subscriber setup
//! - [`file_writer`]: Rotating file writer used as the fmt layer's writer

pub mod file_writer;
pub mod init;

pub use file_writer::FileWriter;
pub use init::init_tracing;
