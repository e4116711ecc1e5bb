//! Tracing initialization and subscriber setup.

use super::file_writer::FileWriter;
use crate::domain::error::Result;
use crate::Config;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initializes the global tracing subscriber.
///
/// Sets up a subscriber pipeline that:
/// 1. Filters events by `RUST_LOG`, else `config.trace_level`, else `"info"`
/// 2. Formats events with the `fmt` layer
/// 3. Writes to `config.log_file` through a rotating [`FileWriter`], or to
///    stderr when no log file is configured
///
/// Idempotent: only the first successful call installs a subscriber.
///
/// # Errors
///
/// Returns an error if the log file's parent directory cannot be created.
///
/// # Example
///
/// ```rust
/// use ablstyle::observability::init_tracing;
/// use ablstyle::Config;
///
/// let config = Config {
///     trace_level: Some("debug".to_string()),
///     ..Default::default()
/// };
///
/// init_tracing(&config)?;
/// tracing::debug!("tracing is now active");
/// # Ok::<(), ablstyle::AblStyleError>(())
/// ```
pub fn init_tracing(config: &Config) -> Result<()> {
    let level = config
        .trace_level
        .clone()
        .unwrap_or_else(|| "info".to_string());

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let registry = tracing_subscriber::registry().with(filter);

    match &config.log_file {
        Some(path) => {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            let layer = fmt::layer()
                .with_ansi(false)
                .with_writer(FileWriter::new(path.clone()));
            let _ = registry.with(layer).try_init();
        }
        None => {
            let layer = fmt::layer().with_writer(std::io::stderr);
            let _ = registry.with(layer).try_init();
        }
    }

    Ok(())
}
