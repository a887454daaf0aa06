//! Structured logging.
//!
//! # Responsibilities
//! - Initialize the process-wide `tracing` subscriber
//! - Write to stdout and optionally append to a log file
//!
//! # Design Decisions
//! - Filter directives come from `RUST_LOG`; unparsable or missing values mean `info`
//! - Setup errors are returned, the caller decides whether to abort

use std::fs::OpenOptions;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use thiserror::Error;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::{fmt, prelude::*, EnvFilter, Registry};

/// Errors raised while installing the subscriber.
#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("failed to open log file {path}: {source}")]
    LogFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("global subscriber already installed: {0}")]
    AlreadyInstalled(#[from] tracing::subscriber::SetGlobalDefaultError),
}

/// Level used when `RUST_LOG` is unset or invalid.
pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::INFO;

/// Build the filter from `RUST_LOG` style directives, e.g. `warn,agent_config=debug`.
///
/// Falls back to [`DEFAULT_LOG_LEVEL`] when the directives are missing, blank or invalid.
pub fn env_filter(directives: Option<&str>) -> EnvFilter {
    directives
        .map(str::trim)
        .filter(|d| !d.is_empty())
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_LOG_LEVEL.to_string()))
}

/// Initialize logging to stdout and, if `log_file` is given, to that file as well.
pub fn init_logging(log_file: Option<&Path>) -> Result<(), LoggingError> {
    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let filter = env_filter(rust_log.as_deref());
    let stdout_layer = fmt::layer().with_writer(io::stdout);

    let subscriber: Box<dyn tracing::Subscriber + Send + Sync> = match log_file {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .map_err(|source| LoggingError::LogFile {
                    path: path.to_path_buf(),
                    source,
                })?;
            let file_layer = fmt::layer().with_ansi(false).with_writer(Mutex::new(file));
            Box::new(
                Registry::default()
                    .with(filter)
                    .with(stdout_layer)
                    .with(file_layer),
            )
        }
        None => Box::new(Registry::default().with(filter).with(stdout_layer)),
    };

    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}
