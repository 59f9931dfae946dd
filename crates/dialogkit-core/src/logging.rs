#![forbid(unsafe_code)]

//! JSON log output for production hosts.
//!
//! Installs a global `tracing` subscriber that writes one JSON object per
//! event. The filter uses `EnvFilter` directive syntax
//! (`"dialogkit_widgets=debug,info"`).

use core::fmt;

use tracing_subscriber::EnvFilter;

/// Environment variable consulted by [`init_json_from_env`].
pub const LOG_ENV: &str = "DIALOGKIT_LOG";

/// Errors from logging setup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoggingInitError {
    /// The filter directive did not parse.
    InvalidFilter(String),
    /// A global subscriber was already installed.
    AlreadyInstalled(String),
}

impl fmt::Display for LoggingInitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidFilter(msg) => write!(f, "invalid log filter: {msg}"),
            Self::AlreadyInstalled(msg) => write!(f, "subscriber already installed: {msg}"),
        }
    }
}

impl std::error::Error for LoggingInitError {}

/// Install a JSON subscriber with the given filter directives.
pub fn init_json(filter: &str) -> Result<(), LoggingInitError> {
    let filter =
        EnvFilter::try_new(filter).map_err(|e| LoggingInitError::InvalidFilter(e.to_string()))?;
    install(filter)
}

/// Install a JSON subscriber filtered by [`LOG_ENV`], defaulting to `info`.
pub fn init_json_from_env() -> Result<(), LoggingInitError> {
    let filter = match EnvFilter::try_from_env(LOG_ENV) {
        Ok(filter) => filter,
        Err(_) => EnvFilter::new("info"),
    };
    install(filter)
}

fn install(filter: EnvFilter) -> Result<(), LoggingInitError> {
    tracing_subscriber::fmt()
        .json()
        .with_env_filter(filter)
        .try_init()
        .map_err(|e| LoggingInitError::AlreadyInstalled(e.to_string()))?;
    tracing::debug!("json logging installed");
    Ok(())
}
