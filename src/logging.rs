//! Logging setup
//!
//! Three levels are exposed on the command line: `DEBUG < INFO < ERROR`.
//! They map onto `tracing` filters; `RUST_LOG` takes precedence when set.

use std::fmt;
use std::str::FromStr;

use tracing::level_filters::LevelFilter;
use tracing_subscriber::{fmt as subscriber_fmt, EnvFilter};

use crate::error::McstatError;

/// Log verbosity selected at startup
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Debug,
    #[default]
    Info,
    Error,
}

impl LogLevel {
    /// Parse a level, falling back to `Info` for anything unrecognised.
    ///
    /// The second value is `false` when the fallback was taken so the caller
    /// can report it once logging is up.
    pub fn resolve(value: &str) -> (Self, bool) {
        match value.parse() {
            Ok(level) => (level, true),
            Err(_) => (LogLevel::Info, false),
        }
    }

    /// The equivalent `tracing` filter
    pub fn as_filter(self) -> LevelFilter {
        match self {
            LogLevel::Debug => LevelFilter::DEBUG,
            LogLevel::Info => LevelFilter::INFO,
            LogLevel::Error => LevelFilter::ERROR,
        }
    }
}

impl FromStr for LogLevel {
    type Err = McstatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "DEBUG" => Ok(LogLevel::Debug),
            "INFO" => Ok(LogLevel::Info),
            "ERROR" => Ok(LogLevel::Error),
            _ => Err(McstatError::Config(format!(
                "unknown log level `{}` (expected DEBUG, INFO or ERROR)",
                s
            ))),
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Error => "ERROR",
        };
        f.write_str(name)
    }
}

/// Install the global `tracing` subscriber, writing to stderr.
///
/// Call once from a binary's `main`.
pub fn init(level: LogLevel) {
    let filter = EnvFilter::builder()
        .with_default_directive(level.as_filter().into())
        .from_env_lossy();

    subscriber_fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(true)
        .with_writer(std::io::stderr)
        .init();
}
