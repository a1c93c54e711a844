//! Tracing setup and secret redaction for Buzz Connect
//!
//! The OAuth initiation flow handles user identifiers, session tokens and
//! signed state values. None of them should end up in a log file, so every
//! message written on an error path goes through [`scrub`] first.
//!
//! # Redacted Data Types
//!
//! - **Bearer tokens**: `Bearer abc123` → `Bearer [REDACTED]`
//! - **Query secrets**: `token=`, `state=`, `access_token=`, `refresh_token=`,
//!   `client_secret=`, `oauth_verifier=` values
//! - **JWTs**: any `eyJ...` three-segment token
//!
//! # Example
//!
//! ```rust
//! use logger_redacted::{redact, LoggerConfig};
//!
//! assert_eq!(
//!     redact("callback failed for /auth?token=tok-1"),
//!     "callback failed for /auth?token=[REDACTED]"
//! );
//!
//! let config = LoggerConfig::from_env(false);
//! assert_eq!(config.log_level, "info");
//! ```

pub mod config;
pub mod formatter;
pub mod macros;
pub mod redactor;

pub use config::*;
pub use formatter::DevFormatter;
pub use redactor::*;

use thiserror::Error;
use tracing_subscriber::{
    fmt::{self, time::ChronoUtc},
    layer::SubscriberExt,
    util::{SubscriberInitExt, TryInitError},
    EnvFilter,
};

#[derive(Error, Debug)]
pub enum LoggerError {
    #[error("Invalid log filter: {0}")]
    InvalidFilter(#[from] tracing_subscriber::filter::ParseError),

    #[error("Failed to install global subscriber: {0}")]
    Init(#[from] TryInitError),
}

/// Install the global tracing subscriber.
///
/// `RUST_LOG` takes precedence over the directives derived from `config`.
///
/// # Errors
///
/// Fails if the filter directives do not parse or a global subscriber is
/// already installed.
pub fn init_tracing(config: &LoggerConfig) -> Result<(), LoggerError> {
    apply_color_policy(config.format);

    let env_filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(config.default_directives())?,
    };

    match config.format {
        LogFormat::Pretty => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt::layer().with_ansi(true).event_format(DevFormatter))
                .try_init()?;
        }
        LogFormat::Json => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(
                    fmt::layer()
                        .with_target(false)
                        .with_timer(ChronoUtc::rfc_3339())
                        .with_ansi(false)
                        .json(),
                )
                .try_init()?;
        }
    }

    Ok(())
}

/// Turn `colored` output on or off to match `format`.
///
/// JSON records must not carry ANSI escapes, so every `Colorize` call in the
/// process renders plain text once this runs with [`LogFormat::Json`].
pub fn apply_color_policy(format: LogFormat) {
    match format {
        LogFormat::Pretty => colored::control::unset_override(),
        LogFormat::Json => colored::control::set_override(false),
    }
}
