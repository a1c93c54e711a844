// Logger configuration
use serde::{Deserialize, Serialize};
use std::env;

/// Output format for log records
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Colored, human-readable lines for local development
    Pretty,
    /// One JSON object per line for log shippers
    Json,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggerConfig {
    pub log_level: String,
    pub format: LogFormat,
    /// Crates whose level follows `log_level`
    pub crates: Vec<String>,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            format: LogFormat::Json,
            crates: vec![
                "buzz_connect_server".to_string(),
                "auth_oauth".to_string(),
            ],
        }
    }
}

impl LoggerConfig {
    /// Pick level and format from the process environment.
    ///
    /// `BUZZ_ENV` defaults to `development`; pretty output is used only in
    /// development, on a terminal, and when `NO_COLOR` is unset.
    pub fn from_env(verbose: bool) -> Self {
        let is_development = env::var("BUZZ_ENV")
            .unwrap_or_else(|_| "development".to_string())
            == "development";
        let use_colors = env::var("NO_COLOR").is_err() && atty::is(atty::Stream::Stdout);

        Self {
            log_level: if verbose { "debug" } else { "info" }.to_string(),
            format: if is_development && use_colors {
                LogFormat::Pretty
            } else {
                LogFormat::Json
            },
            ..Self::default()
        }
    }

    /// Default `EnvFilter` directives when `RUST_LOG` is not set
    pub fn default_directives(&self) -> String {
        let mut directives: Vec<String> = self
            .crates
            .iter()
            .map(|krate| format!("{krate}={}", self.log_level))
            .collect();
        directives.push("tower_http=info".to_string());
        directives.push("hyper=info".to_string());
        directives.join(",")
    }
}
