use thiserror::Error;

use crate::sanitization::sanitize_for_logging;

/// Simplified error enum for startup and infrastructure failures
#[derive(Error, Debug)]
pub enum BuzzConnectError {
    /// Network communication errors
    #[error("Network error: {0}")]
    NetworkError(String),

    /// Server runtime errors
    #[error("Server error: {0}")]
    ServerError(String),

    /// Internal system errors
    #[error("Internal error: {0}")]
    InternalError(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl BuzzConnectError {
    /// Stable error code for this error
    pub fn code(&self) -> &'static str {
        use crate::codes;

        match self {
            Self::NetworkError(_) => codes::server::BIND_FAILED,
            Self::ServerError(_) => codes::server::SERVE_FAILED,
            Self::ConfigError(_) => codes::config::INVALID_SETTING,
            Self::InternalError(_) => codes::internal::UNEXPECTED,
        }
    }
}

/// Result type alias for Buzz Connect operations
pub type Result<T> = std::result::Result<T, BuzzConnectError>;

/// Log an error with its code and a sanitized message
pub fn log_error(context: &str, error: &BuzzConnectError) {
    tracing::error!(
        context = context,
        error_code = error.code(),
        error = %sanitize_for_logging(&error.to_string()),
        "Buzz Connect error occurred"
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(
            BuzzConnectError::ConfigError("bad".into()).code(),
            "CONFIG_1001"
        );
        assert_eq!(
            BuzzConnectError::NetworkError("down".into()).code(),
            "SERVER_5001"
        );
        assert_eq!(
            BuzzConnectError::InternalError("boom".into()).code(),
            "INTERNAL_9001"
        );
    }
}
