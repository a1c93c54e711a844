use thiserror::Error;

#[derive(Error, Debug)]
pub enum OAuthError {
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Invalid state token")]
    InvalidState,

    #[error("State token expired")]
    StateExpired,

    #[error("Invalid authorization URL: {0}")]
    InvalidAuthorizationUrl(String),

    #[error("OAuth configuration error: {0}")]
    Configuration(String),

    #[error("External provider error: {0}")]
    ExternalProviderError(String),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, OAuthError>;
