use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use error_common::codes;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::services::auth_initiation::AuthInitiationError;

/// Standard API error response structure
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ApiErrorResponse {
    /// Human-readable, non-sensitive error description
    #[schema(example = "Failed to initiate Twitter authentication")]
    pub detail: String,
    /// Unique error ID for correlating with server logs
    pub error_id: String,
    /// Error type
    #[schema(example = "auth_initiation_error")]
    pub error_type: String,
    /// Stable error code
    #[schema(example = "OAUTH_2101")]
    pub error_code: String,
    /// Timestamp when error occurred
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Standard API success response wrapper
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuccessResponse<T> {
    pub message: String,
    pub data: T,
}

/// Main API error enum
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Resource not found: {resource_type}")]
    NotFound { resource_type: String },

    #[error(transparent)]
    AuthInitiation(#[from] AuthInitiationError),
}

impl ApiError {
    /// Create a not found error
    pub fn not_found(resource_type: impl Into<String>) -> Self {
        Self::NotFound {
            resource_type: resource_type.into(),
        }
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::NotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::AuthInitiation(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the error type string
    pub fn error_type(&self) -> &'static str {
        match self {
            ApiError::NotFound { .. } => "not_found",
            ApiError::AuthInitiation(_) => "auth_initiation_error",
        }
    }

    /// Get the stable error code
    pub fn error_code(&self) -> &'static str {
        match self {
            ApiError::NotFound { .. } => codes::routing::NOT_FOUND,
            ApiError::AuthInitiation(_) => codes::oauth::STATE_BUILD_FAILED,
        }
    }

    fn log(&self, error_id: &str) {
        let status = self.status_code().as_u16();

        match self {
            ApiError::AuthInitiation(err) => {
                logger_redacted::redacted_error!(
                    error_id = error_id,
                    error_type = self.error_type(),
                    status_code = status,
                    provider = err.provider.as_str();
                    "{} auth error: {}",
                    err.provider.display_name(),
                    err.source
                );
            }
            ApiError::NotFound { .. } => {
                warn!(
                    error_id = %error_id,
                    error_type = %self.error_type(),
                    status_code = status,
                    error = %self,
                    "API request rejected"
                );
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let error_id = Uuid::new_v4().to_string();
        let status_code = self.status_code();

        self.log(&error_id);

        let error_response = ApiErrorResponse {
            // the auth variant displays only the fixed message, never its source
            detail: self.to_string(),
            error_id,
            error_type: self.error_type().to_string(),
            error_code: self.error_code().to_string(),
            timestamp: chrono::Utc::now(),
        };

        (status_code, Json(error_response)).into_response()
    }
}

/// Helper function to create successful API responses
pub fn api_success<T>(message: impl Into<String>, data: T) -> SuccessResponse<T> {
    SuccessResponse {
        message: message.into(),
        data,
    }
}

/// Type alias for API results
pub type ApiResult<T> = Result<T, ApiError>;
