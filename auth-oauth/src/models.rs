use serde::{Deserialize, Serialize};

/// Input to a [`StateBuilder`](crate::StateBuilder)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StateRequest {
    /// Effective user identifier, never empty
    pub user_id: String,
    /// Caller session token, passed through untouched
    pub token: Option<String>,
    /// Provider the redirect targets, e.g. `twitter`
    pub provider: String,
}

impl StateRequest {
    pub fn new(
        user_id: impl Into<String>,
        token: Option<String>,
        provider: impl Into<String>,
    ) -> Self {
        Self {
            user_id: user_id.into(),
            token,
            provider: provider.into(),
        }
    }
}

/// Claims carried inside a signed state token
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatePayload {
    #[serde(rename = "uid")]
    pub user_id: String,
    #[serde(rename = "tok", default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    pub provider: String,
    /// Random value so two states for the same user never collide
    pub nonce: String,
    /// Issued-at, UNIX seconds
    #[serde(rename = "iat")]
    pub issued_at: i64,
}
