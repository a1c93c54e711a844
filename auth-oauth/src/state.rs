//! OAuth `state` parameter construction
//!
//! The state parameter correlates a provider callback with the request that
//! started the flow. [`SignedStateBuilder`] encodes the caller identity into
//! the state itself and signs it, so nothing has to be stored server-side:
//!
//! ```text
//! base64url(json(StatePayload)) "." base64url(HMAC-SHA256(secret, json))
//! ```
//!
//! Both segments use the URL-safe alphabet without padding, so the state can
//! be placed into a query string as-is.

use crate::error::{OAuthError, Result};
use crate::models::{StatePayload, StateRequest};
use async_trait::async_trait;
use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};
use chrono::Utc;
use ring::hmac;
use secrecy::{ExposeSecret, SecretString};
use std::fmt;
use std::time::Duration;
use uuid::Uuid;

/// Default lifetime of a state token
pub const DEFAULT_STATE_TTL: Duration = Duration::from_secs(600);

/// Tolerated clock skew for tokens issued "in the future"
const MAX_CLOCK_SKEW_SECS: i64 = 60;

/// Produces the opaque `state` value for an authorization redirect
#[async_trait]
pub trait StateBuilder: Send + Sync {
    /// Build a state token for `request`.
    ///
    /// # Errors
    ///
    /// Implementations fail when the request is unusable or their backing
    /// resources (keys, stores) are unavailable.
    async fn build_state(&self, request: &StateRequest) -> Result<String>;
}

/// Stateless, HMAC-SHA256 signed state tokens
pub struct SignedStateBuilder {
    key: hmac::Key,
    state_ttl: Duration,
}

impl SignedStateBuilder {
    /// Create a builder signing with `secret`.
    ///
    /// # Errors
    ///
    /// Returns [`OAuthError::Configuration`] when the secret is empty.
    pub fn new(secret: &SecretString, state_ttl: Duration) -> Result<Self> {
        let secret = secret.expose_secret();
        if secret.is_empty() {
            return Err(OAuthError::Configuration(
                "state signing secret must not be empty".to_string(),
            ));
        }

        Ok(Self {
            key: hmac::Key::new(hmac::HMAC_SHA256, secret.as_bytes()),
            state_ttl,
        })
    }

    pub fn state_ttl(&self) -> Duration {
        self.state_ttl
    }

    /// Sign and encode a payload
    ///
    /// # Errors
    ///
    /// Fails only if the payload cannot be serialized.
    pub fn encode(&self, payload: &StatePayload) -> Result<String> {
        let json = serde_json::to_vec(payload)?;
        let signature = hmac::sign(&self.key, &json);

        Ok(format!(
            "{}.{}",
            URL_SAFE_NO_PAD.encode(&json),
            URL_SAFE_NO_PAD.encode(signature.as_ref())
        ))
    }

    /// Decode a state token, checking its signature and age
    ///
    /// # Errors
    ///
    /// [`OAuthError::InvalidState`] for malformed or tampered tokens,
    /// [`OAuthError::StateExpired`] once the TTL has elapsed.
    pub fn verify_state(&self, state: &str) -> Result<StatePayload> {
        self.verify_state_at(state, Utc::now().timestamp())
    }

    fn verify_state_at(&self, state: &str, now: i64) -> Result<StatePayload> {
        let (payload_b64, signature_b64) =
            state.split_once('.').ok_or(OAuthError::InvalidState)?;

        let payload_bytes = URL_SAFE_NO_PAD
            .decode(payload_b64)
            .map_err(|_| OAuthError::InvalidState)?;
        let signature = URL_SAFE_NO_PAD
            .decode(signature_b64)
            .map_err(|_| OAuthError::InvalidState)?;

        // constant-time comparison
        if hmac::verify(&self.key, &payload_bytes, &signature).is_err() {
            tracing::warn!("OAuth state signature mismatch");
            return Err(OAuthError::InvalidState);
        }

        let payload: StatePayload =
            serde_json::from_slice(&payload_bytes).map_err(|_| OAuthError::InvalidState)?;

        if payload.issued_at > now.saturating_add(MAX_CLOCK_SKEW_SECS) {
            return Err(OAuthError::InvalidState);
        }

        let ttl = i64::try_from(self.state_ttl.as_secs()).unwrap_or(i64::MAX);
        if now.saturating_sub(payload.issued_at) > ttl {
            return Err(OAuthError::StateExpired);
        }

        Ok(payload)
    }
}

#[async_trait]
impl StateBuilder for SignedStateBuilder {
    async fn build_state(&self, request: &StateRequest) -> Result<String> {
        if request.user_id.is_empty() {
            return Err(OAuthError::InvalidRequest(
                "user id must not be empty".to_string(),
            ));
        }

        let payload = StatePayload {
            user_id: request.user_id.clone(),
            token: request.token.clone(),
            provider: request.provider.clone(),
            nonce: Uuid::new_v4().simple().to_string(),
            issued_at: Utc::now().timestamp(),
        };

        let state = self.encode(&payload)?;
        tracing::debug!(provider = %request.provider, "Built signed OAuth state");
        Ok(state)
    }
}

impl fmt::Debug for SignedStateBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SignedStateBuilder")
            .field("state_ttl", &self.state_ttl)
            .finish_non_exhaustive()
    }
}
