//! Authentication initiation service
//!
//! Turns the optional caller identity from the query string into an
//! authorization redirect URL:
//! 1. resolve the effective user id (`"unknown"` when absent or empty)
//! 2. ask the [`StateBuilder`] for an opaque state token
//! 3. substitute the token into the provider's [`AuthorizationUrlTemplate`]
//!
//! Any failure along the way surfaces as a single [`AuthInitiationError`],
//! which keeps the originating error for logging but exposes only a fixed
//! message to clients.

use std::sync::Arc;

use auth_oauth::{AuthorizationUrlTemplate, OAuthError, Provider, StateBuilder, StateRequest};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::{IntoParams, ToSchema};

use crate::error::{api_success, SuccessResponse};

/// User id substituted when the caller does not supply one
pub const UNKNOWN_USER_ID: &str = "unknown";

/// Query parameters accepted by the initiation endpoint
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct AuthRequestParams {
    /// Caller's user identifier
    #[param(example = "u123")]
    pub user_id: Option<String>,
    /// Caller session token, forwarded to the state builder untouched
    pub token: Option<String>,
}

/// Folds decoded query pairs; a repeated key keeps its last value and
/// unknown keys are ignored.
impl FromIterator<(String, String)> for AuthRequestParams {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(pairs: I) -> Self {
        let mut params = Self::default();
        for (key, value) in pairs {
            match key.as_str() {
                "userId" => params.user_id = Some(value),
                "token" => params.token = Some(value),
                _ => {}
            }
        }
        params
    }
}

impl AuthRequestParams {
    pub fn effective_user_id(&self) -> &str {
        match self.user_id.as_deref() {
            Some(id) if !id.is_empty() => id,
            _ => UNKNOWN_USER_ID,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct AuthUrlData {
    /// Provider authorization URL carrying the state token
    #[serde(rename = "authUrl")]
    #[schema(example = "https://api.twitter.com/oauth/authorize?state=abc.def")]
    pub auth_url: String,
}

/// Success payload of the initiation endpoint
pub type AuthInitiationResult = SuccessResponse<AuthUrlData>;

/// Initiation failed. The display text is safe to return to clients; the
/// underlying cause is kept in `source` for the server log.
#[derive(Debug, Error)]
#[error("Failed to initiate {} authentication", .provider.display_name())]
pub struct AuthInitiationError {
    pub provider: Provider,
    #[source]
    pub source: OAuthError,
}

/// Builds authorization redirect URLs for one provider
#[derive(Clone)]
pub struct AuthInitiationHandler {
    provider: Provider,
    state_builder: Arc<dyn StateBuilder>,
    template: AuthorizationUrlTemplate,
}

impl AuthInitiationHandler {
    pub fn new(
        provider: Provider,
        state_builder: Arc<dyn StateBuilder>,
        template: AuthorizationUrlTemplate,
    ) -> Self {
        Self {
            provider,
            state_builder,
            template,
        }
    }

    /// Handler for the Twitter/X placeholder authorization endpoint
    pub fn twitter(state_builder: Arc<dyn StateBuilder>) -> Self {
        Self::new(
            Provider::Twitter,
            state_builder,
            AuthorizationUrlTemplate::twitter_placeholder(),
        )
    }

    pub fn provider(&self) -> Provider {
        self.provider
    }

    pub fn template(&self) -> &AuthorizationUrlTemplate {
        &self.template
    }

    pub fn success_message(&self) -> String {
        format!("{} authentication initiated", self.provider.display_name())
    }

    /// Build the authorization URL for `params`.
    ///
    /// # Errors
    ///
    /// [`AuthInitiationError`] when the state builder fails or the rendered
    /// URL is invalid. Both cases look the same to the caller.
    pub async fn initiate(
        &self,
        params: &AuthRequestParams,
    ) -> Result<AuthInitiationResult, AuthInitiationError> {
        let request = StateRequest::new(
            params.effective_user_id(),
            params.token.clone(),
            self.provider.as_str(),
        );

        let auth_url = self
            .state_builder
            .build_state(&request)
            .await
            .and_then(|state| self.template.render(&state))
            .map_err(|source| AuthInitiationError {
                provider: self.provider,
                source,
            })?;

        Ok(api_success(self.success_message(), AuthUrlData { auth_url }))
    }
}

impl std::fmt::Debug for AuthInitiationHandler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthInitiationHandler")
            .field("provider", &self.provider)
            .field("template", &self.template.as_str())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use mockall::mock;

    mock! {
        pub Builder {}

        #[async_trait]
        impl StateBuilder for Builder {
            async fn build_state(&self, request: &StateRequest) -> auth_oauth::Result<String>;
        }
    }

    fn params(user_id: Option<&str>, token: Option<&str>) -> AuthRequestParams {
        AuthRequestParams {
            user_id: user_id.map(str::to_string),
            token: token.map(str::to_string),
        }
    }

    #[test]
    fn test_effective_user_id() {
        assert_eq!(params(Some("u123"), None).effective_user_id(), "u123");
        assert_eq!(params(Some(""), None).effective_user_id(), "unknown");
        assert_eq!(params(None, None).effective_user_id(), "unknown");
    }

    #[test]
    fn test_params_deserialize_camel_case() {
        let parsed: AuthRequestParams =
            serde_json::from_value(serde_json::json!({ "userId": "u1", "token": "t" })).unwrap();
        assert_eq!(parsed, params(Some("u1"), Some("t")));
    }

    #[test]
    fn test_params_from_pairs_last_value_wins() {
        let pairs = [
            ("userId", "a"),
            ("token", "x"),
            ("utm_source", "mail"),
            ("userId", "b"),
            ("token", "y"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()));

        let parsed: AuthRequestParams = pairs.collect();
        assert_eq!(parsed, params(Some("b"), Some("y")));
    }

    #[test]
    fn test_params_from_no_pairs() {
        let parsed: AuthRequestParams = std::iter::empty().collect();
        assert_eq!(parsed, AuthRequestParams::default());
    }

    #[tokio::test]
    async fn test_initiate_success() {
        let mut builder = MockBuilder::new();
        builder
            .expect_build_state()
            .withf(|req: &StateRequest| {
                req.user_id == "u123"
                    && req.token.as_deref() == Some("tok-1")
                    && req.provider == "twitter"
            })
            .times(1)
            .returning(|_| Ok("abc.def".to_string()));

        let handler = AuthInitiationHandler::twitter(Arc::new(builder));
        let result = handler
            .initiate(&params(Some("u123"), Some("tok-1")))
            .await
            .unwrap();

        assert_eq!(result.message, "Twitter authentication initiated");
        assert_eq!(
            result.data.auth_url,
            "https://api.twitter.com/oauth/authorize?state=abc.def"
        );
    }

    #[tokio::test]
    async fn test_missing_user_id_defaults_to_unknown() {
        let mut builder = MockBuilder::new();
        builder
            .expect_build_state()
            .withf(|req: &StateRequest| req.user_id == "unknown" && req.token.is_none())
            .times(1)
            .returning(|_| Ok("s".to_string()));

        let handler = AuthInitiationHandler::twitter(Arc::new(builder));
        assert!(handler.initiate(&params(None, None)).await.is_ok());
    }

    #[tokio::test]
    async fn test_builder_failure() {
        let mut builder = MockBuilder::new();
        builder
            .expect_build_state()
            .returning(|_| Err(OAuthError::ExternalProviderError("boom".to_string())));

        let handler = AuthInitiationHandler::twitter(Arc::new(builder));
        let err = handler.initiate(&params(Some("u1"), None)).await.unwrap_err();

        assert_eq!(err.to_string(), "Failed to initiate Twitter authentication");
        assert!(err.source.to_string().contains("boom"));
    }

    #[tokio::test]
    async fn test_render_failure() {
        let mut builder = MockBuilder::new();
        builder
            .expect_build_state()
            .returning(|_| Ok("bad host".to_string()));

        let template = AuthorizationUrlTemplate::parse("https://{state}/authorize").unwrap();
        let handler = AuthInitiationHandler::new(Provider::Twitter, Arc::new(builder), template);
        let err = handler.initiate(&params(Some("u1"), None)).await.unwrap_err();

        assert!(matches!(err.source, OAuthError::InvalidAuthorizationUrl(_)));
    }
}
