use std::sync::Arc;

use auth_oauth::{Provider, SignedStateBuilder, StateBuilder};
use error_common::{BuzzConnectError, Result};
use tracing::warn;

use crate::config::Settings;
use crate::services::AuthInitiationHandler;

/// Shared application state, immutable after startup
#[derive(Clone)]
pub struct BuzzConnectServer {
    /// Loaded settings
    pub settings: Arc<Settings>,
    /// Twitter/X authorization URL builder
    pub twitter_auth: Arc<AuthInitiationHandler>,
}

impl BuzzConnectServer {
    /// Build the server from settings, using the HMAC-signed state builder
    ///
    /// # Errors
    ///
    /// [`BuzzConnectError::ConfigError`] when the signing secret or the
    /// authorization template is unusable.
    pub fn new(settings: Settings) -> Result<Self> {
        if settings.oauth.uses_dev_secret() {
            warn!("oauth.state_secret is not configured; using the development secret");
        }

        let state_builder = SignedStateBuilder::new(
            &settings.oauth.state_secret,
            settings.oauth.state_ttl(),
        )
        .map_err(|e| BuzzConnectError::ConfigError(e.to_string()))?;

        Self::with_state_builder(settings, Arc::new(state_builder))
    }

    /// Build the server around a caller-supplied state builder
    ///
    /// # Errors
    ///
    /// [`BuzzConnectError::ConfigError`] when the authorization template is
    /// unusable.
    pub fn with_state_builder(
        settings: Settings,
        state_builder: Arc<dyn StateBuilder>,
    ) -> Result<Self> {
        let template = settings.oauth.twitter_template()?;
        let twitter_auth = AuthInitiationHandler::new(Provider::Twitter, state_builder, template);

        Ok(Self {
            settings: Arc::new(settings),
            twitter_auth: Arc::new(twitter_auth),
        })
    }
}

impl std::fmt::Debug for BuzzConnectServer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BuzzConnectServer")
            .field("settings", &self.settings)
            .field("twitter_auth", &self.twitter_auth)
            .finish()
    }
}
