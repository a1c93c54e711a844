use std::path::Path;
use std::time::Duration;

use auth_oauth::{AuthorizationUrlTemplate, TWITTER_AUTHORIZE_URL_TEMPLATE};
use config::{Config, Environment, File};
use error_common::{BuzzConnectError, Result};
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;

/// Signing secret used when none is configured. Only acceptable for local
/// development.
pub const DEV_STATE_SECRET: &str = "buzz-connect-dev-state-secret";

/// Prefix for environment overrides, e.g. `BUZZ__SERVER__PORT=9000`
pub const ENV_PREFIX: &str = "BUZZ";

/// Top-level service settings
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub oauth: OAuthSettings,
}

/// HTTP listener settings
#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Allowed CORS origins; empty allows any origin
    #[serde(default)]
    pub cors_origins: Vec<String>,
}

/// OAuth initiation settings
#[derive(Debug, Clone, Deserialize)]
pub struct OAuthSettings {
    /// HMAC key for signing state tokens
    #[serde(default = "default_state_secret")]
    pub state_secret: SecretString,

    /// State token lifetime in seconds (default: 600 = 10 minutes)
    #[serde(default = "default_state_ttl_seconds")]
    pub state_ttl_seconds: u64,

    /// Authorization endpoint; must contain `{state}`
    #[serde(default = "default_twitter_authorize_url")]
    pub twitter_authorize_url: String,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_state_secret() -> SecretString {
    SecretString::new(DEV_STATE_SECRET.to_string())
}

fn default_state_ttl_seconds() -> u64 {
    600
}

fn default_twitter_authorize_url() -> String {
    TWITTER_AUTHORIZE_URL_TEMPLATE.to_string()
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_origins: Vec::new(),
        }
    }
}

impl Default for OAuthSettings {
    fn default() -> Self {
        Self {
            state_secret: default_state_secret(),
            state_ttl_seconds: default_state_ttl_seconds(),
            twitter_authorize_url: default_twitter_authorize_url(),
        }
    }
}

impl OAuthSettings {
    pub fn state_ttl(&self) -> Duration {
        Duration::from_secs(self.state_ttl_seconds)
    }

    pub fn uses_dev_secret(&self) -> bool {
        self.state_secret.expose_secret() == DEV_STATE_SECRET
    }

    /// Parsed Twitter authorization template
    ///
    /// # Errors
    ///
    /// [`BuzzConnectError::ConfigError`] when the template is unusable.
    pub fn twitter_template(&self) -> Result<AuthorizationUrlTemplate> {
        AuthorizationUrlTemplate::parse(self.twitter_authorize_url.as_str())
            .map_err(|e| BuzzConnectError::ConfigError(format!("oauth.twitter_authorize_url: {e}")))
    }
}

impl Settings {
    /// Load settings from defaults, an optional file and `BUZZ__*` environment
    /// variables, in increasing order of precedence.
    ///
    /// A missing file is ignored; a file that exists but does not parse is an
    /// error.
    ///
    /// # Errors
    ///
    /// [`BuzzConnectError::ConfigError`] when a source cannot be read or the
    /// merged settings fail validation.
    pub fn load(config_path: Option<&Path>) -> Result<Self> {
        let mut builder = Config::builder();

        if let Some(path) = config_path {
            builder = builder.add_source(File::from(path).required(false));
        }

        let settings: Settings = builder
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("server.cors_origins")
                    .try_parsing(true),
            )
            .build()
            .and_then(Config::try_deserialize)
            .map_err(|e| BuzzConnectError::ConfigError(e.to_string()))?;

        settings.validate()?;
        Ok(settings)
    }

    /// Check invariants that serde cannot express
    ///
    /// # Errors
    ///
    /// [`BuzzConnectError::ConfigError`] naming the first offending setting.
    pub fn validate(&self) -> Result<()> {
        if self.server.port == 0 {
            return Err(BuzzConnectError::ConfigError(
                "server.port must be non-zero".to_string(),
            ));
        }

        if self.oauth.state_secret.expose_secret().is_empty() {
            return Err(BuzzConnectError::ConfigError(
                "oauth.state_secret must not be empty".to_string(),
            ));
        }

        if self.oauth.state_ttl_seconds == 0 {
            return Err(BuzzConnectError::ConfigError(
                "oauth.state_ttl_seconds must be non-zero".to_string(),
            ));
        }

        self.oauth.twitter_template()?;
        Ok(())
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.bind_address(), "0.0.0.0:8080");
        assert!(settings.server.cors_origins.is_empty());
        assert_eq!(settings.oauth.state_ttl(), Duration::from_secs(600));
        assert!(settings.oauth.uses_dev_secret());
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_empty_secret_rejected() {
        let mut settings = Settings::default();
        settings.oauth.state_secret = SecretString::new(String::new());
        assert!(matches!(
            settings.validate(),
            Err(BuzzConnectError::ConfigError(msg)) if msg.contains("state_secret")
        ));
    }

    #[test]
    fn test_zero_port_rejected() {
        let mut settings = Settings::default();
        settings.server.port = 0;
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_template_without_placeholder_rejected() {
        let mut settings = Settings::default();
        settings.oauth.twitter_authorize_url = "https://api.twitter.com/oauth/authorize".to_string();
        assert!(matches!(
            settings.validate(),
            Err(BuzzConnectError::ConfigError(msg)) if msg.contains("twitter_authorize_url")
        ));
    }

    #[test]
    fn test_secret_not_in_debug_output() {
        let settings = Settings::default();
        assert!(!format!("{settings:?}").contains(DEV_STATE_SECRET));
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let settings = Settings::load(Some(Path::new("does-not-exist.toml"))).unwrap();
        assert_eq!(settings.server.port, 8080);
    }
}
