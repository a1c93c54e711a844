use crate::error::{OAuthError, Result};
use std::fmt;
use std::str::FromStr;
use url::Url;

/// Placeholder substituted with the state token
pub const STATE_PLACEHOLDER: &str = "{state}";

/// Stand-in Twitter/X authorization endpoint. It carries only the state, no
/// client id, scopes or redirect URI, and has to be replaced by the real
/// provider URL before the flow can complete.
pub const TWITTER_AUTHORIZE_URL_TEMPLATE: &str =
    "https://api.twitter.com/oauth/authorize?state={state}";

/// Authorization endpoint with a `{state}` placeholder
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorizationUrlTemplate {
    template: String,
}

impl AuthorizationUrlTemplate {
    /// Validate and wrap a template.
    ///
    /// # Errors
    ///
    /// [`OAuthError::Configuration`] when the template lacks the `{state}`
    /// placeholder or does not form an absolute URL.
    pub fn parse(template: impl Into<String>) -> Result<Self> {
        let template = template.into();

        if !template.contains(STATE_PLACEHOLDER) {
            return Err(OAuthError::Configuration(format!(
                "authorization URL template must contain {STATE_PLACEHOLDER}"
            )));
        }

        Url::parse(&template.replace(STATE_PLACEHOLDER, "state")).map_err(|e| {
            OAuthError::Configuration(format!("authorization URL template is not a URL: {e}"))
        })?;

        Ok(Self { template })
    }

    pub fn twitter_placeholder() -> Self {
        Self {
            template: TWITTER_AUTHORIZE_URL_TEMPLATE.to_string(),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.template
    }

    /// Substitute `state` into the template.
    ///
    /// The state is inserted verbatim, without percent-encoding; the rendered
    /// string is only checked to still be a URL.
    ///
    /// # Errors
    ///
    /// [`OAuthError::InvalidAuthorizationUrl`] when the substitution yields
    /// something that no longer parses as a URL.
    pub fn render(&self, state: &str) -> Result<String> {
        let rendered = self.template.replace(STATE_PLACEHOLDER, state);
        Url::parse(&rendered).map_err(|e| OAuthError::InvalidAuthorizationUrl(e.to_string()))?;
        Ok(rendered)
    }
}

impl Default for AuthorizationUrlTemplate {
    fn default() -> Self {
        Self::twitter_placeholder()
    }
}

impl FromStr for AuthorizationUrlTemplate {
    type Err = OAuthError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for AuthorizationUrlTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.template)
    }
}
