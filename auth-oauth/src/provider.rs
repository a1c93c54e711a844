use serde::{Deserialize, Serialize};
use std::fmt;

/// OAuth provider names
pub mod providers {
    pub const TWITTER: &str = "twitter";
}

/// Identity providers an account can be connected to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Provider {
    /// Twitter/X
    Twitter,
}

impl Provider {
    /// Wire name, as embedded in state tokens
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Twitter => providers::TWITTER,
        }
    }

    /// Name shown to users in messages
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Twitter => "Twitter",
        }
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_names() {
        assert_eq!(Provider::Twitter.as_str(), "twitter");
        assert_eq!(Provider::Twitter.display_name(), "Twitter");
        assert_eq!(Provider::Twitter.to_string(), "twitter");
    }

    #[test]
    fn test_provider_serde_uses_wire_name() {
        assert_eq!(serde_json::to_value(Provider::Twitter).unwrap(), "twitter");
        assert!(serde_json::from_value::<Provider>(serde_json::json!("x")).is_err());
    }
}
