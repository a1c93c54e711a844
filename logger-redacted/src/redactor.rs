use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};
use lazy_static::lazy_static;
use regex::{Captures, Regex};
use sha2::{Digest, Sha256};

lazy_static! {
    static ref BEARER_REGEX: Regex = compile(r"(?i)\bbearer\s+[A-Za-z0-9\-._~+/]+=*");
    static ref QUERY_SECRET_REGEX: Regex = compile(
        r"(?i)\b(token|state|access_token|refresh_token|client_secret|oauth_verifier)=([^&\s]+)"
    );
    static ref JWT_REGEX: Regex =
        compile(r"\beyJ[A-Za-z0-9_-]+\.[A-Za-z0-9_-]+\.[A-Za-z0-9_-]+");
    static ref DEFAULT_REDACTOR: SecretRedactor = SecretRedactor::new(RedactionConfig::default());
}

#[allow(clippy::expect_used)]
fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).expect("redaction pattern is a valid regex")
}

/// Secret redaction configuration
#[derive(Debug, Clone)]
pub struct RedactionConfig {
    pub redact_bearer_tokens: bool,
    pub redact_query_secrets: bool,
    pub redact_jwts: bool,
    /// Replace secrets with a short hash instead of a fixed marker so the same
    /// value can be correlated across log lines
    pub hash_for_correlation: bool,
}

impl Default for RedactionConfig {
    fn default() -> Self {
        Self {
            redact_bearer_tokens: true,
            redact_query_secrets: true,
            redact_jwts: true,
            hash_for_correlation: false,
        }
    }
}

/// Scrubs credentials and state tokens out of log messages
#[derive(Debug, Clone)]
pub struct SecretRedactor {
    config: RedactionConfig,
}

impl SecretRedactor {
    pub fn new(config: RedactionConfig) -> Self {
        Self { config }
    }

    pub fn redact(&self, text: &str) -> String {
        let mut result = text.to_string();

        // JWTs first: a bearer value is often a JWT and should get one marker
        if self.config.redact_jwts {
            result = self.redact_jwts(&result);
        }

        if self.config.redact_bearer_tokens {
            result = self.redact_bearer_tokens(&result);
        }

        if self.config.redact_query_secrets {
            result = self.redact_query_secrets(&result);
        }

        result
    }

    fn redact_bearer_tokens(&self, text: &str) -> String {
        BEARER_REGEX
            .replace_all(text, |caps: &Captures| format!("Bearer {}", self.marker(&caps[0])))
            .to_string()
    }

    fn redact_query_secrets(&self, text: &str) -> String {
        QUERY_SECRET_REGEX
            .replace_all(text, |caps: &Captures| {
                format!("{}={}", &caps[1], self.marker(&caps[2]))
            })
            .to_string()
    }

    fn redact_jwts(&self, text: &str) -> String {
        JWT_REGEX
            .replace_all(text, |caps: &Captures| self.marker(&caps[0]))
            .to_string()
    }

    fn marker(&self, value: &str) -> String {
        if self.config.hash_for_correlation {
            format!("[REDACTED:{}]", hash_value(value))
        } else {
            "[REDACTED]".to_string()
        }
    }
}

fn hash_value(value: &str) -> String {
    let digest = Sha256::digest(value.as_bytes());
    // 6 bytes, 8 characters
    let prefix: Vec<u8> = digest.iter().take(6).copied().collect();
    URL_SAFE_NO_PAD.encode(prefix)
}

/// Redact secrets from `text` with the default configuration
pub fn redact(text: &str) -> String {
    DEFAULT_REDACTOR.redact(text)
}

/// Redact secrets, then sanitize the result for a single log line
pub fn scrub(text: &str) -> String {
    error_common::sanitize_for_logging(&redact(text))
}
