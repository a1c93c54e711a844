//! OAuth helpers for Buzz Connect
//!
//! This crate holds the pieces of the social-account connection flow that do
//! not depend on the HTTP framework:
//! - the [`StateBuilder`] collaborator that produces the opaque `state`
//!   parameter for an authorization redirect
//! - [`SignedStateBuilder`], the default HMAC-SHA256 signed implementation
//! - [`AuthorizationUrlTemplate`], the configurable authorization endpoint
//!   template the state is substituted into
//! - the [`Provider`] catalogue
//!
//! # Example
//!
//! ```rust
//! use auth_oauth::{
//!     AuthorizationUrlTemplate, SignedStateBuilder, StateBuilder, StateRequest, providers,
//! };
//! use secrecy::SecretString;
//! use std::time::Duration;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let builder = SignedStateBuilder::new(
//!         &SecretString::new("change-me".to_string()),
//!         Duration::from_secs(600),
//!     )?;
//!
//!     let request = StateRequest::new("u123", Some("tok-1".to_string()), providers::TWITTER);
//!     let state = builder.build_state(&request).await?;
//!
//!     let url = AuthorizationUrlTemplate::twitter_placeholder().render(&state)?;
//!     assert!(url.starts_with("https://api.twitter.com/oauth/authorize?state="));
//!
//!     let payload = builder.verify_state(&state)?;
//!     assert_eq!(payload.user_id, "u123");
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod models;
pub mod provider;
pub mod state;
pub mod template;

pub use error::*;
pub use models::*;
pub use provider::*;
pub use state::*;
pub use template::*;
