//! Common error handling utilities for Buzz Connect
//!
//! This crate provides the error types, error codes, and log sanitization
//! helpers shared by every Buzz Connect crate. It keeps error reporting
//! consistent between the OAuth helpers and the HTTP server, and makes sure
//! nothing unexpected ends up in a log line.
//!
//! # Key Features
//!
//! - **Standardized Error Type**: [`BuzzConnectError`] for startup and
//!   infrastructure failures
//! - **Error Codes**: Stable string codes surfaced in API error payloads
//! - **Log Sanitization**: Control-character stripping and truncation of
//!   error messages before they are written to logs
//!
//! # Example
//!
//! ```rust
//! use error_common::{sanitize_for_logging, BuzzConnectError};
//!
//! fn bind(port: u16) -> Result<(), BuzzConnectError> {
//!     if port == 0 {
//!         return Err(BuzzConnectError::ConfigError("port must be non-zero".into()));
//!     }
//!     Ok(())
//! }
//!
//! let err = bind(0).unwrap_err();
//! assert_eq!(
//!     sanitize_for_logging(&err.to_string()),
//!     "Configuration error: port must be non-zero"
//! );
//! ```

pub mod codes;
pub mod sanitization;
pub mod types;

pub use sanitization::*;
pub use types::*;
