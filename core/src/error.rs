//! Error types for client construction.
//!
//! Building a fixed request cannot fail once the client exists, so the only
//! fallible step is validating an overridden base URL.

use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// The base URL is not an absolute `http://` or `https://` origin.
    #[error("invalid base URL {url:?}: expected http:// or https://")]
    InvalidBaseUrl { url: String },
}
