//! Error types for configuration resolution.

use thiserror::Error;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while resolving configuration or credentials.
#[derive(Error, Debug)]
pub enum Error {
    /// Parameter store request failed
    #[error("Parameter store error: {0}")]
    ParameterStore(String),

    /// Secret store request failed
    #[error("Secret store error: {0}")]
    SecretStore(String),

    /// Secret payload was not valid JSON
    #[error("Secret parse error: {0}")]
    SecretParse(#[from] serde_json::Error),

    /// Decoded secret lacks a required credential field
    #[error("Secret is missing required field '{0}'")]
    MissingSecretField(&'static str),
}
