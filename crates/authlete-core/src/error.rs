//! Error handling for the core crate.

use thiserror::Error;

/// Result type alias using the core error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while configuring access to the Authlete API.
#[derive(Debug, Error)]
pub enum Error {
    /// A required setting is missing or unparsable.
    #[error("configuration error: {0}")]
    Config(String),

    /// The base URL or an endpoint path does not form a valid URL.
    #[error("invalid url: {0}")]
    InvalidUrl(String),
}

impl Error {
    /// Creates a configuration error for a missing variable.
    #[must_use]
    pub fn missing(variable: &str) -> Self {
        Self::Config(format!("{variable} is required"))
    }
}

impl From<url::ParseError> for Error {
    fn from(err: url::ParseError) -> Self {
        Self::InvalidUrl(err.to_string())
    }
}
