use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LanguageModelError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    /// The request to the provider failed or the parsing of the response
    /// failed.
    #[error("{0} request failed: {1}")]
    Transport(&'static str, #[source] reqwest::Error),
    /// The request returns a non-OK status code. The message is the
    /// provider's own error text when it could be parsed.
    #[error("{0} error: {2} (Status {1})")]
    StatusCode(&'static str, reqwest::StatusCode, String),
    /// The provider did not answer within the configured bound.
    #[error("{0} request timed out after {1:?}")]
    Timeout(&'static str, Duration),
    /// The response from the provider was unexpected.
    #[error("Invariant from {0}: {1}")]
    Invariant(&'static str, String),
}

impl LanguageModelError {
    /// Name of the provider that produced the error, if any.
    #[must_use]
    pub fn provider(&self) -> Option<&'static str> {
        match self {
            Self::InvalidInput(_) => None,
            Self::Transport(provider, _)
            | Self::StatusCode(provider, _, _)
            | Self::Timeout(provider, _)
            | Self::Invariant(provider, _) => Some(provider),
        }
    }
}

pub type LanguageModelResult<T> = Result<T, LanguageModelError>;
