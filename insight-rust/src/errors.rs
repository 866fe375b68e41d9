use crate::ProviderKind;
use lifehub_llm::LanguageModelError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum InsightError {
    /// No key was supplied and no fallback applies. Raised before any network
    /// call.
    #[error("No API key configured for {0}")]
    MissingCredential(ProviderKind),
    #[error("{source}")]
    Provider {
        provider: ProviderKind,
        #[source]
        source: LanguageModelError,
    },
}

/// Coarse failure category, stable enough to branch on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsightErrorKind {
    MissingCredential,
    Transport,
    Timeout,
    Upstream,
    InvalidResponse,
    InvalidInput,
}

impl InsightError {
    #[must_use]
    pub fn kind(&self) -> InsightErrorKind {
        match self {
            Self::MissingCredential(_) => InsightErrorKind::MissingCredential,
            Self::Provider { source, .. } => match source {
                LanguageModelError::Transport(..) => InsightErrorKind::Transport,
                LanguageModelError::Timeout(..) => InsightErrorKind::Timeout,
                LanguageModelError::StatusCode(..) => InsightErrorKind::Upstream,
                LanguageModelError::Invariant(..) => InsightErrorKind::InvalidResponse,
                LanguageModelError::InvalidInput(_) => InsightErrorKind::InvalidInput,
            },
        }
    }

    #[must_use]
    pub fn provider(&self) -> ProviderKind {
        match self {
            Self::MissingCredential(provider) | Self::Provider { provider, .. } => *provider,
        }
    }
}

impl InsightErrorKind {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::MissingCredential => "missing_credential",
            Self::Transport => "transport",
            Self::Timeout => "timeout",
            Self::Upstream => "upstream",
            Self::InvalidResponse => "invalid_response",
            Self::InvalidInput => "invalid_input",
        }
    }
}
