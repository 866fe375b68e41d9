use crate::{AIConfig, ProviderKind};

/// Outcome of key resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Credential {
    Key(String),
    Missing,
}

/// Pick the key for a call, in order:
/// 1. the caller's own key,
/// 2. the deployment fallback key, only when Gemini was asked for by name or
///    no provider was named at all,
/// 3. nothing.
#[must_use]
pub fn resolve_credential(
    provider: ProviderKind,
    config: &AIConfig,
    fallback_api_key: Option<&str>,
) -> Credential {
    if !config.api_key.is_empty() {
        return Credential::Key(config.api_key.clone());
    }

    // Unrecognized tags still route to Gemini but never spend the fallback key.
    let named_gemini = config.provider.is_empty()
        || ProviderKind::from_tag(&config.provider) == Some(ProviderKind::Gemini);

    match (provider, fallback_api_key) {
        (ProviderKind::Gemini, Some(key)) if named_gemini && !key.is_empty() => {
            tracing::debug!("using the deployment fallback key for gemini");
            Credential::Key(key.to_string())
        }
        _ => Credential::Missing,
    }
}
