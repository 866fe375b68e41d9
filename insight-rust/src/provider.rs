use crate::GatewayOptions;
use lifehub_llm::{
    anthropic::{self, AnthropicModel, AnthropicModelOptions},
    google::{self, GoogleModel, GoogleModelOptions},
    openai::{self, OpenAIChatModel, OpenAIChatModelOptions},
    LanguageModel,
};
use reqwest::Client;
use std::{fmt, sync::Arc, time::Duration};

/// The closed set of supported providers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProviderKind {
    Gemini,
    OpenAI,
    Anthropic,
}

impl ProviderKind {
    /// Map a configuration tag to a provider. This is the only place provider
    /// names are matched as strings.
    #[must_use]
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "gemini" => Some(Self::Gemini),
            "openai" => Some(Self::OpenAI),
            "anthropic" => Some(Self::Anthropic),
            _ => None,
        }
    }

    /// Like [`from_tag`](Self::from_tag), routing unknown or empty tags to
    /// Gemini.
    #[must_use]
    pub fn select(tag: &str) -> Self {
        Self::from_tag(tag).unwrap_or_else(|| {
            tracing::warn!(
                provider = tag,
                "unrecognized AI provider, falling back to gemini"
            );
            Self::Gemini
        })
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Gemini => "gemini",
            Self::OpenAI => "openai",
            Self::Anthropic => "anthropic",
        }
    }

    #[must_use]
    pub fn default_model(self) -> &'static str {
        match self {
            Self::Gemini => google::DEFAULT_MODEL,
            Self::OpenAI => openai::DEFAULT_MODEL,
            Self::Anthropic => anthropic::DEFAULT_MODEL,
        }
    }
}

impl fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Builds the adapter for one call.
pub trait ModelFactory: Send + Sync {
    fn create(
        &self,
        provider: ProviderKind,
        model_id: &str,
        api_key: &str,
    ) -> Arc<dyn LanguageModel>;
}

/// Creates HTTP adapters sharing one connection pool.
pub struct HttpModelFactory {
    client: Client,
    gemini_base_url: Option<String>,
    openai_base_url: Option<String>,
    anthropic_base_url: Option<String>,
}

impl HttpModelFactory {
    #[must_use]
    pub fn new(options: &GatewayOptions) -> Self {
        Self {
            client: build_client(options.timeout),
            gemini_base_url: options.gemini_base_url.clone(),
            openai_base_url: options.openai_base_url.clone(),
            anthropic_base_url: options.anthropic_base_url.clone(),
        }
    }
}

fn build_client(timeout: Duration) -> Client {
    Client::builder().timeout(timeout).build().unwrap_or_else(|error| {
        tracing::warn!(%error, "failed to build HTTP client, using defaults");
        Client::new()
    })
}

impl ModelFactory for HttpModelFactory {
    fn create(
        &self,
        provider: ProviderKind,
        model_id: &str,
        api_key: &str,
    ) -> Arc<dyn LanguageModel> {
        let client = Some(self.client.clone());
        let api_key = api_key.to_string();

        match provider {
            ProviderKind::Gemini => Arc::new(GoogleModel::new(
                model_id,
                GoogleModelOptions {
                    api_key,
                    base_url: self.gemini_base_url.clone(),
                    client,
                    ..Default::default()
                },
            )),
            ProviderKind::OpenAI => Arc::new(OpenAIChatModel::new(
                model_id,
                OpenAIChatModelOptions {
                    api_key,
                    base_url: self.openai_base_url.clone(),
                    client,
                    ..Default::default()
                },
            )),
            ProviderKind::Anthropic => Arc::new(AnthropicModel::new(
                model_id,
                AnthropicModelOptions {
                    api_key,
                    base_url: self.anthropic_base_url.clone(),
                    client,
                    ..Default::default()
                },
            )),
        }
    }
}
