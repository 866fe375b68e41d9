use serde::{Deserialize, Serialize};

/// One grounded request to a language model.
///
/// The dashboard context and the user's question are kept apart so each
/// provider can arrange them the way its API expects.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LanguageModelInput {
    /// Persona and style instructions.
    pub system_prompt: String,
    /// Textual summary of the data the answer should be grounded on.
    pub context: String,
    /// The user's question. `None` asks for a general analysis.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
    /// Question sent in place of `query` by providers that need an explicit
    /// user turn.
    pub default_query: String,
    /// Cap on generated tokens. Providers apply their own default when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
}

impl LanguageModelInput {
    /// The user turn: the query when one was given, else the default query.
    #[must_use]
    pub fn user_text(&self) -> &str {
        self.query
            .as_deref()
            .filter(|query| !query.is_empty())
            .unwrap_or(&self.default_query)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelUsage {
    pub input_tokens: u32,
    pub output_tokens: u32,
}

/// Represents the response generated by the model.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ModelResponse {
    /// The answer text. `None` when the provider answered successfully but
    /// without the expected text field.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub usage: Option<ModelUsage>,
}

impl ModelResponse {
    pub fn with_text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            usage: None,
        }
    }
}
