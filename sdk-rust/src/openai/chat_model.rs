use super::chat_api::{
    ChatCompletionRequestMessage, CreateChatCompletionRequest, CreateChatCompletionResponse,
};
use crate::{
    client_utils, LanguageModel, LanguageModelError, LanguageModelInput, LanguageModelResult,
    ModelResponse, ModelUsage,
};
use reqwest::{
    header::{self, HeaderMap, HeaderValue},
    Client,
};
use std::collections::HashMap;

const PROVIDER: &str = "openai";
const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
const DEFAULT_MAX_TOKENS: u32 = 300;
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";

/// A model served by any endpoint speaking the `OpenAI` Chat Completions
/// protocol.
pub struct OpenAIChatModel {
    model_id: String,
    api_key: String,
    base_url: String,
    client: Client,
    headers: HashMap<String, String>,
}

#[derive(Clone, Default)]
pub struct OpenAIChatModelOptions {
    pub base_url: Option<String>,
    pub api_key: String,
    pub headers: Option<HashMap<String, String>>,
    pub client: Option<Client>,
}

impl OpenAIChatModel {
    #[must_use]
    pub fn new(model_id: impl Into<String>, options: OpenAIChatModelOptions) -> Self {
        let OpenAIChatModelOptions {
            base_url,
            api_key,
            headers,
            client,
        } = options;

        let base_url = base_url
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
            .trim_end_matches('/')
            .to_string();
        let client = client.unwrap_or_default();
        let headers = headers.unwrap_or_default();

        Self {
            model_id: model_id.into(),
            api_key,
            base_url,
            client,
            headers,
        }
    }

    fn request_headers(&self) -> LanguageModelResult<HeaderMap> {
        let mut headers = client_utils::extra_headers(&self.headers, "OpenAI")?;

        let auth_header =
            HeaderValue::from_str(&format!("Bearer {}", self.api_key)).map_err(|error| {
                LanguageModelError::InvalidInput(format!(
                    "Invalid OpenAI API key header value: {error}"
                ))
            })?;
        headers.insert(header::AUTHORIZATION, auth_header);

        Ok(headers)
    }
}

#[async_trait::async_trait]
impl LanguageModel for OpenAIChatModel {
    fn provider(&self) -> &'static str {
        PROVIDER
    }

    fn model_id(&self) -> String {
        self.model_id.clone()
    }

    async fn generate(&self, input: LanguageModelInput) -> LanguageModelResult<ModelResponse> {
        crate::opentelemetry::trace_generate(
            self.provider(),
            &self.model_id,
            input,
            |input| async move {
                let request = convert_to_openai_create_params(input, &self.model_id);
                let headers = self.request_headers()?;

                let response: CreateChatCompletionResponse = client_utils::send_json(
                    &self.client,
                    &format!("{}/chat/completions", self.base_url),
                    &request,
                    headers,
                    PROVIDER,
                )
                .await?;

                let usage = response.usage.as_ref().map(|usage| ModelUsage {
                    input_tokens: usage.prompt_tokens,
                    output_tokens: usage.completion_tokens,
                });

                let text = response
                    .choices
                    .into_iter()
                    .next()
                    .and_then(|choice| choice.message)
                    .and_then(|message| message.content);

                Ok(ModelResponse { text, usage })
            },
        )
        .await
    }
}

/// The dashboard context rides along with the system prompt; the user turn is
/// the question alone.
fn convert_to_openai_create_params(
    input: LanguageModelInput,
    model_id: &str,
) -> CreateChatCompletionRequest {
    let user_text = input.user_text().to_string();

    CreateChatCompletionRequest {
        model: model_id.to_string(),
        messages: vec![
            ChatCompletionRequestMessage::System {
                content: format!("{}\n\n{}", input.system_prompt, input.context),
            },
            ChatCompletionRequestMessage::User { content: user_text },
        ],
        max_tokens: Some(input.max_tokens.unwrap_or(DEFAULT_MAX_TOKENS)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn request_uses_system_and_user_messages() {
        let request = convert_to_openai_create_params(
            LanguageModelInput {
                system_prompt: "Be brief.".to_string(),
                context: "Tasks: 1/2".to_string(),
                query: None,
                default_query: "Analyze my dashboard.".to_string(),
                max_tokens: None,
            },
            "gpt-4o-mini",
        );

        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "model": "gpt-4o-mini",
                "messages": [
                    { "role": "system", "content": "Be brief.\n\nTasks: 1/2" },
                    { "role": "user", "content": "Analyze my dashboard." }
                ],
                "max_tokens": 300
            })
        );
    }
}
