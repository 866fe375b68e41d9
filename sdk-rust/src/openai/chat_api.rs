#![allow(clippy::pedantic, clippy::style)]
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct CreateChatCompletionRequest {
    /// Model ID used to generate the response, like `gpt-4o` or `o3`.
    pub model: String,
    /// A list of messages comprising the conversation so far.
    pub messages: Vec<ChatCompletionRequestMessage>,
    /// The maximum number of tokens that can be generated in the chat
    /// completion.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(tag = "role", rename_all = "lowercase")]
pub enum ChatCompletionRequestMessage {
    /// Developer-provided instructions that the model should follow.
    System { content: String },
    /// Messages sent by an end user.
    User { content: String },
}

/// Represents a chat completion response returned by model, based on the
/// provided input.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct CreateChatCompletionResponse {
    /// A list of chat completion choices.
    #[serde(default)]
    pub choices: Vec<ChatCompletionChoice>,
    #[serde(default)]
    pub usage: Option<CompletionUsage>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct ChatCompletionChoice {
    #[serde(default)]
    pub message: Option<ChatCompletionResponseMessage>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct ChatCompletionResponseMessage {
    /// The contents of the message.
    #[serde(default)]
    pub content: Option<String>,
}

/// Usage statistics for the completion request.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct CompletionUsage {
    /// Number of tokens in the prompt.
    #[serde(default)]
    pub prompt_tokens: u32,
    /// Number of tokens in the generated completion.
    #[serde(default)]
    pub completion_tokens: u32,
}
