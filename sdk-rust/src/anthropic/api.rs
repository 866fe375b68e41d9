#![allow(clippy::pedantic, clippy::style)]
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct CreateMessageParams {
    /// The maximum number of tokens to generate before stopping.
    pub max_tokens: u32,
    /// Input messages.
    pub messages: Vec<InputMessage>,
    /// The model that will complete your prompt.
    pub model: String,
    /// System prompt.
    ///
    /// A system prompt is a way of providing context and instructions to
    /// Claude, such as specifying a particular goal or role.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct InputMessage {
    pub role: InputMessageRole,
    pub content: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy)]
#[serde(rename_all = "lowercase")]
pub enum InputMessageRole {
    User,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct Message {
    /// Content generated by the model.
    #[serde(default)]
    pub content: Vec<ContentBlock>,
    /// Billing and rate-limit usage.
    #[serde(default)]
    pub usage: Option<Usage>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct ContentBlock {
    #[serde(default)]
    pub text: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct Usage {
    /// The number of input tokens which were used.
    #[serde(default)]
    pub input_tokens: u32,
    /// The number of output tokens which were used.
    #[serde(default)]
    pub output_tokens: u32,
}
