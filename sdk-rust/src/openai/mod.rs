mod chat_api;
mod chat_model;

pub use chat_model::{OpenAIChatModel, OpenAIChatModelOptions, DEFAULT_MODEL};
