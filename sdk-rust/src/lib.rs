pub mod anthropic;
mod client_utils;
mod errors;
pub mod google;
mod language_model;
pub mod llm_test;
pub mod openai;
mod opentelemetry;
mod types;

pub use errors::*;
pub use language_model::LanguageModel;
pub use types::*;
