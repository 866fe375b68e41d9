//! Test doubles for code that depends on [`LanguageModel`](crate::LanguageModel).

mod model;

pub use model::{MockGenerateResult, MockLanguageModel};
