mod coach;
mod config;
mod context;
mod credential;
mod errors;
mod gateway;
mod locale;
pub mod opentelemetry;
mod provider;
mod widget;

pub use coach::{ChatMessage, ChatRole, CoachConversation};
pub use config::{AIConfig, GatewayOptions, DEFAULT_TIMEOUT};
pub use context::build_context;
pub use credential::{resolve_credential, Credential};
pub use errors::{InsightError, InsightErrorKind};
pub use gateway::{InsightGateway, NO_RESPONSE};
pub use locale::{Language, Terms};
pub use provider::{HttpModelFactory, ModelFactory, ProviderKind};
pub use widget::*;
