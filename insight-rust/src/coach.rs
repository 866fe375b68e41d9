use crate::{AIConfig, InsightGateway, Language, WidgetSnapshot};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Model,
}

/// One entry of the coach widget's chat history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub text: String,
}

impl ChatMessage {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: ChatRole::User,
            text: text.into(),
        }
    }

    pub fn model(text: impl Into<String>) -> Self {
        Self {
            role: ChatRole::Model,
            text: text.into(),
        }
    }
}

/// The send flow of the coach widget.
///
/// Persistence stays with the caller: read `messages()` after each send and
/// store it back into the widget's `chatHistory`.
#[derive(Debug, Clone)]
pub struct CoachConversation {
    messages: Vec<ChatMessage>,
}

impl CoachConversation {
    /// A fresh conversation holding only the localized greeting.
    #[must_use]
    pub fn new(language: Language) -> Self {
        Self {
            messages: vec![ChatMessage::model(language.terms().coach_greeting)],
        }
    }

    /// Resume from a stored history, or start fresh when none was saved.
    #[must_use]
    pub fn from_history(language: Language, history: Option<Vec<ChatMessage>>) -> Self {
        match history {
            Some(messages) => Self { messages },
            None => Self::new(language),
        }
    }

    #[must_use]
    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    #[must_use]
    pub fn into_messages(self) -> Vec<ChatMessage> {
        self.messages
    }

    /// Send one user message and append the reply.
    ///
    /// Blank input is ignored and returns `None`. Only `text` reaches the
    /// provider; earlier turns are kept for display.
    pub async fn send(
        &mut self,
        gateway: &InsightGateway,
        widgets: &[WidgetSnapshot],
        text: &str,
        config: Option<&AIConfig>,
    ) -> Option<String> {
        if text.trim().is_empty() {
            return None;
        }

        self.messages.push(ChatMessage::user(text));
        let reply = gateway.get_insight(widgets, Some(text), config).await;
        self.messages.push(ChatMessage::model(reply.clone()));

        Some(reply)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_conversation_starts_with_the_greeting() {
        let conversation = CoachConversation::new(Language::PtBr);

        assert_eq!(
            conversation.messages(),
            [ChatMessage::model(Language::PtBr.terms().coach_greeting)]
        );
    }

    #[test]
    fn stored_history_is_kept_as_is() {
        let history = vec![ChatMessage::user("hi"), ChatMessage::model("hello")];
        let conversation = CoachConversation::from_history(Language::EnUs, Some(history.clone()));

        assert_eq!(conversation.into_messages(), history);
    }

    #[test]
    fn roles_serialize_lowercase() {
        let json = serde_json::to_value(ChatMessage::model("ok")).unwrap();
        assert_eq!(json, serde_json::json!({ "role": "model", "text": "ok" }));
    }
}
