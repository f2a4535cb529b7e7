//! Core wire types for chat-completion calls
//!
//! These types match the hosted chat-completion API format and are used for
//! serialization of outbound requests and deserialization of responses.
//! Ordering of `messages` is semantically significant: it is the
//! conversation history, oldest first.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Role of a message in the conversation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    /// System instructions that guide the model's behavior and context
    System,
    /// User input message
    User,
    /// Assistant (model) response, supplied by the caller as prior history
    Assistant,
}

/// A single turn in the conversation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    /// Role of the message sender
    pub role: MessageRole,

    /// Content of the message
    pub content: String,
}

impl Message {
    /// Create a message with an explicit role
    pub fn new(role: MessageRole, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }

    /// Create a system message
    pub fn system(content: impl Into<String>) -> Self {
        Self::new(MessageRole::System, content)
    }

    /// Create a user message
    pub fn user(content: impl Into<String>) -> Self {
        Self::new(MessageRole::User, content)
    }

    /// Create an assistant message
    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(MessageRole::Assistant, content)
    }
}

/// Outbound request envelope
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatRequest {
    /// Model identifier to use
    pub model: String,

    /// Messages in the conversation, oldest first
    pub messages: Vec<Message>,

    /// Sampling temperature. Higher values bias toward more varied output,
    /// lower values toward deterministic output. When `None` the field is
    /// omitted from the wire entirely and the backend default applies; no
    /// client-side range validation is performed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
}

impl ChatRequest {
    /// Create a new request envelope with model and messages
    pub fn new(model: impl Into<String>, messages: Vec<Message>) -> Self {
        Self {
            model: model.into(),
            messages,
            temperature: None,
        }
    }

    /// Set the sampling temperature
    pub fn with_temperature(mut self, temperature: f64) -> Self {
        self.temperature = Some(temperature);
        self
    }
}

/// Inbound response envelope
///
/// The backend may return several completion candidates; only the first is
/// consulted by this client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatResponse {
    /// Completion candidates, in backend order
    pub choices: Vec<Choice>,
}

/// One completion candidate carrying the model's reply
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Choice {
    /// The model's reply message
    pub message: Message,
}

impl ChatResponse {
    /// Content of the first completion choice, if any
    pub fn first_content(&self) -> Option<&str> {
        self.choices.first().map(|choice| choice.message.content.as_str())
    }
}

/// Backend model identifiers
///
/// The named variants are the models the library is known to work with;
/// `Custom` carries any identifier accepted by a compatible backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatModel {
    /// GPT-4.1 nano: low latency, no reasoning step
    Gpt41Nano,
    /// GPT-4.1 mini: low latency, no reasoning step
    Gpt41Mini,
    /// GPT-5 mini: faster, more cost-efficient GPT-5
    Gpt5Mini,
    /// Any other model identifier, passed through verbatim
    Custom(String),
}

impl ChatModel {
    /// The wire identifier for this model
    pub fn as_str(&self) -> &str {
        match self {
            ChatModel::Gpt41Nano => "gpt-4.1-nano",
            ChatModel::Gpt41Mini => "gpt-4.1-mini",
            ChatModel::Gpt5Mini => "gpt-5-mini",
            ChatModel::Custom(name) => name,
        }
    }
}

impl fmt::Display for ChatModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roles_serialize_lowercase() {
        let value = serde_json::to_value(Message::system("ctx")).unwrap();
        assert_eq!(value["role"], "system");

        let value = serde_json::to_value(Message::user("hi")).unwrap();
        assert_eq!(value["role"], "user");

        let value = serde_json::to_value(Message::assistant("hello")).unwrap();
        assert_eq!(value["role"], "assistant");
    }

    #[test]
    fn test_omitted_temperature_is_absent() {
        let request = ChatRequest::new("m1", vec![Message::user("hi")]);
        let value = serde_json::to_value(&request).unwrap();
        assert!(value.get("temperature").is_none());

        let request = request.with_temperature(0.0);
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["temperature"], 0.0);
    }

    #[test]
    fn test_model_identifiers() {
        assert_eq!(ChatModel::Gpt41Nano.as_str(), "gpt-4.1-nano");
        assert_eq!(ChatModel::Gpt41Mini.as_str(), "gpt-4.1-mini");
        assert_eq!(ChatModel::Gpt5Mini.as_str(), "gpt-5-mini");
        assert_eq!(ChatModel::Custom("llama-3".into()).as_str(), "llama-3");
        assert_eq!(ChatModel::Gpt5Mini.to_string(), "gpt-5-mini");
    }

    #[test]
    fn test_first_content() {
        let response = ChatResponse {
            choices: vec![Choice {
                message: Message::assistant("{\"ok\":true}"),
            }],
        };
        assert_eq!(response.first_content(), Some("{\"ok\":true}"));

        let empty = ChatResponse { choices: vec![] };
        assert_eq!(empty.first_content(), None);
    }
}
