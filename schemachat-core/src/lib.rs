//! Schemachat Core Library
//!
//! This crate provides a thin, single-request chat-completion client: it
//! sends one conversation to a hosted chat-completion backend and decodes
//! the model's JSON reply into a caller-chosen structured type.
//!
//! The decode is two-staged: the HTTP body is parsed as the response
//! envelope first, then the first choice's message content is parsed as a
//! second, nested JSON document into the caller's type. Each stage fails
//! with its own error kind so callers can tell a broken envelope apart
//! from a model reply that did not match the requested schema.
//!
//! ```no_run
//! use schemachat_core::{ChatClient, ChatModel, ClientConfig, Message};
//! use serde::Deserialize;
//!
//! #[derive(Deserialize)]
//! struct Joke {
//!     setup: String,
//!     punchline: String,
//! }
//!
//! # async fn run() -> schemachat_core::ChatResult<()> {
//! let config = ClientConfig::new("YOUR_API_KEY", ChatModel::Gpt41Nano);
//! let client = ChatClient::new(config)?;
//!
//! let joke: Joke = client
//!     .send_chat(vec![Message::user("Tell me a joke as JSON")], Some(0.7))
//!     .await?;
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod protocol;

pub use client::{decode_first_choice, ChatClient, ChatError, ChatResult};
pub use config::{ClientConfig, SecretString, API_KEY_ENV_VAR, DEFAULT_ENDPOINT};
pub use protocol::{ChatModel, ChatRequest, ChatResponse, Choice, Message, MessageRole};

/// Returns the version of the schemachat core library.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!version().is_empty());
    }
}
