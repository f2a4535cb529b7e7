//! Chat-completion client
//!
//! [`ChatClient`] sends one conversation to the completion backend and
//! returns a value of a caller-chosen type, decoded from the model's
//! reply. The pipeline is a single linear request/decode pass with no
//! retry loop and no per-call mutable state, so one client instance may
//! serve any number of concurrent calls.

pub mod error;

pub use error::{ChatError, ChatResult};

use crate::config::ClientConfig;
use crate::protocol::{ChatModel, ChatRequest, ChatResponse, Message};
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, warn};

/// User agent reported to the backend
const USER_AGENT: &str = concat!("schemachat/", env!("CARGO_PKG_VERSION"));

/// Connect timeout; the overall request timeout comes from the configuration
const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Client for a hosted chat-completion API
///
/// Owns the credential, the default model selection, and the target
/// endpoint. All fields are read-only after construction.
pub struct ChatClient {
    config: ClientConfig,
    client: Client,
}

impl ChatClient {
    /// Create a new client. Performs no network activity.
    pub fn new(config: ClientConfig) -> ChatResult<Self> {
        let client = Client::builder()
            .timeout(config.timeout())
            .connect_timeout(CONNECT_TIMEOUT)
            .user_agent(USER_AGENT)
            .gzip(true)
            .build()
            .map_err(|e| {
                ChatError::Configuration(format!("failed to create HTTP client: {}", e))
            })?;

        debug!(
            api_key = %config.api_key.partial_redact(),
            endpoint = %config.endpoint(),
            model = %config.model(),
            "chat client created"
        );

        Ok(Self { config, client })
    }

    /// Create a client reading the credential from `OPENAI_API_KEY`.
    pub fn from_env(model: ChatModel) -> ChatResult<Self> {
        Self::new(ClientConfig::from_env(model)?)
    }

    /// Build request headers
    fn build_headers(&self) -> ChatResult<HeaderMap> {
        let mut headers = HeaderMap::new();

        let bearer = format!("Bearer {}", self.config.api_key.expose_secret());
        let mut auth = HeaderValue::from_str(&bearer).map_err(|_| {
            ChatError::Configuration(
                "API key contains characters not valid in a header".to_string(),
            )
        })?;
        auth.set_sensitive(true);
        headers.insert(AUTHORIZATION, auth);

        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        Ok(headers)
    }

    /// Send a conversation using the configured default model.
    ///
    /// See [`send_chat_with_model`](Self::send_chat_with_model).
    pub async fn send_chat<T>(
        &self,
        messages: Vec<Message>,
        temperature: Option<f64>,
    ) -> ChatResult<T>
    where
        T: DeserializeOwned,
    {
        let model = self.config.model().clone();
        self.send_chat_with_model(messages, model, temperature).await
    }

    /// Send a conversation with an explicit model, overriding the default.
    ///
    /// Single attempt, no retries. The model's reply is expected to be a
    /// JSON document matching `T`; see [`decode_first_choice`] for the
    /// second decode stage and its failure kinds.
    ///
    /// An empty conversation is rejected with
    /// [`ChatError::EmptyConversation`] before any network activity.
    pub async fn send_chat_with_model<T>(
        &self,
        messages: Vec<Message>,
        model: ChatModel,
        temperature: Option<f64>,
    ) -> ChatResult<T>
    where
        T: DeserializeOwned,
    {
        if messages.is_empty() {
            return Err(ChatError::EmptyConversation);
        }

        let mut request = ChatRequest::new(model.as_str(), messages);
        if let Some(temperature) = temperature {
            request = request.with_temperature(temperature);
        }

        debug!(
            model = %model,
            messages = request.messages.len(),
            "sending chat completion request"
        );

        let response = self
            .client
            .post(self.config.endpoint().clone())
            .headers(self.build_headers()?)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            warn!(status = status.as_u16(), "chat completion request rejected");
            return Err(ChatError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body = response.text().await?;
        let envelope: ChatResponse =
            serde_json::from_str(&body).map_err(ChatError::MalformedEnvelope)?;

        let decoded = decode_first_choice(&envelope)?;
        debug!(model = %model, "chat completion decoded");
        Ok(decoded)
    }
}

/// Decode the first completion choice's content into `T`
///
/// This is the second stage of the two-stage decode: the envelope has
/// already parsed, and the first choice's message content is treated as a
/// nested JSON document. An envelope with no choices fails with
/// [`ChatError::BadResponse`]; content that is not valid JSON for `T`
/// fails with [`ChatError::ContentDecode`].
pub fn decode_first_choice<T>(envelope: &ChatResponse) -> ChatResult<T>
where
    T: DeserializeOwned,
{
    let content = envelope.first_content().ok_or(ChatError::BadResponse)?;
    serde_json::from_str(content).map_err(ChatError::ContentDecode)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::Choice;
    use serde::Deserialize;

    #[derive(Debug, PartialEq, Deserialize)]
    struct Reply {
        answer: String,
    }

    fn envelope(content: &str) -> ChatResponse {
        ChatResponse {
            choices: vec![Choice {
                message: Message::assistant(content),
            }],
        }
    }

    #[test]
    fn test_decode_first_choice_valid_content() {
        let reply: Reply = decode_first_choice(&envelope(r#"{"answer":"42"}"#)).unwrap();
        assert_eq!(
            reply,
            Reply {
                answer: "42".to_string()
            }
        );
    }

    #[test]
    fn test_decode_first_choice_empty_choices() {
        let empty = ChatResponse { choices: vec![] };
        let result: ChatResult<Reply> = decode_first_choice(&empty);
        assert!(matches!(result, Err(ChatError::BadResponse)));
    }

    #[test]
    fn test_decode_first_choice_plain_text_content() {
        let result: ChatResult<Reply> = decode_first_choice(&envelope("not json"));
        assert!(matches!(result, Err(ChatError::ContentDecode(_))));
    }

    #[test]
    fn test_decode_first_choice_schema_mismatch() {
        // Valid JSON, but missing the required `answer` field
        let result: ChatResult<Reply> = decode_first_choice(&envelope(r#"{"other":1}"#));
        assert!(matches!(result, Err(ChatError::ContentDecode(_))));
    }

    #[test]
    fn test_only_first_choice_is_consulted() {
        let envelope = ChatResponse {
            choices: vec![
                Choice {
                    message: Message::assistant(r#"{"answer":"first"}"#),
                },
                Choice {
                    message: Message::assistant(r#"{"answer":"second"}"#),
                },
            ],
        };
        let reply: Reply = decode_first_choice(&envelope).unwrap();
        assert_eq!(reply.answer, "first");
    }
}
