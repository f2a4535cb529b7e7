//! Client error types and handling

use thiserror::Error;

/// Result type for chat client operations
pub type ChatResult<T> = Result<T, ChatError>;

/// Errors that can occur when sending a chat completion
///
/// Each stage of the pipeline fails with its own kind so callers can tell
/// them apart: a transport failure, a response body that is not the
/// expected envelope, an envelope with no usable completion, and a model
/// reply that did not parse as the requested type are four different
/// conditions. None are retried internally.
#[derive(Debug, Error)]
pub enum ChatError {
    /// The request could not be sent or no response was received
    /// (network failure, timeout, cancellation)
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The response body did not parse as the expected envelope shape
    #[error("Malformed response envelope: {0}")]
    MalformedEnvelope(#[source] serde_json::Error),

    /// The envelope parsed but contained zero completion choices
    #[error("Response contained no completion choices")]
    BadResponse,

    /// The first choice's content was not valid JSON, or did not match
    /// the caller's requested type
    #[error("Failed to decode completion content: {0}")]
    ContentDecode(#[source] serde_json::Error),

    /// The backend rejected the request with a non-success status
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// The conversation was empty; rejected before any network activity
    #[error("Conversation must contain at least one message")]
    EmptyConversation,
}
