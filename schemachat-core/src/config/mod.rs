//! Client configuration
//!
//! Configuration is supplied once at construction and is read-only for the
//! client's lifetime: the bearer credential (wrapped in [`SecretString`] so
//! it never leaks through Debug output or logs), the default model, the
//! target endpoint, and the transport timeout.

pub mod secrets;

pub use secrets::SecretString;

use crate::client::{ChatError, ChatResult};
use crate::protocol::ChatModel;
use std::env;
use std::sync::LazyLock;
use std::time::Duration;
use url::Url;

/// Default hosted chat-completions endpoint
pub const DEFAULT_ENDPOINT: &str = "https://api.openai.com/v1/chat/completions";

/// Parsed form of [`DEFAULT_ENDPOINT`], validated once on first use
static DEFAULT_ENDPOINT_URL: LazyLock<Url> =
    LazyLock::new(|| Url::parse(DEFAULT_ENDPOINT).expect("default endpoint is a valid URL"));

/// Environment variable consulted by [`ClientConfig::from_env`]
pub const API_KEY_ENV_VAR: &str = "OPENAI_API_KEY";

/// Default transport-level request timeout in seconds
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Configuration held by a [`ChatClient`](crate::client::ChatClient) for its lifetime
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Bearer credential, redacted in Debug output
    pub(crate) api_key: SecretString,

    /// Model used when a call does not override it
    pub(crate) model: ChatModel,

    /// Target completions endpoint
    pub(crate) endpoint: Url,

    /// Transport-level request timeout
    pub(crate) timeout: Duration,
}

impl ClientConfig {
    /// Create a configuration targeting the default hosted endpoint.
    pub fn new(api_key: impl Into<SecretString>, model: ChatModel) -> Self {
        Self {
            api_key: api_key.into(),
            model,
            endpoint: DEFAULT_ENDPOINT_URL.clone(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    /// Create a configuration reading the credential from `OPENAI_API_KEY`.
    pub fn from_env(model: ChatModel) -> ChatResult<Self> {
        let api_key = env::var(API_KEY_ENV_VAR).map_err(|_| {
            ChatError::Configuration(format!(
                "environment variable {} is not set",
                API_KEY_ENV_VAR
            ))
        })?;
        Ok(Self::new(api_key, model))
    }

    /// Override the completions endpoint.
    ///
    /// Supports testing against a mock server and pointing the client at an
    /// alternative compatible backend. A malformed URL is the only way
    /// configuration of an endpoint can fail.
    pub fn with_endpoint(mut self, endpoint: &str) -> ChatResult<Self> {
        self.endpoint = Url::parse(endpoint).map_err(|e| {
            ChatError::Configuration(format!("invalid endpoint '{}': {}", endpoint, e))
        })?;
        Ok(self)
    }

    /// Override the transport-level request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// The configured default model
    pub fn model(&self) -> &ChatModel {
        &self.model
    }

    /// The configured completions endpoint
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// The configured request timeout
    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ClientConfig::new("sk-test", ChatModel::Gpt41Nano);
        assert_eq!(config.endpoint().as_str(), DEFAULT_ENDPOINT);
        assert_eq!(config.timeout(), Duration::from_secs(DEFAULT_TIMEOUT_SECS));
        assert_eq!(config.model(), &ChatModel::Gpt41Nano);
    }

    #[test]
    fn test_endpoint_override() {
        let config = ClientConfig::new("sk-test", ChatModel::Gpt41Nano)
            .with_endpoint("http://localhost:8080/v1/chat/completions")
            .unwrap();
        assert_eq!(
            config.endpoint().as_str(),
            "http://localhost:8080/v1/chat/completions"
        );
    }

    #[test]
    fn test_malformed_endpoint_is_rejected() {
        let result = ClientConfig::new("sk-test", ChatModel::Gpt41Nano)
            .with_endpoint("not a url");
        match result {
            Err(ChatError::Configuration(message)) => {
                assert!(message.contains("invalid endpoint"));
            }
            other => panic!("expected Configuration error, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn test_debug_output_redacts_credential() {
        let config = ClientConfig::new("sk-very-secret-key", ChatModel::Gpt41Nano);
        let debug = format!("{:?}", config);
        assert!(!debug.contains("sk-very-secret-key"));
        assert!(debug.contains("[REDACTED]"));
    }

    #[test]
    fn test_from_env_missing_var() {
        env::remove_var(API_KEY_ENV_VAR);
        let result = ClientConfig::from_env(ChatModel::Gpt41Nano);
        match result {
            Err(ChatError::Configuration(message)) => {
                assert!(message.contains(API_KEY_ENV_VAR));
            }
            other => panic!("expected Configuration error, got {:?}", other.map(|_| ())),
        }
    }
}
