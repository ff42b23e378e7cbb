//! Chat gateway data models
//!
//! Defines the wire structures exchanged with the chat gateway

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Default model identifier requested when the caller does not pick one
pub const DEFAULT_MODEL: &str = "default-chat-model";

/// Default sampling temperature
pub const DEFAULT_TEMPERATURE: f64 = 0.7;

/// Default generation cap in tokens
pub const DEFAULT_MAX_TOKENS: u32 = 1000;

/// Chat request payload sent to `POST {endpoint}/chat`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatRequest {
    /// Credential forwarded to the underlying provider
    #[serde(rename = "apiKey")]
    pub api_key: String,
    /// Message text
    pub message: String,
    /// Model identifier
    pub model: String,
    /// Sampling temperature
    pub temperature: f64,
    /// Maximum tokens to generate
    pub max_tokens: u32,
}

/// Per-call generation parameters
///
/// Values are passed through to the gateway unvalidated; range checks
/// are the gateway's responsibility.
#[derive(Debug, Clone)]
pub struct ChatOptions {
    /// Model identifier
    pub model: String,
    /// Sampling temperature
    pub temperature: f64,
    /// Maximum tokens to generate
    pub max_tokens: u32,
}

impl Default for ChatOptions {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            temperature: DEFAULT_TEMPERATURE,
            max_tokens: DEFAULT_MAX_TOKENS,
        }
    }
}

impl ChatOptions {
    /// Options with a custom temperature and token cap, default model
    pub fn sampling(temperature: f64, max_tokens: u32) -> Self {
        Self {
            temperature,
            max_tokens,
            ..Default::default()
        }
    }
}

/// Chat response body, tagged by the `success` flag
///
/// Both wire shapes carry `success`; the remaining fields differ, which
/// is what the untagged deserialization keys on.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ChatResponse {
    /// Successful completion
    Success {
        /// Always `true` on this variant
        success: bool,
        /// Completion payload
        data: ChatData,
    },
    /// Failure, either synthesized by the client or sent by the gateway
    Failure {
        /// Always `false` on this variant
        success: bool,
        /// Human-readable description
        error: String,
        /// Machine-readable code
        code: ErrorCode,
    },
}

impl ChatResponse {
    /// Build a failure response
    pub fn failure(error: impl Into<String>, code: ErrorCode) -> Self {
        ChatResponse::Failure {
            success: false,
            error: error.into(),
            code,
        }
    }

    /// Whether the call succeeded
    pub fn is_success(&self) -> bool {
        matches!(self, ChatResponse::Success { .. })
    }

    /// Completion payload, if any
    pub fn data(&self) -> Option<&ChatData> {
        match self {
            ChatResponse::Success { data, .. } => Some(data),
            ChatResponse::Failure { .. } => None,
        }
    }
}

/// Completion payload of a successful chat response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatData {
    /// Generated reply text
    pub message: String,
    /// Model that actually served the request
    pub model: String,
    /// Token accounting
    pub usage: TokenUsage,
}

/// Token usage reported by the gateway
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenUsage {
    /// Total tokens consumed by the call
    pub total_tokens: u64,
    /// Additional provider-specific counters, preserved as-is
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Error codes appearing in failure responses
///
/// `RequestFailed` and `JsonDecodeError` are the only codes the client
/// layer itself produces; any other string originates from the gateway
/// and is preserved through the `Other` variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorCode {
    /// Network-layer failure: connection, DNS, timeout, non-2xx status
    #[serde(rename = "REQUEST_FAILED")]
    RequestFailed,
    /// Response body was not valid JSON of the expected shape
    #[serde(rename = "JSON_DECODE_ERROR")]
    JsonDecodeError,
    /// Gateway-originated code, passed through unmodified
    #[serde(untagged)]
    Other(String),
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorCode::RequestFailed => write!(f, "REQUEST_FAILED"),
            ErrorCode::JsonDecodeError => write!(f, "JSON_DECODE_ERROR"),
            ErrorCode::Other(code) => write!(f, "{}", code),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_chat_options_defaults() {
        let opts = ChatOptions::default();
        assert_eq!(opts.model, "default-chat-model");
        assert_eq!(opts.temperature, 0.7);
        assert_eq!(opts.max_tokens, 1000);
    }

    #[test]
    fn test_request_uses_api_key_wire_name() {
        let request = ChatRequest {
            api_key: "sk-test".to_string(),
            message: "hello".to_string(),
            model: DEFAULT_MODEL.to_string(),
            temperature: 0.7,
            max_tokens: 1000,
        };

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["apiKey"], "sk-test");
        assert!(value.get("api_key").is_none());
    }

    #[test]
    fn test_response_tagging() {
        let success: ChatResponse = serde_json::from_value(json!({
            "success": true,
            "data": {"message": "hi", "model": "m", "usage": {"total_tokens": 5}}
        }))
        .unwrap();
        assert!(success.is_success());

        let failure: ChatResponse = serde_json::from_value(json!({
            "success": false,
            "error": "boom",
            "code": "REQUEST_FAILED"
        }))
        .unwrap();
        assert!(!failure.is_success());
        assert!(failure.data().is_none());
    }

    #[test]
    fn test_unknown_error_code_preserved() {
        let code: ErrorCode = serde_json::from_value(json!("UPSTREAM_OVERLOADED")).unwrap();
        assert_eq!(code, ErrorCode::Other("UPSTREAM_OVERLOADED".to_string()));
        assert_eq!(code.to_string(), "UPSTREAM_OVERLOADED");
    }
}
