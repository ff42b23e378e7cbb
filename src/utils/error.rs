//! Error handling module
//!
//! Defines the internal error types behind the client's failure normalization

use crate::models::chat::{ChatResponse, ErrorCode};
use thiserror::Error;

/// Errors the client layer can hit while talking to the gateway
///
/// These never cross the public API: `GatewayClient` collapses them into
/// tagged failure data so callers branch on a flag instead of catching
/// transport errors.
#[derive(Error, Debug)]
pub enum ClientError {
    /// Network-layer failure: connection refused, DNS, timeout
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Gateway answered with a non-2xx status
    #[error("Request failed: HTTP {status}: {body}")]
    Status {
        /// Response status
        status: reqwest::StatusCode,
        /// Response body, possibly empty
        body: String,
    },

    /// Response body was not the expected JSON
    #[error("JSON decode failed: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ClientError {
    /// Machine-readable code for this failure class
    pub fn code(&self) -> ErrorCode {
        match self {
            ClientError::Transport(_) | ClientError::Status { .. } => ErrorCode::RequestFailed,
            ClientError::Decode(_) => ErrorCode::JsonDecodeError,
        }
    }
}

impl From<ClientError> for ChatResponse {
    fn from(err: ClientError) -> Self {
        let code = err.code();
        ChatResponse::failure(err.to_string(), code)
    }
}

/// Result type alias for fallible client internals
pub type ClientResult<T> = Result<T, ClientError>;
