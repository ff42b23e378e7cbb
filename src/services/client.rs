//! HTTP client service
//!
//! Encapsulates HTTP communication with the chat gateway

use crate::models::chat::{ChatOptions, ChatRequest, ChatResponse};
use crate::utils::error::{ClientError, ClientResult};
use anyhow::{Context, Result};
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use reqwest::Client;
use serde_json::{json, Value};
use std::time::Duration;
use tracing::{debug, warn};

/// Timeout for the service info endpoint
pub const INFO_TIMEOUT: Duration = Duration::from_secs(10);

/// Timeout for chat completions
pub const CHAT_TIMEOUT: Duration = Duration::from_secs(30);

/// Client configuration, immutable after construction
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Gateway base URL, trailing slashes stripped
    pub endpoint: String,
    /// API key forwarded in every chat payload
    pub api_key: String,
}

impl ClientConfig {
    /// Create a configuration, normalizing the endpoint
    pub fn new(endpoint: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
        }
    }
}

/// Chat gateway client
///
/// Holds one reusable HTTP connection and normalizes every failure mode
/// into tagged response data. Each call is a single stateless round trip:
/// no retries, no caching, no state shared between calls beyond the
/// immutable configuration.
#[derive(Debug, Clone)]
pub struct GatewayClient {
    client: Client,
    config: ClientConfig,
}

impl GatewayClient {
    /// Create a new client instance
    pub fn new(config: ClientConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let client = Client::builder()
            .default_headers(headers)
            .user_agent("chatgateway/0.1.0")
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self { client, config })
    }

    /// Fetch service metadata from `GET {endpoint}/`
    ///
    /// Returns the parsed JSON body unmodified. Transport and decode
    /// failures come back as `{"error": "..."}` instead of an `Err`.
    pub async fn fetch_service_info(&self) -> Value {
        debug!("Fetching gateway service info");

        match self.try_fetch_service_info().await {
            Ok(info) => info,
            Err(e) => {
                warn!("Failed to fetch service info: {}", e);
                json!({ "error": format!("Failed to fetch service info: {}", e) })
            }
        }
    }

    /// Send a chat message with default generation parameters
    pub async fn send_chat(&self, message: &str) -> ChatResponse {
        self.send_chat_with(message, ChatOptions::default()).await
    }

    /// Send a chat message to `POST {endpoint}/chat`
    ///
    /// Never returns an `Err`: transport failures and non-2xx statuses
    /// collapse to a `REQUEST_FAILED` failure, undecodable bodies to
    /// `JSON_DECODE_ERROR`. A failure payload sent by the gateway itself
    /// passes through unmodified.
    pub async fn send_chat_with(&self, message: &str, opts: ChatOptions) -> ChatResponse {
        debug!(model = %opts.model, "Sending chat request");

        match self.try_send_chat(message, opts).await {
            Ok(response) => response,
            Err(e) => {
                warn!("Chat request failed: {}", e);
                e.into()
            }
        }
    }

    async fn try_fetch_service_info(&self) -> ClientResult<Value> {
        let response = self
            .client
            .get(&self.config.endpoint)
            .timeout(INFO_TIMEOUT)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ClientError::Status { status, body });
        }

        let text = response.text().await?;
        let info = serde_json::from_str(&text)?;

        debug!("Service info request completed");
        Ok(info)
    }

    async fn try_send_chat(&self, message: &str, opts: ChatOptions) -> ClientResult<ChatResponse> {
        let url = format!("{}/chat", self.config.endpoint);

        let payload = ChatRequest {
            api_key: self.config.api_key.clone(),
            message: message.to_string(),
            model: opts.model,
            temperature: opts.temperature,
            max_tokens: opts.max_tokens,
        };

        let response = self
            .client
            .post(&url)
            .timeout(CHAT_TIMEOUT)
            .json(&payload)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ClientError::Status { status, body });
        }

        // Read the body as text first so a malformed body maps to a
        // decode failure rather than a transport one.
        let text = response.text().await?;
        let parsed: ChatResponse = serde_json::from_str(&text)?;

        debug!("Chat request completed");
        Ok(parsed)
    }

    /// Configuration this client was built with
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }
}
