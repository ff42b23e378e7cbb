//! Chat Gateway Client Library
//!
//! Provides a client for a chat gateway proxying requests to a
//! language-model API, with uniform failure normalization

pub mod config;
pub mod demos;
pub mod models;
pub mod services;
pub mod utils;

// Re-export common types
pub use config::Settings;
pub use models::{ChatData, ChatOptions, ChatRequest, ChatResponse, ErrorCode, TokenUsage};
pub use services::{ClientConfig, GatewayClient};
pub use utils::error::{ClientError, ClientResult};

/// Library version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Library description
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");

/// Get version information
pub fn version_info() -> String {
    format!("{} v{} - {}", NAME, VERSION, DESCRIPTION)
}
