//! Service layer module
//!
//! Contains the chat gateway HTTP client

pub mod client;

pub use client::{ClientConfig, GatewayClient, CHAT_TIMEOUT, INFO_TIMEOUT};
