//! Data models module
//!
//! Defines the request and response structures of the chat gateway wire contract

pub mod chat;

pub use chat::{ChatData, ChatOptions, ChatRequest, ChatResponse, ErrorCode, TokenUsage};
