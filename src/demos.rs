//! Demo scenarios
//!
//! Sequential demonstration flows layered on top of `GatewayClient`.
//! These are plain callers of the client: they branch on the tagged
//! response and print, nothing more.

use crate::models::chat::{ChatOptions, ChatResponse};
use crate::services::client::GatewayClient;
use std::time::Duration;
use tracing::info;

/// Pacing delay between successive demo calls, to avoid hammering the
/// gateway. Caller policy only - the client itself never sleeps.
const PACING_DELAY: Duration = Duration::from_secs(1);

/// Print the outcome of a chat call
///
/// `preview_len` truncates long replies; `None` prints the full text.
fn print_outcome(response: &ChatResponse, preview_len: Option<usize>) {
    match response {
        ChatResponse::Success { data, .. } => {
            let reply = match preview_len {
                Some(len) if data.message.chars().count() > len => {
                    let preview: String = data.message.chars().take(len).collect();
                    format!("{}...", preview)
                }
                _ => data.message.clone(),
            };
            println!("AI: {}", reply);
            println!("Model: {}", data.model);
            println!("Token usage: {}", data.usage.total_tokens);
        }
        ChatResponse::Failure { error, code, .. } => {
            println!("Error [{}]: {}", code, error);
        }
    }
}

/// Basic chat with default parameters
pub async fn basic_chat(client: &GatewayClient) {
    println!("🤖 Basic chat");
    println!("{}", "-".repeat(40));

    let response = client
        .send_chat("Hello! Please introduce yourself briefly.")
        .await;
    print_outcome(&response, None);

    println!();
}

/// Creative writing at a higher temperature
pub async fn creative_writing(client: &GatewayClient) {
    println!("✍️ Creative writing");
    println!("{}", "-".repeat(40));

    let response = client
        .send_chat_with(
            "Write a short poem about artificial intelligence.",
            ChatOptions::sampling(0.9, 200),
        )
        .await;
    print_outcome(&response, None);

    println!();
}

/// Technical Q&A at a low temperature for precise answers
pub async fn technical_qa(client: &GatewayClient) {
    println!("💻 Technical Q&A");
    println!("{}", "-".repeat(40));

    let questions = [
        "What is a REST API?",
        "Explain what cloud computing is.",
        "What is the difference between Rust and JavaScript?",
    ];

    for (i, question) in questions.iter().enumerate() {
        println!("Question {}: {}", i + 1, question);

        let response = client
            .send_chat_with(question, ChatOptions::sampling(0.3, 300))
            .await;
        print_outcome(&response, Some(200));

        println!();
        tokio::time::sleep(PACING_DELAY).await;
    }
}

/// Multi-turn conversation with client-side context
///
/// The gateway keeps no history between requests, so the recent turns
/// are spliced into each prompt.
pub async fn conversation_context(client: &GatewayClient) {
    println!("💬 Multi-turn conversation");
    println!("{}", "-".repeat(40));

    // Window of recent turns carried into each prompt
    const HISTORY_WINDOW: usize = 6;

    let mut history: Vec<String> = Vec::new();

    let messages = [
        "I want to learn machine learning, any advice?",
        "My math background is average, will that be a problem?",
        "Recommend some resources for beginners.",
    ];

    for message in &messages {
        history.push(format!("User: {}", message));

        let window_start = history.len().saturating_sub(HISTORY_WINDOW);
        let context = history[window_start..].join("\n");

        println!("User: {}", message);

        let response = client
            .send_chat_with(
                &format!(
                    "Answer the latest question given this conversation history:\n{}\n\nPlease answer the last question:",
                    context
                ),
                ChatOptions::sampling(0.7, 400),
            )
            .await;

        match &response {
            ChatResponse::Success { data, .. } => {
                println!("AI: {}", data.message);
                history.push(format!("AI: {}", data.message));
                println!("Token usage: {}", data.usage.total_tokens);
            }
            ChatResponse::Failure { error, code, .. } => {
                println!("Error [{}]: {}", code, error);
            }
        }

        println!("{}", "-".repeat(20));
        tokio::time::sleep(PACING_DELAY).await;
    }
}

/// Run all demo scenarios in order
pub async fn run_all(client: &GatewayClient) {
    info!("Running demo scenarios");

    basic_chat(client).await;
    creative_writing(client).await;
    technical_qa(client).await;
    conversation_context(client).await;
}
