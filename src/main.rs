//! Chat Gateway Client demo
//!
//! Sends a series of chat requests to a remote chat gateway and prints
//! formatted results

use anyhow::{Context, Result};
use chrono::Local;
use tracing::info;

mod config;
mod demos;
mod models;
mod services;
mod utils;

use config::Settings;
use services::client::{ClientConfig, GatewayClient};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    init_logging();

    // Load settings from environment
    let settings = Settings::new().context("Failed to load settings")?;
    info!("Settings loaded");

    if settings.is_placeholder() {
        println!("⚠️  Please set GATEWAY_URL and GATEWAY_API_KEY before running the demo");
        return Ok(());
    }

    // Create client
    let client = GatewayClient::new(ClientConfig::new(
        settings.gateway.endpoint,
        settings.gateway.api_key,
    ))?;

    println!("🚀 Chat gateway demo - {}", Local::now().format("%Y-%m-%d %H:%M:%S"));
    println!("{}", "=".repeat(50));

    // Fetch and print service metadata
    let api_info = client.fetch_service_info().await;
    if api_info.get("error").is_none() {
        println!("Gateway name: {}", field_or_na(&api_info, "name"));
        println!("Version: {}", field_or_na(&api_info, "version"));
        println!("Description: {}", field_or_na(&api_info, "description"));
        println!();
    }

    demos::run_all(&client).await;

    println!("{}", "=".repeat(50));
    println!("🏁 Demo finished");

    Ok(())
}

/// Read an optional string field from the service info payload
fn field_or_na(info: &serde_json::Value, key: &str) -> String {
    info.get(key)
        .and_then(|v| v.as_str())
        .unwrap_or("N/A")
        .to_string()
}

/// Initialize logging system
fn init_logging() {
    // Get log level from environment variable, default to info
    let log_level = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());

    // Check if JSON format should be used
    let log_format = std::env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

    let subscriber: Box<dyn tracing::Subscriber + Send + Sync> = if log_format == "json" {
        // JSON format logs (production environment)
        Box::new(
            tracing_subscriber::fmt()
                .with_env_filter(log_level)
                .json()
                .with_current_span(false)
                .with_span_list(false)
                .finish(),
        )
    } else {
        // Human readable format (development environment)
        Box::new(
            tracing_subscriber::fmt()
                .with_env_filter(log_level)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .finish(),
        )
    };

    tracing::subscriber::set_global_default(subscriber)
        .expect("Failed to set tracing subscriber");
}
