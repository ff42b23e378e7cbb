//! Configuration module unit tests

use chatgateway::config::settings::Settings;
use std::env;
use std::sync::Mutex;

/// Settings::new reads process-global environment; serialize the tests
static ENV_LOCK: Mutex<()> = Mutex::new(());

/// Setup test environment variables
fn setup_test_env() {
    env::set_var("GATEWAY_URL", "https://gw.example.com");
    env::set_var("GATEWAY_API_KEY", "sk-test-key-12345678901234567890");
    env::set_var("RUST_LOG", "info");
    env::set_var("LOG_FORMAT", "text");
}

/// Clean up test environment variables
fn cleanup_test_env() {
    for var in ["GATEWAY_URL", "GATEWAY_API_KEY", "RUST_LOG", "LOG_FORMAT"] {
        env::remove_var(var);
    }
}

#[test]
fn test_settings_creation_with_valid_env() {
    let _guard = ENV_LOCK.lock().unwrap();
    setup_test_env();

    let settings = Settings::new().expect("Failed to create settings");
    assert_eq!(settings.gateway.endpoint, "https://gw.example.com");
    assert_eq!(settings.gateway.api_key, "sk-test-key-12345678901234567890");
    assert_eq!(settings.logging.level, "info");
    assert_eq!(settings.logging.format, "text");
    assert!(!settings.is_placeholder());

    cleanup_test_env();
}

#[test]
fn test_settings_creation_missing_api_key() {
    let _guard = ENV_LOCK.lock().unwrap();
    cleanup_test_env();
    env::set_var("GATEWAY_URL", "https://gw.example.com");

    let settings = Settings::new();
    assert!(settings.is_err());

    cleanup_test_env();
}

#[test]
fn test_settings_rejects_invalid_endpoint() {
    let _guard = ENV_LOCK.lock().unwrap();
    setup_test_env();
    env::set_var("GATEWAY_URL", "not-a-url");

    let settings = Settings::new();
    assert!(settings.is_err());

    cleanup_test_env();
}

#[test]
fn test_settings_rejects_whitespace_in_key() {
    let _guard = ENV_LOCK.lock().unwrap();
    setup_test_env();
    env::set_var("GATEWAY_API_KEY", "sk-key with spaces");

    let settings = Settings::new();
    assert!(settings.is_err());

    cleanup_test_env();
}

#[test]
fn test_settings_rejects_invalid_log_level() {
    let _guard = ENV_LOCK.lock().unwrap();
    setup_test_env();
    env::set_var("RUST_LOG", "verbose");

    let settings = Settings::new();
    assert!(settings.is_err());

    cleanup_test_env();
}

#[test]
fn test_settings_default_endpoint_is_placeholder() {
    let _guard = ENV_LOCK.lock().unwrap();
    cleanup_test_env();
    env::set_var("GATEWAY_API_KEY", "sk-test-key-12345678901234567890");

    let settings = Settings::new().expect("Failed to create settings");
    assert!(settings.is_placeholder());

    cleanup_test_env();
}
