//! Unit tests for configuration parsing
//!
//! Tests environment variable parsing and default values.
//!
//! Note: These tests modify global environment variables and must run serially.

use std::time::Duration;

use serial_test::serial;
use xless::config::{Config, ConfigError, DEFAULT_IMGBB_API_URL, DEFAULT_MAX_BODY_BYTES};

const VARS: &[&str] = &[
    "HOST",
    "PORT",
    "IMGBB_API_KEY",
    "IMGBB_API_URL",
    "SLACK_INCOMING_WEBHOOK",
    "PAYLOAD_PATH",
    "OUTBOUND_TIMEOUT_SECS",
    "MAX_BODY_BYTES",
];

fn clear_env() {
    for var in VARS {
        std::env::remove_var(var);
    }
}

#[test]
#[serial]
fn test_config_defaults() {
    clear_env();

    let config = Config::from_env().unwrap();

    assert_eq!(config.host, "0.0.0.0");
    assert_eq!(config.port, 3000);
    assert_eq!(config.imgbb.api_key, None);
    assert_eq!(config.imgbb.api_url, DEFAULT_IMGBB_API_URL);
    assert_eq!(config.slack.webhook_url, None);
    assert_eq!(config.payload_path, "pload.js");
    assert_eq!(config.outbound_timeout, Duration::from_secs(5));
    assert_eq!(config.max_body_bytes, DEFAULT_MAX_BODY_BYTES);
}

#[test]
#[serial]
fn test_config_custom_values() {
    clear_env();
    std::env::set_var("PORT", "8081");
    std::env::set_var("IMGBB_API_KEY", "abc123");
    std::env::set_var(
        "SLACK_INCOMING_WEBHOOK",
        "https://hooks.slack.com/services/T0/B0/X0",
    );
    std::env::set_var("PAYLOAD_PATH", "/srv/xless/pload.js");
    std::env::set_var("OUTBOUND_TIMEOUT_SECS", "2");
    std::env::set_var("MAX_BODY_BYTES", "1024");

    let config = Config::from_env().unwrap();

    assert_eq!(config.port, 8081);
    assert_eq!(config.imgbb.api_key.as_deref(), Some("abc123"));
    assert_eq!(
        config.slack.webhook_url.as_deref(),
        Some("https://hooks.slack.com/services/T0/B0/X0")
    );
    assert_eq!(config.payload_path, "/srv/xless/pload.js");
    assert_eq!(config.outbound_timeout, Duration::from_secs(2));
    assert_eq!(config.max_body_bytes, 1024);

    clear_env();
}

#[test]
#[serial]
fn test_config_invalid_port() {
    clear_env();
    std::env::set_var("PORT", "not-a-port");

    let result = Config::from_env();

    assert!(matches!(result, Err(ConfigError::InvalidPort)));

    clear_env();
}

#[test]
#[serial]
fn test_config_invalid_webhook_url() {
    clear_env();
    std::env::set_var("SLACK_INCOMING_WEBHOOK", "not a url");

    let result = Config::from_env();

    assert!(matches!(result, Err(ConfigError::InvalidWebhookUrl)));

    clear_env();
}

#[test]
#[serial]
fn test_config_non_slack_webhook_is_accepted() {
    clear_env();
    std::env::set_var("SLACK_INCOMING_WEBHOOK", "http://relay.internal/hook");

    let config = Config::from_env().unwrap();

    assert_eq!(
        config.slack.webhook_url.as_deref(),
        Some("http://relay.internal/hook")
    );

    clear_env();
}

#[test]
#[serial]
fn test_config_empty_values_count_as_unset() {
    clear_env();
    std::env::set_var("IMGBB_API_KEY", "");
    std::env::set_var("SLACK_INCOMING_WEBHOOK", "  ");

    let config = Config::from_env().unwrap();
    let flags = config.health_flags();

    assert!(!flags.imgbb_api_key);
    assert!(!flags.slack_incoming_webhook);
    assert!(!flags.all_present());

    clear_env();
}

#[test]
#[serial]
fn test_config_invalid_numbers_use_defaults() {
    clear_env();
    std::env::set_var("OUTBOUND_TIMEOUT_SECS", "soon");
    std::env::set_var("MAX_BODY_BYTES", "-5");

    let config = Config::from_env().unwrap();

    assert_eq!(config.outbound_timeout, Duration::from_secs(5));
    assert_eq!(config.max_body_bytes, DEFAULT_MAX_BODY_BYTES);

    clear_env();
}
