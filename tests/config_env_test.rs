//! Config environment variable tests
//!
//! These tests verify that Config::from_env() correctly reads and applies
//! environment variable overrides. Note that Config::from_env() also loads
//! from .env file via dotenvy, so these tests focus on override behavior.
//!
//! Tests use #[serial] to prevent race conditions with shared env vars.

use misinfo_checker::config::{Config, LogFormat};
use serial_test::serial;
use std::env;

#[test]
#[serial]
fn test_config_from_env_defaults() {
    env::remove_var("BACKEND_URL");
    env::remove_var("GATEWAY_BIND");
    env::remove_var("DEMO_API_KEY");
    env::remove_var("REQUEST_TIMEOUT_MS");

    let config = Config::from_env().unwrap();
    assert_eq!(config.backend.base_url, "http://127.0.0.1:8000");
    assert_eq!(config.backend.demo_api_key, "demo_key");
    assert_eq!(config.server.bind, "127.0.0.1:3000");
    assert_eq!(config.request.timeout_ms, 30000);
    assert_eq!(config.logging.format, LogFormat::Pretty);
}

#[test]
#[serial]
fn test_config_from_env_custom_backend_url() {
    env::set_var("BACKEND_URL", "https://analysis.example.com");

    let config = Config::from_env().unwrap();
    assert_eq!(config.backend.base_url, "https://analysis.example.com");

    env::remove_var("BACKEND_URL");
}

#[test]
#[serial]
fn test_config_from_env_rejects_blank_backend_url() {
    env::set_var("BACKEND_URL", "   ");

    let result = Config::from_env();
    assert!(result.is_err(), "blank BACKEND_URL should be rejected");

    env::remove_var("BACKEND_URL");
}

#[test]
#[serial]
fn test_config_from_env_custom_bind_and_key() {
    env::set_var("GATEWAY_BIND", "0.0.0.0:8080");
    env::set_var("DEMO_API_KEY", "basic_key");

    let config = Config::from_env().unwrap();
    assert_eq!(config.server.bind, "0.0.0.0:8080");
    assert_eq!(config.backend.demo_api_key, "basic_key");

    env::remove_var("GATEWAY_BIND");
    env::remove_var("DEMO_API_KEY");
}

#[test]
#[serial]
fn test_config_from_env_json_log_format() {
    env::set_var("LOG_FORMAT", "json");

    let config = Config::from_env().unwrap();
    assert_eq!(config.logging.format, LogFormat::Json);

    env::set_var("LOG_FORMAT", "pretty");
}

#[test]
#[serial]
fn test_config_from_env_custom_timeout() {
    env::set_var("REQUEST_TIMEOUT_MS", "60000");

    let config = Config::from_env().unwrap();
    assert_eq!(config.request.timeout_ms, 60000);

    env::remove_var("REQUEST_TIMEOUT_MS");
}

#[test]
#[serial]
fn test_config_from_env_invalid_timeout_falls_back() {
    env::set_var("REQUEST_TIMEOUT_MS", "not-a-number");

    let config = Config::from_env().unwrap();
    assert_eq!(config.request.timeout_ms, 30000);

    env::remove_var("REQUEST_TIMEOUT_MS");
}
