use relayo_client::config::{ClientOptions, Config};
use relayo_client::error::AppError;
use std::env;
use std::time::Duration;

#[test]
fn test_client_options_default() {
    let options = ClientOptions::default();
    assert_eq!(options.timeout, 30);
    assert_eq!(options.max_retries, 3);
    assert_eq!(options.retry_delay, 1);
    assert!(options.exponential_backoff);
    assert!(!options.log_requests);
    assert!(!options.log_responses);
}

#[test]
fn test_config_with_options() {
    let options = ClientOptions {
        timeout: 5,
        max_retries: 0,
        retry_delay: 3,
        exponential_backoff: false,
        log_requests: true,
        log_responses: true,
    };
    let config = Config::with_options("http://localhost:9000/", options.clone()).unwrap();

    assert_eq!(config.base_url(), "http://localhost:9000");
    assert_eq!(config.timeout(), Some(Duration::from_secs(5)));
    assert_eq!(config.max_retries(), 0);
    assert_eq!(config.retry_delay(), Duration::from_secs(3));
    assert!(!config.use_exponential_backoff());
    assert!(config.should_log_requests());
    assert!(config.should_log_responses());
    assert_eq!(config.options(), &options);
}

#[test]
fn test_config_rejects_relative_url() {
    let result = Config::new("/panel/application");
    assert!(matches!(result, Err(AppError::InvalidConfig(_))));
}

#[test]
fn test_config_serialization() {
    let config = Config::new("https://api.example.com").unwrap();
    let json = serde_json::to_value(&config).unwrap();
    assert_eq!(json["base_url"], "https://api.example.com");
    assert_eq!(json["options"]["max_retries"], 3);
}

#[test]
fn test_config_display_is_json() {
    let config = Config::new("https://api.example.com").unwrap();
    let display = format!("{}", config);
    assert!(display.contains("https://api.example.com"));
    assert!(display.contains("max_retries"));
}

#[test]
fn test_config_from_env() {
    unsafe {
        env::set_var("RELAYO_BASE_URL", "https://staging.example.com/");
        env::set_var("RELAYO_MAX_RETRIES", "7");
        env::set_var("RELAYO_EXPONENTIAL_BACKOFF", "off");
        env::set_var("RELAYO_TIMEOUT", "not_a_number");
    }

    let config = Config::from_env().unwrap();
    assert_eq!(config.base_url(), "https://staging.example.com");
    assert_eq!(config.max_retries(), 7);
    assert!(!config.use_exponential_backoff());
    assert_eq!(config.timeout(), Some(Duration::from_secs(30)));

    unsafe {
        env::remove_var("RELAYO_BASE_URL");
        env::remove_var("RELAYO_MAX_RETRIES");
        env::remove_var("RELAYO_EXPONENTIAL_BACKOFF");
        env::remove_var("RELAYO_TIMEOUT");
    }
}
