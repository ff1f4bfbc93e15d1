/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use crate::constants::{
    DEFAULT_BASE_URL, DEFAULT_MAX_RETRIES, DEFAULT_RETRY_DELAY_SECS, DEFAULT_TIMEOUT_SECS,
};
use crate::error::AppError;
use crate::model::retry::RetryPolicy;
use crate::utils::config::{get_env_flag, get_env_or_default, get_env_string};
use dotenv::dotenv;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use reqwest::Url;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
/// Optional settings for the Relayo client
pub struct ClientOptions {
    /// Timeout in seconds passed to the underlying HTTP transport, `0` disables it (default: 30)
    pub timeout: u64,
    /// Number of retries after a connection failure (default: 3)
    pub max_retries: u32,
    /// Base delay in seconds between retries (default: 1)
    pub retry_delay: u64,
    /// Doubles the delay after each failed attempt (default: true)
    pub exponential_backoff: bool,
    /// Logs method, URI and headers before each request (default: false)
    pub log_requests: bool,
    /// Logs status and headers after each response (default: false)
    pub log_responses: bool,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT_SECS,
            max_retries: DEFAULT_MAX_RETRIES,
            retry_delay: DEFAULT_RETRY_DELAY_SECS,
            exponential_backoff: true,
            log_requests: false,
            log_responses: false,
        }
    }
}

#[derive(DebugPretty, DisplaySimple, Serialize, Clone, PartialEq)]
/// Validated, immutable client configuration
pub struct Config {
    base_url: String,
    options: ClientOptions,
}

impl Config {
    /// Creates a configuration with default options
    ///
    /// # Errors
    /// Returns `AppError::InvalidConfig` if `base_url` is not an absolute http(s) URL
    pub fn new(base_url: &str) -> Result<Self, AppError> {
        Self::with_options(base_url, ClientOptions::default())
    }

    /// Creates a configuration with explicit options
    ///
    /// # Errors
    /// Returns `AppError::InvalidConfig` if `base_url` is not an absolute http(s) URL
    pub fn with_options(base_url: &str, options: ClientOptions) -> Result<Self, AppError> {
        validate_base_url(base_url)?;
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            options,
        })
    }

    /// Builds the configuration from the environment (and a `.env` file if present)
    ///
    /// Reads `RELAYO_BASE_URL`, `RELAYO_TIMEOUT`, `RELAYO_MAX_RETRIES`,
    /// `RELAYO_RETRY_DELAY`, `RELAYO_EXPONENTIAL_BACKOFF`, `RELAYO_LOG_REQUESTS`
    /// and `RELAYO_LOG_RESPONSES`.
    pub fn from_env() -> Result<Self, AppError> {
        match dotenv() {
            Ok(_) => debug!("Successfully loaded .env file"),
            Err(e) => debug!("Failed to load .env file: {e}"),
        }

        let base_url =
            get_env_string("RELAYO_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let options = ClientOptions {
            timeout: get_env_or_default("RELAYO_TIMEOUT", DEFAULT_TIMEOUT_SECS),
            max_retries: get_env_or_default("RELAYO_MAX_RETRIES", DEFAULT_MAX_RETRIES),
            retry_delay: get_env_or_default("RELAYO_RETRY_DELAY", DEFAULT_RETRY_DELAY_SECS),
            exponential_backoff: get_env_flag("RELAYO_EXPONENTIAL_BACKOFF", true),
            log_requests: get_env_flag("RELAYO_LOG_REQUESTS", false),
            log_responses: get_env_flag("RELAYO_LOG_RESPONSES", false),
        };

        Self::with_options(&base_url, options)
    }

    /// Base URL without trailing slashes
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Request timeout, `None` when disabled with `0`
    #[must_use]
    pub fn timeout(&self) -> Option<Duration> {
        (self.options.timeout > 0).then(|| Duration::from_secs(self.options.timeout))
    }

    /// Number of retries after a connection failure
    #[must_use]
    pub fn max_retries(&self) -> u32 {
        self.options.max_retries
    }

    /// Base delay between retries
    #[must_use]
    pub fn retry_delay(&self) -> Duration {
        Duration::from_secs(self.options.retry_delay)
    }

    /// Whether the delay doubles after each failed attempt
    #[must_use]
    pub fn use_exponential_backoff(&self) -> bool {
        self.options.exponential_backoff
    }

    /// Whether requests are logged before being sent
    #[must_use]
    pub fn should_log_requests(&self) -> bool {
        self.options.log_requests
    }

    /// Whether responses are logged after being received
    #[must_use]
    pub fn should_log_responses(&self) -> bool {
        self.options.log_responses
    }

    /// All options
    #[must_use]
    pub fn options(&self) -> &ClientOptions {
        &self.options
    }

    /// Retry policy derived from the options
    #[must_use]
    pub fn retry_policy(&self) -> RetryPolicy {
        RetryPolicy::new(
            self.max_retries(),
            self.retry_delay(),
            self.use_exponential_backoff(),
        )
    }
}

fn validate_base_url(base_url: &str) -> Result<(), AppError> {
    let invalid = || AppError::InvalidConfig(format!("invalid base URL: {base_url}"));
    let url = Url::parse(base_url).map_err(|_| invalid())?;
    if !matches!(url.scheme(), "http" | "https") || url.host_str().is_none() {
        return Err(invalid());
    }
    Ok(())
}
