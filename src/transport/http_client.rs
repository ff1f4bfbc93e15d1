/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! Transport core shared by every resource service
//!
//! [`HttpClient`] builds requests against the configured base URL, injects the
//! fixed headers and the bearer token, retries transport failures with backoff
//! and turns error statuses into classified [`AppError`]s.

use crate::config::Config;
use crate::constants::{JSON_MEDIA_TYPE, USER_AGENT};
use crate::error::AppError;
use crate::model::http::{ApiRequest, ApiResponse};
use crate::transport::sender::HttpSend;
use reqwest::header::{
    ACCEPT, AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue, USER_AGENT as USER_AGENT_HEADER,
};
use reqwest::{Method, Url};
use serde::Serialize;
use serde_json::Value;
use std::sync::{Arc, RwLock};
use tracing::{debug, error, info, warn};

/// HTTP client for the Relayo API
///
/// Holds the bearer token. Once set, the token is sent on every request until it
/// is cleared. Calls are sequential: one request in flight per call, and the
/// retry loop suspends the calling task for the backoff delay between attempts.
pub struct HttpClient {
    config: Arc<Config>,
    sender: Arc<dyn HttpSend>,
    token: RwLock<Option<String>>,
}

impl HttpClient {
    /// Creates a new client over the given transport
    ///
    /// # Arguments
    /// * `config` - Validated client configuration
    /// * `sender` - Underlying HTTP transport
    pub fn new(config: Arc<Config>, sender: Arc<dyn HttpSend>) -> Self {
        Self {
            config,
            sender,
            token: RwLock::new(None),
        }
    }

    /// Returns the configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Makes a GET request, `query` is serialized into the query string
    pub async fn get<Q: Serialize + ?Sized>(
        &self,
        path: &str,
        query: &Q,
    ) -> Result<ApiResponse, AppError> {
        let query = serde_json::to_value(query)?;
        let url = self.build_url(path, &query)?;
        let request = self.build_request(Method::GET, url, None)?;
        self.send_request(request).await
    }

    /// Makes a POST request with a JSON body
    pub async fn post<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<ApiResponse, AppError> {
        let url = self.build_url(path, &Value::Null)?;
        let body = serde_json::to_vec(body)?;
        let request = self.build_request(Method::POST, url, Some(body))?;
        self.send_request(request).await
    }

    /// Makes a PUT request with a JSON body
    pub async fn put<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<ApiResponse, AppError> {
        let url = self.build_url(path, &Value::Null)?;
        let body = serde_json::to_vec(body)?;
        let request = self.build_request(Method::PUT, url, Some(body))?;
        self.send_request(request).await
    }

    /// Makes a DELETE request
    pub async fn delete(&self, path: &str) -> Result<ApiResponse, AppError> {
        let url = self.build_url(path, &Value::Null)?;
        let request = self.build_request(Method::DELETE, url, None)?;
        self.send_request(request).await
    }

    /// Sets the bearer token; an empty string clears it
    pub fn set_token(&self, token: impl Into<String>) {
        let token = token.into();
        let mut slot = self.token.write().unwrap_or_else(|e| e.into_inner());
        *slot = if token.is_empty() { None } else { Some(token) };
    }

    /// Removes the bearer token
    pub fn clear_token(&self) {
        let mut slot = self.token.write().unwrap_or_else(|e| e.into_inner());
        *slot = None;
    }

    /// Returns the current bearer token, if any
    pub fn get_token(&self) -> Option<String> {
        self.token
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    /// Joins the base URL and `path` with a single `/` and appends `query`
    pub fn build_url(&self, path: &str, query: &Value) -> Result<Url, AppError> {
        let raw = format!(
            "{}/{}",
            self.config.base_url(),
            path.trim_start_matches('/')
        );
        let mut url = Url::parse(&raw)
            .map_err(|e| AppError::InvalidInput(format!("invalid request path {path}: {e}")))?;

        let mut pairs = Vec::new();
        if let Value::Object(map) = query {
            for (key, value) in map {
                flatten_query(key.clone(), value, &mut pairs);
            }
        }
        if !pairs.is_empty() {
            url.query_pairs_mut().extend_pairs(pairs);
        }
        Ok(url)
    }

    fn build_request(
        &self,
        method: Method,
        url: Url,
        body: Option<Vec<u8>>,
    ) -> Result<ApiRequest, AppError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static(JSON_MEDIA_TYPE));
        headers.insert(USER_AGENT_HEADER, HeaderValue::from_static(USER_AGENT));

        if body.is_some() {
            headers.insert(CONTENT_TYPE, HeaderValue::from_static(JSON_MEDIA_TYPE));
        }

        if let Some(token) = self.get_token() {
            let value = HeaderValue::from_str(&format!("Bearer {token}"))
                .map_err(|_| AppError::InvalidInput("token is not a valid header value".into()))?;
            headers.insert(AUTHORIZATION, value);
        }

        Ok(ApiRequest {
            method,
            url,
            headers,
            body,
        })
    }

    /// Sends the request, retrying transport failures
    ///
    /// Error statuses are classified and returned at once; only failures of the
    /// underlying transport are retried, up to `max_retries + 1` attempts in total.
    async fn send_request(&self, request: ApiRequest) -> Result<ApiResponse, AppError> {
        if self.config.should_log_requests() {
            info!(
                method = %request.method,
                uri = %request.url,
                headers = ?loggable_headers(&request.headers),
                "Sending request"
            );
        }

        let policy = self.config.retry_policy();
        let max_attempts = policy.max_attempts();
        let mut attempt = 0;

        loop {
            debug!("{} {}", request.method, request.url);

            match self.sender.send(&request).await {
                Ok(response) => {
                    if self.config.should_log_responses() {
                        info!(
                            status_code = response.status().as_u16(),
                            headers = ?loggable_headers(response.headers()),
                            "Response received"
                        );
                    }

                    if response.is_error() {
                        let err = AppError::from_response(&response);
                        error!(
                            "Request {} {} failed: {}",
                            request.method, request.url, err
                        );
                        return Err(err);
                    }
                    return Ok(response);
                }
                Err(e) => {
                    attempt += 1;

                    if attempt >= max_attempts {
                        error!(
                            "Request {} {} failed after {} attempts: {}",
                            request.method, request.url, attempt, e
                        );
                        return Err(AppError::transport(e));
                    }

                    let wait = policy.delay_for_attempt(attempt);
                    warn!(
                        attempt,
                        max_attempts,
                        error = %e,
                        "Attempt failed, retrying in {:?}",
                        wait
                    );
                    tokio::time::sleep(wait).await;
                }
            }
        }
    }
}

impl std::fmt::Debug for HttpClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpClient")
            .field("base_url", &self.config.base_url())
            .field("authenticated", &self.get_token().is_some())
            .finish()
    }
}

/// Expands a value into form pairs: `null` is skipped, booleans become `1`/`0`,
/// arrays and objects nest as `key[index]` / `key[name]`
fn flatten_query(key: String, value: &Value, pairs: &mut Vec<(String, String)>) {
    match value {
        Value::Null => {}
        Value::Bool(b) => pairs.push((key, if *b { "1" } else { "0" }.to_string())),
        Value::Number(n) => pairs.push((key, n.to_string())),
        Value::String(s) => pairs.push((key, s.clone())),
        Value::Array(items) => {
            for (i, item) in items.iter().enumerate() {
                flatten_query(format!("{key}[{i}]"), item, pairs);
            }
        }
        Value::Object(map) => {
            for (name, item) in map {
                flatten_query(format!("{key}[{name}]"), item, pairs);
            }
        }
    }
}

fn loggable_headers(headers: &HeaderMap) -> Vec<(String, String)> {
    headers
        .iter()
        .map(|(name, value)| {
            let shown = if *name == AUTHORIZATION {
                "Bearer ***".to_string()
            } else {
                value.to_str().unwrap_or("<binary>").to_string()
            };
            (name.to_string(), shown)
        })
        .collect()
}
