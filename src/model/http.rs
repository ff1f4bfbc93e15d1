/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use reqwest::header::HeaderMap;
use reqwest::{Method, StatusCode, Url};
use serde_json::Value;
use std::borrow::Cow;
use std::sync::OnceLock;

/// A fully built request, ready to be handed to an [`HttpSend`](crate::transport::HttpSend)
///
/// The same request is re-sent unchanged on every retry attempt.
#[derive(Debug, Clone)]
pub struct ApiRequest {
    /// HTTP method
    pub method: Method,
    /// Absolute URL including the query string
    pub url: Url,
    /// Headers, including `Accept`, `User-Agent` and the optional bearer token
    pub headers: HeaderMap,
    /// JSON encoded body for POST and PUT
    pub body: Option<Vec<u8>>,
}

impl ApiRequest {
    /// Returns the body decoded as JSON, if there is one
    pub fn json_body(&self) -> Option<Value> {
        self.body
            .as_deref()
            .and_then(|b| serde_json::from_slice(b).ok())
    }

    /// Returns a header value as a string, if present and valid UTF-8
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }
}

/// Raw response returned by the transport
///
/// The JSON body is parsed on first access and cached.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    status: StatusCode,
    headers: HeaderMap,
    body: Vec<u8>,
    json: OnceLock<Option<Value>>,
}

impl ApiResponse {
    /// Creates a new response
    pub fn new(status: StatusCode, headers: HeaderMap, body: Vec<u8>) -> Self {
        Self {
            status,
            headers,
            body,
            json: OnceLock::new(),
        }
    }

    /// HTTP status
    #[must_use]
    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// Response headers
    #[must_use]
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Raw body bytes
    #[must_use]
    pub fn body(&self) -> &[u8] {
        &self.body
    }

    /// Body as text, invalid UTF-8 sequences replaced
    pub fn text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.body)
    }

    /// Parsed JSON body, `None` when the body is empty or not valid JSON
    pub fn json(&self) -> Option<&Value> {
        self.json
            .get_or_init(|| serde_json::from_slice(&self.body).ok())
            .as_ref()
    }

    /// Returns true for 4xx and 5xx statuses
    #[must_use]
    pub fn is_error(&self) -> bool {
        self.status.as_u16() >= 400
    }
}
