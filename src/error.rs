/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! Error types for the Relayo client
//!
//! Every failure surfaced to callers is an [`AppError`]. HTTP error statuses are
//! classified into authentication, rate limit and generic API errors; connection
//! failures that survive the retry loop become a generic API error with code `0`
//! that wraps the underlying [`TransportError`].

use crate::constants::{API_ERROR_MESSAGE, RATE_LIMIT_MESSAGE, UNAUTHORIZED_MESSAGE};
use crate::model::http::ApiResponse;
use serde_json::Value;
use std::error::Error as StdError;
use std::fmt;

/// Failure reported by an [`HttpSend`](crate::transport::HttpSend) implementation
///
/// Only these failures are retried by the transport core.
#[derive(Debug)]
pub struct TransportError {
    message: String,
    source: Option<Box<dyn StdError + Send + Sync>>,
}

impl TransportError {
    /// Creates a transport error without an underlying cause
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            source: None,
        }
    }

    /// Creates a transport error wrapping an underlying cause
    pub fn with_source(
        message: impl Into<String>,
        source: impl Into<Box<dyn StdError + Send + Sync>>,
    ) -> Self {
        Self {
            message: message.into(),
            source: Some(source.into()),
        }
    }

    /// Human readable description of the failure
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for TransportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl StdError for TransportError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn StdError + 'static))
    }
}

impl From<reqwest::Error> for TransportError {
    fn from(e: reqwest::Error) -> Self {
        let message = if e.is_timeout() {
            format!("request timed out: {e}")
        } else if e.is_connect() {
            format!("connection failed: {e}")
        } else {
            e.to_string()
        };
        Self::with_source(message, e)
    }
}

/// Main error type for the library
#[derive(Debug)]
pub enum AppError {
    /// The API answered 401
    Authentication {
        /// Message extracted from the response body
        message: String,
        /// HTTP status code
        code: u16,
    },
    /// The API answered 429
    RateLimitExceeded {
        /// Always [`RATE_LIMIT_MESSAGE`]
        message: String,
        /// HTTP status code
        code: u16,
    },
    /// Any other error status, or a connection failure after all retries (code 0)
    Api {
        /// Message extracted from the response body or describing the transport failure
        message: String,
        /// HTTP status code, 0 when no response was received
        code: u16,
        /// Underlying transport failure, if any
        source: Option<TransportError>,
    },
    /// The login response did not carry `success.token`
    TokenNotFound,
    /// The configuration could not be built
    InvalidConfig(String),
    /// A request could not be built from the given input
    InvalidInput(String),
    /// JSON (de)serialization failed
    Json(serde_json::Error),
    /// The default HTTP transport could not be created
    Network(reqwest::Error),
}

impl AppError {
    /// Wraps a transport failure that exhausted the retry budget
    pub fn transport(error: TransportError) -> Self {
        AppError::Api {
            message: format!("communication error: {error}"),
            code: 0,
            source: Some(error),
        }
    }

    /// Classifies an error response (status >= 400)
    ///
    /// 401 always yields [`AppError::Authentication`] and 429 always yields
    /// [`AppError::RateLimitExceeded`], whatever the body looks like. Other statuses
    /// become [`AppError::Api`] with the message taken from `errors[0]` or `message`.
    pub fn from_response(response: &ApiResponse) -> Self {
        let code = response.status().as_u16();
        let extracted = extract_message(response.json());

        match code {
            401 => AppError::Authentication {
                message: extracted.unwrap_or_else(|| UNAUTHORIZED_MESSAGE.to_string()),
                code,
            },
            429 => AppError::RateLimitExceeded {
                message: RATE_LIMIT_MESSAGE.to_string(),
                code,
            },
            _ => AppError::Api {
                message: extracted.unwrap_or_else(|| API_ERROR_MESSAGE.to_string()),
                code,
                source: None,
            },
        }
    }

    /// HTTP status carried by the error, 0 when there is none
    #[must_use]
    pub fn code(&self) -> u16 {
        match self {
            AppError::Authentication { code, .. }
            | AppError::RateLimitExceeded { code, .. }
            | AppError::Api { code, .. } => *code,
            _ => 0,
        }
    }

    /// Message carried by the error
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            AppError::Authentication { message, .. }
            | AppError::RateLimitExceeded { message, .. }
            | AppError::Api { message, .. } => message.clone(),
            other => other.to_string(),
        }
    }
}

fn extract_message(body: Option<&Value>) -> Option<String> {
    let body = body?;
    body.get("errors")
        .and_then(|errors| errors.get(0))
        .filter(|v| !v.is_null())
        .or_else(|| body.get("message").filter(|v| !v.is_null()))
        .map(|v| match v {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        })
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Authentication { message, code } => {
                write!(f, "authentication error ({code}): {message}")
            }
            AppError::RateLimitExceeded { message, code } => {
                write!(f, "rate limit error ({code}): {message}")
            }
            AppError::Api { message, code, .. } => write!(f, "api error ({code}): {message}"),
            AppError::TokenNotFound => write!(f, "token not found in login response"),
            AppError::InvalidConfig(msg) => write!(f, "invalid configuration: {msg}"),
            AppError::InvalidInput(msg) => write!(f, "invalid input: {msg}"),
            AppError::Json(e) => write!(f, "json error: {e}"),
            AppError::Network(e) => write!(f, "network error: {e}"),
        }
    }
}

impl StdError for AppError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            AppError::Api {
                source: Some(e), ..
            } => Some(e),
            AppError::Json(e) => Some(e),
            AppError::Network(e) => Some(e),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(e: serde_json::Error) -> Self {
        AppError::Json(e)
    }
}

impl From<reqwest::Error> for AppError {
    fn from(e: reqwest::Error) -> Self {
        AppError::Network(e)
    }
}
