/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use crate::config::Config;
use crate::constants::USER_AGENT;
use crate::error::{AppError, TransportError};
use crate::model::http::{ApiRequest, ApiResponse};
use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

/// Sends a single request over the wire
///
/// Implementations must return `Err` only for transport level failures
/// (connection refused, timeout, broken body...). Any response received from the
/// server, whatever its status, is an `Ok`.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait HttpSend: Send + Sync {
    /// Sends the request once, without retrying
    async fn send(&self, request: &ApiRequest) -> Result<ApiResponse, TransportError>;
}

/// Default [`HttpSend`] backed by `reqwest`
#[derive(Debug, Clone)]
pub struct ReqwestSender {
    client: Client,
}

impl ReqwestSender {
    /// Creates a sender honouring the configured timeout
    ///
    /// A timeout of `0` leaves requests without a deadline.
    ///
    /// # Errors
    /// Returns `AppError::Network` if the reqwest client cannot be built
    pub fn new(config: &Config) -> Result<Self, AppError> {
        let mut builder = Client::builder().user_agent(USER_AGENT);
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            client: builder.build()?,
        })
    }

    /// Wraps an existing reqwest client
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }

    /// Returns a reference to the underlying reqwest client
    pub fn inner(&self) -> &Client {
        &self.client
    }
}

#[async_trait]
impl HttpSend for ReqwestSender {
    async fn send(&self, request: &ApiRequest) -> Result<ApiResponse, TransportError> {
        let mut builder = self
            .client
            .request(request.method.clone(), request.url.clone())
            .headers(request.headers.clone());

        if let Some(body) = &request.body {
            builder = builder.body(body.clone());
        }

        let response = builder.send().await?;
        let status = response.status();
        let headers = response.headers().clone();
        let body = response.bytes().await?;
        debug!("Received {} bytes with status {}", body.len(), status);

        Ok(ApiResponse::new(status, headers, body.to_vec()))
    }
}
