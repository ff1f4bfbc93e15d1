/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! Simplified client for the Relayo API
//!
//! [`RelayoClient`] is the composition root: it owns the shared transport and
//! hands out the resource services.
//!
//! # Example
//! ```ignore
//! use relayo_client::prelude::*;
//!
//! let client = RelayoClient::from_env()?;
//! client.auth().login("me@example.com", "secret").await?;
//! let apps = client.applications().list(&serde_json::json!({})).await?;
//! ```

use crate::application::services::{
    ApplicationServiceImpl, CallbackConfigurationServiceImpl, DeliveryServiceImpl,
    IntegrationServiceImpl, ServerServiceImpl, WhatsAppServiceImpl,
};
use crate::auth::AuthManager;
use crate::config::{ClientOptions, Config};
use crate::error::AppError;
use crate::transport::{HttpClient, HttpSend, ReqwestSender};
use std::sync::Arc;

/// Entry point to the Relayo API
#[derive(Debug, Clone)]
pub struct RelayoClient {
    config: Arc<Config>,
    http_client: Arc<HttpClient>,
    auth: AuthManager,
}

impl RelayoClient {
    /// Creates a client over an explicit transport
    ///
    /// # Arguments
    /// * `config` - Validated configuration
    /// * `sender` - Underlying HTTP transport, e.g. [`ReqwestSender`] or a test double
    pub fn new(config: Config, sender: Arc<dyn HttpSend>) -> Self {
        let config = Arc::new(config);
        let http_client = Arc::new(HttpClient::new(config.clone(), sender));
        let auth = AuthManager::new(http_client.clone());
        Self {
            config,
            http_client,
            auth,
        }
    }

    /// Creates a client backed by `reqwest`
    ///
    /// # Errors
    /// Fails if the base URL is invalid or the HTTP client cannot be built
    pub fn create(base_url: &str, options: ClientOptions) -> Result<Self, AppError> {
        Self::with_config(Config::with_options(base_url, options)?)
    }

    /// Creates a client backed by `reqwest` from an existing configuration
    pub fn with_config(config: Config) -> Result<Self, AppError> {
        let sender = ReqwestSender::new(&config)?;
        Ok(Self::new(config, Arc::new(sender)))
    }

    /// Creates a client backed by `reqwest`, configured from the environment
    pub fn from_env() -> Result<Self, AppError> {
        Self::with_config(Config::from_env()?)
    }

    /// Authentication manager
    pub fn auth(&self) -> &AuthManager {
        &self.auth
    }

    /// Application service
    pub fn applications(&self) -> ApplicationServiceImpl {
        ApplicationServiceImpl::new(self.http_client.clone())
    }

    /// Server service
    pub fn servers(&self) -> ServerServiceImpl {
        ServerServiceImpl::new(self.http_client.clone())
    }

    /// API integration service
    pub fn integrations(&self) -> IntegrationServiceImpl {
        IntegrationServiceImpl::new(self.http_client.clone())
    }

    /// WhatsApp instance service
    pub fn whatsapp(&self) -> WhatsAppServiceImpl {
        WhatsAppServiceImpl::new(self.http_client.clone())
    }

    /// WhatsApp delivery service
    pub fn delivery(&self) -> DeliveryServiceImpl {
        DeliveryServiceImpl::new(self.http_client.clone())
    }

    /// WhatsApp callback configuration service
    pub fn callback_configuration(&self) -> CallbackConfigurationServiceImpl {
        CallbackConfigurationServiceImpl::new(self.http_client.clone())
    }

    /// Sets the bearer token; an empty string clears it
    pub fn set_token(&self, token: impl Into<String>) {
        self.http_client.set_token(token);
    }

    /// Returns the current bearer token, if any
    pub fn get_token(&self) -> Option<String> {
        self.http_client.get_token()
    }

    /// True when a token is set
    pub fn is_authenticated(&self) -> bool {
        self.auth.is_authenticated()
    }

    /// Client configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Shared transport, for endpoints without a dedicated service
    pub fn http(&self) -> &Arc<HttpClient> {
        &self.http_client
    }
}
