/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! Authentication module for the Relayo API
//!
//! The bearer token lives in the [`HttpClient`]; [`AuthManager`] only proxies it
//! and adds the login/logout calls against `panel/customer/*`.

use crate::error::AppError;
use crate::transport::HttpClient;
use serde_json::{Value, json};
use std::sync::Arc;
use tracing::{error, info, warn};

const LOGIN_PATH: &str = "panel/customer/login";
const LOGOUT_PATH: &str = "panel/customer/logout";

/// Authentication manager for the Relayo API
#[derive(Debug, Clone)]
pub struct AuthManager {
    client: Arc<HttpClient>,
}

impl AuthManager {
    /// Creates a new manager over the shared transport
    pub fn new(client: Arc<HttpClient>) -> Self {
        Self { client }
    }

    /// Sets the bearer token; an empty string clears it
    pub fn set_token(&self, token: impl Into<String>) {
        self.client.set_token(token);
    }

    /// Removes the bearer token
    pub fn clear_token(&self) {
        self.client.clear_token();
    }

    /// Returns the current bearer token, if any
    pub fn get_token(&self) -> Option<String> {
        self.client.get_token()
    }

    /// True when a token is set
    pub fn is_authenticated(&self) -> bool {
        self.client.get_token().is_some()
    }

    /// True when a token is set and is not blank
    pub fn validate_token(&self) -> bool {
        self.client
            .get_token()
            .is_some_and(|token| !token.trim().is_empty())
    }

    /// Logs in with email and password and stores the returned token
    ///
    /// # Returns
    /// * `Ok(Value)` - The full login response body
    /// * `Err(AppError::TokenNotFound)` - If the body has no `success.token`
    pub async fn login(&self, email: &str, password: &str) -> Result<Value, AppError> {
        info!("Logging in as {}", email);

        let response = self
            .client
            .post(LOGIN_PATH, &json!({ "email": email, "password": password }))
            .await?;

        let body = response.json().cloned().ok_or(AppError::TokenNotFound)?;
        let token = body
            .get("success")
            .and_then(|success| success.get("token"))
            .and_then(token_text)
            .filter(|token| !token.is_empty())
            .ok_or(AppError::TokenNotFound)?;

        self.client.set_token(token);
        info!("Login successful for {}", email);
        Ok(body)
    }

    /// Logs out and clears the token
    ///
    /// Without a token this is a no-op. If the logout call fails the token is
    /// kept and the error is returned.
    pub async fn logout(&self) -> Result<(), AppError> {
        if self.client.get_token().is_none() {
            warn!("Logout requested without a token");
            return Ok(());
        }

        info!("Logging out");
        match self.client.post(LOGOUT_PATH, &json!({})).await {
            Ok(_) => {
                self.client.clear_token();
                info!("Logout successful");
                Ok(())
            }
            Err(e) => {
                error!("Logout failed: {}", e);
                Err(e)
            }
        }
    }
}

/// Scalar token as text; numeric tokens are accepted as issued
fn token_text(value: &Value) -> Option<String> {
    match value {
        Value::String(token) => Some(token.clone()),
        Value::Number(token) => Some(token.to_string()),
        _ => None,
    }
}
