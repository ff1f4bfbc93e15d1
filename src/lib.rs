//! # Relayo Client
//!
//! Async client for the Relayo messaging and application management REST API.
//!
//! The crate is organised around a single transport core ([`transport::HttpClient`])
//! that builds requests, injects the bearer token, retries connection failures with
//! backoff and classifies error responses. Thin resource services (applications,
//! servers, integrations, WhatsApp instances, delivery and callback configuration)
//! map one-to-one onto REST endpoints on top of it.
//!
//! ## Example
//!
//! ```ignore
//! use relayo_client::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), AppError> {
//!     let client = RelayoClient::create("https://api.relayo.com.br", ClientOptions::default())?;
//!     client.set_token("my-token");
//!
//!     let instances = client.whatsapp().list(&serde_json::json!({})).await?;
//!     println!("{instances}");
//!     Ok(())
//! }
//! ```

/// Resource services and their interfaces
pub mod application;
/// Token management and login/logout
pub mod auth;
/// High level client wiring the transport and the resource services together
pub mod client;
/// Client configuration
pub mod config;
/// Constants used across the crate
pub mod constants;
/// Error types
pub mod error;
/// Request, response and retry models
pub mod model;
/// Commonly used re-exports
pub mod prelude;
/// HTTP transport core
pub mod transport;
/// Environment and logging helpers
pub mod utils;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Returns the library version
#[must_use]
pub fn version() -> &'static str {
    VERSION
}
