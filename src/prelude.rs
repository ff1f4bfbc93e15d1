/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! # Relayo Client Prelude
//!
//! This module provides a convenient way to import the most commonly used types and traits
//! from the Relayo client library.
//!
//! ## Usage
//!
//! ```rust
//! use relayo_client::prelude::*;
//!
//! let config = Config::new("https://api.relayo.com.br").unwrap();
//! assert_eq!(config.max_retries(), 3);
//! ```

// ============================================================================
// CORE CONFIGURATION AND SETUP
// ============================================================================

/// Configuration for the Relayo client
pub use crate::config::{ClientOptions, Config};

/// Library version information
pub use crate::{VERSION, version};

/// Entry point
pub use crate::client::RelayoClient;

// ============================================================================
// ERROR HANDLING
// ============================================================================

/// Error types for the library
pub use crate::error::{AppError, TransportError};

// ============================================================================
// AUTHENTICATION
// ============================================================================

/// Token management and login
pub use crate::auth::AuthManager;

// ============================================================================
// TRANSPORT
// ============================================================================

/// Transport core and the underlying HTTP seam
pub use crate::transport::{HttpClient, HttpSend, ReqwestSender};

/// Request and response models
pub use crate::model::http::{ApiRequest, ApiResponse};

/// Retry policy
pub use crate::model::retry::RetryPolicy;

/// Envelope unwrapping helpers
pub use crate::model::responses::{unwrap_data, unwrap_envelope};

// ============================================================================
// SERVICES (TRAITS)
// ============================================================================

pub use crate::application::interfaces::application::ApplicationService;
pub use crate::application::interfaces::callback_configuration::CallbackConfigurationService;
pub use crate::application::interfaces::delivery::DeliveryService;
pub use crate::application::interfaces::integration::IntegrationService;
pub use crate::application::interfaces::server::ServerService;
pub use crate::application::interfaces::whatsapp::WhatsAppService;

// ============================================================================
// SERVICE IMPLEMENTATIONS
// ============================================================================

pub use crate::application::services::{
    ApplicationServiceImpl, CallbackConfigurationServiceImpl, DeliveryServiceImpl,
    IntegrationServiceImpl, ServerServiceImpl, WhatsAppServiceImpl,
};

// ============================================================================
// UTILITIES
// ============================================================================

/// Logger setup
pub use crate::utils::logger::setup_logger;

/// Environment helpers
pub use crate::utils::config::{get_env_or_default, get_env_or_none};
