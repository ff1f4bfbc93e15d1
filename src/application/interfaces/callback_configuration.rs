use crate::error::AppError;
use async_trait::async_trait;
use serde_json::Value;

/// Interface for the WhatsApp callback configuration service
#[async_trait]
pub trait CallbackConfigurationService: Send + Sync {
    /// Gets the callback configurations
    async fn get(&self) -> Result<Value, AppError>;

    /// Gets one callback configuration
    async fn get_by_id(&self, id: &str) -> Result<Value, AppError>;

    /// Updates a callback configuration
    async fn update(&self, id: &str, data: &Value) -> Result<Value, AppError>;
}
