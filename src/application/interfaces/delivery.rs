use crate::error::AppError;
use async_trait::async_trait;
use serde_json::Value;

/// Interface for the WhatsApp delivery service
#[async_trait]
pub trait DeliveryService: Send + Sync {
    /// Lists queued API deliveries; paginated responses are unwrapped one level
    async fn list(&self, filters: &Value) -> Result<Value, AppError>;

    /// Gets the delivery history
    async fn get_history(&self, filters: &Value) -> Result<Value, AppError>;

    /// Gets one history entry
    async fn get_history_item(&self, id: &str) -> Result<Value, AppError>;

    /// Queues a text message
    ///
    /// # Arguments
    /// * `instance_id` - WhatsApp instance sending the message
    /// * `to` - Destination phone number, digits only (e.g. 555199693860)
    /// * `message` - Message text
    async fn send_text_message(
        &self,
        instance_id: &str,
        to: &str,
        message: &str,
    ) -> Result<Value, AppError>;

    /// Queues a text message from a caller-built payload (`instance_id`, `to`, `message`)
    async fn send_text_message_with_data(&self, data: &Value) -> Result<Value, AppError>;
}
