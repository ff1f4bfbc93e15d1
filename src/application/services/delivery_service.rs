use crate::application::interfaces::delivery::DeliveryService;
use crate::error::AppError;
use crate::model::responses::{unwrap_data, unwrap_envelope};
use crate::transport::HttpClient;
use crate::utils::path::resource_path;
use async_trait::async_trait;
use serde_json::{Value, json};
use std::sync::Arc;
use tracing::{debug, info};

const QUEUE_PATH: &str = "api/panel/application/delivery/whatsapp/queue/api/delivery";
const TEXT_PATH: &str = "api/panel/application/delivery/whatsapp/queue/api/delivery/text";
const HISTORY_PATH: &str = "api/panel/application/delivery/whatsapp/history";

/// Implementation of the WhatsApp delivery service
#[derive(Debug, Clone)]
pub struct DeliveryServiceImpl {
    client: Arc<HttpClient>,
}

impl DeliveryServiceImpl {
    /// Creates a new instance of the delivery service
    pub fn new(client: Arc<HttpClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl DeliveryService for DeliveryServiceImpl {
    async fn list(&self, filters: &Value) -> Result<Value, AppError> {
        debug!("Listing queued deliveries");
        let response = self.client.get(QUEUE_PATH, filters).await?;
        Ok(unwrap_envelope(&response))
    }

    async fn get_history(&self, filters: &Value) -> Result<Value, AppError> {
        let response = self.client.get(HISTORY_PATH, filters).await?;
        Ok(unwrap_data(&response))
    }

    async fn get_history_item(&self, id: &str) -> Result<Value, AppError> {
        let response = self
            .client
            .get(&resource_path(HISTORY_PATH, id)?, &json!({}))
            .await?;
        Ok(unwrap_data(&response))
    }

    async fn send_text_message(
        &self,
        instance_id: &str,
        to: &str,
        message: &str,
    ) -> Result<Value, AppError> {
        self.send_text_message_with_data(&json!({
            "instance_id": instance_id,
            "to": to,
            "message": message,
        }))
        .await
    }

    async fn send_text_message_with_data(&self, data: &Value) -> Result<Value, AppError> {
        info!("Queueing WhatsApp text message");
        let response = self.client.post(TEXT_PATH, data).await?;
        Ok(unwrap_data(&response))
    }
}
