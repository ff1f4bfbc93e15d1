use crate::application::interfaces::callback_configuration::CallbackConfigurationService;
use crate::error::AppError;
use crate::model::responses::unwrap_data;
use crate::transport::HttpClient;
use crate::utils::path::resource_path;
use async_trait::async_trait;
use serde_json::{Value, json};
use std::sync::Arc;
use tracing::info;

const PATH: &str = "api/panel/application/callback/configuration/whatsapp";

/// Implementation of the WhatsApp callback configuration service
#[derive(Debug, Clone)]
pub struct CallbackConfigurationServiceImpl {
    client: Arc<HttpClient>,
}

impl CallbackConfigurationServiceImpl {
    /// Creates a new instance of the callback configuration service
    pub fn new(client: Arc<HttpClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl CallbackConfigurationService for CallbackConfigurationServiceImpl {
    async fn get(&self) -> Result<Value, AppError> {
        let response = self.client.get(PATH, &json!({})).await?;
        Ok(unwrap_data(&response))
    }

    async fn get_by_id(&self, id: &str) -> Result<Value, AppError> {
        let response = self.client.get(&resource_path(PATH, id)?, &json!({})).await?;
        Ok(unwrap_data(&response))
    }

    async fn update(&self, id: &str, data: &Value) -> Result<Value, AppError> {
        info!("Updating callback configuration {}", id);
        let response = self.client.put(&resource_path(PATH, id)?, data).await?;
        Ok(unwrap_data(&response))
    }
}
