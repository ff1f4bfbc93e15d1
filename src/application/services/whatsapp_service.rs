use crate::application::interfaces::whatsapp::WhatsAppService;
use crate::constants::DEFAULT_PER_PAGE;
use crate::error::AppError;
use crate::model::responses::{unwrap_data, unwrap_envelope};
use crate::transport::HttpClient;
use crate::utils::path::resource_path;
use async_trait::async_trait;
use serde_json::{Value, json};
use std::sync::Arc;
use tracing::{debug, info};

const PATH: &str = "api/panel/application/server/instance/whatsapp";

/// Implementation of the WhatsApp instance service
#[derive(Debug, Clone)]
pub struct WhatsAppServiceImpl {
    client: Arc<HttpClient>,
}

impl WhatsAppServiceImpl {
    /// Creates a new instance of the WhatsApp service
    pub fn new(client: Arc<HttpClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl WhatsAppService for WhatsAppServiceImpl {
    async fn list(&self, filters: &Value) -> Result<Value, AppError> {
        debug!("Listing WhatsApp instances");
        let response = self.client.get(PATH, filters).await?;
        Ok(unwrap_envelope(&response))
    }

    async fn create(&self, data: &Value) -> Result<Value, AppError> {
        info!("Creating WhatsApp instance");
        let response = self.client.post(PATH, data).await?;
        Ok(unwrap_data(&response))
    }

    async fn get(&self, id: &str) -> Result<Value, AppError> {
        let response = self.client.get(&resource_path(PATH, id)?, &json!({})).await?;
        Ok(unwrap_data(&response))
    }

    async fn update(&self, id: &str, data: &Value) -> Result<Value, AppError> {
        let response = self.client.put(&resource_path(PATH, id)?, data).await?;
        Ok(unwrap_data(&response))
    }

    async fn delete(&self, id: &str) -> Result<(), AppError> {
        info!("Deleting WhatsApp instance {}", id);
        self.client.delete(&resource_path(PATH, id)?).await?;
        Ok(())
    }

    async fn find_by_phone_number(
        &self,
        phone_number: &str,
        per_page: Option<u32>,
    ) -> Result<Value, AppError> {
        self.list(&json!({
            "phone_number": phone_number,
            "per_page": per_page.unwrap_or(DEFAULT_PER_PAGE),
        }))
        .await
    }

    async fn list_paginated(&self, page: u32, per_page: u32) -> Result<Value, AppError> {
        self.list(&json!({ "page": page, "per_page": per_page }))
            .await
    }
}
