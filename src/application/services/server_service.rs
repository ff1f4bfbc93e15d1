use crate::application::interfaces::server::ServerService;
use crate::constants::DEFAULT_PER_PAGE;
use crate::error::AppError;
use crate::model::responses::unwrap_data;
use crate::transport::HttpClient;
use crate::utils::path::resource_path;
use async_trait::async_trait;
use serde_json::{Value, json};
use std::sync::Arc;
use tracing::{debug, info};

const PATH: &str = "panel/application/server";

/// Implementation of the server service
#[derive(Debug, Clone)]
pub struct ServerServiceImpl {
    client: Arc<HttpClient>,
}

impl ServerServiceImpl {
    /// Creates a new instance of the server service
    pub fn new(client: Arc<HttpClient>) -> Self {
        Self { client }
    }

    async fn post_action(&self, id: &str, action: &str) -> Result<Value, AppError> {
        info!("Server {}: {}", id, action);
        let response = self
            .client
            .post(&format!("{}/{action}", resource_path(PATH, id)?), &json!({}))
            .await?;
        Ok(unwrap_data(&response))
    }
}

#[async_trait]
impl ServerService for ServerServiceImpl {
    async fn list(&self, filters: &Value) -> Result<Value, AppError> {
        debug!("Listing servers");
        let response = self.client.get(PATH, filters).await?;
        Ok(unwrap_data(&response))
    }

    async fn create(&self, data: &Value) -> Result<Value, AppError> {
        info!("Creating server");
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
        info!("Deleting server {}", id);
        self.client.delete(&resource_path(PATH, id)?).await?;
        Ok(())
    }

    async fn list_paginated(&self, page: u32, per_page: u32) -> Result<Value, AppError> {
        self.list(&json!({ "page": page, "per_page": per_page }))
            .await
    }

    async fn find_by_name(&self, name: &str, per_page: Option<u32>) -> Result<Value, AppError> {
        self.list(&json!({
            "name": name,
            "per_page": per_page.unwrap_or(DEFAULT_PER_PAGE),
        }))
        .await
    }

    async fn get_stats(&self, id: &str) -> Result<Value, AppError> {
        let response = self
            .client
            .get(&format!("{}/stats", resource_path(PATH, id)?), &json!({}))
            .await?;
        Ok(unwrap_data(&response))
    }

    async fn activate(&self, id: &str) -> Result<Value, AppError> {
        self.post_action(id, "activate").await
    }

    async fn deactivate(&self, id: &str) -> Result<Value, AppError> {
        self.post_action(id, "deactivate").await
    }

    async fn restart(&self, id: &str) -> Result<Value, AppError> {
        self.post_action(id, "restart").await
    }

    async fn get_logs(&self, id: &str, filters: &Value) -> Result<Value, AppError> {
        let response = self
            .client
            .get(&format!("{}/logs", resource_path(PATH, id)?), filters)
            .await?;
        Ok(unwrap_data(&response))
    }
}
