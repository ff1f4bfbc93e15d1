use crate::error::AppError;
use async_trait::async_trait;
use serde_json::Value;

/// Interface for the API integration service
#[async_trait]
pub trait IntegrationService: Send + Sync {
    /// Lists integrations; paginated responses are unwrapped one level
    async fn list(&self, filters: &Value) -> Result<Value, AppError>;

    /// Creates an integration
    async fn create(&self, data: &Value) -> Result<Value, AppError>;

    /// Gets one integration
    async fn get(&self, id: &str) -> Result<Value, AppError>;

    /// Updates an integration
    async fn update(&self, id: &str, data: &Value) -> Result<Value, AppError>;

    /// Deletes an integration
    async fn delete(&self, id: &str) -> Result<(), AppError>;

    /// Lists one page of integrations
    async fn list_paginated(&self, page: u32, per_page: u32) -> Result<Value, AppError>;

    /// Searches integrations by name (`per_page` defaults to 10)
    async fn find_by_name(&self, name: &str, per_page: Option<u32>) -> Result<Value, AppError>;

    /// Activates an integration
    async fn activate(&self, id: &str) -> Result<Value, AppError>;

    /// Deactivates an integration
    async fn deactivate(&self, id: &str) -> Result<Value, AppError>;

    /// Triggers a test call of an integration
    async fn test(&self, id: &str) -> Result<Value, AppError>;

    /// Gets the call logs of an integration
    async fn get_logs(&self, id: &str, filters: &Value) -> Result<Value, AppError>;
}
