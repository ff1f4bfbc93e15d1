use crate::error::AppError;
use async_trait::async_trait;
use serde_json::Value;

/// Interface for the application service
#[async_trait]
pub trait ApplicationService: Send + Sync {
    /// Lists applications matching `filters`
    async fn list(&self, filters: &Value) -> Result<Value, AppError>;

    /// Creates an application
    async fn create(&self, data: &Value) -> Result<Value, AppError>;

    /// Gets one application
    async fn get(&self, id: &str) -> Result<Value, AppError>;

    /// Updates an application
    async fn update(&self, id: &str, data: &Value) -> Result<Value, AppError>;

    /// Deletes an application
    async fn delete(&self, id: &str) -> Result<(), AppError>;

    /// Lists one page of applications
    async fn list_paginated(&self, page: u32, per_page: u32) -> Result<Value, AppError>;

    /// Searches applications by name (`per_page` defaults to 10)
    async fn find_by_name(&self, name: &str, per_page: Option<u32>) -> Result<Value, AppError>;

    /// Gets usage statistics for an application
    async fn get_stats(&self, id: &str) -> Result<Value, AppError>;

    /// Activates an application
    async fn activate(&self, id: &str) -> Result<Value, AppError>;

    /// Deactivates an application
    async fn deactivate(&self, id: &str) -> Result<Value, AppError>;
}
