use crate::error::AppError;
use async_trait::async_trait;
use serde_json::Value;

/// Interface for the server service
#[async_trait]
pub trait ServerService: Send + Sync {
    /// Lists servers matching `filters`
    async fn list(&self, filters: &Value) -> Result<Value, AppError>;

    /// Creates a server
    async fn create(&self, data: &Value) -> Result<Value, AppError>;

    /// Gets one server
    async fn get(&self, id: &str) -> Result<Value, AppError>;

    /// Updates a server
    async fn update(&self, id: &str, data: &Value) -> Result<Value, AppError>;

    /// Deletes a server
    async fn delete(&self, id: &str) -> Result<(), AppError>;

    /// Lists one page of servers
    async fn list_paginated(&self, page: u32, per_page: u32) -> Result<Value, AppError>;

    /// Searches servers by name (`per_page` defaults to 10)
    async fn find_by_name(&self, name: &str, per_page: Option<u32>) -> Result<Value, AppError>;

    /// Gets statistics for a server
    async fn get_stats(&self, id: &str) -> Result<Value, AppError>;

    /// Activates a server
    async fn activate(&self, id: &str) -> Result<Value, AppError>;

    /// Deactivates a server
    async fn deactivate(&self, id: &str) -> Result<Value, AppError>;

    /// Restarts a server
    async fn restart(&self, id: &str) -> Result<Value, AppError>;

    /// Gets the logs of a server
    async fn get_logs(&self, id: &str, filters: &Value) -> Result<Value, AppError>;
}
