use crate::error::AppError;
use async_trait::async_trait;
use serde_json::Value;

/// Interface for the WhatsApp instance service
#[async_trait]
pub trait WhatsAppService: Send + Sync {
    /// Lists WhatsApp instances; paginated responses are unwrapped one level
    async fn list(&self, filters: &Value) -> Result<Value, AppError>;

    /// Creates a WhatsApp instance
    async fn create(&self, data: &Value) -> Result<Value, AppError>;

    /// Gets one WhatsApp instance
    async fn get(&self, id: &str) -> Result<Value, AppError>;

    /// Updates a WhatsApp instance
    async fn update(&self, id: &str, data: &Value) -> Result<Value, AppError>;

    /// Deletes a WhatsApp instance
    async fn delete(&self, id: &str) -> Result<(), AppError>;

    /// Searches instances by phone number (`per_page` defaults to 10)
    async fn find_by_phone_number(
        &self,
        phone_number: &str,
        per_page: Option<u32>,
    ) -> Result<Value, AppError>;

    /// Lists one page of instances
    async fn list_paginated(&self, page: u32, per_page: u32) -> Result<Value, AppError>;
}
