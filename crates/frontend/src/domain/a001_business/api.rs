use async_trait::async_trait;
use contracts::domain::a001_business::{BulkImportRequest, BusinessDto};
use gloo_net::http::Request;
use serde_json::Value;

use crate::shared::api_utils::{api_url, ApiError};

/// Backend API предприятий
#[async_trait(?Send)]
pub trait BusinessApi {
    /// `POST /api/businesses`; тело ответа не используется
    async fn create_business(&self, dto: &BusinessDto) -> Result<(), ApiError>;

    /// `POST /api/businesses/bulk`; тело ответа возвращается как есть
    async fn import_businesses(&self, request: &BulkImportRequest) -> Result<Value, ApiError>;
}

/// HTTP клиент поверх gloo-net; адрес backend берётся из конфигурации
#[derive(Debug, Clone, Copy, Default)]
pub struct HttpBusinessApi;

#[async_trait(?Send)]
impl BusinessApi for HttpBusinessApi {
    async fn create_business(&self, dto: &BusinessDto) -> Result<(), ApiError> {
        let response = Request::post(&api_url("/api/businesses"))
            .json(dto)
            .map_err(|e| ApiError::Request(format!("Failed to serialize request: {}", e)))?
            .send()
            .await
            .map_err(|e| ApiError::Request(format!("Failed to send request: {}", e)))?;

        if !response.ok() {
            return Err(ApiError::Status(response.status()));
        }

        Ok(())
    }

    async fn import_businesses(&self, request: &BulkImportRequest) -> Result<Value, ApiError> {
        let response = Request::post(&api_url("/api/businesses/bulk"))
            .json(request)
            .map_err(|e| ApiError::Request(format!("Failed to serialize request: {}", e)))?
            .send()
            .await
            .map_err(|e| ApiError::Request(format!("Failed to send request: {}", e)))?;

        if !response.ok() {
            return Err(ApiError::Status(response.status()));
        }

        response
            .json::<Value>()
            .await
            .map_err(|e| ApiError::Body(e.to_string()))
    }
}
