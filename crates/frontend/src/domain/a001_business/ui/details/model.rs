//! Business Details - Model Layer

use contracts::domain::a001_business::{BusinessDto, RecordError};
use thiserror::Error;

use crate::domain::a001_business::api::BusinessApi;
use crate::domain::a001_business::BUSINESS_LIST_ROUTE;
use crate::shared::api_utils::ApiError;
use crate::shared::navigation::Navigator;

pub const CREATE_ERROR_MESSAGE: &str = "Failed to create business";

#[derive(Debug, Error)]
pub enum SubmitError {
    #[error(transparent)]
    Invalid(#[from] RecordError),

    #[error("creation failed: {0}")]
    Api(#[from] ApiError),
}

impl SubmitError {
    pub fn user_message(&self) -> String {
        match self {
            SubmitError::Invalid(e) => e.to_string(),
            SubmitError::Api(_) => CREATE_ERROR_MESSAGE.to_string(),
        }
    }
}

/// Отправить запись на `POST /api/businesses` и перейти к списку
pub async fn submit_business<A, N>(
    dto: &BusinessDto,
    api: &A,
    navigator: &N,
) -> Result<(), SubmitError>
where
    A: BusinessApi + ?Sized,
    N: Navigator + ?Sized,
{
    dto.validate()?;

    if let Err(e) = api.create_business(dto).await {
        log::error!("Error creating business: {}", e);
        return Err(e.into());
    }

    log::info!(
        "Business '{}' created ({} machines)",
        dto.name,
        dto.machinery.len()
    );
    navigator.navigate(BUSINESS_LIST_ROUTE);
    Ok(())
}
