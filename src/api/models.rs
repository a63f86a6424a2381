use axum::{Json, http::StatusCode, response::IntoResponse};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::core::errors::SettleError;
use crate::core::models::{Settlement, SummaryEntry, UserBalance};

// Request structs for JSON payloads
#[derive(Deserialize, ToSchema)]
pub struct RecordBalancesRequest {
    pub balances: Vec<UserBalance>,
}

#[derive(Deserialize, ToSchema)]
pub struct RecordSettlementsRequest {
    pub settlements: Vec<Settlement>,
}

#[derive(Deserialize, ToSchema)]
pub struct SummarizeRequest {
    pub balances: Vec<UserBalance>,
    #[serde(default)]
    pub settlements: Vec<Settlement>,
}

#[derive(Deserialize, ToSchema)]
pub struct ValidateSettlementsRequest {
    pub settlements: Vec<Settlement>,
}

#[derive(Serialize, Deserialize, ToSchema, Debug)]
pub struct SummarizeResponse {
    pub summaries: Vec<SummaryEntry>,
    pub settlement_valid: bool,
}

#[derive(Serialize, Deserialize, ToSchema, Debug)]
pub struct ValidateSettlementsResponse {
    pub is_valid: bool,
}

// Error response struct
#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

// Newtype wrapper for SettleError to implement IntoResponse
#[derive(Debug)]
pub struct ApiError(pub SettleError);

impl From<SettleError> for ApiError {
    fn from(err: SettleError) -> Self {
        ApiError(err)
    }
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self.0 {
            SettleError::ScopeNotFound(_) => StatusCode::NOT_FOUND,
            SettleError::InvalidInput(..) => StatusCode::BAD_REQUEST,
            SettleError::StorageError(_) | SettleError::LoggingError(_) | SettleError::CacheError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let status = self.status();
        let error_message = match self.0 {
            SettleError::InvalidInput(field, detail) => {
                format!("Invalid input for {}: {}", field, detail.description)
            }
            other => other.to_string(),
        };
        (status, Json(ErrorResponse { error: error_message })).into_response()
    }
}
