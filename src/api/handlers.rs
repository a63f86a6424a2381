use crate::{
    api::models::*,
    core::{
        models::{AppLog, Settlement},
        services::{ScopeSummaryResponse, SettlementService, ValidationResponse},
    },
    infrastructure::{
        cache::in_memory::InMemoryCache, logging::in_memory::InMemoryLogging, storage::in_memory::InMemoryBalanceStore,
    },
};
use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post, put},
};
use std::sync::Arc;

pub type AppService = SettlementService<InMemoryLogging, InMemoryBalanceStore, InMemoryCache>;

// Define API routes
pub fn api_routes(service: Arc<AppService>) -> Router {
    Router::new()
        .route("/summaries", post(summarize))
        .route("/settlements/validate", post(validate_settlements))
        .route("/scopes", get(list_scopes))
        .route("/scopes/{scope_id}/balances", put(record_balances))
        .route("/scopes/{scope_id}/settlements", put(record_settlements))
        .route("/scopes/{scope_id}/summary", get(get_scope_summary))
        .route("/scopes/{scope_id}/validation", get(validate_scope_settlements))
        .route("/scopes/{scope_id}/suggestions", get(suggest_scope_settlements))
        .route("/logs", get(get_app_logs))
        .with_state(service)
}

#[utoipa::path(
    post,
    path = "/api/summaries",
    request_body = SummarizeRequest,
    responses(
        (status = 200, description = "Summaries built from the supplied data", body = SummarizeResponse)
    )
)]
pub async fn summarize(State(service): State<Arc<AppService>>, Json(req): Json<SummarizeRequest>) -> Json<SummarizeResponse> {
    Json(SummarizeResponse {
        summaries: service.summarize(&req.balances, &req.settlements),
        settlement_valid: service.validate(&req.settlements),
    })
}

#[utoipa::path(
    post,
    path = "/api/settlements/validate",
    request_body = ValidateSettlementsRequest,
    responses(
        (status = 200, description = "Sum-to-zero check over the supplied settlements", body = ValidateSettlementsResponse)
    )
)]
pub async fn validate_settlements(
    State(service): State<Arc<AppService>>,
    Json(req): Json<ValidateSettlementsRequest>,
) -> Json<ValidateSettlementsResponse> {
    Json(ValidateSettlementsResponse {
        is_valid: service.validate(&req.settlements),
    })
}

#[utoipa::path(
    get,
    path = "/api/scopes",
    responses(
        (status = 200, description = "Scopes with recorded balances", body = Vec<String>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn list_scopes(State(service): State<Arc<AppService>>) -> Result<Json<Vec<String>>, ApiError> {
    Ok(Json(service.list_scopes().await?))
}

#[utoipa::path(
    put,
    path = "/api/scopes/{scope_id}/balances",
    params(
        ("scope_id" = String, Path, description = "Group or account scope")
    ),
    request_body = RecordBalancesRequest,
    responses(
        (status = 204, description = "Balances recorded"),
        (status = 400, description = "Bad request", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn record_balances(
    State(service): State<Arc<AppService>>,
    Path(scope_id): Path<String>,
    Json(req): Json<RecordBalancesRequest>,
) -> Result<StatusCode, ApiError> {
    service.record_balances(&scope_id, req.balances).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    put,
    path = "/api/scopes/{scope_id}/settlements",
    params(
        ("scope_id" = String, Path, description = "Group or account scope")
    ),
    request_body = RecordSettlementsRequest,
    responses(
        (status = 204, description = "Settlement plan recorded"),
        (status = 400, description = "Bad request", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn record_settlements(
    State(service): State<Arc<AppService>>,
    Path(scope_id): Path<String>,
    Json(req): Json<RecordSettlementsRequest>,
) -> Result<StatusCode, ApiError> {
    service.record_settlements(&scope_id, req.settlements).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    get,
    path = "/api/scopes/{scope_id}/summary",
    params(
        ("scope_id" = String, Path, description = "Group or account scope")
    ),
    responses(
        (status = 200, description = "Per-user settlement summaries", body = ScopeSummaryResponse),
        (status = 404, description = "Scope not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn get_scope_summary(
    State(service): State<Arc<AppService>>,
    Path(scope_id): Path<String>,
) -> Result<Json<ScopeSummaryResponse>, ApiError> {
    Ok(Json(service.get_scope_summary(&scope_id).await?))
}

#[utoipa::path(
    get,
    path = "/api/scopes/{scope_id}/validation",
    params(
        ("scope_id" = String, Path, description = "Group or account scope")
    ),
    responses(
        (status = 200, description = "Validation of the scope's settlement plan", body = ValidationResponse),
        (status = 404, description = "Scope not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn validate_scope_settlements(
    State(service): State<Arc<AppService>>,
    Path(scope_id): Path<String>,
) -> Result<Json<ValidationResponse>, ApiError> {
    Ok(Json(service.validate_scope_settlements(&scope_id).await?))
}

#[utoipa::path(
    get,
    path = "/api/scopes/{scope_id}/suggestions",
    params(
        ("scope_id" = String, Path, description = "Group or account scope")
    ),
    responses(
        (status = 200, description = "Suggested transfers that clear every balance", body = Vec<Settlement>),
        (status = 404, description = "Scope not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn suggest_scope_settlements(
    State(service): State<Arc<AppService>>,
    Path(scope_id): Path<String>,
) -> Result<Json<Vec<Settlement>>, ApiError> {
    Ok(Json(service.suggest_scope_settlements(&scope_id).await?))
}

#[utoipa::path(
    get,
    path = "/api/logs",
    responses(
        (status = 200, description = "Application logs retrieved successfully", body = Vec<AppLog>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn get_app_logs(State(service): State<Arc<AppService>>) -> Result<Json<Vec<AppLog>>, ApiError> {
    let logs = service.get_app_logs().await?;
    Ok(Json(logs))
}
