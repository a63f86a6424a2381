use utoipa::OpenApi;

use crate::{
    api::models::{
        ErrorResponse, RecordBalancesRequest, RecordSettlementsRequest, SummarizeRequest, SummarizeResponse,
        ValidateSettlementsRequest, ValidateSettlementsResponse,
    },
    core::{
        models::{AppLog, Settlement, SummaryEntry, UserBalance},
        services::{ScopeSummaryResponse, ValidationResponse},
    },
};

#[derive(OpenApi)]
#[openapi(
    paths(
        super::handlers::summarize,
        super::handlers::validate_settlements,
        super::handlers::list_scopes,
        super::handlers::record_balances,
        super::handlers::record_settlements,
        super::handlers::get_scope_summary,
        super::handlers::validate_scope_settlements,
        super::handlers::suggest_scope_settlements,
        super::handlers::get_app_logs
    ),
    components(schemas(
        RecordBalancesRequest,
        RecordSettlementsRequest,
        SummarizeRequest,
        SummarizeResponse,
        ValidateSettlementsRequest,
        ValidateSettlementsResponse,
        ErrorResponse,
        UserBalance,
        Settlement,
        SummaryEntry,
        ScopeSummaryResponse,
        ValidationResponse,
        AppLog
    )),
    info(
        title = "Tally API",
        description = "API for combining group balances with settlement plans",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;
