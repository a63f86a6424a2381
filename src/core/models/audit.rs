use crate::core::errors::SettleError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct AppLog {
    pub id: String,
    pub action: String,
    pub scope_id: Option<String>,
    #[schema(value_type = Object)]
    pub details: HashMap<String, serde_json::Value>,
    #[schema(value_type = String, example = "2024-06-01T12:34:56Z")]
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

impl AppLog {
    /// Stamps a new entry; `details` must be a JSON object.
    pub fn record(action: &str, scope_id: Option<&str>, details: serde_json::Value) -> Result<Self, SettleError> {
        let serde_json::Value::Object(fields) = details else {
            return Err(SettleError::LoggingError(format!(
                "Details for {} must be a JSON object",
                action
            )));
        };
        Ok(AppLog {
            id: Uuid::new_v4().to_string(),
            action: action.to_string(),
            scope_id: scope_id.map(String::from),
            details: fields.into_iter().collect(),
            timestamp: chrono::Utc::now(),
        })
    }
}
