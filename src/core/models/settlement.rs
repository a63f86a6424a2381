use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A directed transfer of `amount` from `from_user_id` to `to_user_id`.
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct Settlement {
    pub from_user_id: String,
    pub to_user_id: String,
    pub amount: f64,
}

impl Settlement {
    pub fn new(from_user_id: impl Into<String>, to_user_id: impl Into<String>, amount: f64) -> Self {
        Settlement {
            from_user_id: from_user_id.into(),
            to_user_id: to_user_id.into(),
            amount,
        }
    }
}
