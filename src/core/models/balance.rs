use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A user's net position within a scope (a group or the whole account).
///
/// Positive `balance` means the user should receive money, negative means
/// the user owes money.
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct UserBalance {
    pub user_id: String,
    pub name: String,
    pub balance: f64,
}

impl UserBalance {
    pub fn new(user_id: impl Into<String>, name: impl Into<String>, balance: f64) -> Self {
        UserBalance {
            user_id: user_id.into(),
            name: name.into(),
            balance,
        }
    }
}
