use super::settlement::Settlement;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Per-user view joining a rounded balance with the settlements that user pays.
///
/// Borrows from the inputs it was built from; use [`SettlementSummary::to_entry`]
/// when the summary has to outlive them.
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct SettlementSummary<'a> {
    pub user_id: &'a str,
    pub net_amount: f64,
    pub settlements: Vec<&'a Settlement>,
}

impl SettlementSummary<'_> {
    pub fn to_entry(&self) -> SummaryEntry {
        SummaryEntry {
            user_id: self.user_id.to_string(),
            net_amount: self.net_amount,
            settlements: self.settlements.iter().map(|s| (*s).clone()).collect(),
        }
    }
}

/// Owned form of [`SettlementSummary`], used for caching and responses.
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct SummaryEntry {
    pub user_id: String,
    pub net_amount: f64,
    pub settlements: Vec<Settlement>,
}
