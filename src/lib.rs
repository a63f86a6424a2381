pub mod api;
pub mod config;
pub mod constants;
pub mod core;
pub mod infrastructure;

pub use crate::core::aggregator::BalanceAggregator;
pub use crate::core::errors::SettleError;
pub use crate::core::models::{Settlement, SettlementSummary, SummaryEntry, UserBalance};
pub use crate::core::services::SettlementService;

#[cfg(test)]
mod tests; // Include integration tests
