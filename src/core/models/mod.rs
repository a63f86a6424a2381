pub mod audit;
pub mod balance;
pub mod settlement;
pub mod summary;

pub use audit::AppLog;
pub use balance::UserBalance;
pub use settlement::Settlement;
pub use summary::{SettlementSummary, SummaryEntry};
