pub const BALANCES_RECORDED: &str = "BALANCES_RECORDED";
pub const SETTLEMENTS_RECORDED: &str = "SETTLEMENTS_RECORDED";
pub const SUMMARY_QUERIED: &str = "SUMMARY_QUERIED";
pub const SETTLEMENTS_VALIDATED: &str = "SETTLEMENTS_VALIDATED";
pub const SETTLEMENTS_SUGGESTED: &str = "SETTLEMENTS_SUGGESTED";

pub const MAX_SCOPE_ID_LENGTH: usize = 64;
pub const MAX_USER_ID_LENGTH: usize = 64;

/// Largest magnitude accepted for a single balance or transfer.
pub const MAX_AMOUNT: f64 = 1_000_000_000_000.0;

pub const MAX_LOG_ENTRIES: usize = 10_000;
