use crate::core::errors::SettleError;
use crate::core::models::{Settlement, UserBalance};
use async_trait::async_trait;

/// Source of per-scope balances and settlement plans.
///
/// Every write bumps the scope's version, atomically with the data it stores,
/// and returns the new value. Backends report their own failures as
/// [`SettleError::StorageError`].
#[async_trait]
pub trait BalanceStore: Send + Sync {
    async fn save_balances(&self, scope_id: &str, balances: Vec<UserBalance>) -> Result<u64, SettleError>;
    /// `None` when no balances were ever recorded for the scope.
    async fn get_balances(&self, scope_id: &str) -> Result<Option<Vec<UserBalance>>, SettleError>;
    async fn save_settlements(&self, scope_id: &str, settlements: Vec<Settlement>) -> Result<u64, SettleError>;
    /// Empty when the scope has no settlement plan yet.
    async fn get_settlements(&self, scope_id: &str) -> Result<Vec<Settlement>, SettleError>;
    /// 0 for a scope that was never written.
    async fn scope_version(&self, scope_id: &str) -> Result<u64, SettleError>;
    async fn list_scopes(&self) -> Result<Vec<String>, SettleError>;
}

pub mod in_memory;
