pub mod cache_keys;
pub mod in_memory;

use crate::core::errors::SettleError;
use crate::core::services::ScopeSummaryResponse;
use async_trait::async_trait;

#[async_trait]
pub trait Cache: Send + Sync {
    async fn get_scope_summary(&self, scope_id: &str) -> Result<Option<ScopeSummaryResponse>, SettleError>;
    /// Stores `summary` as computed from scope `version`. Returns `false`, storing
    /// nothing, when the scope was already invalidated at a newer version.
    async fn save_scope_summary(
        &self,
        scope_id: &str,
        summary: &ScopeSummaryResponse,
        version: u64,
        ttl: std::time::Duration,
    ) -> Result<bool, SettleError>;
    /// Drops the cached summary and refuses later saves older than `version`.
    async fn invalidate_scope(&self, scope_id: &str, version: u64) -> Result<(), SettleError>;
    /// Drops every expired entry, returning how many were removed.
    async fn purge_expired(&self) -> Result<usize, SettleError>;
}
