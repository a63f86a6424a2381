use crate::core::errors::SettleError;
use crate::core::services::ScopeSummaryResponse;
use crate::infrastructure::cache::{Cache, cache_keys::scope_summary_key};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

#[derive(Clone)]
struct CachedSummary {
    summary: ScopeSummaryResponse,
    version: u64,
    expires_at: DateTime<Utc>,
}

#[derive(Default)]
struct CacheState {
    entries: HashMap<String, CachedSummary>,
    // newest version each key was invalidated at
    floors: HashMap<String, u64>,
}

#[derive(Clone, Default)]
pub struct InMemoryCache {
    state: Arc<RwLock<CacheState>>,
}

impl InMemoryCache {
    pub fn new() -> Self {
        InMemoryCache {
            state: Arc::new(RwLock::new(CacheState::default())),
        }
    }
}

#[async_trait]
impl Cache for InMemoryCache {
    async fn get_scope_summary(&self, scope_id: &str) -> Result<Option<ScopeSummaryResponse>, SettleError> {
        let state = self.state.read().await;
        let now = Utc::now();
        Ok(state
            .entries
            .get(&scope_summary_key(scope_id))
            .filter(|entry| entry.expires_at > now)
            .map(|entry| entry.summary.clone()))
    }

    async fn save_scope_summary(
        &self,
        scope_id: &str,
        summary: &ScopeSummaryResponse,
        version: u64,
        ttl: std::time::Duration,
    ) -> Result<bool, SettleError> {
        let expires_at = Utc::now()
            + chrono::Duration::from_std(ttl)
                .map_err(|e| SettleError::CacheError(format!("Failed to convert TTL: {}", e)))?;
        let key = scope_summary_key(scope_id);

        let mut state = self.state.write().await;
        if state.floors.get(&key).is_some_and(|floor| *floor > version) {
            return Ok(false);
        }
        if state.entries.get(&key).is_some_and(|entry| entry.version > version) {
            return Ok(false);
        }
        state.entries.insert(
            key,
            CachedSummary {
                summary: summary.clone(),
                version,
                expires_at,
            },
        );
        Ok(true)
    }

    async fn invalidate_scope(&self, scope_id: &str, version: u64) -> Result<(), SettleError> {
        let key = scope_summary_key(scope_id);
        let mut state = self.state.write().await;
        state.entries.remove(&key);
        let floor = state.floors.entry(key).or_insert(0);
        *floor = (*floor).max(version);
        Ok(())
    }

    async fn purge_expired(&self) -> Result<usize, SettleError> {
        let mut state = self.state.write().await;
        let before = state.entries.len();
        let now = Utc::now();
        state.entries.retain(|_, entry| entry.expires_at > now);
        Ok(before - state.entries.len())
    }
}
