use crate::constants::MAX_LOG_ENTRIES;
use crate::core::errors::SettleError;
use crate::core::models::AppLog;
use crate::infrastructure::logging::LoggingService;
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Bounded action log; once full, the oldest entry is dropped for each new one.
#[derive(Clone)]
pub struct InMemoryLogging {
    entries: Arc<RwLock<VecDeque<AppLog>>>,
    capacity: usize,
}

impl Default for InMemoryLogging {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryLogging {
    pub fn new() -> Self {
        Self::with_capacity(MAX_LOG_ENTRIES)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        InMemoryLogging {
            entries: Arc::new(RwLock::new(VecDeque::new())),
            capacity: capacity.max(1),
        }
    }
}

#[async_trait]
impl LoggingService for InMemoryLogging {
    async fn log_action(
        &self,
        action: &str,
        details: serde_json::Value,
        scope_id: Option<&str>,
    ) -> Result<(), SettleError> {
        let entry = AppLog::record(action, scope_id, details)?;
        let mut entries = self.entries.write().await;
        while entries.len() >= self.capacity {
            entries.pop_front();
        }
        entries.push_back(entry);
        Ok(())
    }

    async fn get_logs(&self) -> Result<Vec<AppLog>, SettleError> {
        Ok(self.entries.read().await.iter().cloned().collect())
    }
}
