use crate::core::errors::SettleError;
use crate::core::models::{Settlement, UserBalance};
use crate::infrastructure::storage::BalanceStore;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

#[derive(Clone, Debug, Default)]
struct ScopeRecord {
    balances: Option<Vec<UserBalance>>,
    settlements: Vec<Settlement>,
    version: u64,
}

#[derive(Clone, Default)]
pub struct InMemoryBalanceStore {
    scopes: Arc<RwLock<HashMap<String, ScopeRecord>>>,
}

impl InMemoryBalanceStore {
    pub fn new() -> Self {
        InMemoryBalanceStore {
            scopes: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    async fn update<F>(&self, scope_id: &str, apply: F) -> u64
    where
        F: FnOnce(&mut ScopeRecord) + Send,
    {
        let mut scopes = self.scopes.write().await;
        let record = scopes.entry(scope_id.to_string()).or_default();
        apply(record);
        record.version += 1;
        record.version
    }
}

#[async_trait]
impl BalanceStore for InMemoryBalanceStore {
    async fn save_balances(&self, scope_id: &str, balances: Vec<UserBalance>) -> Result<u64, SettleError> {
        Ok(self
            .update(scope_id, |record| record.balances = Some(balances))
            .await)
    }

    async fn get_balances(&self, scope_id: &str) -> Result<Option<Vec<UserBalance>>, SettleError> {
        let scopes = self.scopes.read().await;
        Ok(scopes.get(scope_id).and_then(|record| record.balances.clone()))
    }

    async fn save_settlements(&self, scope_id: &str, settlements: Vec<Settlement>) -> Result<u64, SettleError> {
        Ok(self
            .update(scope_id, |record| record.settlements = settlements)
            .await)
    }

    async fn get_settlements(&self, scope_id: &str) -> Result<Vec<Settlement>, SettleError> {
        let scopes = self.scopes.read().await;
        Ok(scopes
            .get(scope_id)
            .map(|record| record.settlements.clone())
            .unwrap_or_default())
    }

    async fn scope_version(&self, scope_id: &str) -> Result<u64, SettleError> {
        Ok(self.scopes.read().await.get(scope_id).map_or(0, |record| record.version))
    }

    async fn list_scopes(&self) -> Result<Vec<String>, SettleError> {
        let mut scopes: Vec<String> = self
            .scopes
            .read()
            .await
            .iter()
            .filter(|(_, record)| record.balances.is_some())
            .map(|(id, _)| id.clone())
            .collect();
        scopes.sort();
        Ok(scopes)
    }
}
