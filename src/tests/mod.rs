mod infrastructure_tests;
mod minimizer_tests;

use crate::core::models::{Settlement, UserBalance};
use crate::core::services::SettlementService;
use crate::infrastructure::cache::in_memory::InMemoryCache;
use crate::infrastructure::logging::in_memory::InMemoryLogging;
use crate::infrastructure::storage::in_memory::InMemoryBalanceStore;

pub fn create_test_service() -> SettlementService<InMemoryLogging, InMemoryBalanceStore, InMemoryCache> {
    let store = InMemoryBalanceStore::new();
    let logging = InMemoryLogging::new();
    let cache = InMemoryCache::new();
    SettlementService::new(store, logging, cache)
}

pub fn balance(user_id: &str, name: &str, amount: f64) -> UserBalance {
    UserBalance::new(user_id, name, amount)
}

pub fn transfer(from: &str, to: &str, amount: f64) -> Settlement {
    Settlement::new(from, to, amount)
}
