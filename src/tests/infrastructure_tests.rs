use crate::core::errors::SettleError;
use crate::core::services::ScopeSummaryResponse;
use crate::infrastructure::cache::Cache;
use crate::infrastructure::cache::in_memory::InMemoryCache;
use crate::infrastructure::logging::LoggingService;
use crate::infrastructure::logging::in_memory::InMemoryLogging;
use crate::infrastructure::storage::BalanceStore;
use crate::infrastructure::storage::in_memory::InMemoryBalanceStore;
use crate::tests::{balance, transfer};
use serde_json::json;
use std::time::Duration;

fn summary(scope_id: &str) -> ScopeSummaryResponse {
    ScopeSummaryResponse {
        scope_id: scope_id.to_string(),
        summaries: vec![],
        settlement_valid: true,
        unassigned_settlements: 0,
    }
}

#[tokio::test]
async fn test_store_versions_advance_on_every_write() {
    let store = InMemoryBalanceStore::new();
    assert_eq!(store.scope_version("trip").await.unwrap(), 0);

    assert_eq!(store.save_settlements("trip", vec![transfer("a", "b", 1.0)]).await.unwrap(), 1);
    assert_eq!(store.get_balances("trip").await.unwrap(), None);
    assert!(store.list_scopes().await.unwrap().is_empty());

    assert_eq!(store.save_balances("trip", vec![balance("a", "Alice", 1.0)]).await.unwrap(), 2);
    assert_eq!(store.scope_version("trip").await.unwrap(), 2);
    assert_eq!(store.get_settlements("trip").await.unwrap(), vec![transfer("a", "b", 1.0)]);
    assert_eq!(store.list_scopes().await.unwrap(), vec!["trip"]);
}

#[tokio::test]
async fn test_cache_refuses_summaries_older_than_invalidation() {
    let cache = InMemoryCache::new();
    let ttl = Duration::from_secs(60);

    assert!(cache.save_scope_summary("trip", &summary("trip"), 1, ttl).await.unwrap());
    cache.invalidate_scope("trip", 2).await.unwrap();
    assert_eq!(cache.get_scope_summary("trip").await.unwrap(), None);

    assert!(!cache.save_scope_summary("trip", &summary("trip"), 1, ttl).await.unwrap());
    assert_eq!(cache.get_scope_summary("trip").await.unwrap(), None);

    assert!(cache.save_scope_summary("trip", &summary("trip"), 2, ttl).await.unwrap());
    assert_eq!(cache.get_scope_summary("trip").await.unwrap(), Some(summary("trip")));

    // an older invalidation does not lower the floor
    cache.invalidate_scope("trip", 1).await.unwrap();
    assert!(!cache.save_scope_summary("trip", &summary("trip"), 1, ttl).await.unwrap());
}

#[tokio::test]
async fn test_cache_keeps_the_newer_entry() {
    let cache = InMemoryCache::new();
    let ttl = Duration::from_secs(60);
    let mut newer = summary("trip");
    newer.unassigned_settlements = 3;

    assert!(cache.save_scope_summary("trip", &newer, 5, ttl).await.unwrap());
    assert!(!cache.save_scope_summary("trip", &summary("trip"), 4, ttl).await.unwrap());
    assert_eq!(cache.get_scope_summary("trip").await.unwrap(), Some(newer));
}

#[tokio::test]
async fn test_logging_drops_oldest_entries_past_capacity() {
    let logging = InMemoryLogging::with_capacity(2);
    for n in 0..3 {
        logging
            .log_action("TICK", json!({ "n": n }), Some("trip"))
            .await
            .unwrap();
    }

    let logs = logging.get_logs().await.unwrap();
    assert_eq!(logs.len(), 2);
    assert_eq!(logs[0].details["n"], 1);
    assert_eq!(logs[1].details["n"], 2);
    assert_ne!(logs[0].id, logs[1].id);
}

#[tokio::test]
async fn test_logging_requires_object_details() {
    let logging = InMemoryLogging::new();
    let result = logging.log_action("TICK", json!([1, 2]), None).await;
    assert!(matches!(result, Err(SettleError::LoggingError(_))));
    assert!(logging.get_logs().await.unwrap().is_empty());
}
