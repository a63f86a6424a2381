use crate::config::CONFIG;
use crate::constants::{
    BALANCES_RECORDED, MAX_AMOUNT, MAX_SCOPE_ID_LENGTH, MAX_USER_ID_LENGTH, SETTLEMENTS_RECORDED, SETTLEMENTS_SUGGESTED,
    SETTLEMENTS_VALIDATED, SUMMARY_QUERIED,
};
use crate::core::aggregator::BalanceAggregator;
use crate::core::errors::SettleError;
use crate::core::minimizer;
use crate::core::models::{AppLog, Settlement, SummaryEntry, UserBalance};
use crate::core::money;
use crate::infrastructure::cache::Cache;
use crate::infrastructure::logging::LoggingService;
use crate::infrastructure::storage::BalanceStore;
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::time::Duration;
use tracing::{debug, info, warn};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Debug, ToSchema, Clone, PartialEq)]
pub struct ScopeSummaryResponse {
    pub scope_id: String,
    pub summaries: Vec<SummaryEntry>,
    /// Result of the sum-to-zero check over the scope's settlement plan
    pub settlement_valid: bool,
    /// Settlements whose payer has no balance in the scope
    pub unassigned_settlements: usize,
}

#[derive(Serialize, Deserialize, Debug, ToSchema, Clone, PartialEq)]
pub struct ValidationResponse {
    pub scope_id: String,
    pub is_valid: bool,
    pub total_amount: f64,
    /// Largest gap between a balance and the net flow the plan gives that user
    pub max_net_position_error: f64,
}

pub struct SettlementService<L: LoggingService, S: BalanceStore, C: Cache> {
    store: S,
    logging: L,
    cache: C,
    cache_ttl: Duration,
}

impl<L: LoggingService, S: BalanceStore, C: Cache> SettlementService<L, S, C> {
    pub fn new(store: S, logging: L, cache: C) -> Self {
        SettlementService {
            store,
            logging,
            cache,
            cache_ttl: CONFIG.summary_cache_ttl,
        }
    }

    pub fn with_cache_ttl(mut self, ttl: Duration) -> Self {
        self.cache_ttl = ttl;
        self
    }

    fn validate_string_input(&self, field: &str, value: &str, max_length: usize) -> Result<(), SettleError> {
        if value.trim().is_empty() {
            return Err(SettleError::invalid_input(
                field,
                format!("Invalid {}", field),
                format!("{} cannot be empty", field),
            ));
        }
        if value.len() > max_length {
            return Err(SettleError::invalid_input(
                field,
                format!("{} Too Long", field),
                format!("{} cannot exceed {} characters", field, max_length),
            ));
        }
        if value.chars().any(|c| c.is_control() || "<>{}[]".contains(c)) {
            return Err(SettleError::invalid_input(
                field,
                format!("Invalid {}", field),
                format!("{} contains invalid characters", field),
            ));
        }
        Ok(())
    }

    // Sign and direction pass through; the magnitude cap keeps every sum finite.
    fn validate_amount_input(&self, field: &str, amount: f64) -> Result<(), SettleError> {
        if !amount.is_finite() {
            return Err(SettleError::invalid_input(
                field,
                "Invalid Amount",
                "Amount must be a finite number",
            ));
        }
        if amount.abs() > MAX_AMOUNT {
            return Err(SettleError::invalid_input(
                field,
                "Amount Too Large",
                format!("Amount cannot exceed {} in magnitude", MAX_AMOUNT),
            ));
        }
        Ok(())
    }

    /// Loads a scope together with the version it was read at.
    ///
    /// The version is read first, so the data is never older than it.
    async fn load_scope(&self, scope_id: &str) -> Result<(Vec<UserBalance>, Vec<Settlement>, u64), SettleError> {
        self.validate_string_input("scope_id", scope_id, MAX_SCOPE_ID_LENGTH)?;
        let version = self.store.scope_version(scope_id).await?;
        let (balances, settlements) = futures::try_join!(
            self.store.get_balances(scope_id),
            self.store.get_settlements(scope_id)
        )?;
        let balances = balances.ok_or_else(|| SettleError::ScopeNotFound(scope_id.to_string()))?;
        Ok((balances, settlements, version))
    }

    fn finite_or_invalid(&self, field: &str, value: f64) -> Result<f64, SettleError> {
        if value.is_finite() {
            Ok(value)
        } else {
            Err(SettleError::invalid_input(
                field,
                "Amount Overflow",
                format!("{} is not a finite number", field),
            ))
        }
    }

    pub async fn record_balances(&self, scope_id: &str, balances: Vec<UserBalance>) -> Result<(), SettleError> {
        self.validate_string_input("scope_id", scope_id, MAX_SCOPE_ID_LENGTH)?;
        for balance in &balances {
            self.validate_string_input("user_id", &balance.user_id, MAX_USER_ID_LENGTH)?;
            self.validate_amount_input("balance", balance.balance)?;
        }

        let count = balances.len();
        let version = self.store.save_balances(scope_id, balances).await?;
        self.cache.invalidate_scope(scope_id, version).await?;

        info!("Recorded {} balances for scope {}", count, scope_id);
        self.logging
            .log_action(
                BALANCES_RECORDED,
                json!({ "scope_id": scope_id, "count": count }),
                Some(scope_id),
            )
            .await
    }

    pub async fn record_settlements(&self, scope_id: &str, settlements: Vec<Settlement>) -> Result<(), SettleError> {
        self.validate_string_input("scope_id", scope_id, MAX_SCOPE_ID_LENGTH)?;
        for settlement in &settlements {
            self.validate_string_input("from_user_id", &settlement.from_user_id, MAX_USER_ID_LENGTH)?;
            self.validate_string_input("to_user_id", &settlement.to_user_id, MAX_USER_ID_LENGTH)?;
            self.validate_amount_input("amount", settlement.amount)?;
        }

        let count = settlements.len();
        let version = self.store.save_settlements(scope_id, settlements).await?;
        self.cache.invalidate_scope(scope_id, version).await?;

        info!("Recorded {} settlements for scope {}", count, scope_id);
        self.logging
            .log_action(
                SETTLEMENTS_RECORDED,
                json!({ "scope_id": scope_id, "count": count }),
                Some(scope_id),
            )
            .await
    }

    pub async fn get_scope_summary(&self, scope_id: &str) -> Result<ScopeSummaryResponse, SettleError> {
        if let Some(cached) = self.cache.get_scope_summary(scope_id).await? {
            debug!("Serving cached summary for scope {}", scope_id);
            return Ok(cached);
        }

        let (balances, settlements, version) = self.load_scope(scope_id).await?;
        let response = ScopeSummaryResponse {
            scope_id: scope_id.to_string(),
            summaries: self.summarize(&balances, &settlements),
            settlement_valid: BalanceAggregator::is_settlement_valid(&settlements),
            unassigned_settlements: BalanceAggregator::unassigned_settlements(&balances, &settlements),
        };

        if response.unassigned_settlements > 0 {
            warn!(
                "Scope {} has {} settlements with an unknown payer",
                scope_id, response.unassigned_settlements
            );
        }

        let cached = self
            .cache
            .save_scope_summary(scope_id, &response, version, self.cache_ttl)
            .await?;
        if !cached {
            debug!("Scope {} changed while summarizing; result not cached", scope_id);
        }

        self.logging
            .log_action(
                SUMMARY_QUERIED,
                json!({
                    "scope_id": scope_id,
                    "summaries": response.summaries.len(),
                    "settlement_valid": response.settlement_valid,
                }),
                Some(scope_id),
            )
            .await?;

        Ok(response)
    }

    pub async fn validate_scope_settlements(&self, scope_id: &str) -> Result<ValidationResponse, SettleError> {
        let (balances, settlements, _) = self.load_scope(scope_id).await?;
        let total: f64 = settlements.iter().map(|s| s.amount).sum();
        let gap = minimizer::net_position_error(&balances, &settlements);
        let response = ValidationResponse {
            scope_id: scope_id.to_string(),
            is_valid: self.validate(&settlements),
            total_amount: money::round(self.finite_or_invalid("total_amount", total)?),
            max_net_position_error: money::round(self.finite_or_invalid("max_net_position_error", gap)?),
        };

        self.logging
            .log_action(
                SETTLEMENTS_VALIDATED,
                json!({ "scope_id": scope_id, "is_valid": response.is_valid }),
                Some(scope_id),
            )
            .await?;

        Ok(response)
    }

    pub async fn suggest_scope_settlements(&self, scope_id: &str) -> Result<Vec<Settlement>, SettleError> {
        let (balances, _, _) = self.load_scope(scope_id).await?;
        let suggested = minimizer::suggest_settlements(&balances);

        info!("Suggested {} settlements for scope {}", suggested.len(), scope_id);
        self.logging
            .log_action(
                SETTLEMENTS_SUGGESTED,
                json!({ "scope_id": scope_id, "count": suggested.len() }),
                Some(scope_id),
            )
            .await?;

        Ok(suggested)
    }

    /// Stateless summary for callers that already hold the data.
    pub fn summarize(&self, balances: &[UserBalance], settlements: &[Settlement]) -> Vec<SummaryEntry> {
        BalanceAggregator::build_summaries(balances, settlements)
            .iter()
            .map(|summary| summary.to_entry())
            .collect()
    }

    pub fn validate(&self, settlements: &[Settlement]) -> bool {
        BalanceAggregator::is_settlement_valid(settlements)
    }

    pub async fn list_scopes(&self) -> Result<Vec<String>, SettleError> {
        self.store.list_scopes().await
    }

    pub async fn purge_expired_summaries(&self) -> Result<usize, SettleError> {
        let purged = self.cache.purge_expired().await?;
        if purged > 0 {
            debug!("Purged {} expired scope summaries", purged);
        }
        Ok(purged)
    }

    pub async fn get_app_logs(&self) -> Result<Vec<AppLog>, SettleError> {
        self.logging.get_logs().await
    }
}
