use crate::core::models::{Settlement, SettlementSummary, UserBalance};
use crate::core::money;
use log::{debug, warn};
use std::collections::{HashMap, HashSet};

/// Stateless combination of per-user balances with a settlement plan.
pub struct BalanceAggregator;

impl BalanceAggregator {
    /// Builds one summary per balance, in input order.
    ///
    /// Each summary carries the balance rounded to cents and the settlements
    /// that user pays, in the order they appear in `settlements`. Duplicate
    /// user ids yield duplicate summaries. Settlements whose payer has no
    /// balance are dropped.
    pub fn build_summaries<'a>(
        balances: &'a [UserBalance],
        settlements: &'a [Settlement],
    ) -> Vec<SettlementSummary<'a>> {
        debug!(
            "Building summaries for {} balances and {} settlements",
            balances.len(),
            settlements.len()
        );

        let mut by_payer: HashMap<&'a str, Vec<&'a Settlement>> = HashMap::new();
        for settlement in settlements {
            by_payer
                .entry(settlement.from_user_id.as_str())
                .or_default()
                .push(settlement);
        }

        let dropped = Self::unassigned_settlements(balances, settlements);
        if dropped > 0 {
            warn!("{} settlements have a payer with no balance and were left out", dropped);
        }

        balances
            .iter()
            .map(|balance| SettlementSummary {
                user_id: balance.user_id.as_str(),
                net_amount: money::round(balance.balance),
                settlements: by_payer
                    .get(balance.user_id.as_str())
                    .cloned()
                    .unwrap_or_default(),
            })
            .collect()
    }

    /// Coarse balance check: the raw `amount` fields must sum to zero within a cent.
    ///
    /// Direction is ignored, so two unrelated equal-and-opposite amounts pass.
    /// See [`crate::core::minimizer::net_position_error`] for a direction-aware check.
    pub fn is_settlement_valid(settlements: &[Settlement]) -> bool {
        let total: f64 = settlements.iter().map(|s| s.amount).sum();
        let valid = money::is_zero(total);
        debug!(
            "Settlement plan of {} transfers sums to {} (valid: {})",
            settlements.len(),
            total,
            valid
        );
        valid
    }

    /// Number of settlements whose payer matches no balance.
    pub fn unassigned_settlements(balances: &[UserBalance], settlements: &[Settlement]) -> usize {
        let known: HashSet<&str> = balances.iter().map(|b| b.user_id.as_str()).collect();
        settlements
            .iter()
            .filter(|s| !known.contains(s.from_user_id.as_str()))
            .count()
    }
}
