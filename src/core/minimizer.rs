use crate::core::models::{Settlement, UserBalance};
use crate::core::money::{self, EPSILON};
use log::debug;
use std::cmp::Ordering;
use std::collections::HashMap;

/// Greedy settlement plan: repeatedly pays the largest creditor from the
/// largest debtor until every remaining position is within a cent of zero.
///
/// Balances are netted per user first, so duplicate user ids are merged.
/// Non-finite balances are ignored.
/// Ties are broken by user id to keep the output stable.
pub fn suggest_settlements(balances: &[UserBalance]) -> Vec<Settlement> {
    let mut net: HashMap<&str, f64> = HashMap::new();
    for balance in balances {
        *net.entry(balance.user_id.as_str()).or_insert(0.0) += balance.balance;
    }

    let mut creditors: Vec<(&str, f64)> = net
        .iter()
        .filter(|(_, amount)| amount.is_finite() && **amount >= EPSILON)
        .map(|(id, amount)| (*id, *amount))
        .collect();
    let mut debtors: Vec<(&str, f64)> = net
        .iter()
        .filter(|(_, amount)| amount.is_finite() && **amount <= -EPSILON)
        .map(|(id, amount)| (*id, -*amount))
        .collect();

    let mut suggested = Vec::new();
    while !creditors.is_empty() && !debtors.is_empty() {
        creditors.sort_by(largest_first);
        debtors.sort_by(largest_first);

        let (creditor, credit) = creditors[0];
        let (debtor, debit) = debtors[0];
        let amount = credit.min(debit);

        let rounded = money::round(amount);
        if !money::is_zero(rounded) {
            suggested.push(Settlement::new(debtor, creditor, rounded));
        }

        creditors[0].1 -= amount;
        debtors[0].1 -= amount;

        if creditors[0].1 < EPSILON {
            creditors.remove(0);
        }
        if debtors[0].1 < EPSILON {
            debtors.remove(0);
        }
    }

    debug!(
        "Suggested {} settlements for {} balances",
        suggested.len(),
        balances.len()
    );
    suggested
}

/// Largest absolute gap between each user's balance and the net flow the
/// settlements give them (received minus paid).
///
/// Users that appear only in settlements are treated as having a zero balance.
pub fn net_position_error(balances: &[UserBalance], settlements: &[Settlement]) -> f64 {
    let mut gap: HashMap<&str, f64> = HashMap::new();
    for balance in balances {
        *gap.entry(balance.user_id.as_str()).or_insert(0.0) += balance.balance;
    }
    for settlement in settlements {
        *gap.entry(settlement.to_user_id.as_str()).or_insert(0.0) -= settlement.amount;
        *gap.entry(settlement.from_user_id.as_str()).or_insert(0.0) += settlement.amount;
    }
    gap.values().fold(0.0, |worst, g| worst.max(g.abs()))
}

fn largest_first(a: &(&str, f64), b: &(&str, f64)) -> Ordering {
    b.1.total_cmp(&a.1).then_with(|| a.0.cmp(b.0))
}
