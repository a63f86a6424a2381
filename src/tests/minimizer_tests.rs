use crate::core::aggregator::BalanceAggregator;
use crate::core::minimizer::{net_position_error, suggest_settlements};
use crate::core::money;
use crate::tests::{balance, transfer};

#[test]
fn test_single_creditor_is_paid_by_each_debtor() {
    let _ = env_logger::try_init();
    let balances = vec![balance("a", "Alice", 50.0), balance("b", "Bob", -30.0), balance("c", "Carol", -20.0)];

    let suggested = suggest_settlements(&balances);

    assert_eq!(suggested, vec![transfer("b", "a", 30.0), transfer("c", "a", 20.0)]);
    assert!(money::is_zero(net_position_error(&balances, &suggested)));
}

#[test]
fn test_largest_positions_are_matched_first() {
    let _ = env_logger::try_init();
    let balances = vec![
        balance("a", "Alice", 10.0),
        balance("b", "Bob", 40.0),
        balance("c", "Carol", -35.0),
        balance("d", "Dan", -15.0),
    ];

    let suggested = suggest_settlements(&balances);

    assert_eq!(
        suggested,
        vec![transfer("c", "b", 35.0), transfer("d", "a", 10.0), transfer("d", "b", 5.0)]
    );
    assert!(money::is_zero(net_position_error(&balances, &suggested)));
}

#[test]
fn test_settled_scope_needs_no_transfers() {
    let _ = env_logger::try_init();
    let balances = vec![balance("a", "Alice", 0.0), balance("b", "Bob", 0.004)];
    assert!(suggest_settlements(&balances).is_empty());
    assert!(suggest_settlements(&[]).is_empty());
}

#[test]
fn test_ties_break_by_user_id() {
    let _ = env_logger::try_init();
    let balances = vec![
        balance("z", "Zoe", 10.0),
        balance("y", "Yan", 10.0),
        balance("m", "Mia", -10.0),
        balance("k", "Kai", -10.0),
    ];

    let suggested = suggest_settlements(&balances);

    assert_eq!(suggested, vec![transfer("k", "y", 10.0), transfer("m", "z", 10.0)]);
}

#[test]
fn test_duplicate_and_non_finite_balances() {
    let _ = env_logger::try_init();
    let balances = vec![
        balance("a", "Alice", 5.0),
        balance("a", "Alice", 5.0),
        balance("b", "Bob", -10.0),
        balance("c", "Carol", f64::NAN),
        balance("d", "Dan", f64::INFINITY),
    ];

    let suggested = suggest_settlements(&balances);

    assert_eq!(suggested, vec![transfer("b", "a", 10.0)]);
}

#[test]
fn test_suggestions_fail_the_raw_sum_check() {
    let _ = env_logger::try_init();
    let balances = vec![balance("a", "Alice", 12.5), balance("b", "Bob", -12.5)];

    let suggested = suggest_settlements(&balances);

    assert!(!BalanceAggregator::is_settlement_valid(&suggested));
    assert_eq!(net_position_error(&balances, &suggested), 0.0);
}

#[test]
fn test_net_position_error_reports_worst_gap() {
    let _ = env_logger::try_init();
    let balances = vec![balance("a", "Alice", 50.0), balance("b", "Bob", -50.0)];
    let partial = vec![transfer("b", "a", 40.0)];
    assert_eq!(net_position_error(&balances, &partial), 10.0);

    let wrong_way = vec![transfer("a", "b", 50.0)];
    assert_eq!(net_position_error(&balances, &wrong_way), 100.0);

    // unknown users count as zero balances
    let stranger = vec![transfer("x", "y", 3.0)];
    assert_eq!(net_position_error(&[], &stranger), 3.0);
}
