// Unit tests for the monthly aggregation engine: grouping, accumulation,
// ordering, and the fail-fast contract for malformed records.

use ordesk::analytics::aggregator::{aggregate_by_month, compute_totals};
use ordesk::core::AppError;
use ordesk::orders::Order;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn order(id: &str, created_at: &str, sale: Option<Decimal>, deposit: Option<Decimal>) -> Order {
    Order {
        id: id.to_string(),
        order_no: format!("ORD-{}", id),
        first_name: "Amina".to_string(),
        last_name: "Berrada".to_string(),
        address: "Casablanca".to_string(),
        phone: "+212600000000".to_string(),
        instagram_url: None,
        product_name: None,
        comment: None,
        amount_purchase: None,
        amount_sale: sale,
        amount_deposit: deposit,
        created_at: created_at.to_string(),
        user_id: "u1".to_string(),
    }
}

#[test]
fn empty_input_yields_empty_summaries_and_zero_totals() {
    let summaries = aggregate_by_month(&[]).unwrap();
    assert!(summaries.is_empty());

    let totals = compute_totals(&summaries);
    assert_eq!(totals.total_revenue, Decimal::ZERO);
    assert_eq!(totals.total_orders, 0);
    assert_eq!(totals.total_unpaid, Decimal::ZERO);
}

#[test]
fn orders_in_same_month_accumulate_into_one_summary() {
    let orders = vec![
        order("a", "2024-01-15", Some(dec!(100)), Some(dec!(40))),
        order("b", "2024-01-20", Some(dec!(50)), None),
    ];

    let summaries = aggregate_by_month(&orders).unwrap();
    assert_eq!(summaries.len(), 1);

    let summary = &summaries[0];
    assert_eq!(summary.month, "2024-01");
    assert_eq!(summary.revenue, dec!(150));
    assert_eq!(summary.order_count, 2);
    // 60 outstanding on the first order, the full 50 on the second
    assert_eq!(summary.unpaid, dec!(110));
}

#[test]
fn deposit_exceeding_sale_contributes_zero_unpaid() {
    let orders = vec![order("a", "2024-03-10", Some(dec!(50)), Some(dec!(80)))];

    let summaries = aggregate_by_month(&orders).unwrap();
    assert_eq!(summaries[0].unpaid, Decimal::ZERO);
    assert_eq!(summaries[0].revenue, dec!(50));
}

#[test]
fn absent_amounts_count_as_zero_not_as_errors() {
    let orders = vec![
        order("a", "2024-02-01", None, None),
        order("b", "2024-02-02", Some(dec!(0)), None),
    ];

    let summaries = aggregate_by_month(&orders).unwrap();
    assert_eq!(summaries[0].revenue, Decimal::ZERO);
    assert_eq!(summaries[0].order_count, 2);
    assert_eq!(summaries[0].unpaid, Decimal::ZERO);
}

#[test]
fn summaries_follow_first_seen_month_order() {
    // Reverse-chronological input stays reverse-chronological: the engine
    // never re-sorts by month key.
    let orders = vec![
        order("a", "2024-02-10", Some(dec!(10)), None),
        order("b", "2024-01-10", Some(dec!(20)), None),
    ];

    let summaries = aggregate_by_month(&orders).unwrap();
    let months: Vec<&str> = summaries.iter().map(|s| s.month.as_str()).collect();
    assert_eq!(months, vec!["2024-02", "2024-01"]);
}

#[test]
fn sorted_input_yields_chronological_summaries() {
    let orders = vec![
        order("a", "2023-11-05", Some(dec!(10)), None),
        order("b", "2023-12-05", Some(dec!(20)), None),
        order("c", "2023-12-20", Some(dec!(30)), None),
        order("d", "2024-01-05", Some(dec!(40)), None),
    ];

    let summaries = aggregate_by_month(&orders).unwrap();
    let months: Vec<&str> = summaries.iter().map(|s| s.month.as_str()).collect();
    assert_eq!(months, vec!["2023-11", "2023-12", "2024-01"]);
    assert_eq!(summaries[1].revenue, dec!(50));
}

#[test]
fn malformed_created_at_fails_fast_naming_the_record() {
    let orders = vec![
        order("good", "2024-01-15", Some(dec!(100)), None),
        order("bad-one", "", Some(dec!(50)), None),
    ];

    let err = aggregate_by_month(&orders).unwrap_err();
    match err {
        AppError::MalformedRecord { id } => assert_eq!(id, "bad-one"),
        other => panic!("expected MalformedRecord, got {:?}", other),
    }
}

#[test]
fn unparseable_date_text_is_malformed() {
    let orders = vec![order("x", "15/01/2024", None, None)];
    assert!(matches!(
        aggregate_by_month(&orders),
        Err(AppError::MalformedRecord { .. })
    ));
}

#[test]
fn aggregation_is_idempotent() {
    let orders = vec![
        order("a", "2024-01-15", Some(dec!(100)), Some(dec!(40))),
        order("b", "2024-02-20", Some(dec!(50)), None),
        order("c", "2024-01-25", None, Some(dec!(10))),
    ];

    let first = aggregate_by_month(&orders).unwrap();
    let second = aggregate_by_month(&orders).unwrap();
    assert_eq!(first, second);
}

#[test]
fn totals_sum_across_months() {
    let orders = vec![
        order("a", "2024-01-15", Some(dec!(100)), Some(dec!(40))),
        order("b", "2024-02-20", Some(dec!(50)), None),
        order("c", "2024-03-05", Some(dec!(25.50)), Some(dec!(25.50))),
    ];

    let summaries = aggregate_by_month(&orders).unwrap();
    let totals = compute_totals(&summaries);

    assert_eq!(totals.total_revenue, dec!(175.50));
    assert_eq!(totals.total_orders, 3);
    assert_eq!(totals.total_unpaid, dec!(110));
}
