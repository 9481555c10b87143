// Property-based tests for the aggregation engine.
//
// Orders are generated with mid-month dates so the month key never depends
// on the process time zone.

use proptest::prelude::*;
use rust_decimal::Decimal;

use ordesk::analytics::aggregator::{aggregate_by_month, compute_shares, compute_totals};
use ordesk::analytics::MonthlySummary;
use ordesk::orders::Order;

fn order_for(year: u16, month: u8, sale: Option<u32>, deposit: Option<u32>) -> Order {
    Order {
        id: format!("{}-{}-{:?}-{:?}", year, month, sale, deposit),
        order_no: "ORD-000000".to_string(),
        first_name: "Test".to_string(),
        last_name: "Client".to_string(),
        address: "Somewhere".to_string(),
        phone: "+212600000000".to_string(),
        instagram_url: None,
        product_name: None,
        comment: None,
        amount_purchase: None,
        amount_sale: sale.map(Decimal::from),
        amount_deposit: deposit.map(Decimal::from),
        created_at: format!("{:04}-{:02}-15", year, month),
        user_id: "u1".to_string(),
    }
}

fn arb_order() -> impl Strategy<Value = Order> {
    (
        2020u16..2027,
        1u8..=12,
        proptest::option::of(0u32..100_000),
        proptest::option::of(0u32..100_000),
    )
        .prop_map(|(year, month, sale, deposit)| order_for(year, month, sale, deposit))
}

fn arb_orders() -> impl Strategy<Value = Vec<Order>> {
    proptest::collection::vec(arb_order(), 0..40)
}

fn sorted_by_month(mut summaries: Vec<MonthlySummary>) -> Vec<MonthlySummary> {
    summaries.sort_by(|a, b| a.month.cmp(&b.month));
    summaries
}

proptest! {
    /// No order is lost or double-counted
    #[test]
    fn order_counts_are_conserved(orders in arb_orders()) {
        let summaries = aggregate_by_month(&orders).unwrap();
        let counted: i64 = summaries.iter().map(|s| s.order_count).sum();
        prop_assert_eq!(counted, orders.len() as i64);
    }

    /// Unpaid balances never go negative, per month or in total
    #[test]
    fn unpaid_is_never_negative(orders in arb_orders()) {
        let summaries = aggregate_by_month(&orders).unwrap();
        for summary in &summaries {
            prop_assert!(summary.unpaid >= Decimal::ZERO);
        }
        let totals = compute_totals(&summaries);
        prop_assert!(totals.total_unpaid >= Decimal::ZERO);
    }

    /// A fully deposited month owes nothing
    #[test]
    fn full_deposit_means_zero_unpaid(sale in 0u32..100_000, year in 2020u16..2027, month in 1u8..=12) {
        let orders = vec![order_for(year, month, Some(sale), Some(sale))];
        let summaries = aggregate_by_month(&orders).unwrap();
        prop_assert_eq!(summaries[0].unpaid, Decimal::ZERO);
    }

    /// Reordering the input changes only the summary sequence order, never
    /// the per-month figures or the rollup totals
    #[test]
    fn aggregation_is_permutation_invariant_up_to_order(orders in arb_orders()) {
        let forward = aggregate_by_month(&orders).unwrap();

        let mut reversed = orders.clone();
        reversed.reverse();
        let backward = aggregate_by_month(&reversed).unwrap();

        prop_assert_eq!(sorted_by_month(forward.clone()), sorted_by_month(backward.clone()));
        prop_assert_eq!(compute_totals(&forward), compute_totals(&backward));
    }

    /// Summaries come out in first-seen-month order over the input
    #[test]
    fn summary_order_is_first_seen(orders in arb_orders()) {
        let summaries = aggregate_by_month(&orders).unwrap();

        let mut expected: Vec<String> = Vec::new();
        for order in &orders {
            let key = format!("{}", &order.created_at[..7]);
            if !expected.contains(&key) {
                expected.push(key);
            }
        }

        let actual: Vec<String> = summaries.iter().map(|s| s.month.clone()).collect();
        prop_assert_eq!(actual, expected);
    }

    /// Same input, same output
    #[test]
    fn aggregation_is_idempotent(orders in arb_orders()) {
        let first = aggregate_by_month(&orders).unwrap();
        let second = aggregate_by_month(&orders).unwrap();
        prop_assert_eq!(first, second);
    }

    /// Share percentages sum to 100 when there is revenue, and are all zero
    /// when there is none
    #[test]
    fn share_percentages_sum_to_hundred_or_zero(orders in arb_orders()) {
        let summaries = aggregate_by_month(&orders).unwrap();
        let shares = compute_shares(&summaries);
        prop_assert_eq!(shares.len(), summaries.len());

        let total_revenue: Decimal = summaries.iter().map(|s| s.revenue).sum();
        let percent_sum: Decimal = shares.iter().map(|s| s.percent).sum();

        if total_revenue > Decimal::ZERO {
            let tolerance = Decimal::new(1, 6); // 0.000001
            let delta = (percent_sum - Decimal::from(100)).abs();
            prop_assert!(delta <= tolerance, "percent sum {} off by {}", percent_sum, delta);
        } else {
            for share in &shares {
                prop_assert_eq!(share.percent, Decimal::ZERO);
            }
        }
    }

    /// Shares keep the summary ordering
    #[test]
    fn shares_preserve_summary_order(orders in arb_orders()) {
        let summaries = aggregate_by_month(&orders).unwrap();
        let shares = compute_shares(&summaries);

        let summary_months: Vec<&str> = summaries.iter().map(|s| s.month.as_str()).collect();
        let share_months: Vec<&str> = shares.iter().map(|s| s.month.as_str()).collect();
        prop_assert_eq!(summary_months, share_months);
    }
}
