// Monthly aggregation engine
//
// Pure, synchronous functions over an in-memory order snapshot. No I/O, no
// shared state; callers re-run them whenever their snapshot changes. This is
// the computation behind both the dashboard charts and the unpaid-balance
// reporting, so the contract is strict:
//
// - every order lands in exactly one month bucket, keyed by created_at;
// - summaries come out in first-seen-month order over the input sequence
//   (a caller that fetched ascending by created_at gets chronological
//   output; the aggregator itself never re-sorts);
// - an unparseable created_at aborts the whole aggregation with a
//   MalformedRecord error naming the order, rather than returning a partial
//   result that silently under-reports revenue.

use std::collections::HashMap;

use rust_decimal::Decimal;

use crate::core::{money, time, AppError, Result};
use crate::modules::analytics::models::{MonthlySummary, RevenueShare, Totals};
use crate::modules::orders::models::Order;

/// Group orders into per-month summaries.
///
/// The ordered grouping is explicit: a `Vec` of accumulators in emission
/// order plus a month-key index into it, so the first-seen ordering is a
/// structural guarantee rather than an artifact of map iteration.
pub fn aggregate_by_month(orders: &[Order]) -> Result<Vec<MonthlySummary>> {
    let mut summaries: Vec<MonthlySummary> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for order in orders {
        let key = time::month_key(&order.created_at)
            .ok_or_else(|| AppError::malformed_record(order.id.as_str()))?;

        let slot = match index.get(&key) {
            Some(&slot) => slot,
            None => {
                summaries.push(MonthlySummary::empty(key.clone()));
                index.insert(key, summaries.len() - 1);
                summaries.len() - 1
            }
        };

        let sale = money::or_zero(order.amount_sale);
        let summary = &mut summaries[slot];
        summary.revenue += sale;
        summary.order_count += 1;
        summary.unpaid += order.unpaid();
    }

    Ok(summaries)
}

/// Sum the per-month figures into dashboard KPIs. Commutative, so the
/// summary ordering does not matter here.
pub fn compute_totals(summaries: &[MonthlySummary]) -> Totals {
    let mut totals = Totals::zero();
    for summary in summaries {
        totals.total_revenue += summary.revenue;
        totals.total_orders += summary.order_count;
        totals.total_unpaid += summary.unpaid;
    }
    totals
}

/// Per-month revenue shares for the donut chart, preserving the summary
/// ordering. Values are rounded to two decimal places (banker's rounding,
/// the crate-wide rule); percentages are exact quotients. A zero total
/// yields zero percent for every entry rather than a division error.
pub fn compute_shares(summaries: &[MonthlySummary]) -> Vec<RevenueShare> {
    let total_revenue: Decimal = summaries.iter().map(|s| s.revenue).sum();
    let hundred = Decimal::new(100, 0);

    summaries
        .iter()
        .map(|summary| RevenueShare {
            month: summary.month.clone(),
            value: money::round_display(summary.revenue),
            percent: if total_revenue > Decimal::ZERO {
                summary.revenue / total_revenue * hundred
            } else {
                Decimal::ZERO
            },
        })
        .collect()
}
