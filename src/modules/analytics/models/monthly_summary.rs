use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One month of dashboard figures, recomputed from the order snapshot on
/// every request. Has no persisted identity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlySummary {
    /// Calendar month key, `YYYY-MM`
    pub month: String,
    /// Sum of sale amounts for the month (absent amounts count as zero)
    pub revenue: Decimal,
    /// Number of orders created in the month
    pub order_count: i64,
    /// Sum of per-order outstanding balances, each floored at zero
    pub unpaid: Decimal,
}

impl MonthlySummary {
    /// A fresh accumulator for a month with no figures yet
    pub fn empty(month: String) -> Self {
        Self {
            month,
            revenue: Decimal::ZERO,
            order_count: 0,
            unpaid: Decimal::ZERO,
        }
    }
}

/// Rollup across every month, order-independent
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Totals {
    pub total_revenue: Decimal,
    pub total_orders: i64,
    pub total_unpaid: Decimal,
}

impl Totals {
    pub fn zero() -> Self {
        Self {
            total_revenue: Decimal::ZERO,
            total_orders: 0,
            total_unpaid: Decimal::ZERO,
        }
    }
}

/// One slice of the revenue donut: a month's rounded revenue and its share
/// of the overall total.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RevenueShare {
    pub month: String,
    /// Revenue rounded to two decimal places (banker's rounding)
    pub value: Decimal,
    /// `revenue / total_revenue * 100`; zero for every entry when the total
    /// revenue is zero
    pub percent: Decimal,
}
