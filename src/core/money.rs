use rust_decimal::Decimal;

/// Monetary helpers for order amounts.
///
/// The shop trades in a single currency (MAD), so amounts are plain
/// `Decimal`s with a fixed display scale rather than a per-currency type.
/// Absent amounts on an order mean "unset", which every calculation treats
/// as zero; the distinction only matters for storage and display.

/// Decimal places used for display and rounded share values
pub const DISPLAY_SCALE: u32 = 2;

/// Coerce an optional amount to a concrete value, treating absent as zero
pub fn or_zero(amount: Option<Decimal>) -> Decimal {
    amount.unwrap_or(Decimal::ZERO)
}

/// Round an amount to the display scale.
///
/// Uses `Decimal::round_dp`, which applies banker's rounding
/// (midpoint-nearest-even). This is the single rounding rule for the whole
/// crate; share values in the dashboard rely on it being deterministic.
pub fn round_display(amount: Decimal) -> Decimal {
    amount.round_dp(DISPLAY_SCALE)
}

/// Format an amount for logs and messages, e.g. "1234.50 MAD"
pub fn format_mad(amount: Decimal) -> String {
    format!("{:.2} MAD", amount)
}

/// Validate a stored amount: when present it must be non-negative
pub fn validate_amount(field: &str, amount: Option<Decimal>) -> Result<(), String> {
    if let Some(value) = amount {
        if value < Decimal::ZERO {
            return Err(format!("{} cannot be negative, got {}", field, value));
        }
    }
    Ok(())
}
