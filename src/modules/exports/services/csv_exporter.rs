// CSV export of the orders table
//
// The export carries exactly the column set the table view shows, in the
// same order, so a downloaded file and the on-screen list always agree.
// Fields are quoted properly by the csv writer; absent optional values
// serialize as empty fields, not as "0" or "null".

use rust_decimal::Decimal;

use crate::core::{AppError, Result};
use crate::modules::orders::models::Order;

/// Column set of the export, matching the table view
pub const EXPORT_COLUMNS: [&str; 12] = [
    "order_no",
    "first_name",
    "last_name",
    "address",
    "phone",
    "instagram_url",
    "product_name",
    "comment",
    "amount_purchase",
    "amount_sale",
    "amount_deposit",
    "created_at",
];

fn opt_text(value: &Option<String>) -> String {
    value.clone().unwrap_or_default()
}

fn opt_amount(value: Option<Decimal>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

/// Serialize an order list to CSV bytes (header row first)
pub fn orders_to_csv(orders: &[Order]) -> Result<Vec<u8>> {
    let mut writer = csv::Writer::from_writer(Vec::new());

    writer.write_record(EXPORT_COLUMNS)?;

    for order in orders {
        writer.write_record([
            order.order_no.clone(),
            order.first_name.clone(),
            order.last_name.clone(),
            order.address.clone(),
            order.phone.clone(),
            opt_text(&order.instagram_url),
            opt_text(&order.product_name),
            opt_text(&order.comment),
            opt_amount(order.amount_purchase),
            opt_amount(order.amount_sale),
            opt_amount(order.amount_deposit),
            order.created_at.clone(),
        ])?;
    }

    writer
        .into_inner()
        .map_err(|e| AppError::internal(format!("Failed to finish CSV export: {}", e)))
}
