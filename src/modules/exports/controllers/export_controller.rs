use std::sync::Arc;

use actix_web::{http::header, web, HttpResponse};
use serde::Deserialize;

use crate::core::error::AppError;
use crate::middleware::auth::UserId;
use crate::modules::exports::services::csv_exporter;
use crate::modules::orders::services::OrderService;

/// Query parameters for the CSV export
#[derive(Debug, Deserialize)]
pub struct ExportQuery {
    /// Same search filter as the orders table; the export mirrors what the
    /// filtered table shows
    pub q: Option<String>,
}

/// Download the (optionally filtered) order list as CSV
/// GET /orders/export.csv?q=...
pub async fn export_orders_csv(
    service: web::Data<Arc<OrderService>>,
    user_id: UserId,
    query: web::Query<ExportQuery>,
) -> Result<HttpResponse, AppError> {
    let orders = service.list_orders(user_id.0, query.q.as_deref()).await?;
    let body = csv_exporter::orders_to_csv(&orders)?;

    Ok(HttpResponse::Ok()
        .content_type("text/csv; charset=utf-8")
        .insert_header((
            header::CONTENT_DISPOSITION,
            "attachment; filename=\"orders.csv\"",
        ))
        .body(body))
}

/// Configure export routes. Registered before the orders scope so the
/// literal path wins over `/orders/{id}` patterns.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/orders/export.csv", web::get().to(export_orders_csv));
}
