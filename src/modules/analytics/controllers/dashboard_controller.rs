use std::sync::Arc;

use actix_web::{web, HttpResponse};
use serde::Serialize;

use crate::core::error::AppError;
use crate::middleware::auth::UserId;
use crate::modules::analytics::models::{MonthlySummary, RevenueShare, Totals};
use crate::modules::analytics::services::aggregator;
use crate::modules::orders::services::OrderService;

/// Everything the dashboard page renders: the monthly chart series, the KPI
/// totals, and the revenue-share donut data.
#[derive(Debug, Serialize)]
pub struct DashboardResponse {
    pub monthly: Vec<MonthlySummary>,
    pub totals: Totals,
    pub shares: Vec<RevenueShare>,
}

/// Dashboard figures for the authenticated account
/// GET /dashboard
///
/// The snapshot is fetched ascending by created_at, so the monthly series
/// comes out chronological. A malformed stored record surfaces as 422 naming
/// the offending order, never as a silently partial chart.
pub async fn get_dashboard(
    service: web::Data<Arc<OrderService>>,
    user_id: UserId,
) -> Result<HttpResponse, AppError> {
    let orders = service.list_orders(user_id.0, None).await?;

    let monthly = aggregator::aggregate_by_month(&orders)?;
    let totals = aggregator::compute_totals(&monthly);
    let shares = aggregator::compute_shares(&monthly);

    Ok(HttpResponse::Ok().json(DashboardResponse {
        monthly,
        totals,
        shares,
    }))
}

/// Configure dashboard routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/dashboard", web::get().to(get_dashboard));
}
