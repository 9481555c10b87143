use std::sync::Arc;

use actix_web::{web, HttpResponse};
use serde::Deserialize;
use uuid::Uuid;

use crate::core::error::AppError;
use crate::middleware::auth::UserId;
use crate::modules::orders::models::OrderPayload;
use crate::modules::orders::services::OrderService;

/// Query parameters for listing orders
#[derive(Debug, Deserialize)]
pub struct ListOrdersQuery {
    /// Table search: case-insensitive substring across the text columns
    pub q: Option<String>,
}

fn parse_order_id(raw: &str) -> Result<Uuid, AppError> {
    Uuid::parse_str(raw).map_err(|_| AppError::validation(format!("Invalid order id: {}", raw)))
}

/// Create a new order
/// POST /orders
pub async fn create_order(
    service: web::Data<Arc<OrderService>>,
    user_id: UserId,
    payload: web::Json<OrderPayload>,
) -> Result<HttpResponse, AppError> {
    let order = service.create_order(payload.into_inner(), user_id.0).await?;

    Ok(HttpResponse::Created().json(order))
}

/// List orders, ascending by creation time
/// GET /orders?q=...
pub async fn list_orders(
    service: web::Data<Arc<OrderService>>,
    user_id: UserId,
    query: web::Query<ListOrdersQuery>,
) -> Result<HttpResponse, AppError> {
    let orders = service.list_orders(user_id.0, query.q.as_deref()).await?;

    Ok(HttpResponse::Ok().json(orders))
}

/// Update an order's mutable fields
/// PATCH /orders/{id}
pub async fn update_order(
    service: web::Data<Arc<OrderService>>,
    user_id: UserId,
    path: web::Path<String>,
    payload: web::Json<OrderPayload>,
) -> Result<HttpResponse, AppError> {
    let id = parse_order_id(&path.into_inner())?;
    let order = service
        .update_order(id, user_id.0, payload.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(order))
}

/// Delete an order
/// DELETE /orders/{id}
pub async fn delete_order(
    service: web::Data<Arc<OrderService>>,
    user_id: UserId,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let id = parse_order_id(&path.into_inner())?;
    service.delete_order(id, user_id.0).await?;

    Ok(HttpResponse::NoContent().finish())
}

/// Configure order routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/orders")
            .route("", web::post().to(create_order))
            .route("", web::get().to(list_orders))
            .route("/{id}", web::patch().to(update_order))
            .route("/{id}", web::delete().to(delete_order)),
    );
}
