use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use crate::core::{AppError, Result};
use crate::modules::orders::models::{Order, OrderPayload};
use crate::modules::orders::repositories::OrderRepository;

/// Service for order business logic
pub struct OrderService {
    order_repo: Arc<OrderRepository>,
}

/// Apply the table search over a fetched snapshot: case-insensitive
/// substring match across the text columns. A blank query keeps everything.
pub fn filter_orders(orders: Vec<Order>, query: Option<&str>) -> Vec<Order> {
    let q = query.map(str::trim).unwrap_or_default();
    if q.is_empty() {
        return orders;
    }
    orders.into_iter().filter(|o| o.matches(q)).collect()
}

impl OrderService {
    pub fn new(order_repo: Arc<OrderRepository>) -> Self {
        Self { order_repo }
    }

    /// Create a new order for the given account
    pub async fn create_order(&self, payload: OrderPayload, user_id: Uuid) -> Result<Order> {
        let payload = payload.validated()?;
        let order = self.order_repo.create(&payload, user_id).await?;

        info!(order_no = %order.order_no, "order created");
        Ok(order)
    }

    /// List the account's orders ascending by creation time, optionally
    /// narrowed by the table search query.
    pub async fn list_orders(&self, user_id: Uuid, query: Option<&str>) -> Result<Vec<Order>> {
        let orders = self.order_repo.list_for_user(user_id).await?;
        Ok(filter_orders(orders, query))
    }

    /// Update an order's mutable fields
    pub async fn update_order(
        &self,
        id: Uuid,
        user_id: Uuid,
        payload: OrderPayload,
    ) -> Result<Order> {
        let payload = payload.validated()?;
        let order = self
            .order_repo
            .update(id, user_id, &payload)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Order {}", id)))?;

        info!(order_no = %order.order_no, "order updated");
        Ok(order)
    }

    /// Delete an order
    pub async fn delete_order(&self, id: Uuid, user_id: Uuid) -> Result<()> {
        let deleted = self.order_repo.delete(id, user_id).await?;
        if !deleted {
            return Err(AppError::not_found(format!("Order {}", id)));
        }

        info!(order_id = %id, "order deleted");
        Ok(())
    }
}
