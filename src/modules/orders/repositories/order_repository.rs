// OrderRepository: Postgres CRUD for orders
//
// The store assigns id (uuid), order_no (sequence-backed label) and
// created_at on insert; every query is scoped to the owning account so one
// user can never see or touch another's orders.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

use crate::core::{time, AppError, Result};
use crate::modules::orders::models::{Order, OrderPayload};

const ORDER_COLUMNS: &str = "id, order_no, first_name, last_name, address, phone, \
     instagram_url, product_name, comment, \
     amount_purchase, amount_sale, amount_deposit, created_at, user_id";

/// Row shape as stored; converted to the wire-shaped `Order` at the boundary
#[derive(Debug, sqlx::FromRow)]
struct OrderRow {
    id: Uuid,
    order_no: String,
    first_name: String,
    last_name: String,
    address: String,
    phone: String,
    instagram_url: Option<String>,
    product_name: Option<String>,
    comment: Option<String>,
    amount_purchase: Option<Decimal>,
    amount_sale: Option<Decimal>,
    amount_deposit: Option<Decimal>,
    created_at: DateTime<Utc>,
    user_id: Uuid,
}

impl From<OrderRow> for Order {
    fn from(row: OrderRow) -> Self {
        Order {
            id: row.id.to_string(),
            order_no: row.order_no,
            first_name: row.first_name,
            last_name: row.last_name,
            address: row.address,
            phone: row.phone,
            instagram_url: row.instagram_url,
            product_name: row.product_name,
            comment: row.comment,
            amount_purchase: row.amount_purchase,
            amount_sale: row.amount_sale,
            amount_deposit: row.amount_deposit,
            created_at: time::to_store_timestamp(row.created_at),
            user_id: row.user_id.to_string(),
        }
    }
}

/// Repository for order database operations
pub struct OrderRepository {
    pool: PgPool,
}

impl OrderRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert a new order. The database fills id, order_no and created_at;
    /// the stored record is returned.
    pub async fn create(&self, payload: &OrderPayload, user_id: Uuid) -> Result<Order> {
        let sql = format!(
            r#"
            INSERT INTO orders (
                first_name, last_name, address, phone,
                instagram_url, product_name, comment,
                amount_purchase, amount_sale, amount_deposit, user_id
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            RETURNING {ORDER_COLUMNS}
            "#
        );

        let row = sqlx::query_as::<_, OrderRow>(&sql)
            .bind(&payload.first_name)
            .bind(&payload.last_name)
            .bind(&payload.address)
            .bind(&payload.phone)
            .bind(&payload.instagram_url)
            .bind(&payload.product_name)
            .bind(&payload.comment)
            .bind(payload.amount_purchase)
            .bind(payload.amount_sale)
            .bind(payload.amount_deposit)
            .bind(user_id)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)?;

        Ok(row.into())
    }

    /// All orders for one account, ascending by creation time so downstream
    /// aggregation emits chronological summaries.
    pub async fn list_for_user(&self, user_id: Uuid) -> Result<Vec<Order>> {
        let sql = format!(
            r#"
            SELECT {ORDER_COLUMNS}
            FROM orders
            WHERE user_id = $1
            ORDER BY created_at ASC
            "#
        );

        let rows = sqlx::query_as::<_, OrderRow>(&sql)
            .bind(user_id)
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)?;

        Ok(rows.into_iter().map(Order::from).collect())
    }

    /// Update the mutable columns of one order. Returns `None` when the id
    /// does not exist or belongs to another account.
    pub async fn update(
        &self,
        id: Uuid,
        user_id: Uuid,
        payload: &OrderPayload,
    ) -> Result<Option<Order>> {
        let sql = format!(
            r#"
            UPDATE orders SET
                first_name = $1, last_name = $2, address = $3, phone = $4,
                instagram_url = $5, product_name = $6, comment = $7,
                amount_purchase = $8, amount_sale = $9, amount_deposit = $10
            WHERE id = $11 AND user_id = $12
            RETURNING {ORDER_COLUMNS}
            "#
        );

        let row = sqlx::query_as::<_, OrderRow>(&sql)
            .bind(&payload.first_name)
            .bind(&payload.last_name)
            .bind(&payload.address)
            .bind(&payload.phone)
            .bind(&payload.instagram_url)
            .bind(&payload.product_name)
            .bind(&payload.comment)
            .bind(payload.amount_purchase)
            .bind(payload.amount_sale)
            .bind(payload.amount_deposit)
            .bind(id)
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)?;

        Ok(row.map(Order::from))
    }

    /// Delete one order. Returns whether a row was removed.
    pub async fn delete(&self, id: Uuid, user_id: Uuid) -> Result<bool> {
        let result = sqlx::query("DELETE FROM orders WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .execute(&self.pool)
            .await
            .map_err(AppError::Database)?;

        Ok(result.rows_affected() > 0)
    }
}
