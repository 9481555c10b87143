// Order model with validation
//
// An order is one customer purchase tracked by the shop: who bought, what,
// and the three money figures (purchase cost, sale price, deposit already
// paid). The store assigns id, order_no and created_at; those plus the owner
// are immutable after creation.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::{money, AppError, Result};

/// A stored order as returned by the record store.
///
/// `created_at` is kept as the raw string the store serialized (RFC 3339),
/// not a parsed timestamp; the analytics engine parses it itself and fails
/// fast on garbage rather than hiding it behind a lossy conversion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: String,
    pub order_no: String,
    pub first_name: String,
    pub last_name: String,
    pub address: String,
    pub phone: String,
    pub instagram_url: Option<String>,
    pub product_name: Option<String>,
    pub comment: Option<String>,
    pub amount_purchase: Option<Decimal>,
    pub amount_sale: Option<Decimal>,
    pub amount_deposit: Option<Decimal>,
    pub created_at: String,
    pub user_id: String,
}

impl Order {
    /// Remaining balance on this order: sale price minus deposit, floored at
    /// zero. An over-deposit never produces a negative balance.
    pub fn unpaid(&self) -> Decimal {
        let sale = money::or_zero(self.amount_sale);
        let deposit = money::or_zero(self.amount_deposit);
        (sale - deposit).max(Decimal::ZERO)
    }

    /// Case-insensitive substring match across every text column shown in
    /// the orders table. Used by the list search and the filtered export.
    pub fn matches(&self, query: &str) -> bool {
        let q = query.to_lowercase();

        let hit = |field: &str| field.to_lowercase().contains(&q);
        let opt_hit = |field: &Option<String>| field.as_deref().is_some_and(hit);

        hit(&self.order_no)
            || hit(&self.first_name)
            || hit(&self.last_name)
            || hit(&self.phone)
            || hit(&self.address)
            || opt_hit(&self.instagram_url)
            || opt_hit(&self.product_name)
            || opt_hit(&self.comment)
    }
}

/// Client-supplied order fields, shared by create and update.
///
/// The store-assigned columns (`id`, `order_no`, `created_at`, `user_id`)
/// are deliberately absent so an update can never touch them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderPayload {
    pub first_name: String,
    pub last_name: String,
    pub address: String,
    pub phone: String,
    #[serde(default)]
    pub instagram_url: Option<String>,
    #[serde(default)]
    pub product_name: Option<String>,
    #[serde(default)]
    pub comment: Option<String>,
    #[serde(default)]
    pub amount_purchase: Option<Decimal>,
    #[serde(default)]
    pub amount_sale: Option<Decimal>,
    #[serde(default)]
    pub amount_deposit: Option<Decimal>,
}

impl OrderPayload {
    /// Normalize and validate the payload.
    ///
    /// Required text fields must be non-empty after trimming; optional text
    /// fields are trimmed with empty collapsing to absent; amounts, when
    /// present, must be non-negative.
    pub fn validated(mut self) -> Result<Self> {
        self.first_name = Self::require("first_name", &self.first_name)?;
        self.last_name = Self::require("last_name", &self.last_name)?;
        self.address = Self::require("address", &self.address)?;
        self.phone = Self::require("phone", &self.phone)?;

        self.instagram_url = Self::optional(self.instagram_url);
        self.product_name = Self::optional(self.product_name);
        self.comment = Self::optional(self.comment);

        money::validate_amount("amount_purchase", self.amount_purchase)
            .map_err(AppError::validation)?;
        money::validate_amount("amount_sale", self.amount_sale).map_err(AppError::validation)?;
        money::validate_amount("amount_deposit", self.amount_deposit)
            .map_err(AppError::validation)?;

        Ok(self)
    }

    fn require(field: &str, value: &str) -> Result<String> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(AppError::validation(format!("{} is required", field)));
        }
        Ok(trimmed.to_string())
    }

    fn optional(value: Option<String>) -> Option<String> {
        value
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    }
}
