pub mod order_service;

pub use order_service::{filter_orders, OrderService};
