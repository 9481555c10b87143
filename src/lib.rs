//! Ordesk order management service
//!
//! A small backend for tracking customer orders: CRUD over orders, a
//! session-gated API, CSV export, and the monthly aggregation engine behind
//! the revenue dashboard.

pub mod config;
pub mod core;
pub mod middleware;
pub mod modules;

// Re-export commonly used modules
pub use modules::analytics;
pub use modules::auth;
pub use modules::exports;
pub use modules::orders;
