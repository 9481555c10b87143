// Analytics module: the monthly aggregation engine and the dashboard surface

pub mod controllers;
pub mod models;
pub mod services;

pub use models::{MonthlySummary, RevenueShare, Totals};
pub use services::aggregator;

pub use controllers::dashboard_controller::configure;
