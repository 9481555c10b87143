pub mod analytics;
pub mod auth;
pub mod exports;
pub mod orders;
