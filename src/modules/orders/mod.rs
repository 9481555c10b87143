// Orders module

pub mod controllers;
pub mod models;
pub mod repositories;
pub mod services;

pub use models::{Order, OrderPayload};
pub use repositories::OrderRepository;
pub use services::OrderService;

pub use controllers::order_controller::configure;
