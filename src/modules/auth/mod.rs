// Auth module: accounts, sessions, and the login surface

pub mod controllers;
pub mod models;
pub mod repositories;
pub mod services;

pub use models::{Account, Session};
pub use repositories::AuthRepository;
pub use services::AuthService;

pub use controllers::auth_controller::configure;
