pub mod auth_repository;

pub use auth_repository::AuthRepository;
