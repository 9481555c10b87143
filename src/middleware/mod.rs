pub mod auth;
pub mod request_id;

pub use auth::{SessionAuth, UserId};
pub use request_id::RequestId;
