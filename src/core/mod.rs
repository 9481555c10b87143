pub mod error;
pub mod money;
pub mod time;

pub use error::{AppError, Result};
