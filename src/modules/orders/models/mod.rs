mod order;

pub use order::{Order, OrderPayload};
