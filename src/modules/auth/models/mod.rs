mod session;

pub use session::{Account, Session};
