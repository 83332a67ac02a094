//! HTTP handlers for the TradeConnect API.

pub mod ask;
pub mod fallback;
pub mod info;

pub use ask::ask;
pub use fallback::not_found;
pub use info::{liveness, root};
