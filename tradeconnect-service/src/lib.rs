//! TradeConnect API: relays export and trade questions to a Gemini model
//! running a fixed advisor persona.

pub mod config;
pub mod handlers;
pub mod models;
pub mod services;
pub mod startup;

pub use startup::{build_router, AppState, Application};
