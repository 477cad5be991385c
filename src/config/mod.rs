//! Configuration module for the ZenTrader client.

mod api;
mod persistence;
mod ticker;

pub mod constants;

pub use api::{API, ApiConfig};
pub use persistence::PERSISTENCE;
pub use ticker::{SeedPair, TICKER, TickerConfig};
