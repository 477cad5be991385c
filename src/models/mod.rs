mod account;
mod profile;
mod trade;

pub use account::{BankDetails, TradeCredentials};
pub use profile::{ProfileUpdate, SubscriptionStatus, UserProfile};
pub use trade::{Trade, TradeDirection};
