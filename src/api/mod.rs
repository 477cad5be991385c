mod client;
mod error;

pub use client::{ApiClient, RegisterRequest};
pub use error::ApiError;
