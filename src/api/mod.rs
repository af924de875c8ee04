//! REST client plumbing: configuration, request building, and error
//! normalization.

mod client;
mod config;
mod errors;

pub use client::ApiClient;
pub use config::{ApiConfig, endpoints};
pub use errors::{ApiError, ResponseBody};
