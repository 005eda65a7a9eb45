//! HTTP adapter for the remote API.

mod client;
mod config;

pub use client::HttpApiClient;
pub use config::HttpConfig;
