//! # Mentorly Infrastructure
//!
//! Concrete implementations of the ports defined in `mentorly-core`.
//!
//! ## Feature Flags
//!
//! - `http` (default) - `reqwest` client for the community and schedule endpoints
//! - `minimal` - No network stack, in-memory only

pub mod clock;
pub mod memory;

#[cfg(feature = "http")]
pub mod http;

// Re-exports - In-Memory
pub use clock::SystemClock;
pub use memory::{InMemoryCommunityApi, InMemoryScheduleApi};

// Re-exports - HTTP
#[cfg(feature = "http")]
pub use http::{HttpApiClient, HttpConfig};
