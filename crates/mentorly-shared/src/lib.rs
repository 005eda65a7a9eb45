//! # Mentorly Shared
//!
//! Wire types shared between the API adapters and the controllers.

pub mod dto;
pub mod response;

pub use response::ErrorResponse;
