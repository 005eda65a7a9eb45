//! # Mentorly Core
//!
//! The controller layer of the Mentorly client.
//! This crate holds the form state, validation rules and view logic for the
//! post editor and the mentor schedule form, with zero infrastructure
//! dependencies: HTTP, dialogs, navigation and time all come in through
//! [`ports`].

pub mod controllers;
pub mod domain;
pub mod error;
pub mod ports;

#[cfg(test)]
mod test_support;

pub use error::{ApiError, DomainError, ScheduleError};
