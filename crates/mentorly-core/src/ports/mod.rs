//! Ports - trait definitions for external dependencies.
//! These are the "interfaces" that infrastructure and front-ends must implement.

mod api;
mod dialog;
mod navigation;

pub use api::{CommunityApi, ScheduleApi};
pub use dialog::{Alert, Body, Confirm, Dialog, Icon};
pub use navigation::{Clock, Navigator};
