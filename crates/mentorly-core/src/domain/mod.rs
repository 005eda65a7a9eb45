//! Domain entities and rules - the core client-side objects.

mod post;
mod route;
mod schedule;
mod session;
pub mod validation;

pub use post::{CONTENT_MAX_CHARS, Post, PostId, TITLE_MAX_CHARS, clamp_chars};
pub use route::Route;
pub use schedule::{ScheduleSelection, TimeSlot, default_time_slots};
pub use session::Session;
pub use validation::{Field, ValidationErrors};
