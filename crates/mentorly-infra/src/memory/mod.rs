//! In-memory API implementations - offline fallback when no server is configured.

mod community;
mod schedule;

pub use community::InMemoryCommunityApi;
pub use schedule::InMemoryScheduleApi;
