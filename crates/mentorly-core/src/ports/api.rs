use async_trait::async_trait;

use mentorly_shared::dto::{MentorScheduleResponse, PostResponse, UpdatePostRequest};

use crate::domain::PostId;
use crate::error::ApiError;

/// Community endpoints used by the post editor.
#[async_trait]
pub trait CommunityApi: Send + Sync {
    /// `GET /community/{id}`
    async fn fetch_post(&self, id: &PostId) -> Result<PostResponse, ApiError>;

    /// `PUT /community/{id}` - full replace of title and content.
    async fn update_post(&self, id: &PostId, request: &UpdatePostRequest) -> Result<(), ApiError>;
}

/// Mentor schedule endpoint used by the schedule form.
#[async_trait]
pub trait ScheduleApi: Send + Sync {
    /// Register a slot given as `YYYY-MM-DD HH:mm`.
    ///
    /// `Ok(None)` means the server created nothing because the slot is taken.
    async fn create_schedule(
        &self,
        date_time: &str,
    ) -> Result<Option<MentorScheduleResponse>, ApiError>;
}
