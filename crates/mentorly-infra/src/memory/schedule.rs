use std::collections::BTreeSet;

use async_trait::async_trait;
use tokio::sync::RwLock;

use mentorly_core::error::ApiError;
use mentorly_core::ports::ScheduleApi;
use mentorly_shared::dto::MentorScheduleResponse;

/// In-memory schedule book. A second registration of the same moment is a conflict.
pub struct InMemoryScheduleApi {
    booked: RwLock<BTreeSet<String>>,
}

impl InMemoryScheduleApi {
    pub fn new() -> Self {
        Self {
            booked: RwLock::new(BTreeSet::new()),
        }
    }

    pub async fn booked(&self) -> Vec<String> {
        self.booked.read().await.iter().cloned().collect()
    }
}

impl Default for InMemoryScheduleApi {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ScheduleApi for InMemoryScheduleApi {
    async fn create_schedule(
        &self,
        date_time: &str,
    ) -> Result<Option<MentorScheduleResponse>, ApiError> {
        let mut booked = self.booked.write().await;
        if !booked.insert(date_time.to_string()) {
            return Ok(None);
        }
        Ok(Some(MentorScheduleResponse {
            id: i64::try_from(booked.len()).ok(),
            date_time: date_time.to_string(),
        }))
    }
}
