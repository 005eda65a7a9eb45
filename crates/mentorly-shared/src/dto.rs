//! Data Transfer Objects - request/response bodies of the community and schedule endpoints.

use serde::{Deserialize, Serialize};

/// Body of `GET /community/{id}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostResponse {
    pub title: String,
    pub content: String,
    /// Whether the viewer wrote the post and may edit it.
    #[serde(default)]
    pub owner: bool,
}

/// Body of `PUT /community/{id}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdatePostRequest {
    pub title: String,
    pub content: String,
}

/// Body of `POST /mentor/schedules`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateScheduleRequest {
    /// Combined `YYYY-MM-DD HH:mm` string.
    pub date_time: String,
}

/// Schedule record returned once the server accepted a new slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MentorScheduleResponse {
    #[serde(default)]
    pub id: Option<i64>,
    pub date_time: String,
}
