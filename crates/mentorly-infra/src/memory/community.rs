//! In-memory community API - used for offline runs when no API is configured.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use mentorly_core::domain::PostId;
use mentorly_core::error::ApiError;
use mentorly_core::ports::CommunityApi;
use mentorly_shared::dto::{PostResponse, UpdatePostRequest};

/// Posts kept in a HashMap behind an async RwLock.
///
/// Every stored post is owned by the current viewer.
/// Note: Data is lost on process restart.
pub struct InMemoryCommunityApi {
    posts: RwLock<HashMap<PostId, PostResponse>>,
}

impl InMemoryCommunityApi {
    pub fn new() -> Self {
        Self {
            posts: RwLock::new(HashMap::new()),
        }
    }

    pub async fn insert(&self, id: PostId, title: &str, content: &str) {
        let mut posts = self.posts.write().await;
        posts.insert(
            id,
            PostResponse {
                title: title.to_string(),
                content: content.to_string(),
                owner: true,
            },
        );
    }
}

impl Default for InMemoryCommunityApi {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CommunityApi for InMemoryCommunityApi {
    async fn fetch_post(&self, id: &PostId) -> Result<PostResponse, ApiError> {
        let posts = self.posts.read().await;
        posts.get(id).cloned().ok_or(ApiError::NotFound)
    }

    async fn update_post(&self, id: &PostId, request: &UpdatePostRequest) -> Result<(), ApiError> {
        let mut posts = self.posts.write().await;
        let post = posts.get_mut(id).ok_or(ApiError::NotFound)?;
        post.title = request.title.clone();
        post.content = request.content.clone();
        Ok(())
    }
}
