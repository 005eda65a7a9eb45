//! Application state - the API adapters shared by every command.

use std::sync::Arc;

use mentorly_core::domain::PostId;
use mentorly_core::ports::{CommunityApi, ScheduleApi};
use mentorly_infra::{InMemoryCommunityApi, InMemoryScheduleApi};

use crate::config::AppConfig;

#[cfg(feature = "http")]
use mentorly_infra::{HttpApiClient, HttpConfig};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub community: Arc<dyn CommunityApi>,
    pub schedules: Arc<dyn ScheduleApi>,
}

impl AppState {
    /// Build the application state with appropriate implementations.
    pub async fn new(config: &AppConfig, offline: bool) -> anyhow::Result<Self> {
        if offline || config.api_url.is_none() {
            if !offline {
                tracing::warn!("MENTORLY_API_URL not set. Running against the in-memory API.");
            }
            return Ok(Self::in_memory().await);
        }

        Self::remote(config)
    }

    #[cfg(feature = "http")]
    fn remote(config: &AppConfig) -> anyhow::Result<Self> {
        let base_url = config.api_url.clone().unwrap_or_default();
        let client = Arc::new(HttpApiClient::new(HttpConfig {
            token: config.api_token.clone(),
            timeout_secs: config.timeout_secs,
            ..HttpConfig::new(base_url)
        })?);
        tracing::debug!("Using the remote API");
        Ok(Self {
            community: client.clone(),
            schedules: client,
        })
    }

    #[cfg(not(feature = "http"))]
    fn remote(_config: &AppConfig) -> anyhow::Result<Self> {
        anyhow::bail!("MENTORLY_API_URL is set but this build has no http feature; use --offline")
    }

    /// In-memory API seeded with one post the viewer owns.
    async fn in_memory() -> Self {
        let community = InMemoryCommunityApi::new();
        community
            .insert(
                PostId::new("1"),
                "면접 후기",
                "멘토링 덕분에 면접을 잘 마쳤습니다.",
            )
            .await;

        Self {
            community: Arc::new(community),
            schedules: Arc::new(InMemoryScheduleApi::new()),
        }
    }
}
