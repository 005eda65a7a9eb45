//! `reqwest` implementation of the community and schedule ports.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Method, RequestBuilder, Response, StatusCode};

use mentorly_core::domain::PostId;
use mentorly_core::error::ApiError;
use mentorly_core::ports::{CommunityApi, ScheduleApi};
use mentorly_shared::ErrorResponse;
use mentorly_shared::dto::{
    CreateScheduleRequest, MentorScheduleResponse, PostResponse, UpdatePostRequest,
};

use super::HttpConfig;

const SCHEDULES_PATH: &str = "/mentor/schedules";

/// HTTP client for the Mentorly API.
#[derive(Debug, Clone)]
pub struct HttpApiClient {
    client: Client,
    config: HttpConfig,
}

impl HttpApiClient {
    /// Creates a new HTTP client.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying client cannot be built.
    pub fn new(config: HttpConfig) -> Result<Self, ApiError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(&config.user_agent)
            .build()
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        Ok(Self { client, config })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url.trim_end_matches('/'), path)
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let req = self.client.request(method, self.url(path));
        match &self.config.token {
            Some(token) => req.bearer_auth(token),
            None => req,
        }
    }

    /// Sends a request and turns non-success statuses into errors.
    async fn execute(&self, req: RequestBuilder) -> Result<Response, ApiError> {
        let resp = req
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        let status = resp.status();
        if status.is_success() {
            return Ok(resp);
        }
        if status == StatusCode::NOT_FOUND {
            return Err(ApiError::NotFound);
        }
        Err(Self::status_error(resp).await)
    }

    async fn status_error(resp: Response) -> ApiError {
        let status = resp.status();
        let text = resp.text().await.unwrap_or_default();
        let detail = serde_json::from_str::<ErrorResponse>(&text)
            .map(|body| body.summary().to_string())
            .unwrap_or_else(|_| {
                if text.is_empty() {
                    status.canonical_reason().unwrap_or("unknown").to_string()
                } else {
                    text
                }
            });
        ApiError::Status {
            status: status.as_u16(),
            detail,
        }
    }

    fn post_path(id: &PostId) -> String {
        format!("/community/{id}")
    }
}

#[async_trait]
impl CommunityApi for HttpApiClient {
    async fn fetch_post(&self, id: &PostId) -> Result<PostResponse, ApiError> {
        tracing::debug!(post_id = %id, "GET community post");
        let resp = self
            .execute(self.request(Method::GET, &Self::post_path(id)))
            .await?;
        resp.json::<PostResponse>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    async fn update_post(&self, id: &PostId, request: &UpdatePostRequest) -> Result<(), ApiError> {
        tracing::debug!(post_id = %id, "PUT community post");
        self.execute(self.request(Method::PUT, &Self::post_path(id)).json(request))
            .await?;
        Ok(())
    }
}

#[async_trait]
impl ScheduleApi for HttpApiClient {
    async fn create_schedule(
        &self,
        date_time: &str,
    ) -> Result<Option<MentorScheduleResponse>, ApiError> {
        let body = CreateScheduleRequest {
            date_time: date_time.to_string(),
        };
        let resp = self
            .request(Method::POST, SCHEDULES_PATH)
            .json(&body)
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        // The server signals a taken slot by refusing or by creating nothing.
        match resp.status() {
            StatusCode::CONFLICT | StatusCode::NO_CONTENT => return Ok(None),
            status if !status.is_success() => return Err(Self::status_error(resp).await),
            _ => {}
        }

        let text = resp
            .text()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        if text.trim().is_empty() {
            return Ok(None);
        }
        serde_json::from_str::<Option<MentorScheduleResponse>>(&text)
            .map_err(|e| ApiError::Decode(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client(server: &MockServer, token: Option<&str>) -> HttpApiClient {
        HttpApiClient::new(HttpConfig {
            token: token.map(str::to_string),
            ..HttpConfig::new(server.uri())
        })
        .unwrap()
    }

    #[tokio::test]
    async fn test_fetch_post() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/community/42"))
            .and(header("Authorization", "Bearer secret"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "title": "면접 후기",
                "content": "본문",
                "owner": true
            })))
            .expect(1)
            .mount(&server)
            .await;

        let post = client(&server, Some("secret"))
            .fetch_post(&PostId::new("42"))
            .await
            .unwrap();

        assert_eq!(post.title, "면접 후기");
        assert!(post.owner);
    }

    #[tokio::test]
    async fn test_fetch_missing_post() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/community/7"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let err = client(&server, None)
            .fetch_post(&PostId::new("7"))
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::NotFound));
    }

    #[tokio::test]
    async fn test_update_post_sends_title_and_content() {
        let server = MockServer::start().await;
        Mock::given(method("PUT"))
            .and(path("/community/42"))
            .and(body_json(serde_json::json!({
                "title": "새 제목",
                "content": "새 본문"
            })))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;

        let request = UpdatePostRequest {
            title: "새 제목".to_string(),
            content: "새 본문".to_string(),
        };
        client(&server, None)
            .update_post(&PostId::new("42"), &request)
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_update_post_reads_problem_details() {
        let server = MockServer::start().await;
        Mock::given(method("PUT"))
            .and(path("/community/42"))
            .respond_with(ResponseTemplate::new(403).set_body_json(serde_json::json!({
                "type": "about:blank",
                "title": "Forbidden",
                "status": 403,
                "detail": "not the author"
            })))
            .mount(&server)
            .await;

        let request = UpdatePostRequest {
            title: "t".to_string(),
            content: "c".to_string(),
        };
        let err = client(&server, None)
            .update_post(&PostId::new("42"), &request)
            .await
            .unwrap_err();
        match err {
            ApiError::Status { status, detail } => {
                assert_eq!(status, 403);
                assert_eq!(detail, "not the author");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn test_create_schedule_success() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/mentor/schedules"))
            .and(body_json(serde_json::json!({ "dateTime": "2026-10-20 14:00" })))
            .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({
                "id": 5,
                "dateTime": "2026-10-20 14:00"
            })))
            .mount(&server)
            .await;

        let created = client(&server, None)
            .create_schedule("2026-10-20 14:00")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(created.id, Some(5));
    }

    #[tokio::test]
    async fn test_create_schedule_conflict_is_none() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/mentor/schedules"))
            .respond_with(ResponseTemplate::new(409))
            .mount(&server)
            .await;

        let created = client(&server, None)
            .create_schedule("2026-10-20 14:00")
            .await
            .unwrap();
        assert!(created.is_none());
    }

    #[tokio::test]
    async fn test_create_schedule_null_body_is_none() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/mentor/schedules"))
            .respond_with(ResponseTemplate::new(200).set_body_string("null"))
            .mount(&server)
            .await;

        let created = client(&server, None)
            .create_schedule("2026-10-20 14:00")
            .await
            .unwrap();
        assert!(created.is_none());
    }

    #[tokio::test]
    async fn test_create_schedule_server_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/mentor/schedules"))
            .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
            .mount(&server)
            .await;

        let err = client(&server, None)
            .create_schedule("2026-10-20 14:00")
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Status { status: 500, ref detail } if detail == "boom"));
    }
}
