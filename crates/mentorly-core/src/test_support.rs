//! Fake ports for controller tests.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::NaiveDateTime;

use mentorly_shared::dto::{MentorScheduleResponse, PostResponse, UpdatePostRequest};

use crate::domain::{PostId, Route};
use crate::error::ApiError;
use crate::ports::{Alert, Clock, CommunityApi, Confirm, Dialog, Navigator, ScheduleApi};

#[derive(Default)]
pub struct FakeCommunityApi {
    posts: HashMap<PostId, PostResponse>,
    fail_updates: bool,
    updates: Mutex<Vec<(PostId, UpdatePostRequest)>>,
}

impl FakeCommunityApi {
    pub fn with_post(id: &str, title: &str, content: &str, owner: bool) -> Self {
        let mut api = Self::default();
        api.posts.insert(
            PostId::new(id),
            PostResponse {
                title: title.to_string(),
                content: content.to_string(),
                owner,
            },
        );
        api
    }

    pub fn failing_updates(mut self) -> Self {
        self.fail_updates = true;
        self
    }

    pub fn updates(&self) -> Vec<(PostId, UpdatePostRequest)> {
        self.updates.lock().unwrap().clone()
    }
}

#[async_trait]
impl CommunityApi for FakeCommunityApi {
    async fn fetch_post(&self, id: &PostId) -> Result<PostResponse, ApiError> {
        self.posts.get(id).cloned().ok_or(ApiError::NotFound)
    }

    async fn update_post(&self, id: &PostId, request: &UpdatePostRequest) -> Result<(), ApiError> {
        if self.fail_updates {
            return Err(ApiError::Status {
                status: 500,
                detail: "Internal Server Error".to_string(),
            });
        }
        self.updates
            .lock()
            .unwrap()
            .push((id.clone(), request.clone()));
        Ok(())
    }
}

#[derive(Default)]
pub struct FakeScheduleApi {
    booked: Vec<String>,
    fail: bool,
    requests: Mutex<Vec<String>>,
}

impl FakeScheduleApi {
    pub fn booked(slots: &[&str]) -> Self {
        Self {
            booked: slots.iter().map(|s| s.to_string()).collect(),
            ..Self::default()
        }
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl ScheduleApi for FakeScheduleApi {
    async fn create_schedule(
        &self,
        date_time: &str,
    ) -> Result<Option<MentorScheduleResponse>, ApiError> {
        if self.fail {
            return Err(ApiError::Transport("connection refused".to_string()));
        }
        self.requests.lock().unwrap().push(date_time.to_string());
        if self.booked.iter().any(|b| b == date_time) {
            return Ok(None);
        }
        Ok(Some(MentorScheduleResponse {
            id: Some(1),
            date_time: date_time.to_string(),
        }))
    }
}

/// Something a controller did to the view, in the order it happened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Alert(Alert),
    Confirm(Confirm),
    Navigate(Route),
}

/// Ordered log shared by the recording dialog and navigator.
#[derive(Clone, Default)]
pub struct EventLog(Arc<Mutex<Vec<Event>>>);

impl EventLog {
    fn push(&self, event: Event) {
        self.0.lock().unwrap().push(event);
    }

    pub fn events(&self) -> Vec<Event> {
        self.0.lock().unwrap().clone()
    }
}

pub struct RecordingDialog {
    answer: bool,
    log: EventLog,
}

impl RecordingDialog {
    pub fn new(answer: bool, log: EventLog) -> Self {
        Self { answer, log }
    }

    pub fn alerts(&self) -> Vec<Alert> {
        self.log
            .events()
            .into_iter()
            .filter_map(|event| match event {
                Event::Alert(alert) => Some(alert),
                _ => None,
            })
            .collect()
    }

    pub fn confirms(&self) -> Vec<Confirm> {
        self.log
            .events()
            .into_iter()
            .filter_map(|event| match event {
                Event::Confirm(confirm) => Some(confirm),
                _ => None,
            })
            .collect()
    }
}

#[async_trait]
impl Dialog for RecordingDialog {
    async fn alert(&self, alert: Alert) {
        self.log.push(Event::Alert(alert));
    }

    async fn confirm(&self, confirm: Confirm) -> bool {
        self.log.push(Event::Confirm(confirm));
        self.answer
    }
}

pub struct RecordingNavigator {
    log: EventLog,
}

impl RecordingNavigator {
    pub fn new(log: EventLog) -> Self {
        Self { log }
    }

    pub fn routes(&self) -> Vec<Route> {
        self.log
            .events()
            .into_iter()
            .filter_map(|event| match event {
                Event::Navigate(route) => Some(route),
                _ => None,
            })
            .collect()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, route: Route) {
        self.log.push(Event::Navigate(route));
    }
}

pub struct FixedClock(pub NaiveDateTime);

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}
