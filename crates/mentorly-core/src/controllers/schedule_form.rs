//! Mentor schedule form - pick a day and a time slot and register it.

use std::sync::Arc;

use chrono::NaiveDate;

use mentorly_shared::dto::MentorScheduleResponse;

use crate::domain::{Route, ScheduleSelection, Session, TimeSlot, default_time_slots};
use crate::error::ScheduleError;
use crate::ports::{Alert, Clock, Dialog, Icon, Navigator, ScheduleApi};

pub const EMAIL_REQUIRED_MESSAGE: &str = "이메일이 필요합니다. 이메일 설정 후 다시 시도해주세요.";
pub const CONFLICT_MESSAGE: &str = "해당 날짜에 이미 일정이 존재합니다";
pub const REGISTERED_MESSAGE: &str = "등록이 완료되었습니다";
pub const PICK_TIME_MESSAGE: &str = "시간을 선택해주세요";
pub const PICK_FUTURE_TIME_MESSAGE: &str = "오늘 날짜 시간 이후로 선택해주세요";
pub const PICK_DAY_MESSAGE: &str = "날짜를 선택해주세요";
pub const FORM_TITLE: &str = "일정 등록하기";
pub const FORM_SUBTITLE: &str = "면접 날짜와 시간을 선택해주세요.";
pub const SUBMIT_LABEL: &str = "등록하기";

const EMAIL_REQUIRED_TIMER_MS: u64 = 2000;
const RESULT_TIMER_MS: u64 = 1500;

/// What the submit button does in the current state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitAction {
    /// No button: a mentor must move off today first.
    Hidden,
    /// Send the selection.
    Register,
    /// The selected day and time are already in the past.
    PickTimeAfterNow,
    /// No time selected.
    PickTime,
}

/// Result of pressing the submit button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScheduleOutcome {
    Registered(MentorScheduleResponse),
    /// The server already has a schedule at that moment.
    Conflict,
    /// A prompt was shown instead of submitting.
    Prompted(SubmitAction),
}

/// External collaborators of the schedule form.
#[derive(Clone)]
pub struct SchedulePorts {
    pub api: Arc<dyn ScheduleApi>,
    pub dialog: Arc<dyn Dialog>,
    pub navigator: Arc<dyn Navigator>,
    pub clock: Arc<dyn Clock>,
}

/// Form state of the mentor schedule registration view.
pub struct MentorScheduleForm {
    ports: SchedulePorts,
    email: String,
    is_mentor: bool,
    selection: ScheduleSelection,
    slots: Vec<TimeSlot>,
}

impl MentorScheduleForm {
    /// Open the form for the signed-in user.
    ///
    /// Without an email the user is warned and sent to the profile page, and
    /// no form is returned.
    pub async fn mount(
        session: &Session,
        is_mentor: bool,
        ports: SchedulePorts,
    ) -> Result<Self, ScheduleError> {
        let Some(email) = session.email() else {
            tracing::warn!("Schedule form opened without an email, redirecting");
            ports
                .dialog
                .alert(
                    Alert::text(EMAIL_REQUIRED_MESSAGE)
                        .with_icon(Icon::Warning)
                        .auto_close(EMAIL_REQUIRED_TIMER_MS),
                )
                .await;
            ports.navigator.navigate(Route::MyPage);
            return Err(ScheduleError::EmailRequired);
        };

        let today = ports.clock.now().date();
        Ok(Self {
            email: email.to_string(),
            is_mentor,
            selection: ScheduleSelection::starting(today),
            slots: default_time_slots(),
            ports,
        })
    }

    /// Switch the calendar to `day`. Any picked time is dropped.
    pub fn select_day(&mut self, day: NaiveDate) {
        self.selection = ScheduleSelection::starting(day);
    }

    pub fn select_time(&mut self, slot: TimeSlot) -> Result<(), ScheduleError> {
        if !self.slots.contains(&slot) {
            return Err(ScheduleError::UnknownSlot(slot.to_string()));
        }
        self.selection.time = Some(slot);
        Ok(())
    }

    fn is_today(&self) -> bool {
        self.selection.day == self.ports.clock.now().date()
    }

    /// Decide what the submit button does right now.
    pub fn submit_action(&self) -> SubmitAction {
        if self.is_mentor && self.is_today() {
            return SubmitAction::Hidden;
        }
        match self.selection.time {
            Some(_) if self.selection.is_past(self.ports.clock.now()) => {
                SubmitAction::PickTimeAfterNow
            }
            Some(_) => SubmitAction::Register,
            None => SubmitAction::PickTime,
        }
    }

    pub async fn press_submit(&mut self) -> Result<ScheduleOutcome, ScheduleError> {
        let action = self.submit_action();
        match action {
            SubmitAction::Register => return self.register().await,
            SubmitAction::PickTimeAfterNow => {
                self.ports
                    .dialog
                    .alert(Alert::bold(PICK_FUTURE_TIME_MESSAGE))
                    .await;
            }
            SubmitAction::PickTime => {
                self.ports.dialog.alert(Alert::bold(PICK_TIME_MESSAGE)).await;
            }
            SubmitAction::Hidden => {}
        }
        Ok(ScheduleOutcome::Prompted(action))
    }

    /// Send the current selection to the schedule endpoint.
    ///
    /// Only a selection that [`submit_action`](Self::submit_action) accepts
    /// is sent.
    async fn register(&mut self) -> Result<ScheduleOutcome, ScheduleError> {
        let action = self.submit_action();
        if action != SubmitAction::Register {
            tracing::warn!(?action, "Refusing to register an incomplete selection");
            return Ok(ScheduleOutcome::Prompted(action));
        }

        let date_time = self.selection.to_request_value();
        tracing::debug!(email = %self.email, %date_time, "Registering mentor schedule");

        match self.ports.api.create_schedule(&date_time).await {
            Ok(Some(created)) => {
                tracing::info!(%date_time, "Mentor schedule registered");
                self.ports
                    .dialog
                    .alert(
                        Alert::text(REGISTERED_MESSAGE)
                            .with_icon(Icon::Success)
                            .auto_close(RESULT_TIMER_MS),
                    )
                    .await;
                self.ports.navigator.navigate(Route::Home);
                Ok(ScheduleOutcome::Registered(created))
            }
            Ok(None) => {
                tracing::info!(%date_time, "Mentor schedule conflicts with an existing one");
                self.ports
                    .dialog
                    .alert(
                        Alert::text(CONFLICT_MESSAGE)
                            .with_icon(Icon::Error)
                            .auto_close(RESULT_TIMER_MS),
                    )
                    .await;
                Ok(ScheduleOutcome::Conflict)
            }
            Err(e) => {
                tracing::error!(%date_time, error = %e, "Failed to register mentor schedule");
                Err(e.into())
            }
        }
    }

    pub fn selection(&self) -> &ScheduleSelection {
        &self.selection
    }

    pub fn slots(&self) -> &[TimeSlot] {
        &self.slots
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    /// Prompt shown in place of the slot picker, if any.
    pub fn placeholder(&self) -> Option<&'static str> {
        (self.submit_action() == SubmitAction::Hidden).then_some(PICK_DAY_MESSAGE)
    }
}
