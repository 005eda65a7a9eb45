//! Command handlers - drive a controller the way the browser view would.

use std::sync::Arc;

use chrono::NaiveDate;

use mentorly_core::controllers::{
    EditorPorts, FORM_SUBTITLE, FORM_TITLE, MentorScheduleForm, PostEditor, ScheduleOutcome,
    SchedulePorts, SubmitAction, SubmitOutcome,
};
use mentorly_core::domain::{Field, PostId, Session, TimeSlot};
use mentorly_core::ports::{Dialog, Navigator};
use mentorly_infra::SystemClock;

use crate::state::AppState;

/// Front-end pieces shared by every command.
pub struct Frontend {
    pub state: AppState,
    pub dialog: Arc<dyn Dialog>,
    pub navigator: Arc<dyn Navigator>,
}

pub async fn edit_post(
    frontend: &Frontend,
    id: String,
    title: Option<String>,
    content: Option<String>,
    cancel: bool,
) -> anyhow::Result<()> {
    let mut editor = PostEditor::new(
        PostId::new(id),
        EditorPorts {
            api: frontend.state.community.clone(),
            dialog: frontend.dialog.clone(),
            navigator: frontend.navigator.clone(),
        },
    );
    editor.load().await;

    println!("제목: {}", editor.title());
    println!("{}", editor.content());

    if !editor.is_editable() {
        anyhow::bail!("post {} cannot be edited by you", editor.id());
    }

    if cancel {
        editor.cancel().await;
        return Ok(());
    }

    if let Some(title) = title {
        editor.change_title(&title);
    }
    if let Some(content) = content {
        editor.change_content(&content);
    }

    match editor.submit().await {
        SubmitOutcome::Saved => Ok(()),
        SubmitOutcome::Invalid | SubmitOutcome::NotEditable => {
            let messages: Vec<&str> = [Field::Content, Field::Title]
                .into_iter()
                .filter_map(|field| editor.error(field))
                .collect();
            anyhow::bail!("{}", messages.join(" "))
        }
        SubmitOutcome::Failed => anyhow::bail!("update failed, see the log for details"),
    }
}

pub async fn register_schedule(
    frontend: &Frontend,
    email: Option<String>,
    day: Option<NaiveDate>,
    time: Option<TimeSlot>,
    is_mentor: bool,
) -> anyhow::Result<()> {
    let session = Session { email };
    let mut form = MentorScheduleForm::mount(
        &session,
        is_mentor,
        SchedulePorts {
            api: frontend.state.schedules.clone(),
            dialog: frontend.dialog.clone(),
            navigator: frontend.navigator.clone(),
            clock: Arc::new(SystemClock),
        },
    )
    .await?;

    if let Some(day) = day {
        form.select_day(day);
    }

    println!("{FORM_TITLE}");
    println!("{FORM_SUBTITLE}");
    println!("{}", form.selection().day_label());

    if let Some(placeholder) = form.placeholder() {
        println!("{placeholder}");
        return Ok(());
    }

    if let Some(time) = time {
        form.select_time(time)?;
    }

    match form.press_submit().await? {
        ScheduleOutcome::Registered(created) => {
            tracing::debug!(date_time = %created.date_time, "Schedule created");
            Ok(())
        }
        ScheduleOutcome::Conflict => anyhow::bail!("schedule already exists"),
        ScheduleOutcome::Prompted(SubmitAction::Hidden) => Ok(()),
        ScheduleOutcome::Prompted(_) => {
            let slots: Vec<String> = form.slots().iter().map(|s| s.to_string()).collect();
            anyhow::bail!("pick one of: {}", slots.join(", "))
        }
    }
}
