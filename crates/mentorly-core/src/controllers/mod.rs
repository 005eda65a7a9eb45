//! Controllers - form state and event handlers behind each view.

mod post_editor;
mod schedule_form;

pub use post_editor::{
    CANCEL_CONFIRM_LABEL, CANCEL_KEEP_LABEL, CANCEL_QUESTION, CONTENT_PLACEHOLDER, EditorPorts,
    Key, KeyDisposition, PostEditor, SAVED_MESSAGE, SubmitOutcome, TITLE_PLACEHOLDER,
};
pub use schedule_form::{
    CONFLICT_MESSAGE, EMAIL_REQUIRED_MESSAGE, FORM_SUBTITLE, FORM_TITLE, MentorScheduleForm,
    PICK_DAY_MESSAGE, PICK_FUTURE_TIME_MESSAGE, PICK_TIME_MESSAGE, REGISTERED_MESSAGE,
    ScheduleOutcome, SchedulePorts, SUBMIT_LABEL, SubmitAction,
};
