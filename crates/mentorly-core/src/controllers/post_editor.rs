//! Post editor - loads a community post, validates edits and saves them.

use std::sync::Arc;

use mentorly_shared::dto::UpdatePostRequest;

use crate::domain::validation::{
    CHANGE_LINE_BREAK_LIMIT, KEYDOWN_LINE_BREAK_LIMIT, TOO_MANY_LINE_BREAKS, check_required,
    exceeds_line_break_limit,
};
use crate::domain::{
    CONTENT_MAX_CHARS, Field, Post, PostId, Route, TITLE_MAX_CHARS, ValidationErrors, clamp_chars,
};
use crate::ports::{Alert, Body, CommunityApi, Confirm, Dialog, Icon, Navigator};

pub const SAVED_MESSAGE: &str = "수정이 완료되었습니다.";
pub const CANCEL_QUESTION: &str = "수정을 취소하시겠습니까?";
pub const CANCEL_CONFIRM_LABEL: &str = "네, 취소합니다";
pub const CANCEL_KEEP_LABEL: &str = "아니요, 유지합니다";
pub const TITLE_PLACEHOLDER: &str = "제목에 핵심 내용을 요약해보세요";
pub const CONTENT_PLACEHOLDER: &str = "면접 관련 내용을 남겨주세요. 상세히 작성하면 더 좋아요😇";

const SAVED_TIMER_MS: u64 = 1500;

/// Key pressed inside the content field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Enter,
    Other,
}

/// Whether the view should let a key press through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyDisposition {
    Allow,
    Prevent,
}

/// Result of pressing the save button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Update accepted, acknowledgment shown and detail view opened.
    Saved,
    /// A required field is blank; nothing was sent.
    Invalid,
    /// The update request failed; the error was logged.
    Failed,
    /// The viewer does not own the post.
    NotEditable,
}

/// External collaborators of the post editor.
#[derive(Clone)]
pub struct EditorPorts {
    pub api: Arc<dyn CommunityApi>,
    pub dialog: Arc<dyn Dialog>,
    pub navigator: Arc<dyn Navigator>,
}

/// Form state and handlers of the post edit view.
pub struct PostEditor {
    id: PostId,
    ports: EditorPorts,
    title: String,
    content: String,
    errors: ValidationErrors,
    editable: bool,
    loading: bool,
    focus: Option<Field>,
}

impl PostEditor {
    /// A blank editor for post `id`, waiting for [`PostEditor::load`].
    pub fn new(id: PostId, ports: EditorPorts) -> Self {
        Self {
            id,
            ports,
            title: String::new(),
            content: String::new(),
            errors: ValidationErrors::default(),
            editable: false,
            loading: true,
            focus: None,
        }
    }

    /// Fetch the post and fill the form.
    ///
    /// A failed fetch is logged and leaves the form empty.
    pub async fn load(&mut self) {
        match self.ports.api.fetch_post(&self.id).await {
            Ok(response) => {
                let post = Post::from_response(self.id.clone(), response);
                tracing::debug!(post_id = %self.id, owner = post.owner, "Post loaded");
                self.title = post.title;
                self.content = post.content;
                self.editable = post.owner;
            }
            Err(e) => {
                tracing::error!(post_id = %self.id, error = %e, "Failed to load post");
            }
        }
        self.loading = false;
    }

    pub fn change_title(&mut self, value: &str) {
        self.title = clamp_chars(value, TITLE_MAX_CHARS);
        self.errors.clear(Field::Title);
    }

    /// Replace the content and re-run the line-break rule.
    pub fn change_content(&mut self, value: &str) {
        self.content = clamp_chars(value, CONTENT_MAX_CHARS);

        if exceeds_line_break_limit(&self.content, CHANGE_LINE_BREAK_LIMIT) {
            self.errors.set(Field::Content, TOO_MANY_LINE_BREAKS);
        } else {
            self.errors.clear(Field::Content);
        }
    }

    /// Guard run before a key press reaches the content field.
    pub fn key_down_content(&mut self, key: Key) -> KeyDisposition {
        if key == Key::Enter && exceeds_line_break_limit(&self.content, KEYDOWN_LINE_BREAK_LIMIT) {
            self.errors.set(Field::Content, TOO_MANY_LINE_BREAKS);
            return KeyDisposition::Prevent;
        }
        KeyDisposition::Allow
    }

    /// Validate and send the update.
    pub async fn submit(&mut self) -> SubmitOutcome {
        if !self.editable {
            tracing::warn!(post_id = %self.id, "Submit ignored: viewer does not own the post");
            return SubmitOutcome::NotEditable;
        }

        let (errors, focus) = check_required(&self.title, &self.content);
        if !errors.is_empty() {
            self.errors = errors;
            self.focus = focus;
            return SubmitOutcome::Invalid;
        }
        self.errors = ValidationErrors::default();

        let request = UpdatePostRequest {
            title: self.title.clone(),
            content: self.content.clone(),
        };

        match self.ports.api.update_post(&self.id, &request).await {
            Ok(()) => {
                tracing::info!(post_id = %self.id, "Post updated");
                self.ports
                    .dialog
                    .alert(
                        Alert::bold(SAVED_MESSAGE)
                            .with_icon(Icon::Success)
                            .auto_close(SAVED_TIMER_MS),
                    )
                    .await;
                self.ports.navigator.navigate(self.detail_route());
                SubmitOutcome::Saved
            }
            Err(e) => {
                tracing::error!(post_id = %self.id, error = %e, "Failed to update post");
                SubmitOutcome::Failed
            }
        }
    }

    /// Ask before leaving; returns `true` when the user left for the detail view.
    pub async fn cancel(&self) -> bool {
        if !self.editable {
            tracing::warn!(post_id = %self.id, "Cancel ignored: post is not editable");
            return false;
        }

        let confirmed = self
            .ports
            .dialog
            .confirm(Confirm {
                icon: Some(Icon::Warning),
                body: Body::Text(CANCEL_QUESTION.to_string()),
                confirm_label: CANCEL_CONFIRM_LABEL.to_string(),
                cancel_label: CANCEL_KEEP_LABEL.to_string(),
                reverse_buttons: true,
            })
            .await;

        if confirmed {
            self.ports.navigator.navigate(self.detail_route());
        }
        confirmed
    }

    fn detail_route(&self) -> Route {
        Route::PostDetail(self.id.clone())
    }

    pub fn id(&self) -> &PostId {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn error(&self, field: Field) -> Option<&str> {
        self.errors.get(field)
    }

    /// Whether the save and cancel buttons are offered.
    pub fn is_editable(&self) -> bool {
        self.editable
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Field that last received focus from validation.
    pub fn focused(&self) -> Option<Field> {
        self.focus
    }
}
