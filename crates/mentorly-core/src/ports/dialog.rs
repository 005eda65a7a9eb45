//! Modal dialog port - alerts and confirmations shown over the current view.

use std::time::Duration;

use async_trait::async_trait;

/// Icon shown at the top of a dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Success,
    Error,
    Warning,
    Info,
}

/// Dialog body: plain text, or text rendered in bold.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Body {
    Text(String),
    Bold(String),
}

impl Body {
    /// The message without markup.
    pub fn text(&self) -> &str {
        match self {
            Body::Text(text) | Body::Bold(text) => text,
        }
    }

    /// The body as the html a browser dialog would receive.
    pub fn html(&self) -> String {
        match self {
            Body::Text(text) => text.clone(),
            Body::Bold(text) => format!("<b>{text}</b>"),
        }
    }
}

/// A one-way notification. Dismissed by the user or by its timer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub icon: Option<Icon>,
    pub body: Body,
    pub show_confirm_button: bool,
    pub timer: Option<Duration>,
}

impl Alert {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            icon: None,
            body: Body::Text(text.into()),
            show_confirm_button: true,
            timer: None,
        }
    }

    pub fn bold(text: impl Into<String>) -> Self {
        Self {
            body: Body::Bold(text.into()),
            ..Self::text("")
        }
    }

    pub fn with_icon(mut self, icon: Icon) -> Self {
        self.icon = Some(icon);
        self
    }

    /// Close on its own after `millis`, without a confirm button.
    pub fn auto_close(mut self, millis: u64) -> Self {
        self.show_confirm_button = false;
        self.timer = Some(Duration::from_millis(millis));
        self
    }
}

/// A yes/no question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Confirm {
    pub icon: Option<Icon>,
    pub body: Body,
    pub confirm_label: String,
    pub cancel_label: String,
    /// Cancel is placed before confirm.
    pub reverse_buttons: bool,
}

/// Dialog trait - abstraction over whatever draws modals.
#[async_trait]
pub trait Dialog: Send + Sync {
    /// Show an alert; resolves once it is dismissed.
    async fn alert(&self, alert: Alert);

    /// Ask a question; `true` when the user confirmed.
    async fn confirm(&self, confirm: Confirm) -> bool;
}
