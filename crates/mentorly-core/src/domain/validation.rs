//! Inline form validation: per-field error messages and the line-break rule.

/// Shown when the title is blank on submit.
pub const TITLE_REQUIRED: &str = "제목을 입력해 주세요.";

/// Shown when the content is blank on submit.
pub const CONTENT_REQUIRED: &str = "내용을 입력해 주세요.";

/// Shown when the content has too many consecutive line breaks.
pub const TOO_MANY_LINE_BREAKS: &str = "연속된 줄바꿈은 최대 4번까지만 가능합니다.";

/// Run length that flags the content on every change.
pub const CHANGE_LINE_BREAK_LIMIT: usize = 5;

/// Run length at which an Enter key press is refused.
///
/// One below [`CHANGE_LINE_BREAK_LIMIT`]: the key guard looks at the content
/// before the new line is inserted.
pub const KEYDOWN_LINE_BREAK_LIMIT: usize = 4;

/// A form field that can carry an error or receive focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Title,
    Content,
}

/// Per-field error messages. An empty message is the same as no error.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    pub title: Option<String>,
    pub content: Option<String>,
}

impl ValidationErrors {
    pub fn get(&self, field: Field) -> Option<&str> {
        let slot = match field {
            Field::Title => &self.title,
            Field::Content => &self.content,
        };
        slot.as_deref().filter(|msg| !msg.is_empty())
    }

    pub fn set(&mut self, field: Field, message: impl Into<String>) {
        let message = Some(message.into());
        match field {
            Field::Title => self.title = message,
            Field::Content => self.content = message,
        }
    }

    pub fn clear(&mut self, field: Field) {
        match field {
            Field::Title => self.title = None,
            Field::Content => self.content = None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.get(Field::Title).is_none() && self.get(Field::Content).is_none()
    }
}

/// Length of the longest run of consecutive line breaks in `text`.
pub fn longest_line_break_run(text: &str) -> usize {
    let mut longest = 0;
    let mut run = 0;
    for ch in text.chars() {
        match ch {
            '\n' => {
                run += 1;
                longest = longest.max(run);
            }
            // CRLF pastes count once per line
            '\r' => {}
            _ => run = 0,
        }
    }
    longest
}

/// Whether `text` contains a run of at least `limit` consecutive line breaks.
pub fn exceeds_line_break_limit(text: &str, limit: usize) -> bool {
    longest_line_break_run(text) >= limit
}

/// Blank-field check run on submit, content first.
///
/// Returns the errors and the field that should take focus.
pub fn check_required(title: &str, content: &str) -> (ValidationErrors, Option<Field>) {
    let mut errors = ValidationErrors::default();
    let mut focus = None;

    if content.trim().is_empty() {
        errors.set(Field::Content, CONTENT_REQUIRED);
        focus = Some(Field::Content);
    }
    if title.trim().is_empty() {
        errors.set(Field::Title, TITLE_REQUIRED);
        focus = focus.or(Some(Field::Title));
    }

    (errors, focus)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn five_line_breaks_exceed_change_limit() {
        assert!(exceeds_line_break_limit("a\n\n\n\n\nb", CHANGE_LINE_BREAK_LIMIT));
    }

    #[test]
    fn four_line_breaks_pass_change_limit() {
        assert!(!exceeds_line_break_limit("a\n\n\n\nb", CHANGE_LINE_BREAK_LIMIT));
    }

    #[test]
    fn runs_reset_on_text() {
        assert_eq!(longest_line_break_run("a\n\nb\n\n\nc\nd"), 3);
        assert_eq!(longest_line_break_run("no breaks"), 0);
        assert_eq!(longest_line_break_run(""), 0);
    }

    #[test]
    fn whitespace_only_lines_are_not_blank() {
        assert_eq!(longest_line_break_run("a\n \n \nb"), 1);
    }

    #[test]
    fn crlf_counts_once() {
        assert_eq!(longest_line_break_run("a\r\n\r\n\r\nb"), 3);
    }

    #[test]
    fn trailing_run_counts() {
        assert!(exceeds_line_break_limit("a\n\n\n\n", KEYDOWN_LINE_BREAK_LIMIT));
        assert!(!exceeds_line_break_limit("a\n\n\n", KEYDOWN_LINE_BREAK_LIMIT));
    }

    #[test]
    fn required_focuses_content_first() {
        let (errors, focus) = check_required("", "  ");
        assert_eq!(errors.get(Field::Title), Some(TITLE_REQUIRED));
        assert_eq!(errors.get(Field::Content), Some(CONTENT_REQUIRED));
        assert_eq!(focus, Some(Field::Content));
    }

    #[test]
    fn required_focuses_title_when_only_title_blank() {
        let (errors, focus) = check_required(" ", "본문");
        assert_eq!(errors.get(Field::Content), None);
        assert_eq!(focus, Some(Field::Title));
    }

    #[test]
    fn empty_message_counts_as_no_error() {
        let mut errors = ValidationErrors::default();
        errors.set(Field::Title, "");
        assert!(errors.is_empty());
    }
}
