use std::fmt;

use serde::{Deserialize, Serialize};

use mentorly_shared::dto::PostResponse;

/// Maximum number of characters accepted in a post title.
pub const TITLE_MAX_CHARS: usize = 30;

/// Maximum number of characters accepted in a post body.
pub const CONTENT_MAX_CHARS: usize = 1000;

/// Identifier of a community post, as it appears in `/community/{id}`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PostId(String);

impl PostId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Post entity - a community content item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: PostId,
    pub title: String,
    pub content: String,
    /// Whether the current viewer may edit the post.
    pub owner: bool,
}

impl Post {
    /// Build a post from the body of `GET /community/{id}`.
    ///
    /// Over-long fields are cut to the input limits.
    pub fn from_response(id: PostId, response: PostResponse) -> Self {
        Self {
            id,
            title: clamp_chars(&response.title, TITLE_MAX_CHARS),
            content: clamp_chars(&response.content, CONTENT_MAX_CHARS),
            owner: response.owner,
        }
    }
}

/// Truncate `value` to at most `max` characters without splitting a code point.
pub fn clamp_chars(value: &str, max: usize) -> String {
    match value.char_indices().nth(max) {
        Some((byte_idx, _)) => value[..byte_idx].to_string(),
        None => value.to_string(),
    }
}
