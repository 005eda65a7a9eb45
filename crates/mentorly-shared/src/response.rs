//! Error bodies returned by the API (RFC 7807 problem details).

use serde::{Deserialize, Serialize};

/// RFC 7807 Problem Details for HTTP APIs.
///
/// See: https://datatracker.ietf.org/doc/html/rfc7807
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// A URI reference that identifies the problem type.
    #[serde(rename = "type", default = "about_blank")]
    pub error_type: String,

    /// A short, human-readable summary of the problem type.
    #[serde(default)]
    pub title: String,

    /// The HTTP status code.
    #[serde(default)]
    pub status: u16,

    /// A human-readable explanation specific to this occurrence.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub detail: Option<String>,

    /// Request ID for debugging purposes.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub request_id: Option<String>,
}

fn about_blank() -> String {
    "about:blank".to_string()
}

impl ErrorResponse {
    /// Best description of the problem: the detail if present, else the title.
    pub fn summary(&self) -> &str {
        self.detail
            .as_deref()
            .filter(|d| !d.is_empty())
            .unwrap_or(&self.title)
    }
}
