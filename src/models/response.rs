//! The structured result handed back to the invoking runtime.

use serde::Serialize;

/// Lambda-proxy-style result: an integer status code plus a JSON-encoded
/// body string describing the outcome.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct HandlerResponse {
    #[serde(rename = "statusCode")]
    pub status_code: u16,
    pub body: String,
}

impl HandlerResponse {
    /// 200 with a descriptive body.
    pub fn ok(body: impl AsRef<str>) -> Self {
        Self {
            status_code: 200,
            body: json_string(body.as_ref()),
        }
    }

    /// 500 with an error body.
    pub fn error(body: impl AsRef<str>) -> Self {
        Self {
            status_code: 500,
            body: json_string(body.as_ref()),
        }
    }
}

/// Bodies are plain strings JSON-encoded into the field, quotes included.
fn json_string(value: &str) -> String {
    serde_json::to_string(value).unwrap_or_else(|_| format!("\"{}\"", value))
}
