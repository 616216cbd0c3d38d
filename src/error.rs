//! Error types for the Notion client.

use reqwest::StatusCode;
use reqwest::header::InvalidHeaderValue;
use serde::Deserialize;
use serde_json::Value;

/// Errors raised by the client itself.
///
/// Responses the Notion API rejects with a JSON error body are *not* errors
/// here: they decode fine and come back as a value. Use
/// [`RemoteApiError::from_body`] to recognize them.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The request never produced a readable response.
    #[error("request to Notion failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The response body is not valid JSON.
    #[error("Notion returned a non-JSON body (status {status}): {source}")]
    BadResponseBody {
        status: StatusCode,
        #[source]
        source: serde_json::Error,
    },

    #[error("environment variable {0} is not set")]
    MissingEnv(&'static str),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// A page id that would not address a single page.
    #[error("invalid page id {0:?}")]
    InvalidPageId(String),

    /// A configured value cannot be sent as an HTTP header.
    #[error("invalid value for header {name}")]
    InvalidHeader {
        name: &'static str,
        #[source]
        source: InvalidHeaderValue,
    },
}

pub type Result<T> = std::result::Result<T, Error>;

/// An error object returned by the Notion API, e.g.
/// `{"object":"error","status":404,"code":"object_not_found","message":"..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RemoteApiError {
    #[serde(default)]
    pub status: u16,
    #[serde(default = "unknown_code")]
    pub code: String,
    #[serde(default)]
    pub message: String,
}

fn unknown_code() -> String {
    "unknown".to_string()
}

impl RemoteApiError {
    /// Returns the error carried by `body`, if it is a Notion error object.
    pub fn from_body(body: &Value) -> Option<Self> {
        if body.get("object")?.as_str()? != "error" {
            return None;
        }

        serde_json::from_value(body.clone()).ok()
    }
}

impl std::fmt::Display for RemoteApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}: {}", self.status, self.code, self.message)
    }
}
