//! API client errors and response body normalization.

use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;

/// A response body, parsed according to the `Content-Type` header.
#[derive(Debug, Clone, PartialEq)]
pub enum ResponseBody {
    /// Body declared and parsed as `application/json`.
    Json(Value),

    /// Anything else, kept as raw text.
    Text(String),
}

impl ResponseBody {
    /// The server-provided error message, if one can be extracted.
    ///
    /// JSON bodies are expected to carry a top-level `message` field; plain
    /// text bodies are used verbatim.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Json(value) => value.get("message").and_then(Value::as_str),
            Self::Text(text) => (!text.is_empty()).then_some(text.as_str()),
        }
    }

    /// Deserialize the body into a concrete response type.
    ///
    /// # Errors
    ///
    /// Returns a `serde_json::Error` when the body does not match `T`.
    pub fn decode<T: DeserializeOwned>(self) -> Result<T, serde_json::Error> {
        match self {
            Self::Json(value) => serde_json::from_value(value),
            Self::Text(text) => serde_json::from_str(&text),
        }
    }
}

/// Errors produced by the [`ApiClient`](crate::api::ApiClient).
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request exceeded the configured timeout and was aborted.
    #[error("request timed out")]
    Timeout,

    /// The server answered with a non-2xx status.
    #[error("HTTP {status}: {message}")]
    Status {
        /// HTTP status code, unchanged from the response.
        status: u16,
        /// Server-provided message, or `"Request failed"` when absent.
        message: String,
        /// The normalized response body.
        body: ResponseBody,
    },

    /// A transport-level failure (connection refused, DNS, TLS, ...).
    #[error("transport error")]
    Transport(#[source] reqwest::Error),

    /// A 2xx response body did not match the expected shape.
    #[error("failed to decode response body")]
    Decode(#[from] serde_json::Error),
}

impl ApiError {
    /// HTTP status code of the response, when there was one.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_timeout() {
            Self::Timeout
        } else {
            Self::Transport(error)
        }
    }
}
