//! Request failure taxonomy and response decoding shared by both front ends.
//!
//! The backend reports failures as `{"detail": ...}` where `detail` is a
//! string, a list of validation errors each carrying `msg`, or a single
//! object with `msg`.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::endpoint::Endpoint;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced an HTTP response.
    #[error("request failed: {0}")]
    Transport(String),
    /// Non-2xx response; `message` is the server detail or the call's fallback.
    #[error("{message} (HTTP {status})")]
    Server { status: u16, message: String },
    /// 2xx response whose body did not match the expected shape.
    #[error("unexpected response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Banner text. Server detail wins; anything else shows `fallback`.
    #[must_use]
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            Self::Server { message, .. } => message.clone(),
            Self::Transport(_) | Self::Decode(_) => fallback.to_owned(),
        }
    }

    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Server { status, .. } => Some(*status),
            Self::Transport(_) | Self::Decode(_) => None,
        }
    }
}

/// Extract a human-readable message from an error body, if it has one.
#[must_use]
pub fn detail_message(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    match value.get("detail")? {
        Value::String(text) => Some(text.clone()),
        Value::Array(items) => {
            let parts: Vec<&str> = items.iter().filter_map(|item| item.get("msg")?.as_str()).collect();
            if parts.is_empty() { None } else { Some(parts.join(", ")) }
        }
        Value::Object(map) => map.get("msg")?.as_str().map(str::to_owned),
        _ => None,
    }
}

/// Turn a raw HTTP outcome for `endpoint` into a typed value.
///
/// An empty 2xx body decodes as JSON `null`. A 404 from a collection read,
/// or a wrapped one, is an empty collection.
///
/// # Errors
///
/// `Server` for any other non-2xx status, `Decode` when the body does not fit `T`.
pub fn decode_response<T: DeserializeOwned>(endpoint: &Endpoint, status: u16, body: &str) -> Result<T, ApiError> {
    if (200..300).contains(&status) {
        let text = if body.trim().is_empty() { "null" } else { body };
        return serde_json::from_str(text).map_err(|e| ApiError::Decode(e.to_string()));
    }
    let detail = detail_message(body);
    if endpoint.is_collection() && (status == 404 || detail.as_deref().is_some_and(is_wrapped_not_found)) {
        return serde_json::from_str("[]").map_err(|e| ApiError::Decode(e.to_string()));
    }
    Err(ApiError::Server {
        status,
        message: detail.unwrap_or_else(|| endpoint.fallback_message().to_owned()),
    })
}

/// Some collection reads re-raise their own 404 as a 400 whose detail is
/// the stringified original, e.g. `"404: No trips found"`.
fn is_wrapped_not_found(detail: &str) -> bool {
    detail.starts_with("404:")
}
