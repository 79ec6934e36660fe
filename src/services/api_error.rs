use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;

/// Message used when the server gives no reason for a failed request
pub const REQUEST_FAILED_FALLBACK: &str = "Request failed";

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// Non-success HTTP status
    #[error("{message}")]
    Request { status: u16, message: String },
    /// The request never got an HTTP answer
    #[error("Network error: {0}")]
    Network(String),
    #[error("Could not read response: {0}")]
    Decode(String),
    #[error("Could not encode request: {0}")]
    Encode(String),
}

impl ApiError {
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Request { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(401)
    }
}

/// Pulls the server's reason out of an error body: `message`, then `error`.
pub fn error_message(body: &str) -> String {
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|v| {
            ["message", "error"].iter().find_map(|field| match v.get(*field) {
                Some(Value::String(s)) if !s.is_empty() => Some(s.clone()),
                Some(Value::Object(inner)) => inner
                    .get("message")
                    .and_then(Value::as_str)
                    .map(str::to_string),
                _ => None,
            })
        })
        .unwrap_or_else(|| REQUEST_FAILED_FALLBACK.to_string())
}

/// Turns a finished HTTP exchange into the call's result.
pub fn decode_response<T: DeserializeOwned>(status: u16, body: &str) -> Result<T, ApiError> {
    if !(200..300).contains(&status) {
        return Err(ApiError::Request {
            status,
            message: error_message(body),
        });
    }

    // 204 and friends: let `()`/`Option`/`Value` targets see a JSON null
    let body = if body.trim().is_empty() { "null" } else { body };
    serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))
}
