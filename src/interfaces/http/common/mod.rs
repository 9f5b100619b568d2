//! Common HTTP response types

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Standard response wrapper.
///
/// Every endpoint returns this shape. On success:
/// `{"state": "success", "res": {...}, "error": ""}`; on failure:
/// `{"state": "error", "res": null, "error": "description"}`. The `error`
/// field doubles as the confirmation-message channel on some successes.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ResponseEnvelope<T> {
    /// `"success"` or `"error"`
    pub state: String,
    /// Payload; `null` on error
    pub res: Option<T>,
    /// Error or confirmation message; empty when there is none
    pub error: String,
}

impl<T> ResponseEnvelope<T> {
    pub fn success(res: T) -> Self {
        Self {
            state: "success".to_string(),
            res: Some(res),
            error: String::new(),
        }
    }

    /// Success that also carries a confirmation message.
    pub fn success_with_message(res: T, message: impl Into<String>) -> Self {
        Self {
            state: "success".to_string(),
            res: Some(res),
            error: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            state: "error".to_string(),
            res: None,
            error: message.into(),
        }
    }
}
