//! API response envelope.
//!
//! Every endpoint answers with the same `{status, message, data?}` shape;
//! `status` is derived from the HTTP status class.

use serde::{Deserialize, Serialize};

/// Response status derived from the HTTP status code class
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseStatus {
    /// 2xx
    Success,
    /// 4xx
    Fail,
    /// 5xx and anything else
    Error,
}

impl ResponseStatus {
    /// Classify an HTTP status code
    pub fn from_status_code(code: u16) -> Self {
        match code {
            200..=299 => Self::Success,
            400..=499 => Self::Fail,
            _ => Self::Error,
        }
    }
}

/// Standard API response wrapper
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T = serde_json::Value> {
    /// Outcome class of the request
    pub status: ResponseStatus,

    /// Human-readable message
    pub message: String,

    /// Payload, present when the endpoint has something to return
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    /// Build an envelope for the given HTTP status code
    pub fn new(status_code: u16, message: impl Into<String>) -> Self {
        Self {
            status: ResponseStatus::from_status_code(status_code),
            message: message.into(),
            data: None,
        }
    }

    /// Attach a payload
    pub fn with_data(mut self, data: T) -> Self {
        self.data = Some(data);
        self
    }

    /// Check if the response is successful
    pub fn is_success(&self) -> bool {
        self.status == ResponseStatus::Success
    }
}
