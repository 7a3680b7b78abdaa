use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One record of the `POST /students` batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateStudent {
    pub name: String,
    pub class_name: String,
    pub parent_id: Option<i64>,
}

/// Body returned by the write endpoints. `status` is the logical outcome;
/// a 2xx response can still carry `status: false`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MutationResponse {
    pub status: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParentOption {
    pub id: i64,
    pub name: String,
}

/// Envelope used by every list endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataEnvelope<T> {
    #[serde(default = "Vec::new")]
    pub data: Vec<T>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentResponse {
    pub id: i64,
    pub name: String,
    pub class_name: String,
    #[serde(default)]
    pub parent: Option<ParentOption>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateNews {
    pub title: String,
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteResponse {
    pub id: i64,
    pub content: String,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// Body of a non-2xx answer. Either key may be missing, and `message` is
/// only used when it is a string.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorPayload {
    #[serde(default)]
    pub message: Option<Value>,
    #[serde(default)]
    pub error: Option<Value>,
}

fn text_of(value: Option<&Value>) -> Option<String> {
    value
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|text| !text.is_empty())
        .map(str::to_string)
}

/// Error returned by the client. `message` is only set when the server sent
/// one in its error payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiError {
    pub error: String,
    pub code: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.error)
    }
}

impl ApiError {
    pub const API_ERROR: &'static str = "API_ERROR";
    pub const UNKNOWN: &'static str = "UNKNOWN";
    pub const REQUEST_FAILED: &'static str = "REQUEST_FAILED";

    pub fn from_payload(status: u16, payload: ErrorPayload) -> Self {
        let message = text_of(payload.message.as_ref());
        let error = message
            .clone()
            .or_else(|| text_of(payload.error.as_ref()))
            .unwrap_or_else(|| format!("HTTP {}", status));
        Self {
            error,
            code: Self::API_ERROR.to_string(),
            message,
        }
    }

    pub fn unknown(msg: impl Into<String>) -> Self {
        Self {
            error: msg.into(),
            code: Self::UNKNOWN.to_string(),
            message: None,
        }
    }

    pub fn request_failed(msg: impl Into<String>) -> Self {
        Self {
            error: msg.into(),
            code: Self::REQUEST_FAILED.to_string(),
            message: None,
        }
    }

    /// The `message` the server put in its error payload, if any.
    pub fn payload_message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}
