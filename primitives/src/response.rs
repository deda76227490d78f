//! Invocation response types and collected log lines.
//!
//! A [`Response`] is what one contract invocation hands back to the ledger
//! platform, which propagates it to every consensus participant. The
//! status/message/payload triple and the 200/500 status values follow the
//! platform convention external callers already depend on.

use serde::{Deserialize, Serialize};

/// Response status returned to the platform.
///
/// 200 for success, 500 for failure, per the ledger platform convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum ResponseStatus {
    /// The invocation completed successfully.
    Ok = 200,
    /// The invocation failed; the response message explains why.
    Error = 500,
}

impl ResponseStatus {
    /// Returns true if this is the `Ok` variant.
    pub fn is_ok(self) -> bool {
        matches!(self, Self::Ok)
    }

    /// Convert from the numeric status code.
    pub fn from_u32(v: u32) -> Option<Self> {
        match v {
            200 => Some(Self::Ok),
            500 => Some(Self::Error),
            _ => None,
        }
    }

    /// Return the numeric status code.
    pub fn as_u32(self) -> u32 {
        self as u32
    }
}

impl core::fmt::Display for ResponseStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Ok => write!(f, "OK"),
            Self::Error => write!(f, "ERROR"),
        }
    }
}

/// Result of one contract invocation.
///
/// Success carries an optional payload and an empty message; failure
/// carries a human-readable message and an empty payload. There is no
/// separate error code — the message is the observable failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    /// Invocation status.
    pub status: ResponseStatus,
    /// Failure message; empty on success.
    pub message: String,
    /// Result payload; empty unless the operation returns data.
    pub payload: Vec<u8>,
}

impl Response {
    /// Create a success response carrying `payload`.
    pub fn success(payload: Vec<u8>) -> Self {
        Self {
            status: ResponseStatus::Ok,
            message: String::new(),
            payload,
        }
    }

    /// Create a failure response carrying `message`.
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            status: ResponseStatus::Error,
            message: message.into(),
            payload: Vec::new(),
        }
    }

    /// Returns true if the invocation succeeded.
    pub fn is_ok(&self) -> bool {
        self.status.is_ok()
    }
}

/// Structured query result.
///
/// Field names and order are part of the wire contract:
/// `{"Name":"A","Amount":"123"}`. `Amount` is the stored value text as
/// read, not re-canonicalized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryResponse {
    /// Entity key.
    #[serde(rename = "Name")]
    pub name: String,
    /// Stored value text.
    #[serde(rename = "Amount")]
    pub amount: String,
}

impl QueryResponse {
    /// Serialize to the canonical JSON wire form.
    pub fn to_json(&self) -> String {
        // A struct of two strings serializes infallibly.
        serde_json::to_string(self).unwrap_or_default()
    }
}

/// A log line collected during one invocation.
///
/// Logs are per-invocation data handed back to the embedding platform,
/// not consensus-critical output; the platform may drop them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogLine {
    /// Log level (0=trace, 1=debug, 2=info, 3=warn, 4=error).
    pub level: u32,
    /// Log message.
    pub message: String,
}

/// Trace log level.
pub const LOG_TRACE: u32 = 0;
/// Debug log level.
pub const LOG_DEBUG: u32 = 1;
/// Info log level.
pub const LOG_INFO: u32 = 2;
/// Warn log level.
pub const LOG_WARN: u32 = 3;
/// Error log level.
pub const LOG_ERROR: u32 = 4;
