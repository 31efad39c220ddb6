//! Execution status reported across the client/server boundary.
//!
//! The page read path never raises these itself; they wrap failures (decode
//! errors included) once they leave the process, keeping the numeric status
//! code available for callers that branch on it.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::error::StdErrorBoxed;

/// A status code plus an optional human-readable message, as returned by a
/// server for a statement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TsStatus {
    pub code: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl TsStatus {
    pub fn new(code: i32, message: impl Into<String>) -> TsStatus {
        TsStatus {
            code,
            message: Some(message.into()),
        }
    }
}

/// Failure of a statement execution, carrying the status code it was
/// reported with.
///
/// Errors built from a bare reason or a cause carry the code `0`.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct StatementExecutionError {
    code: i32,
    message: String,
    #[source]
    source: Option<StdErrorBoxed>,
}

impl StatementExecutionError {
    /// Builds the error from a server status. The message has the form
    /// `"{code}: {message}"`.
    pub fn from_status(status: &TsStatus) -> StatementExecutionError {
        StatementExecutionError {
            code: status.code,
            message: format!(
                "{}: {}",
                status.code,
                status.message.as_deref().unwrap_or("null")
            ),
            source: None,
        }
    }

    pub fn from_reason(reason: impl Into<String>) -> StatementExecutionError {
        StatementExecutionError {
            code: 0,
            message: reason.into(),
            source: None,
        }
    }

    /// Wraps a causing failure; the message is taken from the cause.
    pub fn from_cause<E>(cause: E) -> StatementExecutionError
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        StatementExecutionError {
            code: 0,
            message: cause.to_string(),
            source: Some(Box::new(cause)),
        }
    }

    pub fn with_cause<E>(message: impl Into<String>, cause: E) -> StatementExecutionError
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        StatementExecutionError {
            code: 0,
            message: message.into(),
            source: Some(Box::new(cause)),
        }
    }

    pub fn status_code(&self) -> i32 {
        self.code
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<crate::error::Error> for StatementExecutionError {
    fn from(e: crate::error::Error) -> Self {
        StatementExecutionError::from_cause(e)
    }
}
