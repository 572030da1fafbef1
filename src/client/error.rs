//! Errors reported by management clients.

use std::error::Error;
use std::fmt;

/// Error type for subscription-management and geofencing service calls.
#[derive(Debug)]
pub enum ManagementError {
    /// The service could not be reached
    ConnectionFailed(String),
    /// The service answered with a non-success status
    Status { code: u16, message: String },
    /// The requested record does not exist
    NotFound(String),
    /// The request conflicts with an existing record
    Conflict(String),
    /// The reply could not be decoded
    Decode(String),
    /// An in-process store lock was poisoned
    LockPoisoned(&'static str),
    /// Other error
    Other(Box<dyn Error + Send + Sync>),
}

impl fmt::Display for ManagementError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ManagementError::ConnectionFailed(msg) => write!(f, "connection failed: {}", msg),
            ManagementError::Status { code, message } => {
                write!(f, "service replied with status {}: {}", code, message)
            }
            ManagementError::NotFound(what) => write!(f, "not found: {}", what),
            ManagementError::Conflict(what) => write!(f, "conflict: {}", what),
            ManagementError::Decode(msg) => write!(f, "decode failed: {}", msg),
            ManagementError::LockPoisoned(operation) => {
                write!(f, "client store lock poisoned during {}", operation)
            }
            ManagementError::Other(e) => write!(f, "management client error: {}", e),
        }
    }
}

impl Error for ManagementError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ManagementError::Other(e) => Some(e.as_ref()),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for ManagementError {
    fn from(err: serde_json::Error) -> Self {
        ManagementError::Decode(err.to_string())
    }
}
