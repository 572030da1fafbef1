//! Errors reported by messaging containers.

use std::error::Error;
use std::fmt;

/// Error type for messaging container operations.
#[derive(Debug)]
pub enum ContainerError {
    /// No producer registered under this name
    UnknownProducer(String),
    /// A consumer is already attached to this queue
    QueueInUse(String),
    /// The container has not been started
    NotRunning,
    /// A handler lock was poisoned
    LockPoisoned(&'static str),
    /// Other error
    Other(Box<dyn Error + Send + Sync>),
}

impl fmt::Display for ContainerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContainerError::UnknownProducer(name) => {
                write!(f, "no message producer registered for {}", name)
            }
            ContainerError::QueueInUse(queue) => {
                write!(f, "a consumer is already attached to queue {}", queue)
            }
            ContainerError::NotRunning => write!(f, "container is not running"),
            ContainerError::LockPoisoned(operation) => {
                write!(f, "container lock poisoned during {}", operation)
            }
            ContainerError::Other(e) => write!(f, "container error: {}", e),
        }
    }
}

impl Error for ContainerError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ContainerError::Other(e) => Some(e.as_ref()),
            _ => None,
        }
    }
}
