//! Error types for façade operations.

use std::error::Error;
use std::fmt;

use crate::client::ManagementError;
use crate::container::ContainerError;

/// Error type for façade operations.
///
/// Collaborator failures are carried as they were reported; the façade adds
/// no translation of its own.
#[derive(Debug)]
pub enum FacadeError {
    /// An operational method was called before `start()` or after `stop()`.
    NotRunning,
    /// No topic with this exact name exists.
    TopicNotFound(String),
    /// The management client failed.
    Management(ManagementError),
    /// The messaging container failed.
    Container(ContainerError),
}

impl fmt::Display for FacadeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FacadeError::NotRunning => write!(f, "facade is not running"),
            FacadeError::TopicNotFound(name) => write!(f, "no topic found with name {}", name),
            FacadeError::Management(e) => write!(f, "management client error: {}", e),
            FacadeError::Container(e) => write!(f, "container error: {}", e),
        }
    }
}

impl Error for FacadeError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            FacadeError::Management(e) => Some(e),
            FacadeError::Container(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ManagementError> for FacadeError {
    fn from(err: ManagementError) -> Self {
        FacadeError::Management(err)
    }
}

impl From<ContainerError> for FacadeError {
    fn from(err: ContainerError) -> Self {
        FacadeError::Container(err)
    }
}
