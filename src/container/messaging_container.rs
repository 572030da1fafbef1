use super::ContainerError;

/// A container owning one messaging handler bound to a broker connection.
///
/// The handler type fixes the role: façades that publish require
/// `Handler: Producer`, façades that subscribe require `Handler: Consumer`.
pub trait MessagingContainer: Send + Sync {
    type Handler;

    /// The handler this container drives.
    fn handler(&self) -> &Self::Handler;

    /// Open the connection and start background delivery.
    fn start(&self) -> Result<(), ContainerError>;

    /// Stop background delivery and close the connection.
    fn stop(&self) -> Result<(), ContainerError>;

    fn is_running(&self) -> bool;
}
