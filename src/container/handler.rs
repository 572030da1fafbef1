//! Handler roles a messaging container can expose.

use std::sync::Arc;
use std::time::Duration;

use super::ContainerError;
use crate::message::Message;

/// Callback generating the next outgoing message for a topic.
pub type MessageProducerFn = Arc<dyn Fn() -> Message + Send + Sync>;

/// Callback receiving messages delivered on a queue.
pub type MessageConsumerFn = Arc<dyn Fn(&Message) + Send + Sync>;

/// Producer role: sends messages generated by registered callbacks.
pub trait Producer: Send + Sync {
    /// Register the callback generating messages for `name`.
    ///
    /// With an interval the container also invokes it periodically while
    /// running. Registering the same name again replaces the callback.
    fn add_message_producer(
        &self,
        name: &str,
        producer: MessageProducerFn,
        interval: Option<Duration>,
    ) -> Result<(), ContainerError>;

    /// Invoke the callback for `name` once and send its message now.
    fn trigger_message(&self, name: &str) -> Result<(), ContainerError>;
}

/// Consumer role: delivers queue messages to attached callbacks.
pub trait Consumer: Send + Sync {
    /// Bind a callback to a delivery queue.
    fn attach_message_consumer(
        &self,
        queue: &str,
        consumer: MessageConsumerFn,
    ) -> Result<(), ContainerError>;

    /// Unbind whatever callback is attached to a delivery queue.
    fn detach_message_consumer(&self, queue: &str) -> Result<(), ContainerError>;
}
