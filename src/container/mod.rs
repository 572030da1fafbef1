//! Messaging containers - the data plane of the façades.
//!
//! A container owns exactly one handler. The handler is either a
//! [`Producer`] (topic name -> message callback) or a [`Consumer`]
//! (queue -> delivery callback):
//!
//! ```text
//!   TopicPublisher ──► Container<Producer> ──► broker topic
//!
//!   broker queue ──► Container<Consumer> ──► TopicSubscriber / GeofencingSubscriber
//!                                             message_consumer(&Message)
//! ```

mod error;
mod handler;
mod messaging_container;

#[cfg(feature = "in-memory")]
mod in_memory;

pub use error::ContainerError;
pub use handler::{Consumer, MessageConsumerFn, MessageProducerFn, Producer};
pub use messaging_container::MessagingContainer;

#[cfg(feature = "in-memory")]
pub use in_memory::{
    InMemoryBroker, InMemoryConsumer, InMemoryContainer, InMemoryHandler, InMemoryProducer,
};
