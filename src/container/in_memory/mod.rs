//! In-memory messaging for testing and single-process scenarios.
//!
//! Useful for:
//! - Unit and integration testing without a broker
//! - Single-process applications
//! - Development and prototyping

mod broker;
mod consumer;
mod container;
mod producer;
mod ticker;

pub use broker::InMemoryBroker;
pub use consumer::InMemoryConsumer;
pub use container::InMemoryContainer;
pub use producer::InMemoryProducer;

use crate::container::ContainerError;

/// Hooks an in-memory handler gets from its container.
pub trait InMemoryHandler: Send + Sync {
    fn on_start(&self) -> Result<(), ContainerError> {
        Ok(())
    }

    fn on_stop(&self) -> Result<(), ContainerError> {
        Ok(())
    }
}
