use std::sync::atomic::{AtomicBool, Ordering};

use log::{info, warn};

use super::broker::InMemoryBroker;
use super::consumer::InMemoryConsumer;
use super::producer::InMemoryProducer;
use super::InMemoryHandler;
use crate::container::{ContainerError, MessagingContainer};

/// Container driving one in-memory handler.
///
/// ## Example
///
/// ```
/// use pubsub_facades::{InMemoryBroker, InMemoryContainer, MessagingContainer};
///
/// let broker = InMemoryBroker::new();
/// let producer = InMemoryContainer::producer(broker.clone());
/// let consumer = InMemoryContainer::consumer(broker);
///
/// producer.start().unwrap();
/// assert!(producer.is_running());
/// assert!(!consumer.is_running());
/// ```
pub struct InMemoryContainer<H: InMemoryHandler> {
    handler: H,
    running: AtomicBool,
}

impl<H: InMemoryHandler> InMemoryContainer<H> {
    pub fn new(handler: H) -> Self {
        Self {
            handler,
            running: AtomicBool::new(false),
        }
    }
}

impl InMemoryContainer<InMemoryProducer> {
    /// A container publishing into `broker`.
    pub fn producer(broker: InMemoryBroker) -> Self {
        Self::new(InMemoryProducer::new(broker))
    }
}

impl InMemoryContainer<InMemoryConsumer> {
    /// A container consuming from `broker`.
    pub fn consumer(broker: InMemoryBroker) -> Self {
        Self::new(InMemoryConsumer::new(broker))
    }
}

impl<H: InMemoryHandler> MessagingContainer for InMemoryContainer<H> {
    type Handler = H;

    fn handler(&self) -> &H {
        &self.handler
    }

    fn start(&self) -> Result<(), ContainerError> {
        if self.running.swap(true, Ordering::SeqCst) {
            return Ok(());
        }
        if let Err(e) = self.handler.on_start() {
            self.running.store(false, Ordering::SeqCst);
            return Err(e);
        }
        info!("in-memory container started");
        Ok(())
    }

    fn stop(&self) -> Result<(), ContainerError> {
        if !self.running.swap(false, Ordering::SeqCst) {
            return Ok(());
        }
        self.handler.on_stop()?;
        info!("in-memory container stopped");
        Ok(())
    }

    fn is_running(&self) -> bool {
        self.running.load(Ordering::SeqCst)
    }
}

impl<H: InMemoryHandler> Drop for InMemoryContainer<H> {
    fn drop(&mut self) {
        if self.is_running() {
            if let Err(e) = self.handler.on_stop() {
                warn!("in-memory container failed to stop on drop: {}", e);
            }
        }
    }
}
