use std::collections::HashSet;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use log::debug;

use super::broker::InMemoryBroker;
use super::InMemoryHandler;
use crate::container::{Consumer, ContainerError, MessageConsumerFn};

/// Consumer role over an [`InMemoryBroker`].
///
/// Deliveries follow the container: while it is stopped the broker holds
/// the attached queues and backlogs their messages, which are handed over
/// on the next start.
#[derive(Clone)]
pub struct InMemoryConsumer {
    broker: InMemoryBroker,
    queues: Arc<Mutex<HashSet<String>>>,
    running: Arc<AtomicBool>,
}

impl InMemoryConsumer {
    pub fn new(broker: InMemoryBroker) -> Self {
        Self {
            broker,
            queues: Arc::new(Mutex::new(HashSet::new())),
            running: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn broker(&self) -> &InMemoryBroker {
        &self.broker
    }

    fn attached_queues(&self, operation: &'static str) -> Result<Vec<String>, ContainerError> {
        Ok(self
            .queues
            .lock()
            .map_err(|_| ContainerError::LockPoisoned(operation))?
            .iter()
            .cloned()
            .collect())
    }
}

impl Consumer for InMemoryConsumer {
    fn attach_message_consumer(
        &self,
        queue: &str,
        consumer: MessageConsumerFn,
    ) -> Result<(), ContainerError> {
        if self.running.load(Ordering::SeqCst) {
            self.broker.attach(queue, consumer)?;
        } else {
            debug!("holding deliveries on {} until the container starts", queue);
            self.broker.attach_held(queue, consumer)?;
        }
        self.queues
            .lock()
            .map_err(|_| ContainerError::LockPoisoned("attach_message_consumer"))?
            .insert(queue.to_string());
        Ok(())
    }

    fn detach_message_consumer(&self, queue: &str) -> Result<(), ContainerError> {
        self.queues
            .lock()
            .map_err(|_| ContainerError::LockPoisoned("detach_message_consumer"))?
            .remove(queue);
        self.broker.detach(queue)
    }
}

impl InMemoryHandler for InMemoryConsumer {
    fn on_start(&self) -> Result<(), ContainerError> {
        self.running.store(true, Ordering::SeqCst);
        for queue in self.attached_queues("on_start")? {
            self.broker.release(&queue)?;
        }
        Ok(())
    }

    fn on_stop(&self) -> Result<(), ContainerError> {
        self.running.store(false, Ordering::SeqCst);
        for queue in self.attached_queues("on_stop")? {
            self.broker.hold(&queue)?;
        }
        Ok(())
    }
}
