//! In-memory broker for testing and single-process scenarios.

use std::collections::{HashMap, HashSet, VecDeque};
use std::sync::{Arc, RwLock};

use log::debug;

use crate::container::{ContainerError, MessageConsumerFn};
use crate::message::Message;

#[derive(Clone, Debug)]
struct Route {
    queue: String,
    active: bool,
}

#[derive(Default)]
struct BrokerState {
    /// Topic name -> queues bound to it
    routes: HashMap<String, Vec<Route>>,
    /// Queue -> attached consumer
    consumers: HashMap<String, MessageConsumerFn>,
    /// Queues whose consumer is attached but not taking deliveries
    held: HashSet<String>,
    /// Queue -> messages that arrived with no consumer taking deliveries
    backlog: HashMap<String, VecDeque<Message>>,
}

/// In-memory broker shared by producers, consumers and the in-memory
/// management services.
///
/// Features:
/// - Thread-safe (can be shared across threads via `Clone`)
/// - Topics fan out to every bound queue whose route is active
/// - Inactive routes are skipped: nothing is delivered or queued for them
/// - Messages for a queue with no consumer, or a held one, are kept until
///   a consumer attaches or the hold is released
/// - Delivery is synchronous, on the publishing thread
///
/// ## Example
///
/// ```
/// use std::sync::{Arc, Mutex};
/// use pubsub_facades::{InMemoryBroker, Message};
///
/// let broker = InMemoryBroker::new();
/// broker.bind("arrivals", "arrivals.sub-1").unwrap();
///
/// let received = Arc::new(Mutex::new(Vec::new()));
/// let sink = Arc::clone(&received);
/// broker
///     .attach("arrivals.sub-1", Arc::new(move |m: &Message| sink.lock().unwrap().push(m.clone())))
///     .unwrap();
///
/// broker.publish("arrivals", Message::with_string_payload("m-1", "arrivals", "EHAM")).unwrap();
/// assert_eq!(received.lock().unwrap().len(), 1);
/// ```
#[derive(Clone, Default)]
pub struct InMemoryBroker {
    state: Arc<RwLock<BrokerState>>,
}

impl InMemoryBroker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Route messages published on `topic` to `queue`.
    pub fn bind(&self, topic: &str, queue: &str) -> Result<(), ContainerError> {
        let mut state = self
            .state
            .write()
            .map_err(|_| ContainerError::LockPoisoned("bind"))?;
        let routes = state.routes.entry(topic.to_string()).or_default();
        if !routes.iter().any(|r| r.queue == queue) {
            routes.push(Route {
                queue: queue.to_string(),
                active: true,
            });
        }
        Ok(())
    }

    /// Remove every route to `queue` and drop its backlog.
    pub fn unbind(&self, queue: &str) -> Result<(), ContainerError> {
        let mut state = self
            .state
            .write()
            .map_err(|_| ContainerError::LockPoisoned("unbind"))?;
        for routes in state.routes.values_mut() {
            routes.retain(|r| r.queue != queue);
        }
        state.routes.retain(|_, routes| !routes.is_empty());
        state.backlog.remove(queue);
        Ok(())
    }

    /// Flip the active flag of every route to `queue`.
    ///
    /// Returns whether any route was found.
    pub fn set_active(&self, queue: &str, active: bool) -> Result<bool, ContainerError> {
        let mut state = self
            .state
            .write()
            .map_err(|_| ContainerError::LockPoisoned("set_active"))?;
        let mut found = false;
        for route in state.routes.values_mut().flatten() {
            if route.queue == queue {
                route.active = active;
                found = true;
            }
        }
        Ok(found)
    }

    /// Publish to every active queue bound to `topic`.
    ///
    /// Returns the number of queues the message was routed to.
    pub fn publish(&self, topic: &str, message: Message) -> Result<usize, ContainerError> {
        let queues: Vec<String> = {
            let state = self
                .state
                .read()
                .map_err(|_| ContainerError::LockPoisoned("publish"))?;
            state
                .routes
                .get(topic)
                .map(|routes| {
                    routes
                        .iter()
                        .filter(|r| r.active)
                        .map(|r| r.queue.clone())
                        .collect()
                })
                .unwrap_or_default()
        };

        debug!("publishing {} on {} to {} queue(s)", message.id, topic, queues.len());

        for queue in &queues {
            self.send(queue, message.clone())?;
        }
        Ok(queues.len())
    }

    /// Deliver a message straight to a queue, bypassing topic routing.
    pub fn send(&self, queue: &str, message: Message) -> Result<(), ContainerError> {
        let consumer = {
            let mut state = self
                .state
                .write()
                .map_err(|_| ContainerError::LockPoisoned("send"))?;
            match state.consumers.get(queue) {
                Some(consumer) if !state.held.contains(queue) => Arc::clone(consumer),
                _ => {
                    state
                        .backlog
                        .entry(queue.to_string())
                        .or_default()
                        .push_back(message);
                    return Ok(());
                }
            }
        };

        // Called outside the lock so consumers may publish in turn.
        consumer(&message);
        Ok(())
    }

    /// Attach a consumer to `queue` and hand it any backlog.
    pub fn attach(&self, queue: &str, consumer: MessageConsumerFn) -> Result<(), ContainerError> {
        self.attach_consumer(queue, consumer, false)
    }

    /// Attach a consumer to `queue` without delivering anything until
    /// [`release`](Self::release) is called.
    pub fn attach_held(
        &self,
        queue: &str,
        consumer: MessageConsumerFn,
    ) -> Result<(), ContainerError> {
        self.attach_consumer(queue, consumer, true)
    }

    fn attach_consumer(
        &self,
        queue: &str,
        consumer: MessageConsumerFn,
        held: bool,
    ) -> Result<(), ContainerError> {
        {
            let mut state = self
                .state
                .write()
                .map_err(|_| ContainerError::LockPoisoned("attach"))?;
            if state.consumers.contains_key(queue) {
                return Err(ContainerError::QueueInUse(queue.to_string()));
            }
            state.consumers.insert(queue.to_string(), consumer);
            if held {
                state.held.insert(queue.to_string());
            }
        }

        if held {
            Ok(())
        } else {
            self.drain(queue)
        }
    }

    /// Stop delivering to the consumer of `queue`; messages are backlogged.
    pub fn hold(&self, queue: &str) -> Result<(), ContainerError> {
        let mut state = self
            .state
            .write()
            .map_err(|_| ContainerError::LockPoisoned("hold"))?;
        state.held.insert(queue.to_string());
        Ok(())
    }

    /// Resume delivering to the consumer of `queue`, backlog first.
    pub fn release(&self, queue: &str) -> Result<(), ContainerError> {
        {
            let mut state = self
                .state
                .write()
                .map_err(|_| ContainerError::LockPoisoned("release"))?;
            state.held.remove(queue);
        }
        self.drain(queue)
    }

    fn drain(&self, queue: &str) -> Result<(), ContainerError> {
        let (consumer, pending) = {
            let mut state = self
                .state
                .write()
                .map_err(|_| ContainerError::LockPoisoned("drain"))?;
            let consumer = match state.consumers.get(queue) {
                Some(consumer) if !state.held.contains(queue) => Arc::clone(consumer),
                _ => return Ok(()),
            };
            (consumer, state.backlog.remove(queue).unwrap_or_default())
        };

        if !pending.is_empty() {
            debug!("draining {} backlogged message(s) on {}", pending.len(), queue);
        }
        for message in &pending {
            consumer(message);
        }
        Ok(())
    }

    /// Detach the consumer of `queue` and clear any hold on it. Detaching
    /// an idle queue succeeds.
    pub fn detach(&self, queue: &str) -> Result<(), ContainerError> {
        let mut state = self
            .state
            .write()
            .map_err(|_| ContainerError::LockPoisoned("detach"))?;
        state.consumers.remove(queue);
        state.held.remove(queue);
        Ok(())
    }

    /// Queues bound to a topic, active or not.
    pub fn queues_for(&self, topic: &str) -> Vec<String> {
        self.state
            .read()
            .map(|state| {
                state
                    .routes
                    .get(topic)
                    .map(|routes| routes.iter().map(|r| r.queue.clone()).collect())
                    .unwrap_or_default()
            })
            .unwrap_or_default()
    }

    pub fn is_attached(&self, queue: &str) -> bool {
        self.state
            .read()
            .map(|state| state.consumers.contains_key(queue))
            .unwrap_or(false)
    }

    /// Number of messages waiting for a consumer on `queue`.
    pub fn backlog_len(&self, queue: &str) -> usize {
        self.state
            .read()
            .map(|state| state.backlog.get(queue).map_or(0, VecDeque::len))
            .unwrap_or(0)
    }
}
