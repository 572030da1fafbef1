//! Recording collaborators.
//!
//! Every mock appends to one shared call log so tests can assert both which
//! collaborator was called and in what order.

#![allow(dead_code)]

use std::collections::HashSet;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use pubsub_facades::{
    Consumer, ContainerError, GeofencingClient, ManagementError, MessageConsumerFn,
    MessageProducerFn, MessagingContainer, Producer, Subscription, SubscriptionManagerClient,
    SubscriptionUpdate, Topic, UasZonesFilter,
};
use pubsub_facades::models::{
    SubscribeToUasZonesReply, UasZoneSubscription, UasZoneSubscriptionReply,
};

#[derive(Clone, Default)]
pub struct CallLog(Arc<Mutex<Vec<String>>>);

impl CallLog {
    pub fn record(&self, call: impl Into<String>) {
        self.0.lock().unwrap().push(call.into());
    }

    pub fn calls(&self) -> Vec<String> {
        self.0.lock().unwrap().clone()
    }

    pub fn count(&self, prefix: &str) -> usize {
        self.calls().iter().filter(|c| c.starts_with(prefix)).count()
    }

    pub fn clear(&self) {
        self.0.lock().unwrap().clear();
    }
}

// ============================================================================
// Container
// ============================================================================

pub struct MockContainer<H> {
    handler: H,
    log: CallLog,
    running: AtomicBool,
}

impl<H> MockContainer<H> {
    pub fn new(handler: H, log: CallLog) -> Self {
        Self {
            handler,
            log,
            running: AtomicBool::new(false),
        }
    }
}

impl<H: Send + Sync> MessagingContainer for MockContainer<H> {
    type Handler = H;

    fn handler(&self) -> &H {
        &self.handler
    }

    fn start(&self) -> Result<(), ContainerError> {
        self.log.record("container.start");
        self.running.store(true, Ordering::SeqCst);
        Ok(())
    }

    fn stop(&self) -> Result<(), ContainerError> {
        self.log.record("container.stop");
        self.running.store(false, Ordering::SeqCst);
        Ok(())
    }

    fn is_running(&self) -> bool {
        self.running.load(Ordering::SeqCst)
    }
}

pub struct MockProducer {
    log: CallLog,
    producers: Mutex<Vec<(String, MessageProducerFn, Option<Duration>)>>,
}

impl MockProducer {
    pub fn new(log: CallLog) -> Self {
        Self {
            log,
            producers: Mutex::new(Vec::new()),
        }
    }

    pub fn interval_of(&self, name: &str) -> Option<Duration> {
        self.producers
            .lock()
            .unwrap()
            .iter()
            .rev()
            .find(|(n, _, _)| n == name)
            .and_then(|(_, _, interval)| *interval)
    }
}

impl Producer for MockProducer {
    fn add_message_producer(
        &self,
        name: &str,
        producer: MessageProducerFn,
        interval: Option<Duration>,
    ) -> Result<(), ContainerError> {
        self.log.record(format!("add_message_producer:{}", name));
        self.producers
            .lock()
            .unwrap()
            .push((name.to_string(), producer, interval));
        Ok(())
    }

    fn trigger_message(&self, name: &str) -> Result<(), ContainerError> {
        self.log.record(format!("trigger_message:{}", name));
        let producer = self
            .producers
            .lock()
            .unwrap()
            .iter()
            .rev()
            .find(|(n, _, _)| n == name)
            .map(|(_, p, _)| Arc::clone(p))
            .ok_or_else(|| ContainerError::UnknownProducer(name.to_string()))?;
        let message = producer();
        self.log.record(format!("sent:{}", message.payload_str().unwrap_or("")));
        Ok(())
    }
}

pub struct MockConsumer {
    log: CallLog,
    attached: Mutex<HashSet<String>>,
}

impl MockConsumer {
    pub fn new(log: CallLog) -> Self {
        Self {
            log,
            attached: Mutex::new(HashSet::new()),
        }
    }

    pub fn is_attached(&self, queue: &str) -> bool {
        self.attached.lock().unwrap().contains(queue)
    }
}

impl Consumer for MockConsumer {
    fn attach_message_consumer(
        &self,
        queue: &str,
        _consumer: MessageConsumerFn,
    ) -> Result<(), ContainerError> {
        self.log.record(format!("attach:{}", queue));
        self.attached.lock().unwrap().insert(queue.to_string());
        Ok(())
    }

    fn detach_message_consumer(&self, queue: &str) -> Result<(), ContainerError> {
        self.log.record(format!("detach:{}", queue));
        self.attached.lock().unwrap().remove(queue);
        Ok(())
    }
}

// ============================================================================
// Subscription manager
// ============================================================================

pub struct MockSubscriptionManager {
    log: CallLog,
    topics: Mutex<Vec<Topic>>,
    next_id: AtomicU64,
    pub fail_delete: AtomicBool,
}

impl MockSubscriptionManager {
    pub fn new(log: CallLog) -> Self {
        Self {
            log,
            topics: Mutex::new(Vec::new()),
            next_id: AtomicU64::new(0),
            fail_delete: AtomicBool::new(false),
        }
    }

    pub fn with_topics(log: CallLog, topics: Vec<Topic>) -> Self {
        let manager = Self::new(log);
        *manager.topics.lock().unwrap() = topics;
        manager
    }

    pub fn topics(&self) -> Vec<Topic> {
        self.topics.lock().unwrap().clone()
    }

    fn next_id(&self) -> u64 {
        self.next_id.fetch_add(1, Ordering::SeqCst) + 1
    }
}

impl SubscriptionManagerClient for MockSubscriptionManager {
    fn get_topics(&self) -> Result<Vec<Topic>, ManagementError> {
        self.log.record("get_topics");
        Ok(self.topics())
    }

    fn post_topic(&self, topic: &Topic) -> Result<Topic, ManagementError> {
        self.log.record(format!("post_topic:{}", topic.name));
        let created = Topic::new(format!("t{}", self.next_id()), topic.name.clone());
        self.topics.lock().unwrap().push(created.clone());
        Ok(created)
    }

    fn post_subscription(
        &self,
        subscription: &Subscription,
    ) -> Result<Subscription, ManagementError> {
        self.log
            .record(format!("post_subscription:{}", subscription.topic_id));
        let id = format!("s{}", self.next_id());
        Ok(Subscription {
            queue: format!("queue-{}", id),
            id,
            topic_id: subscription.topic_id.clone(),
            active: true,
        })
    }

    fn put_subscription(
        &self,
        subscription_id: &str,
        subscription: &Subscription,
    ) -> Result<(), ManagementError> {
        self.log.record(format!(
            "put_subscription:{}:active={}",
            subscription_id, subscription.active
        ));
        Ok(())
    }

    fn get_subscription_by_id(
        &self,
        subscription_id: &str,
    ) -> Result<Subscription, ManagementError> {
        self.log
            .record(format!("get_subscription_by_id:{}", subscription_id));
        Err(ManagementError::NotFound(subscription_id.to_string()))
    }

    fn delete_subscription_by_id(&self, subscription_id: &str) -> Result<(), ManagementError> {
        self.log
            .record(format!("delete_subscription_by_id:{}", subscription_id));
        if self.fail_delete.load(Ordering::SeqCst) {
            return Err(ManagementError::Status {
                code: 503,
                message: "unavailable".into(),
            });
        }
        Ok(())
    }
}

// ============================================================================
// Geofencing service
// ============================================================================

/// Replies with `gs-N` / `geo-queue-N` on subscribe and reports the queue
/// stored in `stored_queue` on fetch, so tests can tell the fetched queue
/// apart from the one handed out on subscribe.
pub struct MockGeofencingClient {
    log: CallLog,
    next_id: AtomicU64,
    pub stored_queue: Mutex<String>,
}

impl MockGeofencingClient {
    pub fn new(log: CallLog) -> Self {
        Self {
            log,
            next_id: AtomicU64::new(0),
            stored_queue: Mutex::new("stored-queue".to_string()),
        }
    }
}

impl GeofencingClient for MockGeofencingClient {
    fn post_subscription(
        &self,
        uas_zones_filter: &UasZonesFilter,
    ) -> Result<SubscribeToUasZonesReply, ManagementError> {
        self.log
            .record(format!("post_subscription:{:?}", uas_zones_filter.regions));
        let n = self.next_id.fetch_add(1, Ordering::SeqCst) + 1;
        Ok(SubscribeToUasZonesReply {
            subscription_id: format!("gs-{}", n),
            publication_location: format!("geo-queue-{}", n),
        })
    }

    fn put_subscription(
        &self,
        subscription_id: &str,
        update: &SubscriptionUpdate,
    ) -> Result<(), ManagementError> {
        self.log.record(format!(
            "put_subscription:{}:active={:?}",
            subscription_id, update.active
        ));
        Ok(())
    }

    fn get_subscription_by_id(
        &self,
        subscription_id: &str,
    ) -> Result<UasZoneSubscriptionReply, ManagementError> {
        self.log
            .record(format!("get_subscription_by_id:{}", subscription_id));
        Ok(UasZoneSubscriptionReply {
            uas_zone_subscription: UasZoneSubscription {
                subscription_id: subscription_id.to_string(),
                publication_location: self.stored_queue.lock().unwrap().clone(),
                active: true,
                uas_zones_filter: UasZonesFilter::default(),
            },
        })
    }

    fn delete_subscription_by_id(&self, subscription_id: &str) -> Result<(), ManagementError> {
        self.log
            .record(format!("delete_subscription_by_id:{}", subscription_id));
        Ok(())
    }
}

// ============================================================================
// Façade builders
// ============================================================================

pub type Publisher =
    pubsub_facades::TopicPublisher<MockContainer<MockProducer>, MockSubscriptionManager>;
pub type Subscriber =
    pubsub_facades::TopicSubscriber<MockContainer<MockConsumer>, MockSubscriptionManager>;
pub type Geofencing =
    pubsub_facades::GeofencingSubscriber<MockContainer<MockConsumer>, MockGeofencingClient>;

pub fn publisher(topics: Vec<Topic>) -> (Publisher, CallLog) {
    let log = CallLog::default();
    let facade = Publisher::new(
        MockContainer::new(MockProducer::new(log.clone()), log.clone()),
        MockSubscriptionManager::with_topics(log.clone(), topics),
    );
    (facade, log)
}

pub fn subscriber(topics: Vec<Topic>) -> (Subscriber, CallLog) {
    let log = CallLog::default();
    let facade = Subscriber::new(
        MockContainer::new(MockConsumer::new(log.clone()), log.clone()),
        MockSubscriptionManager::with_topics(log.clone(), topics),
    );
    (facade, log)
}

pub fn geofencing() -> (Geofencing, CallLog) {
    let log = CallLog::default();
    let facade = Geofencing::new(
        MockContainer::new(MockConsumer::new(log.clone()), log.clone()),
        MockGeofencingClient::new(log.clone()),
    );
    (facade, log)
}
