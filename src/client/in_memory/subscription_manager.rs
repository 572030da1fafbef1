use std::collections::BTreeMap;
use std::sync::{Arc, RwLock};

use log::debug;

use crate::client::{ManagementError, SubscriptionManagerClient};
use crate::container::{ContainerError, InMemoryBroker};
use crate::models::{Subscription, Topic};

#[derive(Default)]
struct Store {
    topics: Vec<Topic>,
    subscriptions: BTreeMap<String, Subscription>,
    next_topic: u64,
    next_subscription: u64,
}

/// In-memory subscription-management service.
///
/// Topics get ids `topic-N`, subscriptions `sub-N` with queue
/// `<topic name>.sub-N`. Creating a subscription binds its queue to the topic
/// on the broker, updating it mirrors the active flag onto the route, and
/// deleting it unbinds the queue.
#[derive(Clone, Default)]
pub struct InMemorySubscriptionManager {
    store: Arc<RwLock<Store>>,
    broker: Option<InMemoryBroker>,
}

fn broker_error(err: ContainerError) -> ManagementError {
    ManagementError::Other(Box::new(err))
}

impl InMemorySubscriptionManager {
    /// A service that only keeps records.
    pub fn new() -> Self {
        Self::default()
    }

    /// A service that also maintains routes on `broker`.
    pub fn with_broker(broker: InMemoryBroker) -> Self {
        Self {
            store: Arc::default(),
            broker: Some(broker),
        }
    }

    /// Seed a topic record as if created by another client.
    pub fn insert_topic(&self, name: &str) -> Result<Topic, ManagementError> {
        self.post_topic(&Topic::named(name))
    }

    /// Every stored subscription, ordered by id.
    pub fn subscriptions(&self) -> Vec<Subscription> {
        self.store
            .read()
            .map(|store| store.subscriptions.values().cloned().collect())
            .unwrap_or_default()
    }
}

impl SubscriptionManagerClient for InMemorySubscriptionManager {
    fn get_topics(&self) -> Result<Vec<Topic>, ManagementError> {
        let store = self
            .store
            .read()
            .map_err(|_| ManagementError::LockPoisoned("get_topics"))?;
        Ok(store.topics.clone())
    }

    fn post_topic(&self, topic: &Topic) -> Result<Topic, ManagementError> {
        let mut store = self
            .store
            .write()
            .map_err(|_| ManagementError::LockPoisoned("post_topic"))?;
        if Topic::find_by_name(&store.topics, &topic.name).is_some() {
            return Err(ManagementError::Conflict(format!("topic {}", topic.name)));
        }

        store.next_topic += 1;
        let created = Topic::new(format!("topic-{}", store.next_topic), topic.name.clone());
        store.topics.push(created.clone());
        debug!("created topic {} ({:?})", created.name, created.id);
        Ok(created)
    }

    fn post_subscription(
        &self,
        subscription: &Subscription,
    ) -> Result<Subscription, ManagementError> {
        let mut store = self
            .store
            .write()
            .map_err(|_| ManagementError::LockPoisoned("post_subscription"))?;
        let topic_name = store
            .topics
            .iter()
            .find(|t| t.id.as_deref() == Some(subscription.topic_id.as_str()))
            .map(|t| t.name.clone())
            .ok_or_else(|| ManagementError::NotFound(format!("topic {}", subscription.topic_id)))?;

        store.next_subscription += 1;
        let id = format!("sub-{}", store.next_subscription);
        let created = Subscription {
            queue: format!("{}.{}", topic_name, id),
            id: id.clone(),
            topic_id: subscription.topic_id.clone(),
            active: subscription.active,
        };

        if let Some(broker) = &self.broker {
            broker.bind(&topic_name, &created.queue).map_err(broker_error)?;
            broker
                .set_active(&created.queue, created.active)
                .map_err(broker_error)?;
        }

        store.subscriptions.insert(id, created.clone());
        debug!("created subscription {} on {}", created.id, created.queue);
        Ok(created)
    }

    fn put_subscription(
        &self,
        subscription_id: &str,
        subscription: &Subscription,
    ) -> Result<(), ManagementError> {
        let mut store = self
            .store
            .write()
            .map_err(|_| ManagementError::LockPoisoned("put_subscription"))?;
        let stored = store
            .subscriptions
            .get_mut(subscription_id)
            .ok_or_else(|| ManagementError::NotFound(format!("subscription {}", subscription_id)))?;

        // Only the active flag is writable; id, topic and queue are service-owned.
        stored.active = subscription.active;

        if let Some(broker) = &self.broker {
            broker
                .set_active(&stored.queue, stored.active)
                .map_err(broker_error)?;
        }
        Ok(())
    }

    fn get_subscription_by_id(
        &self,
        subscription_id: &str,
    ) -> Result<Subscription, ManagementError> {
        let store = self
            .store
            .read()
            .map_err(|_| ManagementError::LockPoisoned("get_subscription_by_id"))?;
        store
            .subscriptions
            .get(subscription_id)
            .cloned()
            .ok_or_else(|| ManagementError::NotFound(format!("subscription {}", subscription_id)))
    }

    fn delete_subscription_by_id(&self, subscription_id: &str) -> Result<(), ManagementError> {
        let mut store = self
            .store
            .write()
            .map_err(|_| ManagementError::LockPoisoned("delete_subscription_by_id"))?;
        let removed = store
            .subscriptions
            .remove(subscription_id)
            .ok_or_else(|| ManagementError::NotFound(format!("subscription {}", subscription_id)))?;

        if let Some(broker) = &self.broker {
            broker.unbind(&removed.queue).map_err(broker_error)?;
        }
        debug!("deleted subscription {}", subscription_id);
        Ok(())
    }
}
