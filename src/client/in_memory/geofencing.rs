use std::collections::BTreeMap;
use std::sync::{Arc, RwLock};

use log::debug;

use crate::client::{GeofencingClient, ManagementError};
use crate::container::{ContainerError, InMemoryBroker};
use crate::message::Message;
use crate::models::{
    SubscribeToUasZonesReply, SubscriptionUpdate, UasZoneSubscription, UasZoneSubscriptionReply,
    UasZonesFilter,
};

#[derive(Default)]
struct Store {
    subscriptions: BTreeMap<String, UasZoneSubscription>,
    next_subscription: u64,
}

/// In-memory geofencing service.
///
/// Subscriptions get ids `gs-N` and publication location `geofencing.gs-N`.
/// With a broker, every publication location is bound to
/// [`UAS_ZONES_TOPIC`](Self::UAS_ZONES_TOPIC) and zone updates published
/// there reach all active subscriptions. Filters are stored, not evaluated.
#[derive(Clone, Default)]
pub struct InMemoryGeofencingService {
    store: Arc<RwLock<Store>>,
    broker: Option<InMemoryBroker>,
}

fn broker_error(err: ContainerError) -> ManagementError {
    ManagementError::Other(Box::new(err))
}

impl InMemoryGeofencingService {
    /// Broker topic carrying UAS zone updates.
    pub const UAS_ZONES_TOPIC: &'static str = "uas_zones";

    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_broker(broker: InMemoryBroker) -> Self {
        Self {
            store: Arc::default(),
            broker: Some(broker),
        }
    }

    /// Publish a zone update to every active subscription.
    ///
    /// Returns the number of queues reached; zero without a broker.
    pub fn publish_zone_update(&self, message: Message) -> Result<usize, ManagementError> {
        match &self.broker {
            Some(broker) => broker
                .publish(Self::UAS_ZONES_TOPIC, message)
                .map_err(broker_error),
            None => Ok(0),
        }
    }

    /// Every stored subscription, ordered by id.
    pub fn subscriptions(&self) -> Vec<UasZoneSubscription> {
        self.store
            .read()
            .map(|store| store.subscriptions.values().cloned().collect())
            .unwrap_or_default()
    }
}

impl GeofencingClient for InMemoryGeofencingService {
    fn post_subscription(
        &self,
        uas_zones_filter: &UasZonesFilter,
    ) -> Result<SubscribeToUasZonesReply, ManagementError> {
        let mut store = self
            .store
            .write()
            .map_err(|_| ManagementError::LockPoisoned("post_subscription"))?;

        store.next_subscription += 1;
        let id = format!("gs-{}", store.next_subscription);
        let subscription = UasZoneSubscription {
            subscription_id: id.clone(),
            publication_location: format!("geofencing.{}", id),
            active: true,
            uas_zones_filter: uas_zones_filter.clone(),
        };

        if let Some(broker) = &self.broker {
            broker
                .bind(Self::UAS_ZONES_TOPIC, &subscription.publication_location)
                .map_err(broker_error)?;
        }

        let reply = SubscribeToUasZonesReply {
            subscription_id: id.clone(),
            publication_location: subscription.publication_location.clone(),
        };
        store.subscriptions.insert(id, subscription);
        debug!("created geofencing subscription {}", reply.subscription_id);
        Ok(reply)
    }

    fn put_subscription(
        &self,
        subscription_id: &str,
        update: &SubscriptionUpdate,
    ) -> Result<(), ManagementError> {
        let mut store = self
            .store
            .write()
            .map_err(|_| ManagementError::LockPoisoned("put_subscription"))?;
        let stored = store
            .subscriptions
            .get_mut(subscription_id)
            .ok_or_else(|| ManagementError::NotFound(format!("subscription {}", subscription_id)))?;

        if let Some(active) = update.active {
            stored.active = active;
            if let Some(broker) = &self.broker {
                broker
                    .set_active(&stored.publication_location, active)
                    .map_err(broker_error)?;
            }
        }
        Ok(())
    }

    fn get_subscription_by_id(
        &self,
        subscription_id: &str,
    ) -> Result<UasZoneSubscriptionReply, ManagementError> {
        let store = self
            .store
            .read()
            .map_err(|_| ManagementError::LockPoisoned("get_subscription_by_id"))?;
        store
            .subscriptions
            .get(subscription_id)
            .cloned()
            .map(|uas_zone_subscription| UasZoneSubscriptionReply {
                uas_zone_subscription,
            })
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
            broker
                .unbind(&removed.publication_location)
                .map_err(broker_error)?;
        }
        debug!("deleted geofencing subscription {}", subscription_id);
        Ok(())
    }
}
