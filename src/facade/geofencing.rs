//! Geofencing subscriber façade.

use std::sync::Arc;

use log::debug;

use super::{Facade, FacadeError, PubSubFacade};
use crate::client::GeofencingClient;
use crate::container::{Consumer, MessagingContainer};
use crate::message::Message;
use crate::models::{GeofencingSubscription, SubscriptionUpdate, UasZonesFilter};

/// Subscribes to UAS zone updates of the geofencing service.
///
/// The service names the delivery queue in its reply, so there is no topic
/// lookup. Subscriptions are addressed by id only.
pub struct GeofencingSubscriber<C, M> {
    facade: PubSubFacade<C, M>,
}

impl<C, M> GeofencingSubscriber<C, M>
where
    C: MessagingContainer,
    C::Handler: Consumer,
    M: GeofencingClient,
{
    pub fn new(container: C, client: M) -> Self {
        Self {
            facade: PubSubFacade::new(container, client),
        }
    }

    /// Attach a consumer to a queue provisioned out of band.
    pub fn preload_queue_message_consumer<F>(
        &self,
        queue: &str,
        message_consumer: F,
    ) -> Result<(), FacadeError>
    where
        F: Fn(&Message) + Send + Sync + 'static,
    {
        self.facade
            .guarded("preload_queue_message_consumer", |container, _| {
                container
                    .handler()
                    .attach_message_consumer(queue, Arc::new(message_consumer))?;
                debug!("preloaded consumer on {}", queue);
                Ok(())
            })
    }

    /// Subscribe to zones matching `uas_zones_filter`.
    pub fn subscribe<F>(
        &self,
        uas_zones_filter: &UasZonesFilter,
        message_consumer: F,
    ) -> Result<GeofencingSubscription, FacadeError>
    where
        F: Fn(&Message) + Send + Sync + 'static,
    {
        self.facade.guarded("subscribe", |container, client| {
            let reply = client.post_subscription(uas_zones_filter)?;

            container
                .handler()
                .attach_message_consumer(&reply.publication_location, Arc::new(message_consumer))?;
            debug!(
                "subscribed to UAS zones as {} on {}",
                reply.subscription_id, reply.publication_location
            );

            Ok(GeofencingSubscription::from(reply))
        })
    }

    pub fn pause(&self, subscription_id: &str) -> Result<(), FacadeError> {
        self.facade.guarded("pause", |_, client| {
            client.put_subscription(subscription_id, &SubscriptionUpdate::active(false))?;
            Ok(())
        })
    }

    pub fn resume(&self, subscription_id: &str) -> Result<(), FacadeError> {
        self.facade.guarded("resume", |_, client| {
            client.put_subscription(subscription_id, &SubscriptionUpdate::active(true))?;
            Ok(())
        })
    }

    /// Fetch the subscription to learn its queue, delete it, then detach
    /// the consumer from that queue.
    pub fn unsubscribe(&self, subscription_id: &str) -> Result<(), FacadeError> {
        self.facade.guarded("unsubscribe", |container, client| {
            let reply = client.get_subscription_by_id(subscription_id)?;
            let queue = reply.uas_zone_subscription.publication_location;

            client.delete_subscription_by_id(subscription_id)?;
            container.handler().detach_message_consumer(&queue)?;
            debug!("unsubscribed {} from {}", subscription_id, queue);
            Ok(())
        })
    }
}

impl<C: MessagingContainer, M> Facade for GeofencingSubscriber<C, M> {
    type Container = C;
    type Client = M;

    fn base(&self) -> &PubSubFacade<C, M> {
        &self.facade
    }

    fn base_mut(&mut self) -> &mut PubSubFacade<C, M> {
        &mut self.facade
    }
}
