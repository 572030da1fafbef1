//! Topic subscriber façade.

use std::sync::Arc;

use log::debug;

use super::{Facade, FacadeError, PubSubFacade};
use crate::client::{ManagementError, SubscriptionManagerClient};
use crate::container::{Consumer, MessagingContainer};
use crate::message::Message;
use crate::models::{Subscription, Topic};

/// Subscribes to existing topics of the subscription-management service.
///
/// Subscriptions are not cached: keep the value returned by
/// [`subscribe`](Self::subscribe) and hand it back to pause, resume and
/// unsubscribe.
pub struct TopicSubscriber<C, M> {
    facade: PubSubFacade<C, M>,
}

impl<C, M> TopicSubscriber<C, M>
where
    C: MessagingContainer,
    C::Handler: Consumer,
    M: SubscriptionManagerClient,
{
    pub fn new(container: C, client: M) -> Self {
        Self {
            facade: PubSubFacade::new(container, client),
        }
    }

    /// Subscribe to `topic_name` and deliver its messages to
    /// `message_consumer`.
    pub fn subscribe<F>(
        &self,
        topic_name: &str,
        message_consumer: F,
    ) -> Result<Subscription, FacadeError>
    where
        F: Fn(&Message) + Send + Sync + 'static,
    {
        self.facade.guarded("subscribe", |container, client| {
            let topics = client.get_topics()?;
            let topic = Topic::find_by_name(&topics, topic_name)
                .ok_or_else(|| FacadeError::TopicNotFound(topic_name.to_string()))?;
            let topic_id = topic.id.clone().ok_or_else(|| {
                ManagementError::Decode(format!("topic {} listed without an id", topic_name))
            })?;

            let subscription = client.post_subscription(&Subscription::for_topic(topic_id))?;
            debug!(
                "subscribed to {} as {} on {}",
                topic_name, subscription.id, subscription.queue
            );

            container
                .handler()
                .attach_message_consumer(&subscription.queue, Arc::new(message_consumer))?;

            Ok(subscription)
        })
    }

    /// Mark the subscription inactive on the service. The consumer stays
    /// attached.
    pub fn pause(&self, subscription: Subscription) -> Result<Subscription, FacadeError> {
        self.set_active("pause", subscription, false)
    }

    /// Mark the subscription active again.
    pub fn resume(&self, subscription: Subscription) -> Result<Subscription, FacadeError> {
        self.set_active("resume", subscription, true)
    }

    fn set_active(
        &self,
        operation: &str,
        mut subscription: Subscription,
        active: bool,
    ) -> Result<Subscription, FacadeError> {
        self.facade.guarded(operation, |_, client| {
            subscription.active = active;
            client.put_subscription(&subscription.id, &subscription)?;
            debug!("subscription {} active={}", subscription.id, active);
            Ok(subscription)
        })
    }

    /// Delete the subscription on the service, then detach its consumer.
    ///
    /// Between the two steps the consumer is still attached to a queue the
    /// service no longer knows about. If the delete fails nothing is
    /// detached.
    pub fn unsubscribe(&self, subscription: &Subscription) -> Result<(), FacadeError> {
        self.facade.guarded("unsubscribe", |container, client| {
            client.delete_subscription_by_id(&subscription.id)?;
            container
                .handler()
                .detach_message_consumer(&subscription.queue)?;
            debug!("unsubscribed {} from {}", subscription.id, subscription.queue);
            Ok(())
        })
    }
}

impl<C: MessagingContainer, M> Facade for TopicSubscriber<C, M> {
    type Container = C;
    type Client = M;

    fn base(&self) -> &PubSubFacade<C, M> {
        &self.facade
    }

    fn base_mut(&mut self) -> &mut PubSubFacade<C, M> {
        &mut self.facade
    }
}
