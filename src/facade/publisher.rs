//! Topic publisher façade.

use std::sync::Arc;
use std::time::Duration;

use log::debug;

use super::{Facade, FacadeError, PubSubFacade};
use crate::client::SubscriptionManagerClient;
use crate::container::{MessagingContainer, Producer};
use crate::message::Message;
use crate::models::Topic;

/// Publishes messages on topics of the subscription-management service.
///
/// ## Example
///
/// ```
/// use pubsub_facades::{
///     Facade, InMemoryBroker, InMemoryContainer, InMemorySubscriptionManager, Message,
///     TopicPublisher,
/// };
///
/// let broker = InMemoryBroker::new();
/// let mut publisher = TopicPublisher::new(
///     InMemoryContainer::producer(broker.clone()),
///     InMemorySubscriptionManager::with_broker(broker),
/// );
///
/// let topic = publisher
///     .add_topic("arrivals", || Message::with_string_payload("", "", "EHAM"), None)
///     .unwrap();
/// assert_eq!(topic.name, "arrivals");
///
/// publisher.start().unwrap();
/// publisher.publish_topic("arrivals").unwrap();
/// ```
pub struct TopicPublisher<C, M> {
    facade: PubSubFacade<C, M>,
}

impl<C, M> TopicPublisher<C, M>
where
    C: MessagingContainer,
    C::Handler: Producer,
    M: SubscriptionManagerClient,
{
    pub fn new(container: C, client: M) -> Self {
        Self {
            facade: PubSubFacade::new(container, client),
        }
    }

    fn get_or_create_topic(&self, topic_name: &str) -> Result<Topic, FacadeError> {
        let client = self.facade.client();
        let topics = client.get_topics()?;

        if let Some(topic) = Topic::find_by_name(&topics, topic_name) {
            debug!("reusing topic {} ({:?})", topic.name, topic.id);
            return Ok(topic.clone());
        }

        debug!("creating topic {}", topic_name);
        Ok(client.post_topic(&Topic::named(topic_name))?)
    }

    /// Resolve or create `topic_name` and register the callback producing
    /// its messages, optionally fired every `interval` while running.
    ///
    /// Setup, not a send: allowed before `start()`.
    pub fn add_topic<F>(
        &self,
        topic_name: &str,
        message_producer: F,
        interval: Option<Duration>,
    ) -> Result<Topic, FacadeError>
    where
        F: Fn() -> Message + Send + Sync + 'static,
    {
        let topic = self.get_or_create_topic(topic_name)?;

        self.facade.container().handler().add_message_producer(
            topic_name,
            Arc::new(message_producer),
            interval,
        )?;

        Ok(topic)
    }

    /// Send one message for `topic_name` now.
    pub fn publish_topic(&self, topic_name: &str) -> Result<(), FacadeError> {
        self.facade.guarded("publish_topic", |container, _| {
            debug!("triggering message for {}", topic_name);
            container.handler().trigger_message(topic_name)?;
            Ok(())
        })
    }
}

impl<C: MessagingContainer, M> Facade for TopicPublisher<C, M> {
    type Container = C;
    type Client = M;

    fn base(&self) -> &PubSubFacade<C, M> {
        &self.facade
    }

    fn base_mut(&mut self) -> &mut PubSubFacade<C, M> {
        &mut self.facade
    }
}
