use log::debug;

use super::rest::RestClient;
use super::HttpClientConfig;
use crate::client::{ManagementError, SubscriptionManagerClient};
use crate::models::{Subscription, Topic};

/// Blocking client of the REST subscription-management service.
pub struct HttpSubscriptionManagerClient {
    rest: RestClient,
}

impl HttpSubscriptionManagerClient {
    pub fn new(config: HttpClientConfig) -> Result<Self, ManagementError> {
        Ok(Self {
            rest: RestClient::new(config)?,
        })
    }

    pub fn config(&self) -> &HttpClientConfig {
        self.rest.config()
    }
}

impl SubscriptionManagerClient for HttpSubscriptionManagerClient {
    fn get_topics(&self) -> Result<Vec<Topic>, ManagementError> {
        self.rest.get_json("topics/")
    }

    fn post_topic(&self, topic: &Topic) -> Result<Topic, ManagementError> {
        debug!("POST topics/ {}", topic.name);
        self.rest.post_json("topics/", topic)
    }

    fn post_subscription(
        &self,
        subscription: &Subscription,
    ) -> Result<Subscription, ManagementError> {
        debug!("POST subscriptions/ topic {}", subscription.topic_id);
        self.rest.post_json("subscriptions/", subscription)
    }

    fn put_subscription(
        &self,
        subscription_id: &str,
        subscription: &Subscription,
    ) -> Result<(), ManagementError> {
        self.rest
            .put_json(&format!("subscriptions/{}", subscription_id), subscription)
    }

    fn get_subscription_by_id(
        &self,
        subscription_id: &str,
    ) -> Result<Subscription, ManagementError> {
        self.rest
            .get_json(&format!("subscriptions/{}", subscription_id))
    }

    fn delete_subscription_by_id(&self, subscription_id: &str) -> Result<(), ManagementError> {
        self.rest
            .delete(&format!("subscriptions/{}", subscription_id))
    }
}
