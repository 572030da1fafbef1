//! Topic subscription-management client trait.

use super::ManagementError;
use crate::models::{Subscription, Topic};

/// Client of the REST subscription-management service.
///
/// Implementations might include:
/// - `InMemorySubscriptionManager` - For testing and single-process scenarios
/// - `HttpSubscriptionManagerClient` - For the REST service (`http` feature)
pub trait SubscriptionManagerClient: Send + Sync {
    /// List every topic known to the service.
    fn get_topics(&self) -> Result<Vec<Topic>, ManagementError>;

    /// Create a topic. The reply carries the assigned id.
    fn post_topic(&self, topic: &Topic) -> Result<Topic, ManagementError>;

    /// Create a subscription. The reply carries the assigned id and queue.
    fn post_subscription(&self, subscription: &Subscription)
        -> Result<Subscription, ManagementError>;

    /// Replace the stored subscription record.
    fn put_subscription(
        &self,
        subscription_id: &str,
        subscription: &Subscription,
    ) -> Result<(), ManagementError>;

    /// Fetch a subscription record.
    fn get_subscription_by_id(&self, subscription_id: &str)
        -> Result<Subscription, ManagementError>;

    /// Delete a subscription record.
    fn delete_subscription_by_id(&self, subscription_id: &str) -> Result<(), ManagementError>;
}
