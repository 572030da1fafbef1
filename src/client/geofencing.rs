//! Geofencing service client trait.

use super::ManagementError;
use crate::models::{
    SubscribeToUasZonesReply, SubscriptionUpdate, UasZoneSubscriptionReply, UasZonesFilter,
};

/// Client of the geofencing service subscription API.
///
/// Unlike the topic-based service, the reply to a subscription request
/// already names the queue (publication location) to consume from.
pub trait GeofencingClient: Send + Sync {
    /// Subscribe to UAS zone updates matching the filter.
    fn post_subscription(
        &self,
        uas_zones_filter: &UasZonesFilter,
    ) -> Result<SubscribeToUasZonesReply, ManagementError>;

    /// Apply a partial update to a subscription.
    fn put_subscription(
        &self,
        subscription_id: &str,
        update: &SubscriptionUpdate,
    ) -> Result<(), ManagementError>;

    /// Fetch a subscription record.
    fn get_subscription_by_id(
        &self,
        subscription_id: &str,
    ) -> Result<UasZoneSubscriptionReply, ManagementError>;

    /// Delete a subscription record.
    fn delete_subscription_by_id(&self, subscription_id: &str) -> Result<(), ManagementError>;
}
