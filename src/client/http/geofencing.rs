use log::debug;

use super::rest::RestClient;
use super::HttpClientConfig;
use crate::client::{GeofencingClient, ManagementError};
use crate::models::{
    SubscribeToUasZonesReply, SubscriptionUpdate, UasZoneSubscriptionReply, UasZonesFilter,
};

/// Blocking client of the geofencing service subscription API.
pub struct HttpGeofencingClient {
    rest: RestClient,
}

impl HttpGeofencingClient {
    pub fn new(config: HttpClientConfig) -> Result<Self, ManagementError> {
        Ok(Self {
            rest: RestClient::new(config)?,
        })
    }

    pub fn config(&self) -> &HttpClientConfig {
        self.rest.config()
    }
}

impl GeofencingClient for HttpGeofencingClient {
    fn post_subscription(
        &self,
        uas_zones_filter: &UasZonesFilter,
    ) -> Result<SubscribeToUasZonesReply, ManagementError> {
        debug!("POST subscriptions/ regions {:?}", uas_zones_filter.regions);
        self.rest.post_json("subscriptions/", uas_zones_filter)
    }

    fn put_subscription(
        &self,
        subscription_id: &str,
        update: &SubscriptionUpdate,
    ) -> Result<(), ManagementError> {
        self.rest
            .put_json(&format!("subscriptions/{}", subscription_id), update)
    }

    fn get_subscription_by_id(
        &self,
        subscription_id: &str,
    ) -> Result<UasZoneSubscriptionReply, ManagementError> {
        self.rest
            .get_json(&format!("subscriptions/{}", subscription_id))
    }

    fn delete_subscription_by_id(&self, subscription_id: &str) -> Result<(), ManagementError> {
        self.rest
            .delete(&format!("subscriptions/{}", subscription_id))
    }
}
