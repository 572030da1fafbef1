//! Geofencing service records.
//!
//! The service speaks camelCase JSON. The façade treats the filter as opaque;
//! only the HTTP client looks inside.

use serde::{Deserialize, Serialize};

/// A WGS84 position.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub lat: f64,
    pub lon: f64,
}

impl Point {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }
}

/// Horizontal polygon with vertical limits in metres.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AirspaceVolume {
    pub polygon: Vec<Point>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lower_limit_in_m: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub upper_limit_in_m: Option<i32>,
}

/// Query describing the UAS zones a subscriber is interested in.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UasZonesFilter {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub airspace_volume: Option<AirspaceVolume>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub regions: Vec<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_after_date_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,
}

impl UasZonesFilter {
    pub fn for_regions(regions: impl IntoIterator<Item = u32>) -> Self {
        Self {
            regions: regions.into_iter().collect(),
            ..Self::default()
        }
    }

    pub fn with_airspace_volume(mut self, volume: AirspaceVolume) -> Self {
        self.airspace_volume = Some(volume);
        self
    }

    pub fn between(mut self, start: impl Into<String>, end: impl Into<String>) -> Self {
        self.start_date_time = Some(start.into());
        self.end_date_time = Some(end.into());
        self
    }
}

/// Reply to a subscription request.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscribeToUasZonesReply {
    #[serde(rename = "subscriptionID")]
    pub subscription_id: String,
    pub publication_location: String,
}

/// Stored state of a geofencing subscription.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UasZoneSubscription {
    #[serde(rename = "subscriptionID")]
    pub subscription_id: String,
    pub publication_location: String,
    pub active: bool,
    #[serde(rename = "UASZonesFilter", default)]
    pub uas_zones_filter: UasZonesFilter,
}

/// Reply to a fetch-by-id request.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UasZoneSubscriptionReply {
    pub uas_zone_subscription: UasZoneSubscription,
}

/// Handle returned to callers of the geofencing façade.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct GeofencingSubscription {
    pub id: String,
    pub queue: String,
}

impl From<SubscribeToUasZonesReply> for GeofencingSubscription {
    fn from(reply: SubscribeToUasZonesReply) -> Self {
        Self {
            id: reply.subscription_id,
            queue: reply.publication_location,
        }
    }
}
