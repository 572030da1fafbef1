//! Records exchanged with the subscription-management and geofencing services.

mod geofencing;
mod subscription;
mod topic;

pub use geofencing::{
    AirspaceVolume, GeofencingSubscription, Point, SubscribeToUasZonesReply, UasZoneSubscription,
    UasZoneSubscriptionReply, UasZonesFilter,
};
pub use subscription::{Subscription, SubscriptionUpdate};
pub use topic::Topic;
