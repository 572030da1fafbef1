//! In-memory management services for testing and single-process scenarios.
//!
//! Both services keep their records behind `Arc<RwLock<...>>`, so cloning
//! yields another handle to the same store. When built over an
//! [`InMemoryBroker`](crate::InMemoryBroker) they also maintain the broker
//! routes their records describe.

mod geofencing;
mod subscription_manager;

pub use geofencing::InMemoryGeofencingService;
pub use subscription_manager::InMemorySubscriptionManager;
