//! Management clients - the control plane of the façades.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                 Facades (publisher / subscriber)             │
//! └──────────────────────────────────────────────────────────────┘
//!                 │                               │
//!                 ▼                               ▼
//! ┌──────────────────────────────┐ ┌─────────────────────────────┐
//! │  SubscriptionManagerClient   │ │      GeofencingClient       │
//! │  topics / subscriptions      │ │  UAS zone filter subs       │
//! └──────────────────────────────┘ └─────────────────────────────┘
//!          │              │                 │              │
//!          ▼              ▼                 ▼              ▼
//!    ┌───────────┐  ┌───────────┐    ┌───────────┐  ┌───────────┐
//!    │ InMemory  │  │   Http    │    │ InMemory  │  │   Http    │
//!    └───────────┘  └───────────┘    └───────────┘  └───────────┘
//! ```

mod error;
mod geofencing;
mod subscription_manager;

#[cfg(feature = "in-memory")]
mod in_memory;

#[cfg(feature = "http")]
mod http;

pub use error::ManagementError;
pub use geofencing::GeofencingClient;
pub use subscription_manager::SubscriptionManagerClient;

#[cfg(feature = "in-memory")]
pub use in_memory::{InMemoryGeofencingService, InMemorySubscriptionManager};

#[cfg(feature = "http")]
pub use http::{HttpClientConfig, HttpGeofencingClient, HttpSubscriptionManagerClient};
