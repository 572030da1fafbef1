//! Blocking REST clients for the management services (requires "http" feature).
//!
//! ```ignore
//! use pubsub_facades::{HttpClientConfig, HttpSubscriptionManagerClient};
//!
//! let config = HttpClientConfig::new("https://sm.example.org/api")
//!     .with_credentials("swim", "secret");
//! let client = HttpSubscriptionManagerClient::new(config)?;
//! let topics = client.get_topics()?;
//! ```

mod config;
mod geofencing;
mod rest;
mod subscription_manager;

pub use config::HttpClientConfig;
pub use geofencing::HttpGeofencingClient;
pub use subscription_manager::HttpSubscriptionManagerClient;
