//! Publish/subscribe façades.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │   TopicPublisher  │  TopicSubscriber  │ GeofencingSubscriber│
//! └─────────────────────────────────────────────────────────────┘
//!                            │
//!                            ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │                  PubSubFacade (per façade)                   │
//! │  - one container + one management client                    │
//! │  - start() / stop() / guarded(op)                           │
//! └─────────────────────────────────────────────────────────────┘
//!          │                                        │
//!          ▼                                        ▼
//! ┌──────────────────────────┐     ┌──────────────────────────────┐
//! │ MessagingContainer        │     │ SubscriptionManagerClient /  │
//! │ Handler: Producer|Consumer│     │ GeofencingClient             │
//! └──────────────────────────┘     └──────────────────────────────┘
//! ```
//!
//! Every operational method goes through [`PubSubFacade::guarded`]: before
//! `start()` it fails with [`FacadeError::NotRunning`] and touches neither
//! collaborator. Topic registration on the publisher is setup and is not
//! gated.

mod base;
mod error;
mod geofencing;
mod publisher;
mod subscriber;

pub use base::{Facade, PubSubFacade};
pub use error::FacadeError;
pub use geofencing::GeofencingSubscriber;
pub use publisher::TopicPublisher;
pub use subscriber::TopicSubscriber;
