//! End-to-end tests over the in-memory broker and services.
//!
//! - Publisher and subscriber façades sharing one broker
//! - Paused subscriptions under the in-memory broker contract
//! - Periodic producers following the container lifecycle
//! - Geofencing zone updates

#![cfg(feature = "in-memory")]

mod support;
