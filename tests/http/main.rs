//! REST client tests (requires the "http" and "in-memory" features).
//!
//! Starts axum servers standing in for the management services and
//! exercises the blocking clients, directly and through the façades.

#![cfg(all(feature = "http", feature = "in-memory"))]

mod support;
