//! Geofencing subscriber façade.

use pubsub_facades::{Facade, MessagingContainer, UasZonesFilter};

use crate::support::{self, Geofencing};

fn started() -> (Geofencing, support::CallLog) {
    let (mut geofencing, log) = support::geofencing();
    geofencing.start().unwrap();
    log.clear();
    (geofencing, log)
}

// ============================================================================
// Test 1: subscribe takes id and queue verbatim from the reply
// ============================================================================

#[test]
fn subscribe_uses_reply_without_lookup() {
    let (geofencing, log) = started();

    let subscription = geofencing
        .subscribe(&UasZonesFilter::for_regions([3, 4]), |_| {})
        .unwrap();

    assert_eq!(subscription.id, "gs-1");
    assert_eq!(subscription.queue, "geo-queue-1");
    assert_eq!(
        log.calls(),
        vec!["post_subscription:[3, 4]", "attach:geo-queue-1"]
    );
}

// ============================================================================
// Test 2: pause and resume send partial updates keyed by id
// ============================================================================

#[test]
fn pause_and_resume_send_partial_updates() {
    let (geofencing, log) = started();
    let subscription = geofencing
        .subscribe(&UasZonesFilter::default(), |_| {})
        .unwrap();
    log.clear();

    geofencing.pause(&subscription.id).unwrap();
    geofencing.resume(&subscription.id).unwrap();

    assert_eq!(
        log.calls(),
        vec![
            "put_subscription:gs-1:active=Some(false)",
            "put_subscription:gs-1:active=Some(true)",
        ]
    );
    assert!(geofencing.container().handler().is_attached("geo-queue-1"));
}

// ============================================================================
// Test 3: unsubscribe fetches, deletes, then detaches the fetched queue
// ============================================================================

#[test]
fn unsubscribe_detaches_queue_from_fetch() {
    let (geofencing, log) = started();
    let subscription = geofencing
        .subscribe(&UasZonesFilter::default(), |_| {})
        .unwrap();
    *geofencing.client().stored_queue.lock().unwrap() = "moved-queue".to_string();
    log.clear();

    geofencing.unsubscribe(&subscription.id).unwrap();

    assert_eq!(
        log.calls(),
        vec![
            "get_subscription_by_id:gs-1",
            "delete_subscription_by_id:gs-1",
            "detach:moved-queue",
        ]
    );
}

// ============================================================================
// Test 4: preload attaches without any service call
// ============================================================================

#[test]
fn preload_attaches_without_service_call() {
    let (geofencing, log) = started();

    geofencing
        .preload_queue_message_consumer("provisioned", |_| {})
        .unwrap();

    assert_eq!(log.calls(), vec!["attach:provisioned"]);
    assert!(geofencing.container().handler().is_attached("provisioned"));
}
