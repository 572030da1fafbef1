//! Gated operations before start and after stop.

use pubsub_facades::{
    Facade, FacadeError, MessagingContainer, Subscription, Topic, UasZonesFilter,
};

use crate::support;

fn assert_not_running<T: std::fmt::Debug>(result: Result<T, FacadeError>) {
    assert!(
        matches!(result, Err(FacadeError::NotRunning)),
        "expected NotRunning, got {:?}",
        result
    );
}

fn sample_subscription() -> Subscription {
    Subscription {
        id: "s1".into(),
        topic_id: "t1".into(),
        queue: "queue-s1".into(),
        active: true,
    }
}

// ============================================================================
// Test 1: Nothing reaches a collaborator before start
// ============================================================================

#[test]
fn publisher_rejects_publish_before_start() {
    let (publisher, log) = support::publisher(vec![Topic::new("t1", "arrivals")]);

    assert_not_running(publisher.publish_topic("arrivals"));
    assert!(log.calls().is_empty());
}

#[test]
fn subscriber_rejects_every_operation_before_start() {
    let (subscriber, log) = support::subscriber(vec![Topic::new("t1", "arrivals")]);

    assert_not_running(subscriber.subscribe("arrivals", |_| {}));
    assert_not_running(subscriber.pause(sample_subscription()));
    assert_not_running(subscriber.resume(sample_subscription()));
    assert_not_running(subscriber.unsubscribe(&sample_subscription()));

    assert!(log.calls().is_empty());
}

#[test]
fn geofencing_rejects_every_operation_before_start() {
    let (geofencing, log) = support::geofencing();

    assert_not_running(geofencing.subscribe(&UasZonesFilter::default(), |_| {}));
    assert_not_running(geofencing.pause("gs-1"));
    assert_not_running(geofencing.resume("gs-1"));
    assert_not_running(geofencing.unsubscribe("gs-1"));
    assert_not_running(geofencing.preload_queue_message_consumer("q", |_| {}));

    assert!(log.calls().is_empty());
}

// ============================================================================
// Test 2: Stop closes the façade again
// ============================================================================

#[test]
fn operations_rejected_after_stop() {
    let (mut subscriber, log) = support::subscriber(vec![Topic::new("t1", "arrivals")]);

    subscriber.start().unwrap();
    assert!(subscriber.is_running());
    subscriber.stop().unwrap();
    assert!(!subscriber.is_running());
    log.clear();

    assert_not_running(subscriber.subscribe("arrivals", |_| {}));
    assert!(log.calls().is_empty());
}

// ============================================================================
// Test 3: Start and stop drive the container
// ============================================================================

#[test]
fn start_and_stop_drive_container_once() {
    let (mut geofencing, log) = support::geofencing();

    geofencing.start().unwrap();
    geofencing.start().unwrap();
    assert!(geofencing.container().is_running());

    geofencing.stop().unwrap();
    geofencing.stop().unwrap();
    assert!(!geofencing.container().is_running());

    assert_eq!(log.calls(), vec!["container.start", "container.stop"]);
}
