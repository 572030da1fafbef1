//! Publish/subscribe façades over a subscription-management service and a
//! messaging container.
//!
//! Application code builds a façade from a container and a management
//! client, starts it, and then publishes or subscribes without touching the
//! transport or the REST API directly.
//!
//! ```
//! use std::sync::{Arc, Mutex};
//! use pubsub_facades::{
//!     Facade, InMemoryBroker, InMemoryContainer, InMemorySubscriptionManager, Message,
//!     TopicPublisher, TopicSubscriber,
//! };
//!
//! let broker = InMemoryBroker::new();
//! let service = InMemorySubscriptionManager::with_broker(broker.clone());
//!
//! let mut publisher =
//!     TopicPublisher::new(InMemoryContainer::producer(broker.clone()), service.clone());
//! let mut subscriber = TopicSubscriber::new(InMemoryContainer::consumer(broker), service);
//!
//! publisher
//!     .add_topic("arrivals", || Message::with_string_payload("", "", "EHAM"), None)
//!     .unwrap();
//! publisher.start().unwrap();
//! subscriber.start().unwrap();
//!
//! let received = Arc::new(Mutex::new(Vec::new()));
//! let sink = Arc::clone(&received);
//! let subscription = subscriber
//!     .subscribe("arrivals", move |m: &Message| sink.lock().unwrap().push(m.clone()))
//!     .unwrap();
//!
//! publisher.publish_topic("arrivals").unwrap();
//! assert_eq!(received.lock().unwrap().len(), 1);
//!
//! subscriber.unsubscribe(&subscription).unwrap();
//! ```

pub mod client;
pub mod container;
pub mod facade;
mod message;
pub mod models;

pub use client::{GeofencingClient, ManagementError, SubscriptionManagerClient};
pub use container::{
    Consumer, ContainerError, MessageConsumerFn, MessageProducerFn, MessagingContainer, Producer,
};
pub use facade::{
    Facade, FacadeError, GeofencingSubscriber, PubSubFacade, TopicPublisher, TopicSubscriber,
};
pub use message::Message;
pub use models::{
    GeofencingSubscription, Subscription, SubscriptionUpdate, Topic, UasZonesFilter,
};

#[cfg(feature = "in-memory")]
pub use client::{InMemoryGeofencingService, InMemorySubscriptionManager};
#[cfg(feature = "in-memory")]
pub use container::{
    InMemoryBroker, InMemoryConsumer, InMemoryContainer, InMemoryHandler, InMemoryProducer,
};

#[cfg(feature = "http")]
pub use client::{HttpClientConfig, HttpGeofencingClient, HttpSubscriptionManagerClient};
