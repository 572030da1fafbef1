#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use pubsub_facades::{
    Facade, InMemoryBroker, InMemoryConsumer, InMemoryContainer, InMemoryProducer,
    InMemorySubscriptionManager, Message, TopicPublisher, TopicSubscriber,
};

pub type Publisher = TopicPublisher<InMemoryContainer<InMemoryProducer>, InMemorySubscriptionManager>;
pub type Subscriber =
    TopicSubscriber<InMemoryContainer<InMemoryConsumer>, InMemorySubscriptionManager>;

/// Collects delivered messages.
#[derive(Clone, Default)]
pub struct Inbox(Arc<Mutex<Vec<Message>>>);

impl Inbox {
    pub fn consumer(&self) -> impl Fn(&Message) + Send + Sync + 'static {
        let messages = Arc::clone(&self.0);
        move |message: &Message| messages.lock().unwrap().push(message.clone())
    }

    pub fn payloads(&self) -> Vec<String> {
        self.0
            .lock()
            .unwrap()
            .iter()
            .map(|m| m.payload_str().unwrap_or_default().to_string())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.0.lock().unwrap().len()
    }
}

pub struct Fabric {
    pub broker: InMemoryBroker,
    pub service: InMemorySubscriptionManager,
    pub publisher: Publisher,
    pub subscriber: Subscriber,
}

/// A started publisher and subscriber sharing one broker and one service.
pub fn fabric() -> Fabric {
    let broker = InMemoryBroker::new();
    let service = InMemorySubscriptionManager::with_broker(broker.clone());

    let mut publisher =
        TopicPublisher::new(InMemoryContainer::producer(broker.clone()), service.clone());
    let mut subscriber =
        TopicSubscriber::new(InMemoryContainer::consumer(broker.clone()), service.clone());
    publisher.start().unwrap();
    subscriber.start().unwrap();

    Fabric {
        broker,
        service,
        publisher,
        subscriber,
    }
}

pub fn payload(text: &'static str) -> impl Fn() -> Message + Send + Sync + 'static {
    move || Message::with_string_payload("", "", text)
}
