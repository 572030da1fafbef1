//! Producer handler publishing into an [`InMemoryBroker`].

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex, RwLock};
use std::time::Duration;

use log::debug;

use super::broker::InMemoryBroker;
use super::ticker::Ticker;
use super::InMemoryHandler;
use crate::container::{ContainerError, MessageProducerFn, Producer};

#[derive(Clone)]
struct Registration {
    producer: MessageProducerFn,
    interval: Option<Duration>,
}

/// Producer role over an [`InMemoryBroker`].
///
/// Triggered messages are published on the broker under the producer's
/// name, which is the topic name. The message subject is overwritten with
/// that name and an empty id is replaced by `<name>-<sequence>`.
///
/// Cloning shares the registrations; periodic producers hold a clone.
#[derive(Clone)]
pub struct InMemoryProducer {
    broker: InMemoryBroker,
    producers: Arc<RwLock<HashMap<String, Registration>>>,
    tickers: Arc<Mutex<HashMap<String, Ticker>>>,
    running: Arc<AtomicBool>,
    sequence: Arc<AtomicU64>,
}

impl InMemoryProducer {
    pub fn new(broker: InMemoryBroker) -> Self {
        Self {
            broker,
            producers: Arc::new(RwLock::new(HashMap::new())),
            tickers: Arc::new(Mutex::new(HashMap::new())),
            running: Arc::new(AtomicBool::new(false)),
            sequence: Arc::new(AtomicU64::new(0)),
        }
    }

    pub fn broker(&self) -> &InMemoryBroker {
        &self.broker
    }

    /// Names with a registered producer, sorted.
    pub fn producer_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .producers
            .read()
            .map(|producers| producers.keys().cloned().collect())
            .unwrap_or_default();
        names.sort();
        names
    }

    /// Names with a running periodic thread, sorted.
    pub fn periodic_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .tickers
            .lock()
            .map(|tickers| tickers.keys().cloned().collect())
            .unwrap_or_default();
        names.sort();
        names
    }

    fn start_ticker(&self, name: &str, interval: Duration) -> Result<(), ContainerError> {
        let ticker = Ticker::spawn(self.clone(), name.to_string(), interval);
        let previous = self
            .tickers
            .lock()
            .map_err(|_| ContainerError::LockPoisoned("start_ticker"))?
            .insert(name.to_string(), ticker);
        if let Some(previous) = previous {
            previous.stop();
        }
        Ok(())
    }

    fn stop_ticker(&self, name: &str) -> Result<(), ContainerError> {
        let ticker = self
            .tickers
            .lock()
            .map_err(|_| ContainerError::LockPoisoned("stop_ticker"))?
            .remove(name);
        if let Some(ticker) = ticker {
            ticker.stop();
        }
        Ok(())
    }
}

impl Producer for InMemoryProducer {
    fn add_message_producer(
        &self,
        name: &str,
        producer: MessageProducerFn,
        interval: Option<Duration>,
    ) -> Result<(), ContainerError> {
        let replaced = self
            .producers
            .write()
            .map_err(|_| ContainerError::LockPoisoned("add_message_producer"))?
            .insert(name.to_string(), Registration { producer, interval })
            .is_some();
        if replaced {
            debug!("replaced message producer for {}", name);
        }

        if self.running.load(Ordering::SeqCst) {
            match interval {
                Some(interval) => self.start_ticker(name, interval)?,
                None => self.stop_ticker(name)?,
            }
        }
        Ok(())
    }

    fn trigger_message(&self, name: &str) -> Result<(), ContainerError> {
        if !self.running.load(Ordering::SeqCst) {
            return Err(ContainerError::NotRunning);
        }

        let producer = self
            .producers
            .read()
            .map_err(|_| ContainerError::LockPoisoned("trigger_message"))?
            .get(name)
            .map(|registration| Arc::clone(&registration.producer))
            .ok_or_else(|| ContainerError::UnknownProducer(name.to_string()))?;

        let mut message = producer();
        message.subject = name.to_string();
        if message.id.is_empty() {
            let sequence = self.sequence.fetch_add(1, Ordering::SeqCst) + 1;
            message.id = format!("{}-{}", name, sequence);
        }

        self.broker.publish(name, message)?;
        Ok(())
    }
}

impl InMemoryHandler for InMemoryProducer {
    fn on_start(&self) -> Result<(), ContainerError> {
        self.running.store(true, Ordering::SeqCst);

        let periodic: Vec<(String, Duration)> = self
            .producers
            .read()
            .map_err(|_| ContainerError::LockPoisoned("on_start"))?
            .iter()
            .filter_map(|(name, r)| r.interval.map(|interval| (name.clone(), interval)))
            .collect();

        for (name, interval) in periodic {
            self.start_ticker(&name, interval)?;
        }
        Ok(())
    }

    fn on_stop(&self) -> Result<(), ContainerError> {
        let tickers: Vec<(String, Ticker)> = self
            .tickers
            .lock()
            .map_err(|_| ContainerError::LockPoisoned("on_stop"))?
            .drain()
            .collect();

        for (name, ticker) in tickers {
            let stats = ticker.stop();
            debug!(
                "periodic producer {} stopped after {} message(s), {} failure(s)",
                name, stats.messages_sent, stats.messages_failed
            );
        }

        self.running.store(false, Ordering::SeqCst);
        Ok(())
    }
}
