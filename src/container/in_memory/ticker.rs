//! Background thread firing a producer at a fixed interval.

use std::sync::mpsc::{channel, RecvTimeoutError, Sender};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use log::warn;

use super::producer::InMemoryProducer;
use crate::container::Producer;

/// Statistics from a ticker thread.
#[derive(Debug, Default, Clone)]
pub(crate) struct TickerStats {
    /// Number of messages triggered.
    pub(crate) messages_sent: usize,
    /// Number of triggers that failed.
    pub(crate) messages_failed: usize,
}

/// A background thread that triggers one named producer every interval
/// until stopped.
pub(crate) struct Ticker {
    stop_tx: Sender<()>,
    handle: Option<JoinHandle<TickerStats>>,
}

impl Ticker {
    pub(crate) fn spawn(producer: InMemoryProducer, name: String, interval: Duration) -> Self {
        let (stop_tx, stop_rx) = channel();

        let handle = thread::spawn(move || {
            let mut stats = TickerStats::default();

            loop {
                match stop_rx.recv_timeout(interval) {
                    Ok(()) | Err(RecvTimeoutError::Disconnected) => break,
                    Err(RecvTimeoutError::Timeout) => {}
                }

                match producer.trigger_message(&name) {
                    Ok(()) => stats.messages_sent += 1,
                    Err(e) => {
                        warn!("periodic producer {} failed: {}", name, e);
                        stats.messages_failed += 1;
                    }
                }
            }

            stats
        });

        Self {
            stop_tx,
            handle: Some(handle),
        }
    }

    /// Signal the thread to stop and wait for it to finish.
    pub(crate) fn stop(mut self) -> TickerStats {
        let _ = self.stop_tx.send(());
        match self.handle.take() {
            Some(handle) => handle.join().unwrap_or_default(),
            None => TickerStats::default(),
        }
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        let _ = self.stop_tx.send(());
    }
}
