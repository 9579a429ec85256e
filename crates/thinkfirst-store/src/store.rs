//! Counter store trait and change subscriptions

use crate::error::StoreError;
use crate::types::Counters;
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::Mutex;

/// Durable key-value store holding the lifetime counters.
///
/// `update` is a single read-modify-write: implementations serialize it so
/// concurrent completions each add exactly one.
pub trait CounterStore: Send + Sync {
    /// Read the current counters (zeroed when nothing has been stored yet)
    fn load(&self) -> Result<Counters, StoreError>;

    /// Atomically apply `apply` to the stored counters and persist the result
    fn update(&self, apply: &dyn Fn(Counters) -> Counters) -> Result<Counters, StoreError>;

    /// Receive the new counters after every successful write
    fn subscribe(&self) -> Receiver<Counters>;
}

/// Fan-out of change notifications; disconnected receivers are pruned.
#[derive(Debug, Default)]
pub struct Subscribers {
    senders: Mutex<Vec<Sender<Counters>>>,
}

impl Subscribers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&self) -> Receiver<Counters> {
        let (tx, rx) = mpsc::channel();
        self.lock().push(tx);
        rx
    }

    pub fn notify(&self, counters: Counters) {
        self.lock().retain(|tx| tx.send(counters).is_ok());
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<Sender<Counters>>> {
        match self.senders.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}
