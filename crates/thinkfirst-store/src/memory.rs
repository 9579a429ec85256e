//! In-process counter store

use crate::error::StoreError;
use crate::store::{CounterStore, Subscribers};
use crate::types::Counters;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::mpsc::Receiver;
use std::sync::Mutex;

/// Counters held in memory only. Used for ephemeral hosts and tests; can be
/// told to fail a number of upcoming writes.
#[derive(Debug, Default)]
pub struct MemoryCounterStore {
    counters: Mutex<Counters>,
    failing_writes: AtomicUsize,
    subscribers: Subscribers,
}

impl MemoryCounterStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_counters(counters: Counters) -> Self {
        Self {
            counters: Mutex::new(counters),
            ..Self::default()
        }
    }

    /// Make the next `count` calls to `update` fail without writing
    pub fn fail_next_writes(&self, count: usize) {
        self.failing_writes.store(count, Ordering::SeqCst);
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Counters> {
        match self.counters.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

impl CounterStore for MemoryCounterStore {
    fn load(&self) -> Result<Counters, StoreError> {
        Ok(*self.lock())
    }

    fn update(&self, apply: &dyn Fn(Counters) -> Counters) -> Result<Counters, StoreError> {
        let updated = {
            let mut guard = self.lock();
            let pending = self.failing_writes.load(Ordering::SeqCst);
            if pending > 0 {
                self.failing_writes.store(pending - 1, Ordering::SeqCst);
                return Err(StoreError::Unavailable("injected write failure".to_string()));
            }
            *guard = apply(*guard);
            *guard
        };

        self.subscribers.notify(updated);
        Ok(updated)
    }

    fn subscribe(&self) -> Receiver<Counters> {
        self.subscribers.subscribe()
    }
}
