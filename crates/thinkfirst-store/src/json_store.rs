//! Counters persisted as a JSON document on disk

use crate::error::StoreError;
use crate::io::{atomic_write, read_json};
use crate::paths::Paths;
use crate::store::{CounterStore, Subscribers};
use crate::types::Counters;
use std::path::{Path, PathBuf};
use std::sync::mpsc::Receiver;
use std::sync::Mutex;
use tracing::debug;

pub struct JsonCounterStore {
    path: PathBuf,
    write_lock: Mutex<()>,
    subscribers: Subscribers,
}

impl JsonCounterStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
            subscribers: Subscribers::new(),
        }
    }

    pub fn open(paths: &Paths) -> Self {
        Self::new(paths.counters_file())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read(&self) -> Result<Counters, StoreError> {
        read_json(&self.path)
            .map(Option::unwrap_or_default)
            .map_err(|source| StoreError::Read {
                path: self.path.clone(),
                source,
            })
    }

    fn write(&self, counters: &Counters) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(counters)?;
        atomic_write(&self.path, json.as_bytes()).map_err(|source| StoreError::Write {
            path: self.path.clone(),
            source,
        })
    }
}

impl CounterStore for JsonCounterStore {
    fn load(&self) -> Result<Counters, StoreError> {
        self.read()
    }

    fn update(&self, apply: &dyn Fn(Counters) -> Counters) -> Result<Counters, StoreError> {
        let updated = {
            let _guard = match self.write_lock.lock() {
                Ok(guard) => guard,
                Err(poisoned) => poisoned.into_inner(),
            };
            let updated = apply(self.read()?);
            self.write(&updated)?;
            updated
        };

        debug!(path = %self.path.display(), ?updated, "counters written");
        self.subscribers.notify(updated);
        Ok(updated)
    }

    fn subscribe(&self) -> Receiver<Counters> {
        self.subscribers.subscribe()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn test_load_missing_file_is_zero() {
        let temp = tempfile::TempDir::new().unwrap();
        let store = JsonCounterStore::new(temp.path().join("counters.json"));
        assert_eq!(store.load().unwrap(), Counters::default());
    }

    #[test]
    fn test_update_persists_across_instances() {
        let temp = tempfile::TempDir::new().unwrap();
        let path = temp.path().join("counters.json");

        let store = JsonCounterStore::new(&path);
        store.update(&|c| c.record_completion(42)).unwrap();
        drop(store);

        let reopened = JsonCounterStore::new(&path);
        let counters = reopened.load().unwrap();
        assert_eq!(counters.streak, 1);
        assert_eq!(counters.total_completed, 1);
        assert_eq!(counters.last_completed, Some(42));
    }

    #[test]
    fn test_reads_keys_written_by_other_tools() {
        let temp = tempfile::TempDir::new().unwrap();
        let path = temp.path().join("counters.json");
        std::fs::write(&path, r#"{"streak":9,"totalCompleted":12}"#).unwrap();

        let store = JsonCounterStore::new(&path);
        let counters = store.update(&|c| c.record_completion(1)).unwrap();
        assert_eq!(counters.streak, 10);
        assert_eq!(counters.total_completed, 13);
    }

    #[test]
    fn test_malformed_file_fails_update() {
        let temp = tempfile::TempDir::new().unwrap();
        let path = temp.path().join("counters.json");
        std::fs::write(&path, "garbage").unwrap();

        let store = JsonCounterStore::new(&path);
        let err = store.update(&|c| c.record_completion(1)).unwrap_err();
        assert!(matches!(err, StoreError::Read { .. }));
    }

    #[test]
    fn test_update_notifies_subscribers() {
        let temp = tempfile::TempDir::new().unwrap();
        let store = JsonCounterStore::new(temp.path().join("counters.json"));
        let rx = store.subscribe();

        let written = store.update(&|c| c.record_completion(7)).unwrap();
        assert_eq!(rx.try_recv().unwrap(), written);
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_concurrent_updates_each_count_once() {
        let temp = tempfile::TempDir::new().unwrap();
        let store = Arc::new(JsonCounterStore::new(temp.path().join("counters.json")));

        let handles: Vec<_> = (0..8)
            .map(|i| {
                let store = Arc::clone(&store);
                std::thread::spawn(move || {
                    store.update(&|c| c.record_completion(i)).unwrap();
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        let counters = store.load().unwrap();
        assert_eq!(counters.streak, 8);
        assert_eq!(counters.total_completed, 8);
    }
}
