//! Durable counters for completed reflection blocks

mod error;
mod io;
mod json_store;
mod memory;
mod paths;
mod store;
mod types;

pub use error::StoreError;
pub use io::{atomic_write, read_json};
pub use json_store::JsonCounterStore;
pub use memory::MemoryCounterStore;
pub use paths::{Paths, HOME_ENV};
pub use store::{CounterStore, Subscribers};
pub use types::Counters;
