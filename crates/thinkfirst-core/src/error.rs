use crate::types::TabId;
use thinkfirst_store::StoreError;
use thiserror::Error;

/// A message could not reach its target context
#[derive(Error, Debug)]
pub enum DeliveryError {
    #[error("tab {0} has no receiver")]
    NoReceiver(TabId),

    #[error("transport failed: {0}")]
    Transport(String),
}

#[derive(Error, Debug)]
pub enum TrackerError {
    #[error("failed to update counters: {0}")]
    Store(#[from] StoreError),
}
