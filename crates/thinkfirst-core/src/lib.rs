//! Per-tab reflection sessions, wire messages and the stats summary

mod config;
mod error;
mod host;
mod messages;
mod stats;
mod tracker;
mod types;

pub use config::{Config, BLOCK_DURATION_MS, MINUTES_PER_COMPLETION, WATCHED_DESTINATIONS};
pub use error::{DeliveryError, TrackerError};
pub use host::{Clock, ManualClock, SystemClock, TabMessenger, TabSource};
pub use messages::{CompletionAck, OverlayMessage, ShowAck, StatusResponse, TrackerRequest, TrackerResponse};
pub use stats::{
    format_time, motivation_message, MotivationBracket, StatsDisplay, StatsSummary, StatsViewer,
    MOTIVATION_BRACKETS,
};
pub use tracker::{NavigationOutcome, SessionTracker};
pub use types::{Session, TabId, TabInfo};
