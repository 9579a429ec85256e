//! Session record and tab descriptors

use serde::{Deserialize, Serialize};

/// Browser tab identifier
pub type TabId = i64;

/// Transient per-tab block state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub tab_id: TabId,
    /// Epoch milliseconds
    pub start_time: i64,
    /// Epoch milliseconds; the wait is over once `now >= end_time`
    pub end_time: i64,
    pub completed: bool,
    pub notes: String,
}

impl Session {
    pub fn start(tab_id: TabId, now_ms: i64, duration_ms: u64) -> Self {
        Self {
            tab_id,
            start_time: now_ms,
            end_time: now_ms.saturating_add(duration_ms as i64),
            completed: false,
            notes: String::new(),
        }
    }

    pub fn is_active(&self) -> bool {
        !self.completed
    }
}

/// An open tab as reported by the host at startup
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TabInfo {
    pub id: Option<TabId>,
    #[serde(default)]
    pub url: Option<String>,
}
