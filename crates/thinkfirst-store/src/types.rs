//! Persisted counter record

use serde::{Deserialize, Serialize};

/// Lifetime statistics, stored under the keys `streak`, `totalCompleted`
/// and `lastCompleted`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Counters {
    #[serde(default)]
    pub streak: u64,
    #[serde(default)]
    pub total_completed: u64,
    /// Epoch milliseconds of the most recent completion.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_completed: Option<i64>,
}

impl Counters {
    /// Apply one completion. `streak` has no decay rule and only ever grows.
    pub fn record_completion(self, at_ms: i64) -> Self {
        Self {
            streak: self.streak.saturating_add(1),
            total_completed: self.total_completed.saturating_add(1),
            last_completed: Some(at_ms),
        }
    }
}
