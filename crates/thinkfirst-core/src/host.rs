//! Capabilities the tracker consumes from its host environment

use crate::error::DeliveryError;
use crate::messages::OverlayMessage;
use crate::types::{TabId, TabInfo};
use std::sync::atomic::{AtomicI64, Ordering};

/// Wall-clock source in epoch milliseconds
pub trait Clock: Send + Sync {
    fn now_ms(&self) -> i64;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_ms(&self) -> i64 {
        chrono::Utc::now().timestamp_millis()
    }
}

/// Clock that only moves when told to
#[derive(Debug, Default)]
pub struct ManualClock {
    now: AtomicI64,
}

impl ManualClock {
    pub fn new(start_ms: i64) -> Self {
        Self {
            now: AtomicI64::new(start_ms),
        }
    }

    pub fn set(&self, now_ms: i64) {
        self.now.store(now_ms, Ordering::SeqCst);
    }

    pub fn advance(&self, delta_ms: i64) {
        self.now.fetch_add(delta_ms, Ordering::SeqCst);
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> i64 {
        self.now.load(Ordering::SeqCst)
    }
}

/// Pushes messages into a tab's content context (fire-and-forget)
pub trait TabMessenger {
    fn send_to_tab(&mut self, tab_id: TabId, message: &OverlayMessage) -> Result<(), DeliveryError>;
}

/// Enumerates currently open tabs
pub trait TabSource {
    fn open_tabs(&self) -> Vec<TabInfo>;
}

impl TabSource for [TabInfo] {
    fn open_tabs(&self) -> Vec<TabInfo> {
        self.to_vec()
    }
}

impl TabSource for Vec<TabInfo> {
    fn open_tabs(&self) -> Vec<TabInfo> {
        self.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manual_clock() {
        let clock = ManualClock::new(100);
        assert_eq!(clock.now_ms(), 100);
        clock.advance(50);
        assert_eq!(clock.now_ms(), 150);
        clock.set(10);
        assert_eq!(clock.now_ms(), 10);
    }

    #[test]
    fn test_system_clock_is_epoch_ms() {
        // 2020-01-01 in epoch milliseconds
        assert!(SystemClock.now_ms() > 1_577_836_800_000);
    }
}
