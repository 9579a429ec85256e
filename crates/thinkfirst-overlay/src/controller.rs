//! Overlay state machine for one page load

use crate::page::{Clipboard, Page, TrackerLink};
use crate::view::{
    CountdownView, FALLBACK_REMOVE_DELAY_MS, OVERLAY_CONTENT, OVERLAY_ELEMENT_ID, REMOVE_DELAY_MS,
    TOAST_COPIED, TOAST_COPY_FAILED, TOAST_NO_NOTES,
};
use std::sync::Arc;
use thinkfirst_core::{Clock, OverlayMessage, ShowAck};
use tracing::{debug, info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayPhase {
    /// No overlay mounted
    Idle,
    /// Overlay mounted, continue disabled until `end_time`
    Counting { end_time: i64 },
    /// Wait elapsed, continue enabled
    Ready { end_time: i64 },
    /// Continue pressed; overlay goes away at `remove_at`
    Completing { remove_at: i64 },
    /// Terminal for this page load
    Removed,
}

/// Drives the overlay inside a watched page.
///
/// The host calls [`OverlayController::tick`] at least once per second and
/// forwards user and DOM events to the matching `on_*` method.
pub struct OverlayController {
    page: Box<dyn Page>,
    clipboard: Box<dyn Clipboard>,
    tracker: Box<dyn TrackerLink>,
    clock: Arc<dyn Clock>,
    phase: OverlayPhase,
}

impl OverlayController {
    pub fn new(
        page: Box<dyn Page>,
        clipboard: Box<dyn Clipboard>,
        tracker: Box<dyn TrackerLink>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            page,
            clipboard,
            tracker,
            clock,
            phase: OverlayPhase::Idle,
        }
    }

    pub fn phase(&self) -> OverlayPhase {
        self.phase
    }

    /// Content load: watch for removals, then recover any block the push missed
    pub fn attach(&mut self) -> OverlayPhase {
        self.page.observe_body_children();

        match self.tracker.check_status() {
            Ok(status) if status.should_block => match status.end_time {
                Some(end_time) => self.show(end_time),
                None => warn!("status reported a block without an end time"),
            },
            Ok(_) => debug!("no active block for this tab"),
            Err(err) => warn!(error = %err, "status query failed"),
        }
        self.phase
    }

    pub fn on_message(&mut self, message: &OverlayMessage) -> ShowAck {
        match message {
            OverlayMessage::ShowBlock { end_time, .. } => self.show(*end_time),
        }
        ShowAck { received: true }
    }

    /// Mount the overlay counting down to `end_time`; no-op while one is mounted
    pub fn show(&mut self, end_time: i64) {
        if self.page.has_element(OVERLAY_ELEMENT_ID) {
            debug!(end_time, "overlay already present");
            return;
        }

        self.page.mount_overlay(&OVERLAY_CONTENT);
        self.phase = OverlayPhase::Counting { end_time };
        self.refresh_countdown();
    }

    pub fn tick(&mut self) {
        match self.phase {
            OverlayPhase::Counting { .. } => self.refresh_countdown(),
            OverlayPhase::Completing { remove_at } if self.clock.now_ms() >= remove_at => {
                self.page.remove_overlay();
                self.phase = OverlayPhase::Removed;
            }
            _ => {}
        }
    }

    /// Continue pressed. Returns false while the button is still disabled.
    pub fn on_continue(&mut self) -> bool {
        if !matches!(self.phase, OverlayPhase::Ready { .. }) {
            return false;
        }

        let notes = self.page.notes().trim().to_string();
        let delay = if notes.is_empty() {
            self.page.show_toast(TOAST_NO_NOTES);
            REMOVE_DELAY_MS
        } else {
            match self.clipboard.write_text(&notes) {
                Ok(()) => {
                    self.page.show_toast(TOAST_COPIED);
                    REMOVE_DELAY_MS
                }
                Err(err) => {
                    warn!(error = %err, "could not copy notes");
                    self.page.show_toast(TOAST_COPY_FAILED);
                    self.page.select_notes();
                    FALLBACK_REMOVE_DELAY_MS
                }
            }
        };

        if let Err(err) = self.tracker.complete(&notes) {
            warn!(error = %err, "completion message not delivered");
        }

        let remove_at = self.clock.now_ms() + delay;
        info!(remove_at, "block completed");
        self.phase = OverlayPhase::Completing { remove_at };
        true
    }

    /// Children of the page body were removed
    pub fn on_children_removed(&mut self, removed_ids: &[&str]) {
        if !removed_ids.contains(&OVERLAY_ELEMENT_ID) {
            return;
        }

        match self.phase {
            OverlayPhase::Counting { end_time } if self.clock.now_ms() < end_time => {
                if !self.page.has_element(OVERLAY_ELEMENT_ID) {
                    warn!(end_time, "overlay removed before the wait elapsed, restoring");
                    self.page.mount_overlay(&OVERLAY_CONTENT);
                    self.refresh_countdown();
                }
            }
            OverlayPhase::Counting { .. }
            | OverlayPhase::Ready { .. }
            | OverlayPhase::Completing { .. } => {
                self.phase = OverlayPhase::Removed;
            }
            OverlayPhase::Idle | OverlayPhase::Removed => {}
        }
    }

    fn refresh_countdown(&mut self) {
        let OverlayPhase::Counting { end_time } = self.phase else {
            return;
        };

        let now = self.clock.now_ms();
        if now >= end_time {
            self.page.render_countdown(&CountdownView::ready());
            self.phase = OverlayPhase::Ready { end_time };
        } else {
            self.page
                .render_countdown(&CountdownView::counting(end_time - now));
        }
    }
}
