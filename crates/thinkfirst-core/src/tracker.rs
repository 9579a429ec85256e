//! Per-tab session tracking and completion accounting

use crate::config::Config;
use crate::error::TrackerError;
use crate::host::{Clock, TabMessenger, TabSource};
use crate::messages::{CompletionAck, OverlayMessage, StatusResponse, TrackerRequest, TrackerResponse};
use crate::types::{Session, TabId};
use std::collections::HashMap;
use std::sync::Arc;
use thinkfirst_store::{CounterStore, Counters};
use tracing::{debug, error, info, warn};

/// Tab status that marks the start of a new document load
const LOADING_STATUS: &str = "loading";

/// What a navigation did to the tab's session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationOutcome {
    /// URL is not a watched destination
    Ignored,
    /// A fresh session was created
    Started { end_time: i64 },
    /// The existing incomplete session was shown again
    Reshown { end_time: i64 },
}

/// Owns the tab → session table.
///
/// The table lives only in memory; after a restart it is rebuilt with
/// [`SessionTracker::rearm_open_tabs`].
pub struct SessionTracker {
    config: Config,
    sessions: HashMap<TabId, Session>,
    messenger: Box<dyn TabMessenger>,
    store: Arc<dyn CounterStore>,
    clock: Arc<dyn Clock>,
}

impl SessionTracker {
    pub fn new(
        config: Config,
        messenger: Box<dyn TabMessenger>,
        store: Arc<dyn CounterStore>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            config,
            sessions: HashMap::new(),
            messenger,
            store,
            clock,
        }
    }

    pub fn session(&self, tab_id: TabId) -> Option<&Session> {
        self.sessions.get(&tab_id)
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    pub fn is_watched_destination(&self, url: &str) -> bool {
        self.config.is_watched(url)
    }

    /// Re-arm blocking for every open tab already on a watched destination
    pub fn rearm_open_tabs<S: TabSource + ?Sized>(&mut self, source: &S) -> usize {
        let mut rearmed = 0;
        for tab in source.open_tabs() {
            let (Some(tab_id), Some(url)) = (tab.id, tab.url.as_deref()) else {
                continue;
            };
            if self.on_navigation_start(tab_id, url) != NavigationOutcome::Ignored {
                rearmed += 1;
            }
        }
        info!(rearmed, "re-armed open tabs");
        rearmed
    }

    /// Tab update event; only a `loading` status begins a navigation
    pub fn on_tab_updated(&mut self, tab_id: TabId, status: &str, url: Option<&str>) -> NavigationOutcome {
        match url {
            Some(url) if status == LOADING_STATUS => self.on_navigation_start(tab_id, url),
            _ => NavigationOutcome::Ignored,
        }
    }

    pub fn on_navigation_start(&mut self, tab_id: TabId, url: &str) -> NavigationOutcome {
        if !self.is_watched_destination(url) {
            return NavigationOutcome::Ignored;
        }

        let outcome = match self.sessions.get(&tab_id) {
            Some(session) if session.is_active() => NavigationOutcome::Reshown {
                end_time: session.end_time,
            },
            _ => {
                let session = Session::start(tab_id, self.clock.now_ms(), self.config.block_duration_ms);
                let end_time = session.end_time;
                self.sessions.insert(tab_id, session);
                debug!(tab_id, end_time, "started block session");
                NavigationOutcome::Started { end_time }
            }
        };

        let end_time = match outcome {
            NavigationOutcome::Started { end_time } | NavigationOutcome::Reshown { end_time } => end_time,
            NavigationOutcome::Ignored => return outcome,
        };
        self.push_show_block(tab_id, end_time);
        outcome
    }

    pub fn on_status_query(&self, tab_id: TabId) -> StatusResponse {
        match self.sessions.get(&tab_id) {
            Some(session) if session.is_active() => {
                StatusResponse::blocking(session.end_time, self.config.block_duration_ms)
            }
            _ => StatusResponse::clear(),
        }
    }

    /// Mark the tab's session completed and add one completion to the
    /// durable counters. A failed write is retried once.
    pub fn on_completion(&mut self, tab_id: TabId, notes: String) -> Result<Counters, TrackerError> {
        match self.sessions.get_mut(&tab_id) {
            Some(session) => {
                session.completed = true;
                session.notes = notes;
            }
            None => debug!(tab_id, "completion for tab without a session"),
        }

        let now = self.clock.now_ms();
        let apply = move |counters: Counters| counters.record_completion(now);
        let counters = match self.store.update(&apply) {
            Ok(counters) => counters,
            Err(err) => {
                warn!(tab_id, error = %err, "counter update failed, retrying once");
                self.store.update(&apply).map_err(|err| {
                    error!(tab_id, error = %err, "counter update failed twice, completion not recorded");
                    err
                })?
            }
        };

        info!(tab_id, streak = counters.streak, "block completed");
        Ok(counters)
    }

    pub fn on_tab_closed(&mut self, tab_id: TabId) {
        if self.sessions.remove(&tab_id).is_some() {
            debug!(tab_id, "dropped session for closed tab");
        }
    }

    pub fn handle_request(&mut self, tab_id: TabId, request: TrackerRequest) -> TrackerResponse {
        match request {
            TrackerRequest::CheckBlockStatus => TrackerResponse::Status(self.on_status_query(tab_id)),
            TrackerRequest::BlockComplete { notes } => TrackerResponse::Completion(CompletionAck {
                success: self.on_completion(tab_id, notes).is_ok(),
            }),
        }
    }

    fn push_show_block(&mut self, tab_id: TabId, end_time: i64) {
        let message = OverlayMessage::ShowBlock {
            end_time,
            duration: self.config.block_duration_ms,
        };
        // The overlay queries status on load, so a missed push self-heals.
        if let Err(err) = self.messenger.send_to_tab(tab_id, &message) {
            warn!(tab_id, error = %err, "could not send message to tab");
        }
    }
}
