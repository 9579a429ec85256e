#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;
use thinkfirst_core::{
    CompletionAck, DeliveryError, OverlayMessage, SessionTracker, StatusResponse, StatsDisplay,
    StatsSummary, TabId, TabMessenger, TrackerRequest, TrackerResponse,
};
use thinkfirst_overlay::{
    Clipboard, ClipboardError, CountdownView, OverlayContent, Page, TrackerLink,
};

pub const WATCHED_URL: &str = "https://chatgpt.com/c/new";

/// Messages the tracker pushed, drained by the test between steps
pub type Outbox = Rc<RefCell<Vec<(TabId, OverlayMessage)>>>;

pub struct OutboxMessenger(pub Outbox);

impl TabMessenger for OutboxMessenger {
    fn send_to_tab(&mut self, tab_id: TabId, message: &OverlayMessage) -> Result<(), DeliveryError> {
        self.0.borrow_mut().push((tab_id, message.clone()));
        Ok(())
    }
}

/// Overlay side of the tracker channel for one tab
pub struct InProcessLink {
    pub tracker: Rc<RefCell<SessionTracker>>,
    pub tab_id: TabId,
}

impl TrackerLink for InProcessLink {
    fn check_status(&mut self) -> Result<StatusResponse, DeliveryError> {
        let response = self
            .tracker
            .borrow_mut()
            .handle_request(self.tab_id, TrackerRequest::CheckBlockStatus);
        match response {
            TrackerResponse::Status(status) => Ok(status),
            other => Err(DeliveryError::Transport(format!("unexpected reply {:?}", other))),
        }
    }

    fn complete(&mut self, notes: &str) -> Result<CompletionAck, DeliveryError> {
        let response = self.tracker.borrow_mut().handle_request(
            self.tab_id,
            TrackerRequest::BlockComplete {
                notes: notes.to_string(),
            },
        );
        match response {
            TrackerResponse::Completion(ack) => Ok(ack),
            other => Err(DeliveryError::Transport(format!("unexpected reply {:?}", other))),
        }
    }
}

#[derive(Debug, Default)]
pub struct PageState {
    pub mounted: bool,
    pub last_view: Option<CountdownView>,
    pub toasts: Vec<String>,
    pub notes: String,
}

pub struct TestPage(pub Rc<RefCell<PageState>>);

impl Page for TestPage {
    fn has_element(&self, _id: &str) -> bool {
        self.0.borrow().mounted
    }

    fn mount_overlay(&mut self, _content: &OverlayContent) {
        self.0.borrow_mut().mounted = true;
    }

    fn remove_overlay(&mut self) {
        self.0.borrow_mut().mounted = false;
    }

    fn render_countdown(&mut self, view: &CountdownView) {
        self.0.borrow_mut().last_view = Some(view.clone());
    }

    fn notes(&self) -> String {
        self.0.borrow().notes.clone()
    }

    fn select_notes(&mut self) {}

    fn show_toast(&mut self, message: &str) {
        self.0.borrow_mut().toasts.push(message.to_string());
    }

    fn observe_body_children(&mut self) {}
}

pub struct RecordingClipboard(pub Rc<RefCell<Vec<String>>>);

impl Clipboard for RecordingClipboard {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        self.0.borrow_mut().push(text.to_string());
        Ok(())
    }
}

#[derive(Default)]
pub struct CapturedStats(pub Vec<StatsSummary>);

impl StatsDisplay for CapturedStats {
    fn render(&mut self, summary: &StatsSummary) {
        self.0.push(summary.clone());
    }
}
