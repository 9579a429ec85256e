#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;
use thinkfirst_core::{CompletionAck, DeliveryError, ManualClock, StatusResponse};
use thinkfirst_overlay::{
    Clipboard, ClipboardError, CountdownView, OverlayContent, OverlayController, Page,
    TrackerLink, OVERLAY_ELEMENT_ID,
};

pub const START: i64 = 1_000_000;
pub const END: i64 = START + 10_000;

#[derive(Debug, Default)]
pub struct PageState {
    pub mounted: bool,
    pub mount_count: usize,
    pub mounted_content: Option<OverlayContent>,
    pub observing: bool,
    pub renders: Vec<CountdownView>,
    pub toasts: Vec<String>,
    pub notes: String,
    pub notes_selected: bool,
}

pub struct FakePage(pub Rc<RefCell<PageState>>);

impl Page for FakePage {
    fn has_element(&self, id: &str) -> bool {
        id == OVERLAY_ELEMENT_ID && self.0.borrow().mounted
    }

    fn mount_overlay(&mut self, content: &OverlayContent) {
        let mut state = self.0.borrow_mut();
        state.mounted = true;
        state.mount_count += 1;
        state.mounted_content = Some(*content);
    }

    fn remove_overlay(&mut self) {
        self.0.borrow_mut().mounted = false;
    }

    fn render_countdown(&mut self, view: &CountdownView) {
        self.0.borrow_mut().renders.push(view.clone());
    }

    fn notes(&self) -> String {
        self.0.borrow().notes.clone()
    }

    fn select_notes(&mut self) {
        self.0.borrow_mut().notes_selected = true;
    }

    fn show_toast(&mut self, message: &str) {
        self.0.borrow_mut().toasts.push(message.to_string());
    }

    fn observe_body_children(&mut self) {
        self.0.borrow_mut().observing = true;
    }
}

pub struct FakeClipboard {
    pub copied: Rc<RefCell<Vec<String>>>,
    pub deny: bool,
}

impl Clipboard for FakeClipboard {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        if self.deny {
            return Err(ClipboardError("document is not focused".to_string()));
        }
        self.copied.borrow_mut().push(text.to_string());
        Ok(())
    }
}

pub struct FakeTracker {
    pub status: Option<StatusResponse>,
    pub completions: Rc<RefCell<Vec<String>>>,
}

impl TrackerLink for FakeTracker {
    fn check_status(&mut self) -> Result<StatusResponse, DeliveryError> {
        self.status
            .ok_or_else(|| DeliveryError::Transport("background not ready".to_string()))
    }

    fn complete(&mut self, notes: &str) -> Result<CompletionAck, DeliveryError> {
        self.completions.borrow_mut().push(notes.to_string());
        Ok(CompletionAck { success: true })
    }
}

pub struct Harness {
    pub controller: OverlayController,
    pub page: Rc<RefCell<PageState>>,
    pub copied: Rc<RefCell<Vec<String>>>,
    pub completions: Rc<RefCell<Vec<String>>>,
    pub clock: Arc<ManualClock>,
}

pub fn harness(status: Option<StatusResponse>, deny_clipboard: bool) -> Harness {
    let page = Rc::new(RefCell::new(PageState::default()));
    let copied = Rc::new(RefCell::new(Vec::new()));
    let completions = Rc::new(RefCell::new(Vec::new()));
    let clock = Arc::new(ManualClock::new(START));

    let controller = OverlayController::new(
        Box::new(FakePage(Rc::clone(&page))),
        Box::new(FakeClipboard {
            copied: Rc::clone(&copied),
            deny: deny_clipboard,
        }),
        Box::new(FakeTracker {
            status,
            completions: Rc::clone(&completions),
        }),
        clock.clone(),
    );

    Harness {
        controller,
        page,
        copied,
        completions,
        clock,
    }
}

/// Controller already counting down to `END`
pub fn counting() -> Harness {
    let mut h = harness(Some(StatusResponse::clear()), false);
    h.controller.show(END);
    h
}
