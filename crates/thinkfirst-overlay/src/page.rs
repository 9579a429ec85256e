//! Page-side capabilities consumed by the overlay controller

use crate::view::{CountdownView, OverlayContent};
use thinkfirst_core::{CompletionAck, DeliveryError, StatusResponse};
use thiserror::Error;

#[derive(Error, Debug)]
#[error("clipboard write rejected: {0}")]
pub struct ClipboardError(pub String);

/// The document the overlay lives in
pub trait Page {
    /// Whether an element with `id` is currently attached
    fn has_element(&self, id: &str) -> bool;

    /// Attach the overlay: `content` around the countdown, notes field and
    /// continue button
    fn mount_overlay(&mut self, content: &OverlayContent);

    /// Fade the overlay out and detach it
    fn remove_overlay(&mut self);

    fn render_countdown(&mut self, view: &CountdownView);

    /// Current contents of the notes field
    fn notes(&self) -> String;

    /// Select the notes text so the user can copy it by hand
    fn select_notes(&mut self);

    /// Transient notice; replaces any toast still showing
    fn show_toast(&mut self, message: &str);

    /// Start reporting removals of the body's direct children
    fn observe_body_children(&mut self);
}

pub trait Clipboard {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// Request/response channel to the session tracker
pub trait TrackerLink {
    fn check_status(&mut self) -> Result<StatusResponse, DeliveryError>;

    fn complete(&mut self, notes: &str) -> Result<CompletionAck, DeliveryError>;
}
