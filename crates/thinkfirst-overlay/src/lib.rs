//! In-page blocking overlay: countdown, anti-dismissal and completion relay

pub mod controller;
pub mod page;
pub mod view;

pub use controller::{OverlayController, OverlayPhase};
pub use page::{Clipboard, ClipboardError, Page, TrackerLink};
pub use view::{
    format_countdown, CountdownView, OverlayContent, OVERLAY_CONTENT, OVERLAY_ELEMENT_ID,
};
