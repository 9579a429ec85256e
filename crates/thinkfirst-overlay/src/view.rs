//! Countdown text and overlay copy

use serde::Serialize;

/// Well-known id of the overlay root element
pub const OVERLAY_ELEMENT_ID: &str = "think-first-overlay";

pub const READY_LABEL: &str = "Ready!";
pub const CONTINUE_LABEL: &str = "📋 Copy Notes & Continue";

pub const TOAST_COPIED: &str = "✅ Notes copied to clipboard! Paste into ChatGPT";
pub const TOAST_NO_NOTES: &str = "✅ Timer complete! You can now use ChatGPT";
pub const TOAST_COPY_FAILED: &str = "⚠️ Could not copy notes. Press Ctrl+C to copy manually";

/// Static copy drawn around the countdown when the overlay is mounted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OverlayContent {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub prompt_label: &'static str,
    pub prompts: &'static [&'static str],
    pub notes_placeholder: &'static str,
    pub footer: &'static str,
}

pub const OVERLAY_CONTENT: OverlayContent = OverlayContent {
    title: "🧠 Think First",
    subtitle: "Take a moment to think before using AI",
    prompt_label: "Before asking ChatGPT, write down:",
    prompts: &[
        "What you already know about this problem",
        "What you've already tried",
        "What specific part you're stuck on",
    ],
    notes_placeholder: "Your thoughts here... Take your time to reflect on the problem.",
    footer: "Building critical thinking skills 💪",
};

/// Delay before removal after a normal continue
pub const REMOVE_DELAY_MS: i64 = 500;
/// Longer delay when the user has to copy the notes by hand
pub const FALLBACK_REMOVE_DELAY_MS: i64 = 2_000;

/// What the countdown area shows on one refresh
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CountdownView {
    pub timer_text: String,
    pub button_text: String,
    pub continue_enabled: bool,
}

impl CountdownView {
    pub fn counting(remaining_ms: i64) -> Self {
        let display = format_countdown(remaining_ms);
        Self {
            button_text: format!("Continue ({})", display),
            timer_text: display,
            continue_enabled: false,
        }
    }

    pub fn ready() -> Self {
        Self {
            timer_text: READY_LABEL.to_string(),
            button_text: CONTINUE_LABEL.to_string(),
            continue_enabled: true,
        }
    }
}

/// `M:SS`, truncating partial seconds
pub fn format_countdown(remaining_ms: i64) -> String {
    let remaining = remaining_ms.max(0);
    let minutes = remaining / 60_000;
    let seconds = (remaining % 60_000) / 1_000;
    format!("{}:{:02}", minutes, seconds)
}
