//! Stats summary rendered from the durable counters

use crate::config::MINUTES_PER_COMPLETION;
use serde::Serialize;
use std::sync::mpsc::Receiver;
use thinkfirst_store::{CounterStore, Counters, StoreError};

/// Inclusive streak range mapped to a message; `max: None` is unbounded
#[derive(Debug, Clone, Copy)]
pub struct MotivationBracket {
    pub min: u64,
    pub max: Option<u64>,
    pub message: &'static str,
}

impl MotivationBracket {
    fn contains(&self, streak: u64) -> bool {
        streak >= self.min && self.max.is_none_or(|max| streak <= max)
    }
}

pub const MOTIVATION_BRACKETS: &[MotivationBracket] = &[
    MotivationBracket {
        min: 0,
        max: Some(0),
        message: "Start your first session on ChatGPT!",
    },
    MotivationBracket {
        min: 1,
        max: Some(2),
        message: "Great start! Keep the momentum going! 🚀",
    },
    MotivationBracket {
        min: 3,
        max: Some(5),
        message: "You're building a habit! 🌱",
    },
    MotivationBracket {
        min: 6,
        max: Some(10),
        message: "Amazing progress! Your critical thinking is growing! 🌟",
    },
    MotivationBracket {
        min: 11,
        max: Some(20),
        message: "You're on fire! Keep up the great work! 🔥",
    },
    MotivationBracket {
        min: 21,
        max: Some(50),
        message: "Incredible dedication! You're a critical thinking master! 🏆",
    },
    MotivationBracket {
        min: 51,
        max: None,
        message: "Legendary! You're an inspiration! 👑",
    },
];

pub fn motivation_message(streak: u64) -> &'static str {
    MOTIVATION_BRACKETS
        .iter()
        .find(|bracket| bracket.contains(streak))
        .unwrap_or(&MOTIVATION_BRACKETS[0])
        .message
}

/// Time spent reflecting, credited per completion: `45 min`, `1h`, `1h 5m`
pub fn format_time(total_completed: u64) -> String {
    let minutes = total_completed.saturating_mul(MINUTES_PER_COMPLETION);
    if minutes < 60 {
        return format!("{} min", minutes);
    }

    let hours = minutes / 60;
    let remaining = minutes % 60;
    if remaining > 0 {
        format!("{}h {}m", hours, remaining)
    } else {
        format!("{}h", hours)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsSummary {
    pub streak: u64,
    pub total_completed: u64,
    pub total_time: String,
    pub motivation: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_completed: Option<i64>,
}

impl StatsSummary {
    pub fn from_counters(counters: &Counters) -> Self {
        Self {
            streak: counters.streak,
            total_completed: counters.total_completed,
            total_time: format_time(counters.total_completed),
            motivation: motivation_message(counters.streak).to_string(),
            last_completed: counters.last_completed,
        }
    }
}

/// Surface the summary is drawn on
pub trait StatsDisplay {
    fn render(&mut self, summary: &StatsSummary);
}

/// Renders once on display and again on every counter change
pub struct StatsViewer<D: StatsDisplay> {
    display: D,
}

impl<D: StatsDisplay> StatsViewer<D> {
    pub fn new(display: D) -> Self {
        Self { display }
    }

    pub fn display(&self) -> &D {
        &self.display
    }

    /// Initial render from the store
    pub fn show(&mut self, store: &dyn CounterStore) -> Result<StatsSummary, StoreError> {
        let counters = store.load()?;
        Ok(self.on_counters_changed(&counters))
    }

    pub fn on_counters_changed(&mut self, counters: &Counters) -> StatsSummary {
        let summary = StatsSummary::from_counters(counters);
        self.display.render(&summary);
        summary
    }

    /// Drain pending change notifications without blocking
    pub fn pump(&mut self, changes: &Receiver<Counters>) -> usize {
        let mut rendered = 0;
        while let Ok(counters) = changes.try_recv() {
            self.on_counters_changed(&counters);
            rendered += 1;
        }
        rendered
    }
}
