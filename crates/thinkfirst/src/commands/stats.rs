use super::resolve_paths;
use anyhow::Context;
use std::path::Path;
use thinkfirst_core::{StatsDisplay, StatsSummary, StatsViewer};
use thinkfirst_store::JsonCounterStore;

fn format_last_completed(ms: i64) -> String {
    match chrono::DateTime::from_timestamp_millis(ms) {
        Some(at) => at.format("%Y-%m-%d %H:%M UTC").to_string(),
        None => "unknown".to_string(),
    }
}

fn render_text(summary: &StatsSummary) -> String {
    let mut out = String::new();
    out.push_str(&format!("Streak:           {}\n", summary.streak));
    out.push_str(&format!("Sessions:         {}\n", summary.total_completed));
    out.push_str(&format!("Time thinking:    {}\n", summary.total_time));
    if let Some(ms) = summary.last_completed {
        out.push_str(&format!("Last completed:   {}\n", format_last_completed(ms)));
    }
    out.push('\n');
    out.push_str(&summary.motivation);
    out
}

struct PrintDisplay {
    json: bool,
}

impl StatsDisplay for PrintDisplay {
    fn render(&mut self, summary: &StatsSummary) {
        if self.json {
            match serde_json::to_string_pretty(summary) {
                Ok(text) => println!("{}", text),
                Err(err) => tracing::warn!(error = %err, "could not encode stats"),
            }
        } else {
            println!("{}", render_text(summary));
        }
    }
}

pub fn run(data_dir: Option<&Path>, json: bool) -> anyhow::Result<()> {
    let paths = resolve_paths(data_dir)?;
    let store = JsonCounterStore::open(&paths);
    let mut viewer = StatsViewer::new(PrintDisplay { json });
    viewer
        .show(&store)
        .with_context(|| format!("reading {}", store.path().display()))?;
    Ok(())
}
