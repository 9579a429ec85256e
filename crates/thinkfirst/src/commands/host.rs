//! Line-delimited JSON bridge between a browser host and the session tracker

use super::resolve_paths;
use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::io::{BufRead, Write};
use std::path::Path;
use std::rc::Rc;
use std::sync::Arc;
use thinkfirst_core::{
    Clock, Config, DeliveryError, OverlayMessage, SessionTracker, StatsDisplay, StatsSummary,
    StatsViewer, SystemClock, TabId, TabInfo, TabMessenger, TrackerRequest, TrackerResponse,
};
use thinkfirst_store::{CounterStore, Counters, JsonCounterStore, MemoryCounterStore};
use tracing::{debug, info, warn};

/// One stdin line
#[derive(Debug, Deserialize)]
#[serde(tag = "event", rename_all = "camelCase")]
pub enum HostEvent {
    Startup {
        #[serde(default)]
        tabs: Vec<TabInfo>,
    },
    TabUpdated {
        #[serde(rename = "tabId")]
        tab_id: TabId,
        status: String,
        #[serde(default)]
        url: Option<String>,
    },
    TabRemoved {
        #[serde(rename = "tabId")]
        tab_id: TabId,
    },
    Message {
        #[serde(rename = "tabId")]
        tab_id: TabId,
        message: TrackerRequest,
    },
}

/// One stdout line
#[derive(Debug, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum HostOutput<'a> {
    ToTab {
        #[serde(rename = "tabId")]
        tab_id: TabId,
        message: &'a OverlayMessage,
    },
    Reply {
        #[serde(rename = "tabId")]
        tab_id: TabId,
        response: TrackerResponse,
    },
    Stats {
        summary: &'a StatsSummary,
    },
}

/// Shared line writer; the tracker, the viewer and the loop all emit through it
#[derive(Clone)]
pub struct Sink(Rc<RefCell<Box<dyn Write>>>);

impl Sink {
    pub fn new(out: Box<dyn Write>) -> Self {
        Self(Rc::new(RefCell::new(out)))
    }

    pub fn emit(&self, output: &HostOutput<'_>) -> std::io::Result<()> {
        let line = serde_json::to_string(output)?;
        let mut out = self.0.borrow_mut();
        writeln!(out, "{}", line)?;
        out.flush()
    }
}

struct SinkMessenger(Sink);

impl TabMessenger for SinkMessenger {
    fn send_to_tab(&mut self, tab_id: TabId, message: &OverlayMessage) -> Result<(), DeliveryError> {
        self.0
            .emit(&HostOutput::ToTab { tab_id, message })
            .map_err(|err| DeliveryError::Transport(err.to_string()))
    }
}

struct SinkDisplay(Sink);

impl StatsDisplay for SinkDisplay {
    fn render(&mut self, summary: &StatsSummary) {
        if let Err(err) = self.0.emit(&HostOutput::Stats { summary }) {
            warn!(error = %err, "could not write stats");
        }
    }
}

/// Process events until `input` is exhausted; returns how many were handled
pub fn serve<R: BufRead>(
    mut input: R,
    sink: Sink,
    store: Arc<dyn CounterStore>,
    clock: Arc<dyn Clock>,
) -> anyhow::Result<usize> {
    let changes = store.subscribe();
    let mut viewer = StatsViewer::new(SinkDisplay(sink.clone()));
    if let Err(err) = viewer.show(store.as_ref()) {
        warn!(error = %err, "could not load counters, showing zeros");
        viewer.on_counters_changed(&Counters::default());
    }

    let mut tracker = SessionTracker::new(
        Config::new(),
        Box::new(SinkMessenger(sink.clone())),
        store,
        clock,
    );

    let mut handled = 0;
    let mut line_no = 0;
    let mut buf = Vec::new();
    loop {
        buf.clear();
        // Raw bytes, so a line that is not UTF-8 is skipped instead of ending the loop
        if input.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        line_no += 1;

        let line = match std::str::from_utf8(&buf) {
            Ok(line) => line.trim(),
            Err(err) => {
                warn!(line = line_no, error = %err, "skipping event that is not UTF-8");
                continue;
            }
        };
        if line.is_empty() {
            continue;
        }

        let event: HostEvent = match serde_json::from_str(line) {
            Ok(event) => event,
            Err(err) => {
                warn!(line = line_no, error = %err, "skipping malformed event");
                continue;
            }
        };
        debug!(?event, "host event");

        match event {
            HostEvent::Startup { tabs } => {
                tracker.rearm_open_tabs(&tabs);
            }
            HostEvent::TabUpdated { tab_id, status, url } => {
                tracker.on_tab_updated(tab_id, &status, url.as_deref());
            }
            HostEvent::TabRemoved { tab_id } => tracker.on_tab_closed(tab_id),
            HostEvent::Message { tab_id, message } => {
                let response = tracker.handle_request(tab_id, message);
                sink.emit(&HostOutput::Reply { tab_id, response })?;
            }
        }

        viewer.pump(&changes);
        handled += 1;
    }

    Ok(handled)
}

pub fn run(data_dir: Option<&Path>, ephemeral: bool) -> anyhow::Result<()> {
    let store: Arc<dyn CounterStore> = if ephemeral {
        info!("using in-memory counters");
        Arc::new(MemoryCounterStore::new())
    } else {
        let paths = resolve_paths(data_dir)?;
        let store = JsonCounterStore::open(&paths);
        info!(path = %store.path().display(), "using counters file");
        Arc::new(store)
    };

    let sink = Sink::new(Box::new(std::io::stdout()));
    let handled = serve(std::io::stdin().lock(), sink, store, Arc::new(SystemClock))?;
    info!(handled, "host input closed");
    Ok(())
}
