//! Compiled-in gate configuration

/// Mandatory wait before a watched destination can be used
pub const BLOCK_DURATION_MS: u64 = 5 * 60 * 1000;

/// URL substrings identifying the destinations to gate
pub const WATCHED_DESTINATIONS: &[&str] = &["chatgpt.com", "chat.openai.com"];

/// Minutes credited per completed block in the stats summary
pub const MINUTES_PER_COMPLETION: u64 = 5;

/// Gate configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Length of every block in milliseconds
    pub block_duration_ms: u64,

    /// Case-sensitive substrings matched against the raw navigation URL
    pub watched_destinations: Vec<String>,
}

impl Config {
    pub fn new() -> Self {
        Self {
            block_duration_ms: BLOCK_DURATION_MS,
            watched_destinations: WATCHED_DESTINATIONS
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }

    /// Pure substring containment; no scheme or host parsing
    pub fn is_watched(&self, url: &str) -> bool {
        if url.is_empty() {
            return false;
        }
        self.watched_destinations
            .iter()
            .any(|needle| url.contains(needle.as_str()))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
