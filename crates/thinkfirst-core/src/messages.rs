//! Messages exchanged between the tracker and the overlay

use serde::{Deserialize, Serialize};

/// Tracker → overlay push
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OverlayMessage {
    ShowBlock {
        #[serde(rename = "endTime")]
        end_time: i64,
        duration: u64,
    },
}

/// Overlay's reply to a push
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShowAck {
    pub received: bool,
}

/// Overlay → tracker request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TrackerRequest {
    CheckBlockStatus,
    BlockComplete {
        #[serde(default)]
        notes: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusResponse {
    pub should_block: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_time: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<u64>,
}

impl StatusResponse {
    pub fn blocking(end_time: i64, duration: u64) -> Self {
        Self {
            should_block: true,
            end_time: Some(end_time),
            duration: Some(duration),
        }
    }

    pub fn clear() -> Self {
        Self {
            should_block: false,
            end_time: None,
            duration: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletionAck {
    pub success: bool,
}

/// Tracker's reply to a [`TrackerRequest`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TrackerResponse {
    Status(StatusResponse),
    Completion(CompletionAck),
}
