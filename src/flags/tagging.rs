//! Flag tags for reassembled TCP flows.
//!
//! A flow is tagged `flag-in` when a client sent a flag and `flag-out`
//! when a service returned one.

use serde::{Deserialize, Serialize};

use crate::flags::matcher::FlagMatcher;

/// Which side of the connection produced a flow item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// Client to server.
    #[serde(rename = "c")]
    Client,
    /// Server to client.
    #[serde(rename = "s")]
    Server,
}

/// One consolidated chunk of a flow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlowItem {
    pub from: Direction,
    pub data: String,
    /// Capture time in milliseconds since the epoch.
    #[serde(default)]
    pub time: i64,
}

impl FlowItem {
    pub fn new(from: Direction, data: impl Into<String>) -> Self {
        Self {
            from,
            data: data.into(),
            time: 0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum FlagTag {
    #[serde(rename = "flag-in")]
    FlagIn,
    #[serde(rename = "flag-out")]
    FlagOut,
}

impl FlagTag {
    pub fn as_str(&self) -> &'static str {
        match self {
            FlagTag::FlagIn => "flag-in",
            FlagTag::FlagOut => "flag-out",
        }
    }
}

impl std::fmt::Display for FlagTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Tags for a flow, `flag-in` before `flag-out`, each at most once.
pub fn flag_tags(matcher: &FlagMatcher, items: &[FlowItem]) -> Vec<FlagTag> {
    let mut tags = Vec::with_capacity(2);
    for item in items {
        let tag = match item.from {
            Direction::Client => FlagTag::FlagIn,
            Direction::Server => FlagTag::FlagOut,
        };
        if tags.contains(&tag) {
            continue;
        }
        if matcher.has_flag(&item.data) {
            tracing::debug!(tag = %tag, bytes = item.data.len(), "Flag found in flow item");
            tags.push(tag);
        }
    }
    tags.sort();
    tags
}
