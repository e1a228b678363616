//! Record shapes for the `entries` and `goals` blobs.
//!
//! Only the fields the stats need are typed. Everything else a client stores
//! on a record is kept in `extra` and survives a load/save cycle.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One journal entry.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct JournalEntry {
    /// Free text of the entry; `null` or missing when the entry has no body
    #[serde(default)]
    pub content: Option<String>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl JournalEntry {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: Some(content.into()),
            extra: Map::new(),
        }
    }

    /// Number of whitespace-delimited words in `content`.
    pub fn word_count(&self) -> usize {
        self.content
            .as_deref()
            .map_or(0, |text| text.split_whitespace().count())
    }
}

/// One goal.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct Goal {
    #[serde(default)]
    pub completed: bool,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
