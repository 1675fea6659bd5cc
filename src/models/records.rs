//! All-time record board models.

use serde::{Deserialize, Serialize};

/// A single ranked entry on a record board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordHolder {
    pub rank: u32,
    pub holder: String,
    /// Display value, e.g. "212.00 points" or "12-2"
    pub record: String,
    /// Context, e.g. "Week 8, 2014"
    pub details: String,
}

/// A record category with its top entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllTimeRecord {
    pub category: String,
    pub top5: Vec<RecordHolder>,
}

impl AllTimeRecord {
    /// Current holder of the record.
    pub fn leader(&self) -> Option<&RecordHolder> {
        self.top5.iter().min_by_key(|h| h.rank)
    }
}
