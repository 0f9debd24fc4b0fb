use serde::{Deserialize, Serialize};

/// One queued task-resume record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ResumeItem {
    pub id: String,
    pub title: String,
    pub context: String,
    #[serde(default)]
    pub acceptance: String,
    #[serde(default)]
    pub source: String,
    /// Absent on documents written before sessions were tracked.
    #[serde(default)]
    pub session: String,
    /// Unix timestamp (seconds), set once at creation.
    pub created_at: i64,
    /// Unix timestamp (seconds), refreshed on every dedup-match update.
    pub updated_at: i64,
}

/// Lowercase, trim, and collapse internal whitespace runs to single spaces.
pub fn normalize(value: &str) -> String {
    value
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Normalized (title, context) pair deciding add-vs-update identity.
///
/// Only these two fields participate; source, session, and acceptance never
/// affect which stored item an incoming record matches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DedupKey {
    title: String,
    context: String,
}

impl DedupKey {
    pub fn new(title: &str, context: &str) -> Self {
        Self {
            title: normalize(title),
            context: normalize(context),
        }
    }

    pub fn matches(&self, item: &ResumeItem) -> bool {
        normalize(&item.title) == self.title && normalize(&item.context) == self.context
    }
}

/// Item ids combine the creation timestamp with the 1-based position at
/// insertion time. Two inserts at the same second with the same queue length
/// mint the same id; the id is a label, not a counter.
pub fn new_item_id(now: i64, position: usize) -> String {
    format!("tr_{}_{}", now, position)
}
