use std::collections::BTreeMap;
use std::path::Path;

use chrono::Utc;
use serde::Serialize;

use crate::item::{new_item_id, DedupKey, ResumeItem};
use crate::store::{load_queue, save_queue, StoreError, MAX_ITEMS};

/// Bucket name for items whose source or session was never recorded.
const UNKNOWN_BUCKET: &str = "unknown";

/// Arguments for [`add_or_update`]. Optional fields default to empty.
#[derive(Debug, Clone, Default)]
pub struct AddRequest {
    pub title: String,
    pub context: String,
    pub acceptance: String,
    pub source: String,
    pub session: String,
}

#[derive(Debug, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum AddReport {
    Added { item: ResumeItem },
    Updated { item: ResumeItem },
}

#[derive(Debug, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum PopReport {
    Popped { item: ResumeItem },
    Empty,
}

#[derive(Debug, Serialize)]
pub struct ListReport {
    pub status: &'static str,
    pub count: usize,
    pub items: Vec<ResumeItem>,
}

#[derive(Debug, Serialize)]
pub struct StatusReport {
    pub status: &'static str,
    pub count: usize,
    pub by_source: BTreeMap<String, usize>,
    pub by_session: BTreeMap<String, usize>,
}

#[derive(Debug, Serialize)]
pub struct ClearReport {
    pub status: &'static str,
}

/// Append a new item, or refresh the first stored item sharing the same
/// normalized (title, context) key.
///
/// On a match only `updated_at`, `source`, and `session` change, and the
/// latter two only when the incoming value is non-empty; an empty incoming
/// value never clears a stored one. `acceptance` is fixed at creation.
pub fn add_or_update(queue_path: &Path, req: &AddRequest) -> Result<AddReport, StoreError> {
    let now = Utc::now().timestamp();
    let mut items = load_queue(queue_path)?;
    let key = DedupKey::new(&req.title, &req.context);

    if let Some(item) = items.iter_mut().find(|item| key.matches(item)) {
        item.updated_at = now;
        if !req.source.is_empty() {
            item.source = req.source.clone();
        }
        if !req.session.is_empty() {
            item.session = req.session.clone();
        }
        let item = item.clone();
        save_queue(queue_path, &items)?;
        return Ok(AddReport::Updated { item });
    }

    let item = ResumeItem {
        id: new_item_id(now, items.len() + 1),
        title: req.title.clone(),
        context: req.context.clone(),
        acceptance: req.acceptance.clone(),
        source: req.source.clone(),
        session: req.session.clone(),
        created_at: now,
        updated_at: now,
    };
    items.push(item.clone());

    if items.len() > MAX_ITEMS {
        let excess = items.len() - MAX_ITEMS;
        items.drain(..excess);
    }

    save_queue(queue_path, &items)?;
    Ok(AddReport::Added { item })
}

/// Remove and return the oldest item. An empty queue reports `empty` and
/// performs no write.
pub fn pop_front(queue_path: &Path) -> Result<PopReport, StoreError> {
    let mut items = load_queue(queue_path)?;
    if items.is_empty() {
        return Ok(PopReport::Empty);
    }
    let item = items.remove(0);
    save_queue(queue_path, &items)?;
    Ok(PopReport::Popped { item })
}

/// Read-only: the total count and the full ordered list.
pub fn list_items(queue_path: &Path) -> Result<ListReport, StoreError> {
    let items = load_queue(queue_path)?;
    Ok(ListReport {
        status: "ok",
        count: items.len(),
        items,
    })
}

/// Read-only: counts grouped by the exact stored `source` and `session`
/// values. Empty values land in the `unknown` bucket.
pub fn summarize(queue_path: &Path) -> Result<StatusReport, StoreError> {
    let items = load_queue(queue_path)?;
    let mut by_source: BTreeMap<String, usize> = BTreeMap::new();
    let mut by_session: BTreeMap<String, usize> = BTreeMap::new();
    for item in &items {
        *by_source.entry(bucket(&item.source)).or_insert(0) += 1;
        *by_session.entry(bucket(&item.session)).or_insert(0) += 1;
    }
    Ok(StatusReport {
        status: "ok",
        count: items.len(),
        by_source,
        by_session,
    })
}

/// Replace the store with an empty queue regardless of prior content.
pub fn clear(queue_path: &Path) -> Result<ClearReport, StoreError> {
    save_queue(queue_path, &[])?;
    Ok(ClearReport { status: "cleared" })
}

fn bucket(value: &str) -> String {
    if value.is_empty() {
        UNKNOWN_BUCKET.to_string()
    } else {
        value.to_string()
    }
}
