use std::fs;
use std::io;
use std::path::Path;

use thiserror::Error;

use crate::item::ResumeItem;

/// Retention cap: appends past this evict the oldest items.
pub const MAX_ITEMS: usize = 30;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Failed to access queue store: {0}")]
    Io(#[from] io::Error),
    #[error("Failed to serialize queue: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Read the full queue document.
///
/// A missing file or a document that no longer parses as a queue reads as
/// empty; the next save rewrites it. Other io failures propagate.
pub fn load_queue(path: &Path) -> Result<Vec<ResumeItem>, StoreError> {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
        Err(err) => return Err(StoreError::Io(err)),
    };
    match serde_json::from_str::<Vec<ResumeItem>>(&raw) {
        Ok(items) => Ok(items),
        Err(_) => Ok(Vec::new()),
    }
}

/// Rewrite the full queue document, creating missing parent directories.
pub fn save_queue(path: &Path, items: &[ResumeItem]) -> Result<(), StoreError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let raw = serde_json::to_string_pretty(items)?;
    fs::write(path, raw)?;
    Ok(())
}
