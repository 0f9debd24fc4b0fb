use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Directory under the project root holding durable agent memory.
pub const MEMORY_DIR: &str = "memory";
/// Queue document filename inside the memory directory.
pub const QUEUE_FILENAME: &str = "task-resume-queue.json";

/// Optional project-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResumeqConfig {
    /// Overrides the directory name holding the queue document.
    pub memory_dir: Option<String>,
}

pub fn config_filename_candidates() -> [&'static str; 2] {
    [".resumeq.toml", ".resumeqrc"]
}

pub fn find_config_root(start: &Path) -> Option<PathBuf> {
    let start = start.canonicalize().unwrap_or_else(|_| start.to_path_buf());
    for candidate in start.ancestors() {
        for name in config_filename_candidates() {
            if candidate.join(name).is_file() {
                return Some(candidate.to_path_buf());
            }
        }
    }
    None
}

pub fn load_config(root: &Path) -> Option<ResumeqConfig> {
    for name in config_filename_candidates() {
        let path = root.join(name);
        if path.is_file() {
            if let Ok(text) = fs::read_to_string(&path) {
                if let Ok(config) = toml::from_str::<ResumeqConfig>(&text) {
                    return Some(config);
                }
            }
        }
    }
    None
}

/// Resolve the project root: explicit flag, then `RESUMEQ_ROOT`, then the
/// nearest ancestor carrying a config file, then the current directory.
pub fn resolve_root(explicit: Option<&Path>) -> PathBuf {
    if let Some(root) = explicit {
        return root.to_path_buf();
    }
    if let Ok(value) = std::env::var("RESUMEQ_ROOT") {
        let trimmed = value.trim();
        if !trimmed.is_empty() {
            return PathBuf::from(trimmed);
        }
    }
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    find_config_root(&cwd).unwrap_or(cwd)
}

/// Path of the queue document under a project root.
pub fn queue_path(root: &Path) -> PathBuf {
    let memory_dir = load_config(root)
        .and_then(|config| config.memory_dir)
        .unwrap_or_else(|| MEMORY_DIR.to_string());
    root.join(memory_dir).join(QUEUE_FILENAME)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn queue_path_defaults_to_memory_dir() {
        let temp = TempDir::new().expect("tempdir");
        assert_eq!(
            queue_path(temp.path()),
            temp.path().join("memory").join("task-resume-queue.json")
        );
    }

    #[test]
    fn queue_path_honors_memory_dir_override() {
        let temp = TempDir::new().expect("tempdir");
        fs::write(
            temp.path().join(".resumeq.toml"),
            "memory_dir = \"agent-memory\"\n",
        )
        .expect("write config");
        assert_eq!(
            queue_path(temp.path()),
            temp.path().join("agent-memory").join("task-resume-queue.json")
        );
    }

    #[test]
    fn unparsable_config_is_ignored() {
        let temp = TempDir::new().expect("tempdir");
        fs::write(temp.path().join(".resumeq.toml"), "memory_dir = [nope").expect("write config");
        assert!(load_config(temp.path()).is_none());
        assert_eq!(
            queue_path(temp.path()),
            temp.path().join("memory").join("task-resume-queue.json")
        );
    }

    #[test]
    fn find_config_root_walks_ancestors() {
        let temp = TempDir::new().expect("tempdir");
        fs::write(temp.path().join(".resumeq.toml"), "").expect("write config");
        let nested = temp.path().join("a").join("b");
        fs::create_dir_all(&nested).expect("nested dirs");
        let found = find_config_root(&nested).expect("root");
        assert_eq!(
            found.canonicalize().expect("canon"),
            temp.path().canonicalize().expect("canon")
        );
    }
}
