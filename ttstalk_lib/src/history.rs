//! Capped on-disk history of successful lookups.
//!
//! The whole history is one JSON array in a single file, newest first.
//! Every mutation loads the file, rewrites it in full, and tolerates an
//! absent or unreadable file by starting fresh. Writes are not atomic;
//! concurrent invocations against the same file are last-writer-wins.

use std::fs;
use std::path::PathBuf;

use chrono::Local;
use serde::{Deserialize, Serialize};
use ttstalk_api::ProfileRecord;

/// Maximum number of entries kept on disk; older entries are dropped.
pub const HISTORY_CAP: usize = 100;

/// Default history file, relative to the working directory.
pub const DEFAULT_HISTORY_FILE: &str = "ttstalk_history.json";

/// Reduced projection of a [`ProfileRecord`] stored in the history file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    /// When the lookup happened, local date-time.
    pub stalked_at: String,
    pub unique_id: String,
    pub nickname: String,
    pub follower_count: Option<i64>,
    pub following_count: Option<i64>,
    pub video_count: Option<i64>,
    pub verified: bool,
}

impl From<&ProfileRecord> for HistoryEntry {
    fn from(record: &ProfileRecord) -> Self {
        Self {
            stalked_at: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            unique_id: record.unique_id.clone().unwrap_or_default(),
            nickname: record.nickname.clone().unwrap_or_default(),
            follower_count: record.stats.follower_count,
            following_count: record.stats.following_count,
            video_count: record.stats.video_count,
            verified: record.verified.unwrap_or(false),
        }
    }
}

/// Narrow interface over the history file; all file access lives here.
pub struct HistoryStore {
    path: PathBuf,
}

impl Default for HistoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl HistoryStore {
    pub fn new() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_HISTORY_FILE),
        }
    }

    /// Uses a custom file path. Used by tests and the `--output` flows.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Records a successful lookup at the front of the history.
    pub fn append(&self, record: &ProfileRecord) {
        self.push(HistoryEntry::from(record));
    }

    /// Prepends an entry, truncates to [`HISTORY_CAP`], rewrites the file.
    pub fn push(&self, entry: HistoryEntry) {
        let mut entries = self.load();
        entries.insert(0, entry);
        entries.truncate(HISTORY_CAP);
        self.persist(&entries);
    }

    /// Returns the stored entries, newest first, optionally filtered by a
    /// case-insensitive substring over handle and nickname.
    pub fn list(&self, filter: Option<&str>) -> Vec<HistoryEntry> {
        let entries = self.load();
        match filter {
            None => entries,
            Some(query) => {
                let query = query.to_lowercase();
                entries
                    .into_iter()
                    .filter(|e| {
                        e.unique_id.to_lowercase().contains(&query)
                            || e.nickname.to_lowercase().contains(&query)
                    })
                    .collect()
            }
        }
    }

    /// Deletes the history file. An absent file is not an error.
    pub fn clear(&self) {
        match fs::remove_file(&self.path) {
            Ok(()) => {}
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => tracing::error!("failed to delete history file: {}", e),
        }
    }

    fn load(&self) -> Vec<HistoryEntry> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(_) => return Vec::new(),
        };
        serde_json::from_str(&text).unwrap_or_else(|e| {
            tracing::warn!("history file unreadable, starting fresh: {}", e);
            Vec::new()
        })
    }

    fn persist(&self, entries: &[HistoryEntry]) {
        let json = match serde_json::to_string_pretty(entries) {
            Ok(json) => json,
            Err(e) => {
                tracing::error!("failed to serialize history: {}", e);
                return;
            }
        };
        if let Err(e) = fs::write(&self.path, json) {
            tracing::error!("failed to write history file: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};

    static COUNTER: AtomicU32 = AtomicU32::new(0);

    fn temp_store() -> HistoryStore {
        let n = COUNTER.fetch_add(1, Ordering::SeqCst);
        let path = std::env::temp_dir().join(format!(
            "ttstalk_history_test_{}_{}.json",
            std::process::id(),
            n
        ));
        let _ = fs::remove_file(&path);
        HistoryStore::with_path(path)
    }

    fn entry(handle: &str, nickname: &str) -> HistoryEntry {
        HistoryEntry {
            stalked_at: "2024-01-01 12:00:00".to_string(),
            unique_id: handle.to_string(),
            nickname: nickname.to_string(),
            follower_count: Some(10),
            following_count: Some(5),
            video_count: Some(1),
            verified: false,
        }
    }

    #[test]
    fn append_is_bounded_at_the_cap() {
        let store = temp_store();
        for i in 1..=150 {
            store.push(entry(&format!("user{}", i), "User"));
        }
        let entries = store.list(None);
        assert_eq!(entries.len(), HISTORY_CAP);
        // Newest first: the 150th push is entry 0.
        assert_eq!(entries[0].unique_id, "user150");
        assert_eq!(entries[99].unique_id, "user51");
        store.clear();
    }

    #[test]
    fn list_filters_case_insensitively_over_handle_and_nickname() {
        let store = temp_store();
        store.push(entry("alice", "Alice A"));
        store.push(entry("bob", "Bobby"));
        store.push(entry("carol", "ALICE fan"));

        let hits = store.list(Some("alice"));
        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].unique_id, "carol");
        assert_eq!(hits[1].unique_id, "alice");

        assert_eq!(store.list(Some("BOB")).len(), 1);
        assert!(store.list(Some("zzz")).is_empty());
        store.clear();
    }

    #[test]
    fn absent_file_lists_empty_and_clear_is_not_an_error() {
        let store = temp_store();
        assert!(store.list(None).is_empty());
        store.clear();
        store.clear();
    }

    #[test]
    fn corrupt_file_is_treated_as_empty() {
        let store = temp_store();
        store.push(entry("alice", "Alice"));
        let path = store.path.clone();
        fs::write(&path, "{definitely not a json array").unwrap();
        assert!(store.list(None).is_empty());
        store.clear();
    }
}
