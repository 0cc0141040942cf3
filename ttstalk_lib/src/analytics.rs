//! Aggregate statistics over the lookup history.

use std::collections::HashSet;

use serde::Serialize;

use crate::history::HistoryEntry;

/// Summary of past lookups, serializable for JSON export.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HistorySummary {
    pub total_lookups: usize,
    pub distinct_handles: usize,
    pub verified_count: usize,
    /// Sum over entries that recorded a follower count.
    pub total_followers: i64,
    /// Average over entries that recorded a follower count; 0 when none did.
    pub average_followers: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_handle: Option<TopHandle>,
}

/// The stalked handle with the highest recorded follower count.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TopHandle {
    pub unique_id: String,
    pub follower_count: i64,
}

pub fn summarize(entries: &[HistoryEntry]) -> HistorySummary {
    let distinct: HashSet<String> = entries.iter().map(|e| e.unique_id.to_lowercase()).collect();
    let verified_count = entries.iter().filter(|e| e.verified).count();

    let counted: Vec<i64> = entries.iter().filter_map(|e| e.follower_count).collect();
    let total_followers: i64 = counted.iter().sum();
    let average_followers = if counted.is_empty() {
        0
    } else {
        total_followers / counted.len() as i64
    };

    let top_handle = entries
        .iter()
        .filter_map(|e| e.follower_count.map(|count| (e, count)))
        .max_by_key(|(_, count)| *count)
        .map(|(e, count)| TopHandle {
            unique_id: e.unique_id.clone(),
            follower_count: count,
        });

    HistorySummary {
        total_lookups: entries.len(),
        distinct_handles: distinct.len(),
        verified_count,
        total_followers,
        average_followers,
        top_handle,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(handle: &str, followers: Option<i64>, verified: bool) -> HistoryEntry {
        HistoryEntry {
            stalked_at: "2024-01-01 12:00:00".to_string(),
            unique_id: handle.to_string(),
            nickname: handle.to_string(),
            follower_count: followers,
            following_count: None,
            video_count: None,
            verified,
        }
    }

    #[test]
    fn empty_history_summarizes_to_zeroes() {
        let summary = summarize(&[]);
        assert_eq!(summary.total_lookups, 0);
        assert_eq!(summary.average_followers, 0);
        assert!(summary.top_handle.is_none());
    }

    #[test]
    fn repeat_lookups_count_once_as_distinct() {
        let entries = vec![
            entry("alice", Some(100), true),
            entry("Alice", Some(120), true),
            entry("bob", Some(10), false),
        ];
        let summary = summarize(&entries);
        assert_eq!(summary.total_lookups, 3);
        assert_eq!(summary.distinct_handles, 2);
        assert_eq!(summary.verified_count, 2);
    }

    #[test]
    fn entries_without_counts_do_not_skew_the_average() {
        let entries = vec![
            entry("alice", Some(100), false),
            entry("bob", None, false),
            entry("carol", Some(300), false),
        ];
        let summary = summarize(&entries);
        assert_eq!(summary.total_followers, 400);
        assert_eq!(summary.average_followers, 200);
        let top = summary.top_handle.unwrap();
        assert_eq!(top.unique_id, "carol");
        assert_eq!(top.follower_count, 300);
    }
}
