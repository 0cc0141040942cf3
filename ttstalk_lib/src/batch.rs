//! Sequential batch lookups with fixed inter-request pacing.

use std::time::Duration;

use ttstalk_api::{Client, ProfileRecord};

use crate::history::HistoryStore;

/// Runs the fetch/extract/normalize pipeline over `handles` one at a
/// time, sleeping `delay` between consecutive attempts (never after the
/// last). Failures are logged and skipped; successes come back in input
/// order and are appended to `history` when one is given.
///
/// The pacing is deliberately fixed: no jitter, no backoff, no
/// concurrency. One attempt per handle.
pub async fn run_batch(
    client: &Client,
    handles: &[String],
    delay: Duration,
    history: Option<&HistoryStore>,
) -> Vec<ProfileRecord> {
    let mut records = Vec::new();
    for (idx, handle) in handles.iter().enumerate() {
        if idx > 0 {
            tokio::time::sleep(delay).await;
        }
        tracing::info!("looking up {} ({}/{})", handle, idx + 1, handles.len());
        match client.stalk(handle).await {
            Ok(record) => {
                if let Some(store) = history {
                    store.append(&record);
                }
                records.push(record);
            }
            Err(e) => {
                tracing::warn!("skipping {}: {}", handle, e);
            }
        }
    }
    records
}
