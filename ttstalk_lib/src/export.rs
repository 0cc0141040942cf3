//! JSON and CSV exporters for profile records.
//!
//! Exporters never propagate failures: any write error is logged and
//! surfaced as `None`, so callers can keep going.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::Local;
use serde::Serialize;
use ttstalk_api::ProfileRecord;

use crate::error::StalkError;

/// Writes any serializable value as pretty-printed JSON.
///
/// The shape on disk is whatever the caller hands in: a single record, a
/// batch, or an analytics summary.
pub fn export_json<T: Serialize>(value: &T, path: Option<&Path>) -> Option<PathBuf> {
    let path = resolve_path(path, "ttstalk", "json");
    match write_json(value, &path) {
        Ok(()) => Some(path),
        Err(e) => {
            tracing::error!("json export to {} failed: {}", path.display(), e);
            None
        }
    }
}

/// Writes a single record as a fixed two-column `Field,Value` CSV.
pub fn export_csv(record: &ProfileRecord, path: Option<&Path>) -> Option<PathBuf> {
    let path = resolve_path(path, "ttstalk", "csv");
    match write_csv(record, &path) {
        Ok(()) => Some(path),
        Err(e) => {
            tracing::error!("csv export to {} failed: {}", path.display(), e);
            None
        }
    }
}

/// Writes a batch as CSV, one row per user.
pub fn export_batch_csv(records: &[ProfileRecord], path: Option<&Path>) -> Option<PathBuf> {
    let path = resolve_path(path, "ttstalk_batch", "csv");
    match write_batch_csv(records, &path) {
        Ok(()) => Some(path),
        Err(e) => {
            tracing::error!("batch csv export to {} failed: {}", path.display(), e);
            None
        }
    }
}

fn resolve_path(path: Option<&Path>, prefix: &str, ext: &str) -> PathBuf {
    match path {
        Some(p) => p.to_path_buf(),
        None => default_filename(prefix, ext),
    }
}

/// Timestamp-derived default filename, filesystem-safe (no `:` or `.` in
/// the stamp).
fn default_filename(prefix: &str, ext: &str) -> PathBuf {
    let stamp = Local::now().format("%Y-%m-%dT%H-%M-%S");
    PathBuf::from(format!("{}_{}.{}", prefix, stamp, ext))
}

fn write_json<T: Serialize>(value: &T, path: &Path) -> Result<(), StalkError> {
    let json = serde_json::to_string_pretty(value)?;
    fs::write(path, json)?;
    Ok(())
}

fn write_csv(record: &ProfileRecord, path: &Path) -> Result<(), StalkError> {
    let mut wtr = csv::Writer::from_path(path)?;
    wtr.write_record(["Field", "Value"])?;
    for (field, value) in csv_rows(record) {
        wtr.write_record([field, value.as_str()])?;
    }
    wtr.flush().map_err(StalkError::Io)?;
    Ok(())
}

fn write_batch_csv(records: &[ProfileRecord], path: &Path) -> Result<(), StalkError> {
    let mut wtr = csv::Writer::from_path(path)?;
    wtr.write_record([
        "Handle",
        "Nickname",
        "Followers",
        "Following",
        "Videos",
        "Verified",
    ])?;
    for record in records {
        wtr.write_record([
            text(&record.unique_id),
            text(&record.nickname),
            num(record.stats.follower_count),
            num(record.stats.following_count),
            num(record.stats.video_count),
            record.verified.unwrap_or(false).to_string(),
        ])?;
    }
    wtr.flush().map_err(StalkError::Io)?;
    Ok(())
}

/// The fixed single-record layout: identity, flags, locale, creation
/// time, then the six primary statistics. Exactly 16 rows.
fn csv_rows(record: &ProfileRecord) -> Vec<(&'static str, String)> {
    vec![
        ("ID", text(&record.id)),
        ("Short ID", text(&record.short_id)),
        ("Unique ID", text(&record.unique_id)),
        ("Nickname", text(&record.nickname)),
        ("Signature", record.signature.clone()),
        ("Verified", record.verified.unwrap_or(false).to_string()),
        (
            "Private Account",
            record.private_account.unwrap_or(false).to_string(),
        ),
        ("Region", text(&record.region)),
        ("Language", text(&record.language)),
        ("Created", record.create_time.clone()),
        ("Followers", num(record.stats.follower_count)),
        ("Following", num(record.stats.following_count)),
        ("Hearts", num(record.stats.heart_count)),
        ("Videos", num(record.stats.video_count)),
        ("Diggs", num(record.stats.digg_count)),
        ("Friends", num(record.stats.friend_count)),
    ]
}

fn text(value: &Option<String>) -> String {
    value.clone().unwrap_or_default()
}

fn num(value: Option<i64>) -> String {
    value.unwrap_or(0).to_string()
}
