//! Avatar image download.

use std::fs;
use std::path::{Path, PathBuf};

use ttstalk_api::{Client, ProfileRecord};

/// Default download directory, relative to the working directory.
pub const DEFAULT_AVATAR_DIR: &str = "avatars";

/// Downloads the best available avatar for `record` into `dir`.
///
/// Picks the largest resolution the record carries, writes
/// `<handle>_avatar<ext>` with the extension taken from the URL path
/// (`.jpg` when it has none). `dir` is created if absent. Failures are
/// logged and collapse to `None`.
pub async fn download_avatar(
    client: &Client,
    record: &ProfileRecord,
    dir: &Path,
) -> Option<PathBuf> {
    let handle = record.unique_id.as_deref().unwrap_or("unknown");
    let Some(url) = record
        .avatar_larger
        .as_deref()
        .or(record.avatar_medium.as_deref())
        .or(record.avatar_thumb.as_deref())
    else {
        tracing::warn!("no avatar url for {}", handle);
        return None;
    };

    let bytes = match client.fetch_bytes(url).await {
        Ok(bytes) => bytes,
        Err(e) => {
            tracing::error!("avatar download for {} failed: {}", handle, e);
            return None;
        }
    };

    if let Err(e) = fs::create_dir_all(dir) {
        tracing::error!("cannot create avatar dir {}: {}", dir.display(), e);
        return None;
    }

    let path = dir.join(format!("{}_avatar{}", handle, extension_from_url(url)));
    match fs::write(&path, bytes) {
        Ok(()) => Some(path),
        Err(e) => {
            tracing::error!("cannot write avatar {}: {}", path.display(), e);
            None
        }
    }
}

/// Extension of the URL's path segment, dot included. Query strings and
/// fragments are ignored; no extension defaults to `.jpg`.
fn extension_from_url(url: &str) -> String {
    let path = url.split(['?', '#']).next().unwrap_or(url);
    let file = path.rsplit('/').next().unwrap_or("");
    match file.rfind('.') {
        Some(idx) if idx + 1 < file.len() => format!(".{}", &file[idx + 1..]),
        _ => ".jpg".to_string(),
    }
}
