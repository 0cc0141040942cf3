//! Locates and parses the JSON blob embedded in a profile page.
//!
//! Profile pages inline their server-rendered state in a single script
//! tag. The user-info object inside that payload moves around as the
//! upstream page evolves, so the lookup is an ordered list of strategies
//! evaluated in sequence; the first one yielding a non-empty user object
//! wins. The primary key path is authoritative, the key-marker scan is
//! best-effort tolerance.

use regex::Regex;
use serde_json::Value;

use crate::types::RawUserInfo;
use crate::Error;

const EMBED_MARKER: &str = "__UNIVERSAL_DATA_FOR_REHYDRATION__";
const PRIMARY_SCOPE: &str = "__DEFAULT_SCOPE__";
const PRIMARY_KEY: &str = "webapp.user-detail";
const FALLBACK_MARKERS: &[&str] = &["user-detail", "userDetail"];

/// Ordered user-info lookup strategies. Extend here when the upstream
/// payload grows a new shape.
const LOOKUPS: &[fn(&Value) -> Option<Value>] = &[lookup_primary, lookup_marker_scan];

/// Extracts the embedded payload from `html` and returns the raw
/// user-info object.
pub fn extract_user_info(html: &str) -> Result<RawUserInfo, Error> {
    let payload = embedded_payload(html)?;
    let info = locate_user_info(&payload)?;
    Ok(serde_json::from_value(info)?)
}

/// Captures and parses the embedded JSON document.
pub fn embedded_payload(html: &str) -> Result<Value, Error> {
    let re = Regex::new(&format!(
        r#"(?s)<script id="{}" type="application/json">(.*?)</script>"#,
        EMBED_MARKER
    ))
    .map_err(|e| Error::Parse(format!("embed regex compile error: {}", e)))?;
    let caps = re.captures(html).ok_or(Error::MissingEmbeddedData)?;
    let raw = caps
        .get(1)
        .ok_or(Error::MissingEmbeddedData)?
        .as_str();
    Ok(serde_json::from_str(raw)?)
}

fn locate_user_info(payload: &Value) -> Result<Value, Error> {
    for lookup in LOOKUPS {
        if let Some(info) = lookup(payload) {
            if has_user(&info) {
                return Ok(info);
            }
        }
    }
    Err(Error::UserNotFound)
}

/// Primary path: `__DEFAULT_SCOPE__` → `webapp.user-detail` → `userInfo`.
fn lookup_primary(payload: &Value) -> Option<Value> {
    payload
        .get(PRIMARY_SCOPE)?
        .get(PRIMARY_KEY)?
        .get("userInfo")
        .cloned()
}

/// Fallback: scan top-level keys whose name contains a known marker and
/// take the first one carrying a non-empty user object.
fn lookup_marker_scan(payload: &Value) -> Option<Value> {
    let obj = payload.as_object()?;
    for (key, value) in obj {
        if !FALLBACK_MARKERS.iter().any(|m| key.contains(m)) {
            continue;
        }
        if let Some(info) = value.get("userInfo") {
            if has_user(info) {
                return Some(info.clone());
            }
        }
    }
    None
}

fn has_user(info: &Value) -> bool {
    info.get("user")
        .and_then(Value::as_object)
        .is_some_and(|user| !user.is_empty())
}
