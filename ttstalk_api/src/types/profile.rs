//! Profile types: the raw embedded page shapes and the normalized record.

use serde::{Deserialize, Serialize};

/// The `userInfo` object as embedded in a profile page.
///
/// Every field is optional; the upstream page shape is not contractually
/// stable, so absent sub-objects default to empty rather than failing
/// deserialization.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawUserInfo {
    #[serde(default)]
    pub user: RawUser,
    #[serde(default)]
    pub stats: RawStats,
    #[serde(default, rename = "statsV2")]
    pub stats_v2: RawStatsV2,
}

/// The `user` sub-object of the embedded payload.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawUser {
    pub id: Option<String>,
    pub short_id: Option<String>,
    pub unique_id: Option<String>,
    pub nickname: Option<String>,
    pub signature: Option<String>,
    /// Profile creation time, epoch seconds.
    pub create_time: Option<i64>,
    /// Last nickname change, epoch seconds.
    #[serde(rename = "nickNameModifyTime")]
    pub nick_name_modify_time: Option<i64>,
    pub verified: Option<bool>,
    pub private_account: Option<bool>,
    pub region: Option<String>,
    pub language: Option<String>,
    pub sec_uid: Option<String>,
    pub avatar_larger: Option<String>,
    pub avatar_medium: Option<String>,
    pub avatar_thumb: Option<String>,
}

/// The numeric `stats` block.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawStats {
    pub follower_count: Option<i64>,
    pub following_count: Option<i64>,
    pub heart: Option<i64>,
    pub heart_count: Option<i64>,
    pub video_count: Option<i64>,
    pub digg_count: Option<i64>,
    pub friend_count: Option<i64>,
}

/// The alternate `statsV2` block. Upstream serves these counts as strings.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawStatsV2 {
    pub follower_count: Option<String>,
    pub following_count: Option<String>,
    pub heart: Option<String>,
    pub heart_count: Option<String>,
    pub video_count: Option<String>,
    pub digg_count: Option<String>,
    pub friend_count: Option<String>,
}

/// The normalized, flattened profile record, independent of the upstream
/// page's internal shape.
///
/// Fields absent in the source stay `None`; display and export layers each
/// decide how to render missing values. The two exceptions are `signature`
/// (never empty, `-` placeholder) and the two timestamps (pre-rendered as
/// local date-time strings, `-` when the source value is absent or zero).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileRecord {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub short_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unique_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nickname: Option<String>,
    pub signature: String,
    pub create_time: String,
    pub nick_name_modify_time: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verified: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub private_account: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sec_uid: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_larger: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_medium: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_thumb: Option<String>,
    pub stats: ProfileStats,
    #[serde(rename = "statsV2")]
    pub stats_v2: ProfileStatsV2,
}

/// Normalized numeric statistics.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileStats {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub follower_count: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub following_count: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub heart: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub heart_count: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video_count: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub digg_count: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub friend_count: Option<i64>,
}

/// Normalized v2 statistics, kept string-typed as served upstream.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileStatsV2 {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub follower_count: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub following_count: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub heart: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub heart_count: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video_count: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub digg_count: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub friend_count: Option<String>,
}
