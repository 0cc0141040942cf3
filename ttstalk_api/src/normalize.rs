//! Pure mapping from the embedded user-info shape to a [`ProfileRecord`].

use chrono::{Local, LocalResult, TimeZone};

use crate::types::{ProfileRecord, ProfileStats, ProfileStatsV2, RawUserInfo};

/// Rendered in place of absent or blank values.
pub const PLACEHOLDER: &str = "-";

/// Flattens a raw user-info object into the stable record shape.
///
/// Total on any well-formed input and idempotent: no I/O, no defaults for
/// absent counts, only the signature and the two timestamps are rewritten.
pub fn normalize(info: RawUserInfo) -> ProfileRecord {
    let RawUserInfo {
        user,
        stats,
        stats_v2,
    } = info;

    ProfileRecord {
        id: user.id,
        short_id: user.short_id,
        unique_id: user.unique_id,
        nickname: user.nickname,
        signature: normalize_signature(user.signature.as_deref()),
        create_time: format_timestamp(user.create_time),
        nick_name_modify_time: format_timestamp(user.nick_name_modify_time),
        verified: user.verified,
        private_account: user.private_account,
        region: user.region,
        language: user.language,
        sec_uid: user.sec_uid,
        avatar_larger: user.avatar_larger,
        avatar_medium: user.avatar_medium,
        avatar_thumb: user.avatar_thumb,
        stats: ProfileStats {
            follower_count: stats.follower_count,
            following_count: stats.following_count,
            heart: stats.heart,
            heart_count: stats.heart_count,
            video_count: stats.video_count,
            digg_count: stats.digg_count,
            friend_count: stats.friend_count,
        },
        stats_v2: ProfileStatsV2 {
            follower_count: stats_v2.follower_count,
            following_count: stats_v2.following_count,
            heart: stats_v2.heart,
            heart_count: stats_v2.heart_count,
            video_count: stats_v2.video_count,
            digg_count: stats_v2.digg_count,
            friend_count: stats_v2.friend_count,
        },
    }
}

/// Renders an epoch-seconds timestamp as a local date-time string.
///
/// Absent or zero input yields the placeholder; a value `chrono` cannot
/// place on the local timeline falls back to the raw number as text.
pub fn format_timestamp(ts: Option<i64>) -> String {
    let Some(secs) = ts.filter(|&t| t != 0) else {
        return PLACEHOLDER.to_string();
    };
    match Local.timestamp_opt(secs, 0) {
        LocalResult::Single(dt) => dt.format("%Y-%m-%d %H:%M:%S").to_string(),
        LocalResult::Ambiguous(dt, _) => dt.format("%Y-%m-%d %H:%M:%S").to_string(),
        LocalResult::None => secs.to_string(),
    }
}

fn normalize_signature(signature: Option<&str>) -> String {
    match signature.map(str::trim) {
        Some(s) if !s.is_empty() => s.to_string(),
        _ => PLACEHOLDER.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{RawStats, RawUser};

    fn sample_info() -> RawUserInfo {
        RawUserInfo {
            user: RawUser {
                id: Some("107955".to_string()),
                unique_id: Some("alice".to_string()),
                nickname: Some("Alice".to_string()),
                signature: Some("  living my best life  ".to_string()),
                create_time: Some(1_546_300_800),
                verified: Some(true),
                ..RawUser::default()
            },
            stats: RawStats {
                follower_count: Some(1500),
                video_count: Some(42),
                ..RawStats::default()
            },
            stats_v2: Default::default(),
        }
    }

    #[test]
    fn signature_is_trimmed() {
        let record = normalize(sample_info());
        assert_eq!(record.signature, "living my best life");
    }

    #[test]
    fn blank_signature_becomes_placeholder() {
        let mut info = sample_info();
        info.user.signature = Some("   ".to_string());
        assert_eq!(normalize(info).signature, PLACEHOLDER);

        let mut info = sample_info();
        info.user.signature = None;
        assert_eq!(normalize(info).signature, PLACEHOLDER);
    }

    #[test]
    fn absent_counts_stay_absent() {
        let record = normalize(sample_info());
        assert_eq!(record.stats.follower_count, Some(1500));
        assert_eq!(record.stats.following_count, None);
        assert_eq!(record.stats.heart_count, None);
        assert_eq!(record.short_id, None);
        assert_eq!(record.region, None);
    }

    #[test]
    fn normalize_is_idempotent() {
        let first = normalize(sample_info());
        let second = normalize(sample_info());
        assert_eq!(first, second);
    }

    #[test]
    fn zero_and_absent_timestamps_are_placeholders() {
        assert_eq!(format_timestamp(None), PLACEHOLDER);
        assert_eq!(format_timestamp(Some(0)), PLACEHOLDER);
    }

    #[test]
    fn valid_timestamp_renders_a_date() {
        let rendered = format_timestamp(Some(1_546_300_800));
        assert_ne!(rendered, PLACEHOLDER);
        assert!(rendered.starts_with("201"), "unexpected: {}", rendered);
    }

    #[test]
    fn unrepresentable_timestamp_falls_back_to_raw_number() {
        // Far outside chrono's supported range.
        let rendered = format_timestamp(Some(i64::MAX / 2));
        assert_eq!(rendered, (i64::MAX / 2).to_string());
    }
}
