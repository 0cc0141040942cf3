use tabled::{Table, Tabled};
use ttstalk_lib::analytics::HistorySummary;
use ttstalk_lib::ttstalk_api::Error as ApiError;
use ttstalk_lib::{HistoryEntry, ProfileRecord};

/// How many history rows the display shows before truncating.
const HISTORY_DISPLAY_LIMIT: usize = 10;

#[derive(Tabled)]
struct FieldRow {
    #[tabled(rename = "Field")]
    field: String,
    #[tabled(rename = "Value")]
    value: String,
}

#[derive(Tabled)]
struct HistoryRow {
    #[tabled(rename = "When")]
    when: String,
    #[tabled(rename = "Handle")]
    handle: String,
    #[tabled(rename = "Nickname")]
    nickname: String,
    #[tabled(rename = "Followers")]
    followers: String,
    #[tabled(rename = "Videos")]
    videos: String,
    #[tabled(rename = "Verified")]
    verified: String,
}

#[derive(Tabled)]
struct BatchRow {
    #[tabled(rename = "Handle")]
    handle: String,
    #[tabled(rename = "Nickname")]
    nickname: String,
    #[tabled(rename = "Followers")]
    followers: String,
    #[tabled(rename = "Following")]
    following: String,
    #[tabled(rename = "Videos")]
    videos: String,
    #[tabled(rename = "Verified")]
    verified: String,
}

// -- Row builders --

fn field_row(field: &str, value: String) -> FieldRow {
    FieldRow {
        field: field.to_string(),
        value,
    }
}

fn build_profile_rows(record: &ProfileRecord) -> Vec<FieldRow> {
    vec![
        field_row("ID", opt_text(&record.id)),
        field_row("Short ID", opt_text(&record.short_id)),
        field_row("Unique ID", opt_text(&record.unique_id)),
        field_row("Nickname", opt_text(&record.nickname)),
        field_row("Signature", record.signature.clone()),
        field_row("Verified", opt_bool(record.verified)),
        field_row("Private Account", opt_bool(record.private_account)),
        field_row("Region", opt_text(&record.region)),
        field_row("Language", opt_text(&record.language)),
        field_row("SecUid", opt_text(&record.sec_uid)),
        field_row("Avatar (large)", opt_text(&record.avatar_larger)),
        field_row("Avatar (medium)", opt_text(&record.avatar_medium)),
        field_row("Avatar (thumb)", opt_text(&record.avatar_thumb)),
        field_row("Created", record.create_time.clone()),
        field_row("Nickname Changed", record.nick_name_modify_time.clone()),
    ]
}

fn build_stats_rows(record: &ProfileRecord) -> Vec<FieldRow> {
    vec![
        field_row("Followers", opt_num(record.stats.follower_count)),
        field_row("Following", opt_num(record.stats.following_count)),
        field_row("Hearts", opt_num(record.stats.heart)),
        field_row("Heart Count", opt_num(record.stats.heart_count)),
        field_row("Videos", opt_num(record.stats.video_count)),
        field_row("Diggs", opt_num(record.stats.digg_count)),
        field_row("Friends", opt_num(record.stats.friend_count)),
    ]
}

fn build_history_rows(entries: &[HistoryEntry]) -> Vec<HistoryRow> {
    entries
        .iter()
        .map(|e| HistoryRow {
            when: e.stalked_at.clone(),
            handle: e.unique_id.clone(),
            nickname: e.nickname.clone(),
            followers: opt_num(e.follower_count),
            videos: opt_num(e.video_count),
            verified: if e.verified { "yes" } else { "no" }.to_string(),
        })
        .collect()
}

fn build_batch_rows(records: &[ProfileRecord]) -> Vec<BatchRow> {
    records
        .iter()
        .map(|r| BatchRow {
            handle: opt_text(&r.unique_id),
            nickname: opt_text(&r.nickname),
            followers: opt_num(r.stats.follower_count),
            following: opt_num(r.stats.following_count),
            videos: opt_num(r.stats.video_count),
            verified: opt_bool(r.verified),
        })
        .collect()
}

fn build_summary_rows(summary: &HistorySummary) -> Vec<FieldRow> {
    let mut rows = vec![
        field_row("Total lookups", summary.total_lookups.to_string()),
        field_row("Distinct handles", summary.distinct_handles.to_string()),
        field_row("Verified", summary.verified_count.to_string()),
        field_row("Total followers", summary.total_followers.to_string()),
        field_row("Average followers", summary.average_followers.to_string()),
    ];
    if let Some(top) = &summary.top_handle {
        rows.push(field_row(
            "Top handle",
            format!("{} ({} followers)", top.unique_id, top.follower_count),
        ));
    }
    rows
}

// -- Printing --

pub fn print_profile(record: &ProfileRecord) {
    println!("{}", Table::new(build_profile_rows(record)));
    println!("Stats:");
    println!("{}", Table::new(build_stats_rows(record)));
}

pub fn print_history(entries: &[HistoryEntry]) {
    if entries.is_empty() {
        println!("No history yet.");
        return;
    }
    let shown = entries.len().min(HISTORY_DISPLAY_LIMIT);
    println!("{}", Table::new(build_history_rows(&entries[..shown])));
    if entries.len() > shown {
        println!("({} more)", entries.len() - shown);
    }
}

pub fn print_batch(records: &[ProfileRecord]) {
    if records.is_empty() {
        println!("No profiles fetched.");
        return;
    }
    println!("{}", Table::new(build_batch_rows(records)));
}

pub fn print_summary(summary: &HistorySummary) {
    println!("{}", Table::new(build_summary_rows(summary)));
}

pub fn print_json<T: serde::Serialize>(data: &T) {
    match serde_json::to_string_pretty(data) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Failed to serialize to JSON: {}", e),
    }
}

/// One user-facing line classifying a failed lookup. A status above 400
/// means the profile does not exist or is blocked, which is reported
/// distinctly from transport and extraction failures.
pub fn describe_fetch_error(handle: &str, err: &ApiError) -> String {
    match err {
        ApiError::HttpStatus { status } if status.as_u16() > 400 => {
            format!("user {} not found or forbidden (status {})", handle, status)
        }
        ApiError::HttpStatus { status } => {
            format!("unexpected status {} for {}", status, handle)
        }
        ApiError::MissingEmbeddedData | ApiError::UserNotFound => {
            format!("no profile data found for {}: {}", handle, err)
        }
        _ => format!("failed to fetch {}: {}", handle, err),
    }
}

fn opt_text(value: &Option<String>) -> String {
    value.clone().unwrap_or_else(|| "-".to_string())
}

fn opt_num(value: Option<i64>) -> String {
    value.map_or_else(|| "-".to_string(), |n| n.to_string())
}

fn opt_bool(value: Option<bool>) -> String {
    match value {
        Some(true) => "yes".to_string(),
        Some(false) => "no".to_string(),
        None => "-".to_string(),
    }
}
