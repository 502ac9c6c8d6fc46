use chrono::{DateTime, FixedOffset, Utc};

const JST_OFFSET_SECS: i32 = 9 * 3600;
const DISCORD_EPOCH_MS: i64 = 1_420_070_400_000;

/// Fixed UTC+9 offset used for all rendered timestamps. No DST.
pub fn jst() -> FixedOffset {
    FixedOffset::east_opt(JST_OFFSET_SECS).expect("UTC+9 is a valid offset")
}

/// Automated senders and blank messages never make it into a log fragment.
pub(crate) fn keep_message(author_is_bot: bool, content: &str) -> bool {
    !author_is_bot && !content.trim().is_empty()
}

pub(crate) fn in_window(t: DateTime<Utc>, start: DateTime<Utc>, end: DateTime<Utc>) -> bool {
    start <= t && t < end
}

/// Smallest snowflake a message created at `t` can carry, for use as an
/// `after` pagination cursor.
pub(crate) fn snowflake_at(t: DateTime<Utc>) -> u64 {
    let ms = t.timestamp_millis().saturating_sub(DISCORD_EPOCH_MS).max(0) as u64;
    ms << 22
}

pub(crate) fn render_line(author: &str, created_at: DateTime<Utc>, content: &str) -> String {
    let stamp = created_at.with_timezone(&jst()).format("%m/%d %H:%M");
    format!("[{stamp}] {author}: {content}\n")
}
