use chrono::{TimeZone, Utc};
use serenity::all::ChannelId;

use crate::render::{in_window, keep_message, render_line, snowflake_at};
use crate::{Collector, Config};

#[test]
fn test_keep_message_drops_bots() {
    assert!(!keep_message(true, "morning roll call"));
    assert!(keep_message(false, "morning roll call"));
}

#[test]
fn test_keep_message_drops_blank_content() {
    assert!(!keep_message(false, ""));
    assert!(!keep_message(false, "   \n\t  "));
    assert!(keep_message(false, " x "));
}

#[test]
fn test_in_window_is_half_open() {
    let start = Utc.with_ymd_and_hms(2025, 3, 1, 0, 0, 0).unwrap();
    let end = Utc.with_ymd_and_hms(2025, 3, 2, 0, 0, 0).unwrap();

    assert!(in_window(start, start, end));
    assert!(in_window(
        Utc.with_ymd_and_hms(2025, 3, 1, 23, 59, 59).unwrap(),
        start,
        end
    ));
    assert!(!in_window(end, start, end));
    assert!(!in_window(
        Utc.with_ymd_and_hms(2025, 2, 28, 23, 59, 59).unwrap(),
        start,
        end
    ));
}

#[test]
fn test_render_line_converts_to_jst() {
    // 23:30 UTC on 03/01 is 08:30 JST on 03/02.
    let created_at = Utc.with_ymd_and_hms(2025, 3, 1, 23, 30, 0).unwrap();
    let line = render_line("tanaka", created_at, "おはようございます");
    assert_eq!(line, "[03/02 08:30] tanaka: おはようございます\n");
}

#[test]
fn test_snowflake_at_known_values() {
    // Discord epoch itself maps to snowflake 0.
    let epoch = Utc.with_ymd_and_hms(2015, 1, 1, 0, 0, 0).unwrap();
    assert_eq!(snowflake_at(epoch), 0);

    // One second past the epoch: 1000 ms shifted into the timestamp bits.
    let one_sec = Utc.with_ymd_and_hms(2015, 1, 1, 0, 0, 1).unwrap();
    assert_eq!(snowflake_at(one_sec), 1000 << 22);

    // Pre-epoch instants saturate to 0 instead of underflowing.
    let ancient = Utc.with_ymd_and_hms(2010, 1, 1, 0, 0, 0).unwrap();
    assert_eq!(snowflake_at(ancient), 0);
}

#[test]
fn test_snowflake_at_is_monotonic() {
    let a = Utc.with_ymd_and_hms(2025, 3, 1, 0, 0, 0).unwrap();
    let b = Utc.with_ymd_and_hms(2025, 3, 1, 0, 0, 1).unwrap();
    assert!(snowflake_at(a) < snowflake_at(b));
}

#[test]
fn test_excluded_channels_are_skipped() {
    let collector = Collector::new(Config {
        guild_id: 1,
        excluded_channel_ids: vec![42, 99],
    });

    assert!(collector.is_excluded(ChannelId::new(42)));
    assert!(collector.is_excluded(ChannelId::new(99)));
    assert!(!collector.is_excluded(ChannelId::new(7)));
}
