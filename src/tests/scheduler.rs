use chrono::{Datelike, TimeZone, Timelike};
use nippo_collector::jst;

use crate::service::scheduler::next_fire_time;

#[test]
fn test_fires_later_today_when_before_the_schedule() {
    let now = jst().with_ymd_and_hms(2025, 3, 1, 10, 0, 0).unwrap();
    let next = next_fire_time(now, 18, 30);

    assert_eq!(next, jst().with_ymd_and_hms(2025, 3, 1, 18, 30, 0).unwrap());
}

#[test]
fn test_fires_tomorrow_when_past_the_schedule() {
    let now = jst().with_ymd_and_hms(2025, 3, 1, 19, 0, 0).unwrap();
    let next = next_fire_time(now, 18, 30);

    assert_eq!(next, jst().with_ymd_and_hms(2025, 3, 2, 18, 30, 0).unwrap());
}

#[test]
fn test_an_exact_hit_rolls_over_to_tomorrow() {
    let now = jst().with_ymd_and_hms(2025, 3, 1, 18, 30, 0).unwrap();
    let next = next_fire_time(now, 18, 30);

    assert_eq!(next, jst().with_ymd_and_hms(2025, 3, 2, 18, 30, 0).unwrap());
}

#[test]
fn test_rollover_crosses_month_boundaries() {
    let now = jst().with_ymd_and_hms(2025, 3, 31, 23, 0, 0).unwrap();
    let next = next_fire_time(now, 18, 30);

    assert_eq!(next.month(), 4);
    assert_eq!(next.day(), 1);
    assert_eq!((next.hour(), next.minute(), next.second()), (18, 30, 0));
}
