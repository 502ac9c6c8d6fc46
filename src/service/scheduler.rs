use std::sync::Arc;

use chrono::{DateTime, Duration, FixedOffset, NaiveTime, Utc};
use nippo_ai::Summarizer;
use nippo_collector::jst;
use serenity::http::Http;

use crate::service::report::Reporter;

/// Next occurrence of `hour:minute` JST strictly after `now`.
pub(crate) fn next_fire_time(
    now: DateTime<FixedOffset>,
    hour: u32,
    minute: u32,
) -> DateTime<FixedOffset> {
    let at = NaiveTime::from_hms_opt(hour, minute, 0).expect("schedule validated at startup");
    let mut next = now
        .with_time(at)
        .single()
        .expect("fixed offset has no ambiguous times");

    if next <= now {
        next += Duration::days(1);
    }

    next
}

/// Fires the report pipeline once a day at the configured JST wall-clock
/// time, forever. Failed runs are logged by the reporter; the loop itself
/// never exits.
pub(crate) async fn run_daily<S: Summarizer>(
    reporter: Arc<Reporter<S>>,
    http: Arc<Http>,
    hour: u32,
    minute: u32,
) {
    loop {
        let now = Utc::now().with_timezone(&jst());
        let next = next_fire_time(now, hour, minute);
        let wait = (next - now).to_std().unwrap_or_default();

        tracing::info!(fire_at = %next, "next daily report scheduled");
        tokio::time::sleep(wait).await;

        reporter.tick(&http).await;
    }
}
