use std::sync::Arc;

use chrono::{Duration, NaiveTime, Utc};
use nippo_ai::{NippoAiResult, Summarizer};
use nippo_bot::ReportSender;
use nippo_collector::{Collector, jst};
use serenity::http::Http;

/// One scheduled run: collect the window's log, summarize it, deliver the
/// report. Holds the run-in-progress lock that serializes overlapping
/// scheduler firings.
pub(crate) struct Reporter<S: Summarizer> {
    collector: Collector,
    summarizer: S,
    sender: ReportSender,
    run_lock: tokio::sync::Mutex<()>,
}

impl<S: Summarizer> Reporter<S> {
    pub fn new(collector: Collector, summarizer: S, sender: ReportSender) -> Self {
        Self {
            collector,
            summarizer,
            sender,
            run_lock: tokio::sync::Mutex::new(()),
        }
    }

    /// Scheduler entry point. At most one run executes at a time; an
    /// overlapping firing is skipped, not queued.
    pub async fn tick(&self, http: &Arc<Http>) {
        let Ok(_guard) = self.run_lock.try_lock() else {
            tracing::warn!("previous report run still in progress, skipping this firing");
            return;
        };

        if let Err(error) = self.run(http).await {
            tracing::error!(%error, "report run aborted");
        }
    }

    async fn run(&self, http: &Arc<Http>) -> anyhow::Result<()> {
        let now = Utc::now().with_timezone(&jst());
        let target_date_start = now
            .with_time(NaiveTime::MIN)
            .single()
            .expect("fixed offset has no ambiguous times");
        // The prior day rides along as disambiguating context only.
        let window_start = target_date_start - Duration::days(1);
        let target_date = target_date_start.format("%Y/%m/%d").to_string();

        tracing::info!(%target_date, "starting log collection");

        if !self.destinations_resolvable(http).await {
            return Ok(());
        }

        let server_log = self
            .collector
            .collect(
                http,
                window_start.with_timezone(&Utc),
                now.with_timezone(&Utc),
            )
            .await?;

        let Some(report) = generate_report(&self.summarizer, &server_log, &target_date).await?
        else {
            return Ok(());
        };

        self.sender.deliver(http, &target_date, &report).await?;

        Ok(())
    }

    /// An unresolvable guild or summary channel skips the run instead of
    /// failing it.
    async fn destinations_resolvable(&self, http: &Arc<Http>) -> bool {
        if let Err(error) = http.get_guild(self.collector.guild_id()).await {
            tracing::error!(%error, "guild not resolvable, skipping run");
            return false;
        }

        if let Err(error) = http.get_channel(self.sender.channel_id()).await {
            tracing::error!(%error, "summary channel not resolvable, skipping run");
            return false;
        }

        true
    }
}

/// An empty aggregate log never reaches the completion endpoint.
pub(crate) async fn generate_report<S: Summarizer>(
    summarizer: &S,
    server_log: &str,
    target_date: &str,
) -> NippoAiResult<Option<String>> {
    if server_log.trim().is_empty() {
        tracing::info!("no qualifying messages found in the collection window");
        return Ok(None);
    }

    Ok(Some(summarizer.summarize(server_log, target_date).await?))
}
