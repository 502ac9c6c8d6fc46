pub(crate) mod report;
pub(crate) mod scheduler;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use nippo_ai::openai::OpenAiClient;
use nippo_bot::ReportSender;
use nippo_collector::Collector;
use serenity::all::{Client, Context, EventHandler, GatewayIntents, Ready};
use serenity::async_trait;

use crate::config::Config;
use crate::service::report::Reporter;

pub(crate) struct ReportService {
    config: Config,
}

impl ReportService {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub async fn run(self) -> anyhow::Result<()> {
        let Config {
            discord_token,
            ai,
            mut collector,
            report,
        } = self.config;

        // The channel reports are posted to is never collected from.
        collector.excluded_channel_ids.push(report.summary_channel_id);

        let reporter = Arc::new(Reporter::new(
            Collector::new(collector),
            OpenAiClient::new(&ai),
            ReportSender::new(report.summary_channel_id),
        ));

        let intents = GatewayIntents::GUILDS
            | GatewayIntents::GUILD_MESSAGES
            | GatewayIntents::MESSAGE_CONTENT;

        let handler = Handler {
            reporter,
            schedule: (report.hour, report.minute),
            scheduler_started: AtomicBool::new(false),
        };

        let mut client = Client::builder(&discord_token, intents)
            .event_handler(handler)
            .await?;

        client.start().await?;

        Ok(())
    }
}

struct Handler {
    reporter: Arc<Reporter<OpenAiClient>>,
    schedule: (u32, u32),
    scheduler_started: AtomicBool,
}

#[async_trait]
impl EventHandler for Handler {
    async fn ready(&self, ctx: Context, ready: Ready) {
        tracing::info!(user = %ready.user.name, "logged in");

        // `ready` fires again on every reconnect; only one scheduler loop
        // may exist per process.
        if self.scheduler_started.swap(true, Ordering::SeqCst) {
            return;
        }

        let reporter = Arc::clone(&self.reporter);
        let http = Arc::clone(&ctx.http);
        let (hour, minute) = self.schedule;

        tokio::spawn(scheduler::run_daily(reporter, http, hour, minute));
    }
}
