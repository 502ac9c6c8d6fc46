mod error;
mod utils;


use std::sync::Arc;

pub use error::*;
use serenity::all::ChannelId;
use serenity::http::Http;
pub use utils::{DISCORD_MAX_LENGTH, compose_report, split_discord_message};

/// Posts a finished report into the summary channel, in order, one
/// size-capped segment per message.
pub struct ReportSender {
    channel_id: ChannelId,
}

impl ReportSender {
    pub fn new(summary_channel_id: u64) -> Self {
        Self {
            channel_id: ChannelId::new(summary_channel_id),
        }
    }

    pub fn channel_id(&self) -> ChannelId {
        self.channel_id
    }

    pub async fn deliver(
        &self,
        http: &Arc<Http>,
        target_date: &str,
        report: &str,
    ) -> DeliveryResult<()> {
        let segments = compose_report(target_date, report);
        let count = segments.len();

        for segment in segments {
            self.channel_id.say(http, segment).await?;
        }

        tracing::info!(%target_date, segments = count, "report delivered");
        Ok(())
    }
}
