mod config;
mod error;
mod render;

#[cfg(test)]
mod tests;

use std::sync::Arc;

use chrono::{DateTime, Utc};
pub use config::Config;
pub use error::*;
pub use render::jst;
use serenity::all::{ChannelId, ChannelType, GetMessages, GuildChannel, GuildId, MessageId};
use serenity::http::Http;

const PAGE_SIZE: u8 = 100;
const ARCHIVED_THREAD_LIMIT: u64 = 10;

/// Walks a guild's channels and forum posts and renders every qualifying
/// message in a time window into one aggregate log document.
pub struct Collector {
    config: Config,
}

impl Collector {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub fn guild_id(&self) -> GuildId {
        GuildId::new(self.config.guild_id)
    }

    /// Collects the aggregate log for the half-open window `[start, end)`,
    /// in channel order. Returns an empty string when nothing qualifies.
    pub async fn collect(
        &self,
        http: &Arc<Http>,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> CollectorResult<String> {
        let guild_id = self.guild_id();

        let mut channels: Vec<GuildChannel> =
            guild_id.channels(http).await?.into_values().collect();
        channels.sort_unstable_by_key(|c| (c.position, c.id));

        // One listing per run; threads are matched to their forum by parent id.
        let active_threads = guild_id.get_active_threads(http).await?.threads;

        tracing::debug!(
            channels = channels.len(),
            active_threads = active_threads.len(),
            "walking guild containers"
        );

        let mut document = String::new();
        for channel in &channels {
            if self.is_excluded(channel.id) {
                continue;
            }

            match channel.kind {
                ChannelType::Text => {
                    let log = self.container_log(http, channel.id, start, end).await?;
                    if !log.is_empty() {
                        document.push_str(&format!("\n### チャンネル: {}\n{log}", channel.name));
                    }
                }
                ChannelType::Forum => {
                    let log = self
                        .forum_log(http, channel, &active_threads, start, end)
                        .await?;
                    if !log.is_empty() {
                        document.push_str(&format!("\n### フォーラム: {}\n{log}", channel.name));
                    }
                }
                _ => (),
            }
        }

        Ok(document)
    }

    pub(crate) fn is_excluded(&self, channel_id: ChannelId) -> bool {
        self.config.excluded_channel_ids.contains(&channel_id.get())
    }

    async fn forum_log(
        &self,
        http: &Arc<Http>,
        forum: &GuildChannel,
        active_threads: &[GuildChannel],
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> CollectorResult<String> {
        let mut log = String::new();

        for thread in active_threads.iter().filter(|t| t.parent_id == Some(forum.id)) {
            let thread_log = self.container_log(http, thread.id, start, end).await?;
            if !thread_log.is_empty() {
                log.push_str(&format!("\n[投稿: {}]\n{thread_log}", thread.name));
            }
        }

        let archived = http
            .get_channel_archived_public_threads(forum.id, None, Some(ARCHIVED_THREAD_LIMIT))
            .await?;
        for thread in archived.threads.iter().take(ARCHIVED_THREAD_LIMIT as usize) {
            let thread_log = self.container_log(http, thread.id, start, end).await?;
            if !thread_log.is_empty() {
                log.push_str(&format!("\n[投稿(アーカイブ): {}]\n{thread_log}", thread.name));
            }
        }

        Ok(log)
    }

    /// Fetches one container's history for `[start, end)` via the paged
    /// message API, oldest first, and renders the kept records.
    async fn container_log(
        &self,
        http: &Arc<Http>,
        container: ChannelId,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> CollectorResult<String> {
        let mut log = String::new();
        // `after` is strict, so back off one below the window start; the
        // window filter drops anything over-fetched.
        let mut cursor = MessageId::new(render::snowflake_at(start).saturating_sub(1).max(1));

        loop {
            let mut page = container
                .messages(http, GetMessages::new().after(cursor).limit(PAGE_SIZE))
                .await?;
            if page.is_empty() {
                break;
            }

            // The API does not guarantee ordering across the `after` cursor.
            page.sort_unstable_by_key(|m| m.id);
            if let Some(last) = page.last() {
                cursor = last.id;
            }

            for message in &page {
                if !render::keep_message(message.author.bot, &message.content) {
                    continue;
                }
                let Some(created_at) =
                    DateTime::from_timestamp(message.timestamp.unix_timestamp(), 0)
                else {
                    continue;
                };
                if !render::in_window(created_at, start, end) {
                    continue;
                }
                log.push_str(&render::render_line(
                    message.author.display_name(),
                    created_at,
                    &message.content,
                ));
            }

            if page.len() < PAGE_SIZE as usize {
                break;
            }
        }

        Ok(log)
    }
}
