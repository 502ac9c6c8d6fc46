#[derive(Clone, serde::Deserialize)]
pub struct Config {
    pub guild_id: u64,

    /// Containers the collector must never read.
    #[serde(default)]
    pub excluded_channel_ids: Vec<u64>,
}
