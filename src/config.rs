#[derive(serde::Deserialize)]
pub(crate) struct Config {
    pub discord_token: String,

    pub ai: nippo_ai::Config,
    pub collector: nippo_collector::Config,
    pub report: ReportConfig,
}

#[derive(Clone, serde::Deserialize)]
pub(crate) struct ReportConfig {
    pub summary_channel_id: u64,

    /// Daily fire time, JST wall clock.
    #[serde(default = "default_hour")]
    pub hour: u32,
    #[serde(default = "default_minute")]
    pub minute: u32,
}

fn default_hour() -> u32 {
    18
}

fn default_minute() -> u32 {
    30
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    pub fn new() -> Config {
        let env_config = config::Environment::default()
            .separator("__")
            .list_separator(";")
            .try_parsing(true);

        let mut conf_builder = config::Config::builder().add_source(env_config);

        if std::path::Path::new("Settings.toml").exists() {
            conf_builder = conf_builder.add_source(config::File::with_name("./Settings.toml"));
        }

        let config = conf_builder
            .build()
            .unwrap()
            .try_deserialize::<Config>()
            .unwrap_or_else(|e| panic!("Error parsing config: {e}"));

        assert!(
            config.report.hour < 24 && config.report.minute < 60,
            "REPORT__HOUR/REPORT__MINUTE out of range"
        );
        assert!(
            config.collector.guild_id != 0 && config.report.summary_channel_id != 0,
            "guild and summary channel ids must be non-zero"
        );

        config
    }
}
