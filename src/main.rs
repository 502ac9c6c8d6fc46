mod config;
mod service;

#[cfg(test)]
mod tests;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let config = config::Config::new();

    tracing::info!(
        guild_id = config.collector.guild_id,
        summary_channel_id = config.report.summary_channel_id,
        "starting service"
    );

    service::ReportService::new(config).run().await
}
