pub mod openai;

mod config;
mod error;

#[cfg(test)]
mod tests;

pub use config::Config;
pub use error::*;

/// Turns one run's aggregate log into the daily report text for the given
/// target date label.
pub trait Summarizer {
    fn summarize(
        &self,
        server_log: &str,
        target_date: &str,
    ) -> impl Future<Output = NippoAiResult<String>>;
}
