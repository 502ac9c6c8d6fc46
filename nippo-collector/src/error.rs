#[derive(Debug, thiserror::Error)]
pub enum CollectorError {
    #[error("Discord API error: {0}")]
    Discord(#[from] serenity::Error),
}

pub type CollectorResult<T> = Result<T, CollectorError>;
