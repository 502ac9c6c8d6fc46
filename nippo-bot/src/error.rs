#[derive(Debug, thiserror::Error)]
pub enum DeliveryError {
    #[error("Discord API error: {0}")]
    Discord(#[from] serenity::Error),
}

pub type DeliveryResult<T> = Result<T, DeliveryError>;
