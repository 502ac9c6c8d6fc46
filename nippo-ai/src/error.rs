#[derive(Debug, thiserror::Error)]
pub enum NippoAiError {
    #[error("Request error: {0}")]
    Request(#[from] reqwest::Error),

    #[error("API error: {0}")]
    Api(String),
}

pub type NippoAiResult<T> = Result<T, NippoAiError>;
