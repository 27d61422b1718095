use thiserror::Error;

#[derive(Debug, Error)]
pub enum SpacebioError {
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Invalid endpoint URL: {0}")]
    InvalidUrl(String),

    #[error("Endpoint not permitted: {0}")]
    EndpointNotAllowed(String),
}

pub type Result<T> = std::result::Result<T, SpacebioError>;
