use spacebio_common::SpacebioError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum QueryError {
    #[error("Could not reach the answer service: {0}")]
    Http(#[from] reqwest::Error),

    #[error(transparent)]
    Client(#[from] SpacebioError),

    #[error("Answer service error [{status}]: {message}")]
    Api { status: u16, message: String },

    #[error("Unreadable answer: {0}")]
    Malformed(String),

    #[error("{0}")]
    InvalidInput(String),
}
