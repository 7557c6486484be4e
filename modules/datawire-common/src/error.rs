//! Recoverable errors. Contract violations panic instead.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DatawireError {
    #[error("Failed to decode delivery {tag}: {reason}")]
    Decode { tag: String, reason: String },

    #[error("Event carries no delivery")]
    MissingDelivery,

    #[error("Configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Anyhow(#[from] anyhow::Error),
}

pub type DatawireResult<T> = std::result::Result<T, DatawireError>;
