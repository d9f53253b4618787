use thiserror::Error;

#[derive(Debug, Error)]
pub enum DeliveryError {
    #[error("Terminal command failed: {0}")]
    CommandFailed(String),

    #[error("Terminal is gone: {0}")]
    SessionGone(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

#[derive(Debug, Error)]
pub enum PatternError {
    #[error("Target application name is empty")]
    Empty,

    #[error("Invalid target application '{name}': {source}")]
    Invalid {
        name: String,
        #[source]
        source: regex::Error,
    },
}

pub type Result<T> = std::result::Result<T, DeliveryError>;
