use std::time::Duration;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum EnumerationError {
    #[error("Process query exited with status {status:?}: {stderr}")]
    CommandFailed {
        status: Option<i32>,
        stderr: String,
    },

    #[error("Process query timed out after {0:?}")]
    TimedOut(Duration),

    #[error("Process enumeration is not supported on {0}")]
    Unsupported(&'static str),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, EnumerationError>;
