use std::io;

use thiserror::Error;

/// Errors originating from trace loading and playback setup.
#[derive(Debug, Error)]
pub enum TraceError {
    #[error("failed to read trace file: {0}")]
    Io(#[from] io::Error),

    #[error("failed to parse trace: {0}")]
    Parse(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, TraceError>;
