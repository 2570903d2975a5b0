use thiserror::Error;

/// Errors raised while reading a decoder dump.
#[derive(Debug, Error)]
pub enum EventLoadError {
    #[error("could not read events file: {0}")]
    Read(#[from] std::io::Error),
    #[error("events file is not a valid replay dump: {0}")]
    Parse(#[from] serde_json::Error),
}
