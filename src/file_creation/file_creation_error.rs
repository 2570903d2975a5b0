use thiserror::Error;

/// Errors that may occur while exporting a summary.
///
/// # Variants
///
/// * `Serialization` - The summary could not be serialized.
/// * `FileCreation` - The output file could not be created.
/// * `FileWrite` - The output file could not be written.
#[derive(Debug, Error)]
pub enum FileCreationError {
    #[error("could not serialize stats: {0}")]
    Serialization(#[source] serde_json::Error),
    #[error("could not create file: {0}")]
    FileCreation(#[source] std::io::Error),
    #[error("could not write file: {0}")]
    FileWrite(#[source] std::io::Error),
}
