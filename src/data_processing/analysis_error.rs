use thiserror::Error;

/// Failures of the stats pipeline that are shown to the user.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AnalysisError {
    /// The replay has no kill events, so there is nothing to analyse.
    #[error("No kill data found.")]
    NoData,
    /// The selection matched neither a menu number nor a player name.
    #[error("Invalid selection: {0:?}")]
    InvalidSelection(String),
}
