pub mod data_loading;
pub mod data_processing;
pub mod data_summary;
pub mod file_creation;

use crate::data_processing::analysis_error::AnalysisError;
use crate::data_processing::data_processor::process_events;
use crate::data_processing::event_record::ReplayEvents;
use crate::data_summary::data_summarizer::summarize;
use crate::data_summary::player_stats_summary::PlayerStatsSummary;

/// Runs the whole pipeline for one player without any console interaction.
///
/// # Arguments
///
/// * `events` - The decoded replay events.
/// * `selection` - A 1-based menu number or an exact player name.
///
/// # Returns
///
/// The selected player's summary, `AnalysisError::NoData` if the replay has no kills,
/// or `AnalysisError::InvalidSelection` if no player matches `selection`.
pub fn summarize_player(
    events: ReplayEvents,
    selection: &str,
) -> Result<PlayerStatsSummary, AnalysisError> {
    let roster = process_events(events)?;
    let (player, stats) = roster.select(selection)?;
    Ok(summarize(player, stats))
}
