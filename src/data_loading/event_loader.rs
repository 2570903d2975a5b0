use crate::data_loading::event_load_error::EventLoadError;
use crate::data_processing::event_record::ReplayEvents;

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use tracing::info;

/// Loads the decoded replay events from a JSON dump on disk.
///
/// # Arguments
///
/// * `path` - A JSON object holding the `player_death`, `player_hurt` and `weapon_fire` sequences.
///
/// # Returns
///
/// The parsed `ReplayEvents`, or an `EventLoadError` if the file cannot be opened or parsed.
pub fn load_events(path: &Path) -> Result<ReplayEvents, EventLoadError> {
    let file = File::open(path)?;
    let events = read_events(BufReader::new(file))?;
    info!(
        path = %path.display(),
        kills = count(&events.kills),
        hurts = count(&events.hurts),
        shots = count(&events.shots),
        "loaded replay events"
    );
    Ok(events)
}

/// Parses replay events from any reader.
pub fn read_events<R: Read>(reader: R) -> Result<ReplayEvents, EventLoadError> {
    Ok(serde_json::from_reader(reader)?)
}

fn count<T>(events: &Option<Vec<T>>) -> usize {
    events.as_ref().map_or(0, Vec::len)
}
