use crate::data_summary::player_stats_summary::PlayerStatsSummary;
use crate::file_creation::file_creation_error::FileCreationError;
use crate::file_creation::json_format::to_pretty_json;

use std::fs::File;
use std::io::BufWriter;
use std::io::Write;
use std::path::Path;
use tracing::info;

const FILE_SUFFIX: &str = "_demo_stats.json";

/// Default export file name for a player: `<player>_demo_stats.json`, spaces replaced by `_`.
pub fn export_file_name(player: &str) -> String {
    format!("{}{}", player, FILE_SUFFIX).replace(' ', "_")
}

/// Serializes a `PlayerStatsSummary` into a JSON string.
///
/// # Returns
///
/// A `Result` containing the serialized JSON string if successful, or a `FileCreationError` if serialization fails.
fn generate_json(summary: &PlayerStatsSummary) -> Result<String, FileCreationError> {
    to_pretty_json(summary).map_err(FileCreationError::Serialization)
}

/// Creates a JSON file from a `PlayerStatsSummary` and writes it to the specified path.
///
/// # Arguments
///
/// * `path` - The path to the file where the JSON will be written.
/// * `summary` - The player summary to export.
///
/// # Returns
///
/// A `Result` indicating success or failure. Errors are represented by `FileCreationError`.
pub fn create_json_file(path: &Path, summary: &PlayerStatsSummary) -> Result<(), FileCreationError> {
    let json_output = generate_json(summary)?;

    let file = File::create(path).map_err(FileCreationError::FileCreation)?;
    let mut writer = BufWriter::new(file);
    writer
        .write_all(json_output.as_bytes())
        .and_then(|_| writer.flush())
        .map_err(FileCreationError::FileWrite)?;

    info!(path = %path.display(), player = %summary.player, "exported player stats");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_processing::player_stats::KillPosition;
    use crate::data_processing::weapon_stats::WeaponTally;
    use serde_json::{json, Value};
    use std::fs;

    fn sample_summary() -> PlayerStatsSummary {
        let mut weapons = WeaponTally::new();
        weapons.record_kill("ak47");
        PlayerStatsSummary {
            player: "A".into(),
            kills: 1,
            deaths: 0,
            kd: 1.0,
            headshots: 1,
            headshot_pct: 100.0,
            damage: 0.0,
            accuracy_pct: 0.0,
            engagements: 1,
            kills_per_engagement: 1.0,
            weapons,
            kill_positions: vec![KillPosition { x: 10.0, y: 20.0 }],
        }
    }

    #[test]
    fn file_name_replaces_spaces() {
        assert_eq!(export_file_name("The Boss"), "The_Boss_demo_stats.json");
        assert_eq!(export_file_name("A"), "A_demo_stats.json");
    }

    #[test]
    fn json_has_export_keys_in_order() {
        let json = generate_json(&sample_summary()).unwrap();

        let keys: Vec<&str> = json
            .lines()
            .filter(|line| line.starts_with("    \"") && !line.starts_with("     "))
            .filter_map(|line| line.trim().split('"').nth(1))
            .collect();
        assert_eq!(
            keys,
            vec![
                "player",
                "kills",
                "deaths",
                "kd",
                "headshots",
                "headshot_pct",
                "damage",
                "accuracy_pct",
                "engagements",
                "kills_per_engagement",
                "weapons",
                "kill_positions"
            ]
        );
    }

    #[test]
    fn writes_summary_to_disk() {
        let path = std::env::temp_dir().join(format!("file_creator_{}.json", std::process::id()));

        create_json_file(&path, &sample_summary()).unwrap();

        let written: Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        fs::remove_file(&path).unwrap();
        assert_eq!(
            written,
            json!({
                "player": "A",
                "kills": 1,
                "deaths": 0,
                "kd": 1.0,
                "headshots": 1,
                "headshot_pct": 100.0,
                "damage": 0.0,
                "accuracy_pct": 0.0,
                "engagements": 1,
                "kills_per_engagement": 1.0,
                "weapons": { "ak47": 1 },
                "kill_positions": [{ "x": 10.0, "y": 20.0 }]
            })
        );
    }

    #[test]
    fn missing_directory_is_a_creation_error() {
        let path = std::env::temp_dir()
            .join("demo_stats_missing_dir")
            .join("nested")
            .join("out.json");

        let result = create_json_file(&path, &sample_summary());
        assert!(matches!(result, Err(FileCreationError::FileCreation(_))));
    }
}
