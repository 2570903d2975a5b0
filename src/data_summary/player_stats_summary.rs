use crate::data_processing::player_stats::KillPosition;
use crate::data_processing::weapon_stats::WeaponTally;

use serde::Serialize;

/// Exported combat summary of one player.
///
/// Field names and order are the layout of the exported JSON file.
///
/// # Fields
///
/// * `kd` - Kills per death, or the kill count when the player never died.
/// * `headshot_pct` - Share of kills that were headshots, in percent.
/// * `accuracy_pct` - Hits per shot fired, in percent.
/// * `kills_per_engagement` - Kills over kills plus deaths.
/// * `weapons` - Kills per weapon, most used first.
/// * `kill_positions` - Attacker position of each kill, in event order.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct PlayerStatsSummary {
    pub player: String,
    pub kills: u32,
    pub deaths: u32,
    pub kd: f64,
    pub headshots: u32,
    pub headshot_pct: f64,
    pub damage: f64,
    pub accuracy_pct: f64,
    pub engagements: u32,
    pub kills_per_engagement: f64,
    pub weapons: WeaponTally,
    pub kill_positions: Vec<KillPosition>,
}
