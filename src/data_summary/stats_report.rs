use crate::data_summary::player_stats_summary::PlayerStatsSummary;

use std::fmt;

/// Console rendering of a player summary.
impl fmt::Display for PlayerStatsSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== Stats for {} ===", self.player)?;
        writeln!(f, "Kills: {}", self.kills)?;
        writeln!(f, "Deaths: {}", self.deaths)?;
        writeln!(f, "K/D: {}", self.kd)?;
        writeln!(f, "Headshots: {} ({}%)", self.headshots, self.headshot_pct)?;
        writeln!(f, "Damage dealt: {}", self.damage)?;
        writeln!(f, "Accuracy: {}%", self.accuracy_pct)?;
        writeln!(f, "Engagements: {}", self.engagements)?;
        writeln!(f, "Kills per engagement: {}", self.kills_per_engagement)?;

        writeln!(f)?;
        writeln!(f, "--- Kills by Weapon ---")?;
        for (weapon, kills) in self.weapons.iter() {
            writeln!(f, "{:15} {}", weapon, kills)?;
        }

        writeln!(f)?;
        write!(f, "Heatmap points recorded: {}", self.kill_positions.len())
    }
}

/// Renders the numbered player menu.
pub fn player_menu<S: AsRef<str>>(names: &[S]) -> String {
    let mut menu = String::from("=== Players Found ===\n");
    for (index, name) in names.iter().enumerate() {
        menu.push_str(&format!("[{}] {}\n", index + 1, name.as_ref()));
    }
    menu
}
