use crate::data_processing::weapon_stats::WeaponTally;
use serde::Serialize;

/// Attacker coordinates at the moment of a kill.
#[derive(Serialize, Debug, Clone, Copy, PartialEq)]
pub struct KillPosition {
    pub x: f64,
    pub y: f64,
}

/// Running combat totals for one player.
///
/// # Fields
///
/// * `kills` / `deaths` - Kill events where the player was attacker / victim.
/// * `headshots` - Kills flagged as headshots.
/// * `shots` - Weapon-fire events.
/// * `hits` - Hurt events where the player was the attacker.
/// * `damage` - Sum of the health damage of those hurt events.
/// * `engagements` - One per kill plus one per death.
/// * `weapons` - Kills per weapon.
/// * `kill_positions` - Attacker position of each kill that carried one, in event order.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct PlayerStats {
    pub(crate) kills: u32,
    pub(crate) deaths: u32,
    pub(crate) headshots: u32,
    pub(crate) shots: u32,
    pub(crate) hits: u32,
    pub(crate) damage: f64,
    pub(crate) engagements: u32,
    pub(crate) weapons: WeaponTally,
    pub(crate) kill_positions: Vec<KillPosition>,
}

impl PlayerStats {
    pub fn kills(&self) -> u32 {
        self.kills
    }

    pub fn deaths(&self) -> u32 {
        self.deaths
    }

    pub fn headshots(&self) -> u32 {
        self.headshots
    }

    pub fn shots(&self) -> u32 {
        self.shots
    }

    pub fn hits(&self) -> u32 {
        self.hits
    }

    pub fn damage(&self) -> f64 {
        self.damage
    }

    pub fn engagements(&self) -> u32 {
        self.engagements
    }

    pub fn weapons(&self) -> &WeaponTally {
        &self.weapons
    }

    pub fn kill_positions(&self) -> &[KillPosition] {
        &self.kill_positions
    }

    pub(crate) fn record_shot(&mut self) {
        self.shots += 1;
    }

    /// Zero or absent damage only counts the hit.
    pub(crate) fn record_hit(&mut self, damage: Option<f64>) {
        self.hits += 1;
        if let Some(damage) = damage.filter(|d| *d != 0.0) {
            self.damage += damage;
        }
    }

    pub(crate) fn record_kill(
        &mut self,
        weapon: &str,
        headshot: bool,
        position: Option<(f64, f64)>,
    ) {
        self.kills += 1;
        self.engagements += 1;
        self.weapons.record_kill(weapon);
        if headshot {
            self.headshots += 1;
        }
        if let Some((x, y)) = position {
            self.kill_positions.push(KillPosition { x, y });
        }
    }

    pub(crate) fn record_death(&mut self) {
        self.deaths += 1;
        self.engagements += 1;
    }
}
