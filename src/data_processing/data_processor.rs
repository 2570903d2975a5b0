use crate::data_processing::analysis_error::AnalysisError;
use crate::data_processing::event_record::{FireEvent, HurtEvent, KillEvent, ReplayEvents};
use crate::data_processing::player_roster::PlayerRoster;

use tracing::{debug, info};

/// Builds the player roster from a decoded replay.
///
/// # Arguments
///
/// * `events` - The kill, hurt and weapon-fire sequences of the replay.
///
/// # Returns
///
/// * `Ok(PlayerRoster)` - Stats for every player named by at least one event.
/// * `Err(AnalysisError::NoData)` - The replay has no kill events.
pub fn process_events(events: ReplayEvents) -> Result<PlayerRoster, AnalysisError> {
    aggregate(events.kills, events.hurts, events.shots)
}

/// Folds the three event sequences into per-player stats.
///
/// Kill events are the source of truth for a match having happened: when the kill
/// sequence is absent or empty nothing is processed and `NoData` is returned.
/// Otherwise weapon-fire events are folded first, then hurt events, then kill
/// events, each in arrival order. That order decides the roster's discovery order.
///
/// # Arguments
///
/// * `kills` - `player_death` events.
/// * `hurts` - `player_hurt` events.
/// * `shots` - `weapon_fire` events.
///
/// # Returns
///
/// A `PlayerRoster`, or `AnalysisError::NoData`.
pub fn aggregate<K, H, S>(
    kills: Option<K>,
    hurts: Option<H>,
    shots: Option<S>,
) -> Result<PlayerRoster, AnalysisError>
where
    K: IntoIterator<Item = KillEvent>,
    H: IntoIterator<Item = HurtEvent>,
    S: IntoIterator<Item = FireEvent>,
{
    let mut kills = kills.ok_or(AnalysisError::NoData)?.into_iter().peekable();
    if kills.peek().is_none() {
        return Err(AnalysisError::NoData);
    }

    let mut roster = PlayerRoster::new();
    if let Some(shots) = shots {
        update_stats_from_shots(shots, &mut roster);
    }
    if let Some(hurts) = hurts {
        update_stats_from_hurts(hurts, &mut roster);
    }
    update_stats_from_kills(kills, &mut roster);

    info!(players = roster.len(), "aggregated replay events");
    Ok(roster)
}

/// Counts one shot per weapon-fire event with a named shooter.
fn update_stats_from_shots<S>(shots: S, roster: &mut PlayerRoster)
where
    S: IntoIterator<Item = FireEvent>,
{
    let mut total = 0usize;
    for shot in shots {
        total += 1;
        match shot.user_name {
            Some(shooter) => roster.stats_mut(&shooter).record_shot(),
            None => debug!("weapon_fire #{} has no shooter, skipped", total),
        }
    }
    info!(events = total, "processed weapon_fire events");
}

/// Counts one hit per hurt event with a named attacker and adds its damage.
fn update_stats_from_hurts<H>(hurts: H, roster: &mut PlayerRoster)
where
    H: IntoIterator<Item = HurtEvent>,
{
    let mut total = 0usize;
    for hurt in hurts {
        total += 1;
        match hurt.attacker_name {
            Some(attacker) => roster.stats_mut(&attacker).record_hit(hurt.dmg_health),
            None => debug!("player_hurt #{} has no attacker, skipped", total),
        }
    }
    info!(events = total, "processed player_hurt events");
}

/// Credits the attacker with a kill and the victim with a death, independently.
fn update_stats_from_kills<K>(kills: K, roster: &mut PlayerRoster)
where
    K: IntoIterator<Item = KillEvent>,
{
    let mut total = 0usize;
    for kill in kills {
        total += 1;
        if let Some(attacker) = &kill.attacker_name {
            roster.stats_mut(attacker).record_kill(
                kill.weapon_or_unknown(),
                kill.headshot,
                kill.attacker_position(),
            );
        }
        if let Some(victim) = &kill.user_name {
            roster.stats_mut(victim).record_death();
        }
        if kill.attacker_name.is_none() && kill.user_name.is_none() {
            debug!("player_death #{} names no player, skipped", total);
        }
    }
    info!(events = total, "processed player_death events");
}
