use crate::data_processing::player_stats::PlayerStats;
use crate::data_summary::player_stats_summary::PlayerStatsSummary;

/// Derives the exported summary for one player.
///
/// # Arguments
///
/// * `player` - The player's name.
/// * `stats` - The player's aggregated stats.
///
/// # Returns
///
/// A `PlayerStatsSummary` with every ratio rounded and the weapon tally sorted by kills.
pub fn summarize(player: &str, stats: &PlayerStats) -> PlayerStatsSummary {
    PlayerStatsSummary {
        player: player.to_owned(),
        kills: stats.kills,
        deaths: stats.deaths,
        kd: calculate_kd(stats.kills, stats.deaths),
        headshots: stats.headshots,
        headshot_pct: calculate_percentage(stats.headshots, stats.kills),
        damage: stats.damage,
        accuracy_pct: calculate_percentage(stats.hits, stats.shots),
        engagements: stats.engagements,
        kills_per_engagement: calculate_ratio(stats.kills, stats.engagements),
        weapons: stats.weapons.sorted_by_kills(),
        kill_positions: stats.kill_positions.clone(),
    }
}

/// Kills per death, rounded to two decimals. With no deaths the kill count itself is returned.
fn calculate_kd(kills: u32, deaths: u32) -> f64 {
    if deaths > 0 {
        round_to(kills as f64 / deaths as f64, 2)
    } else {
        kills as f64
    }
}

/// `part / whole` as a percentage rounded to one decimal, or `0.0` when `whole` is zero.
fn calculate_percentage(part: u32, whole: u32) -> f64 {
    if whole > 0 {
        round_to(part as f64 / whole as f64 * 100.0, 1)
    } else {
        0.0
    }
}

/// `part / whole` rounded to two decimals, or `0.0` when `whole` is zero.
fn calculate_ratio(part: u32, whole: u32) -> f64 {
    if whole > 0 {
        round_to(part as f64 / whole as f64, 2)
    } else {
        0.0
    }
}

/// Rounds half to even, so `0.125` becomes `0.12`.
fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round_ties_even() / factor
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_processing::player_stats::KillPosition;
    use rstest::rstest;

    fn stats(kills: u32, deaths: u32, headshots: u32, shots: u32, hits: u32) -> PlayerStats {
        let mut stats = PlayerStats::default();
        for i in 0..kills {
            stats.record_kill("ak47", i < headshots, None);
        }
        (0..deaths).for_each(|_| stats.record_death());
        (0..shots).for_each(|_| stats.record_shot());
        (0..hits).for_each(|_| stats.record_hit(Some(10.0)));
        stats
    }

    #[rstest]
    #[case(3, 0, 3.0)]
    #[case(0, 0, 0.0)]
    #[case(0, 4, 0.0)]
    #[case(2, 3, 0.67)]
    #[case(10, 4, 2.5)]
    #[case(1, 8, 0.12)]
    #[case(3, 8, 0.38)]
    fn kd_ratio(#[case] kills: u32, #[case] deaths: u32, #[case] expected: f64) {
        let summary = summarize("p", &stats(kills, deaths, 0, 0, 0));
        assert_eq!(summary.kd, expected);
    }

    #[rstest]
    #[case(0, 0, 0.0)]
    #[case(3, 1, 33.3)]
    #[case(3, 2, 66.7)]
    #[case(4, 4, 100.0)]
    #[case(16, 1, 6.2)]
    #[case(16, 3, 18.8)]
    fn headshot_percentage(#[case] kills: u32, #[case] headshots: u32, #[case] expected: f64) {
        let summary = summarize("p", &stats(kills, 0, headshots, 0, 0));
        assert_eq!(summary.headshot_pct, expected);
    }

    #[rstest]
    #[case(0, 0, 0.0)]
    #[case(0, 2, 0.0)]
    #[case(8, 3, 37.5)]
    #[case(7, 2, 28.6)]
    fn accuracy_percentage(#[case] shots: u32, #[case] hits: u32, #[case] expected: f64) {
        let summary = summarize("p", &stats(0, 0, 0, shots, hits));
        assert_eq!(summary.accuracy_pct, expected);
    }

    #[rstest]
    #[case(0, 0, 0.0)]
    #[case(0, 5, 0.0)]
    #[case(1, 2, 0.33)]
    #[case(3, 0, 1.0)]
    #[case(5, 3, 0.62)]
    #[case(1, 7, 0.12)]
    fn kills_per_engagement(#[case] kills: u32, #[case] deaths: u32, #[case] expected: f64) {
        let summary = summarize("p", &stats(kills, deaths, 0, 0, 0));
        assert_eq!(summary.kills_per_engagement, expected);
    }

    #[test]
    fn copies_counts_and_positions() {
        let mut stats = stats(0, 1, 0, 4, 2);
        stats.record_kill("awp", true, Some((10.0, 20.0)));

        let summary = summarize("A", &stats);

        assert_eq!(summary.player, "A");
        assert_eq!(summary.kills, 1);
        assert_eq!(summary.deaths, 1);
        assert_eq!(summary.headshots, 1);
        assert_eq!(summary.damage, 20.0);
        assert_eq!(summary.engagements, 2);
        assert_eq!(summary.kill_positions, vec![KillPosition { x: 10.0, y: 20.0 }]);
    }

    #[test]
    fn weapons_are_sorted_by_kills() {
        let mut stats = PlayerStats::default();
        for weapon in ["usp", "awp", "m4a1", "awp", "m4a1"] {
            stats.record_kill(weapon, false, None);
        }

        let summary = summarize("p", &stats);

        let order: Vec<_> = summary.weapons.iter().map(|(w, _)| w).collect();
        assert_eq!(order, vec!["awp", "m4a1", "usp"]);
    }

    #[test]
    fn summarizing_twice_gives_the_same_summary() {
        let mut stats = stats(5, 2, 2, 30, 11);
        stats.record_kill("deagle", false, Some((1.0, -1.0)));

        assert_eq!(summarize("p", &stats), summarize("p", &stats));
    }
}
