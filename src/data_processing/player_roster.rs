use crate::data_processing::analysis_error::AnalysisError;
use crate::data_processing::player_selection::Selection;
use crate::data_processing::player_stats::PlayerStats;

use std::collections::HashMap;

/// Players of one replay, kept in the order they were discovered in.
///
/// `index` maps a player name to its position in `players`.
#[derive(Debug, Default)]
pub struct PlayerRoster {
    index: HashMap<String, usize>,
    players: Vec<(String, PlayerStats)>,
}

impl PlayerRoster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the stats for `name`, creating zeroed stats on first reference.
    ///
    /// Only a new player allocates.
    pub(crate) fn stats_mut(&mut self, name: &str) -> &mut PlayerStats {
        let position = match self.index.get(name) {
            Some(&position) => position,
            None => {
                let position = self.players.len();
                self.index.insert(name.to_owned(), position);
                self.players.push((name.to_owned(), PlayerStats::default()));
                position
            }
        };
        &mut self.players[position].1
    }

    pub fn get(&self, name: &str) -> Option<&PlayerStats> {
        self.index.get(name).map(|&position| &self.players[position].1)
    }

    /// Player names in discovery order.
    pub fn names(&self) -> Vec<&str> {
        self.players.iter().map(|(name, _)| name.as_str()).collect()
    }

    /// Players in discovery order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &PlayerStats)> {
        self.players.iter().map(|(name, stats)| (name.as_str(), stats))
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    /// Resolves a menu token to a player.
    ///
    /// A numeric token is a 1-based position in discovery order. Anything else,
    /// or a number outside the menu, must match a player name exactly.
    pub fn select(&self, token: &str) -> Result<(&str, &PlayerStats), AnalysisError> {
        let position = match Selection::parse(token) {
            Selection::Index(index) => index
                .checked_sub(1)
                .filter(|&position| position < self.players.len())
                .or_else(|| self.index.get(token.trim()).copied()),
            Selection::Name(name) => self.index.get(name).copied(),
        };

        position
            .map(|position| {
                let (name, stats) = &self.players[position];
                (name.as_str(), stats)
            })
            .ok_or_else(|| AnalysisError::InvalidSelection(token.trim().to_owned()))
    }
}
