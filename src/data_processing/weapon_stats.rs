use serde::ser::{Serialize, Serializer};

/// Kill counts per weapon, kept in the order each weapon was first used.
///
/// Serializes as a JSON object whose keys follow the tally order.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct WeaponTally {
    entries: Vec<(String, u32)>,
}

impl WeaponTally {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one kill for `weapon`, registering the weapon if it is new.
    pub fn record_kill(&mut self, weapon: &str) {
        match self.entries.iter_mut().find(|(name, _)| name == weapon) {
            Some((_, kills)) => *kills += 1,
            None => self.entries.push((weapon.to_owned(), 1)),
        }
    }

    pub fn kills_with(&self, weapon: &str) -> u32 {
        self.entries
            .iter()
            .find(|(name, _)| name == weapon)
            .map_or(0, |(_, kills)| *kills)
    }

    pub fn total_kills(&self) -> u32 {
        self.entries.iter().map(|(_, kills)| kills).sum()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.entries.iter().map(|(name, kills)| (name.as_str(), *kills))
    }

    /// Returns a copy ordered by kills, most first.
    ///
    /// `sort_by` is stable, so weapons with the same count keep their first-used order.
    pub fn sorted_by_kills(&self) -> WeaponTally {
        let mut entries = self.entries.clone();
        entries.sort_by(|w1, w2| w2.1.cmp(&w1.1));
        WeaponTally { entries }
    }
}

impl Serialize for WeaponTally {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.iter())
    }
}
