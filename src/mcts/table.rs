//! Statistics table keyed by `(player, state)`.
//!
//! Entries are created lazily and live as long as the owning agent, so
//! knowledge from earlier searches carries over to later moves of the same
//! game. Lookups of absent keys read as an unvisited node.

use rustc_hash::FxHashMap;

use crate::core::{Player, State};

use super::stats::NodeStats;

/// Value-keyed MCTS statistics.
#[derive(Clone, Debug, Default)]
pub struct StatsTable {
    entries: FxHashMap<(Player, State), NodeStats>,
}

impl StatsTable {
    /// Create an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stats for `(player, state)`, unvisited if absent.
    #[inline]
    #[must_use]
    pub fn get(&self, player: Player, state: &State) -> NodeStats {
        self.entries.get(&(player, *state)).copied().unwrap_or_default()
    }

    /// Plays recorded for `(player, state)`.
    #[inline]
    #[must_use]
    pub fn play_count(&self, player: Player, state: &State) -> u32 {
        self.get(player, state).play_count
    }

    /// Win rate for `(player, state)`.
    #[inline]
    #[must_use]
    pub fn win_rate(&self, player: Player, state: &State) -> f64 {
        self.get(player, state).win_rate()
    }

    /// Record one play through `(player, state)`.
    pub fn record(&mut self, player: Player, state: State, reward: f64) {
        self.entries.entry((player, state)).or_default().record(reward);
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the table is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over all entries.
    pub fn iter(&self) -> impl Iterator<Item = (Player, &State, &NodeStats)> {
        self.entries.iter().map(|((player, state), stats)| (*player, state, stats))
    }

    /// Get statistics about the table.
    #[must_use]
    pub fn stats(&self) -> TableStats {
        TableStats {
            entry_count: self.entries.len(),
            total_plays: self.entries.values().map(|s| u64::from(s.play_count)).sum(),
        }
    }
}

/// Statistics about the MCTS table.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TableStats {
    /// Number of `(player, state)` entries.
    pub entry_count: usize,

    /// Sum of play counts over all entries.
    pub total_plays: u64,
}
