//! MCTS statistics: per-node win/play counts and per-search diagnostics.

use serde::{Deserialize, Serialize};

/// Win and play counts for one `(player, state)` node.
///
/// `win_count` is the summed reward for the node's player: 1 per win,
/// 0.5 per draw. It never exceeds `play_count`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct NodeStats {
    /// Summed reward.
    pub win_count: f64,

    /// Number of iterations that passed through this node.
    pub play_count: u32,
}

impl NodeStats {
    /// Fraction of plays won, 0 for an unvisited node.
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.play_count == 0 {
            0.0
        } else {
            self.win_count / f64::from(self.play_count)
        }
    }

    /// Record one play with the given reward.
    pub fn record(&mut self, reward: f64) {
        self.play_count += 1;
        self.win_count += reward;
    }

    /// Check if this node has never been played through.
    #[must_use]
    pub fn is_unvisited(&self) -> bool {
        self.play_count == 0
    }
}

/// Statistics collected during one MCTS search.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct SearchStats {
    /// Total iterations performed.
    pub iterations: u32,

    /// Iterations that ended by visiting a fresh node.
    pub expansions: u32,

    /// Random playouts performed.
    pub simulations: u32,

    /// Longest selection path.
    pub max_depth: u16,

    /// Total time spent searching (microseconds).
    pub time_us: u64,
}

impl SearchStats {
    /// Reset all statistics to zero.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Calculate iterations per second.
    #[must_use]
    pub fn iterations_per_second(&self) -> f64 {
        if self.time_us == 0 {
            0.0
        } else {
            f64::from(self.iterations) / (self.time_us as f64 / 1_000_000.0)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_win_rate() {
        let mut node = NodeStats::default();
        assert!(node.is_unvisited());
        assert_eq!(node.win_rate(), 0.0);

        node.record(1.0);
        node.record(0.5);
        node.record(0.0);
        node.record(1.0);

        assert_eq!(node.play_count, 4);
        assert_eq!(node.win_count, 2.5);
        assert_eq!(node.win_rate(), 0.625);
    }

    #[test]
    fn test_stats_iterations_per_second() {
        let mut stats = SearchStats::default();
        stats.iterations = 1000;
        stats.time_us = 1_000_000;

        assert_eq!(stats.iterations_per_second(), 1000.0);
    }

    #[test]
    fn test_stats_reset() {
        let mut stats = SearchStats::default();
        stats.iterations = 100;
        stats.simulations = 50;

        stats.reset();

        assert_eq!(stats.iterations, 0);
        assert_eq!(stats.simulations, 0);
    }

    #[test]
    fn test_stats_serialization() {
        let mut stats = SearchStats::default();
        stats.iterations = 42;

        let json = serde_json::to_string(&stats).unwrap();
        let deserialized: SearchStats = serde_json::from_str(&json).unwrap();

        assert_eq!(stats.iterations, deserialized.iterations);
    }
}
