//! Configuration for the depth-limited searchers.

use serde::{Deserialize, Serialize};

/// Default depth for `MinimaxAgent`.
pub const MINIMAX_DEPTH: u32 = 2;

/// Default depth for `AlphaBetaAgent`.
pub const ALPHABETA_DEPTH: u32 = 4;

/// Default depth for `ExpectimaxAgent`.
pub const EXPECTIMAX_DEPTH: u32 = 2;

/// Default RNG seed.
pub const DEFAULT_SEED: u64 = 42;

/// Search depth and seed for Minimax, AlphaBeta and Expectimax.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Search depth in full move exchanges. Zero is treated as one.
    pub depth: u32,

    /// Seed for root tie-breaking.
    pub seed: u64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self::minimax()
    }
}

impl SearchConfig {
    /// Minimax defaults.
    #[must_use]
    pub fn minimax() -> Self {
        Self { depth: MINIMAX_DEPTH, seed: DEFAULT_SEED }
    }

    /// AlphaBeta defaults.
    #[must_use]
    pub fn alphabeta() -> Self {
        Self { depth: ALPHABETA_DEPTH, seed: DEFAULT_SEED }
    }

    /// Expectimax defaults.
    #[must_use]
    pub fn expectimax() -> Self {
        Self { depth: EXPECTIMAX_DEPTH, seed: DEFAULT_SEED }
    }

    /// Set the search depth.
    #[must_use]
    pub fn with_depth(mut self, depth: u32) -> Self {
        self.depth = depth;
        self
    }

    /// Set the seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Depth with zero raised to one.
    #[must_use]
    pub fn effective_depth(&self) -> u32 {
        self.depth.max(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        assert_eq!(SearchConfig::default(), SearchConfig::minimax());
        assert_eq!(SearchConfig::minimax().depth, 2);
        assert_eq!(SearchConfig::alphabeta().depth, 4);
        assert_eq!(SearchConfig::expectimax().depth, 2);
        assert_eq!(SearchConfig::alphabeta().seed, 42);
    }

    #[test]
    fn test_builder_pattern() {
        let config = SearchConfig::alphabeta().with_depth(3).with_seed(9);

        assert_eq!(config.depth, 3);
        assert_eq!(config.seed, 9);
    }

    #[test]
    fn test_zero_depth_is_one() {
        assert_eq!(SearchConfig::minimax().with_depth(0).effective_depth(), 1);
        assert_eq!(SearchConfig::minimax().with_depth(5).effective_depth(), 5);
    }

    #[test]
    fn test_serialization() {
        let config = SearchConfig::expectimax().with_seed(7);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: SearchConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
