//! MCTS policies for selection and simulation.
//!
//! Policies are trait-based to allow customization:
//! - `SelectionPolicy`: Which fully-visited child to descend into (UCB1)
//! - `SimulationPolicy`: How to play a position out to the end (random)

use crate::core::{Conclusion, GameRng, OthelloResult, Player, State};

use super::config::MctsConfig;
use super::table::StatsTable;

// =============================================================================
// Selection Policy
// =============================================================================

/// Policy for selecting which child to explore once every child has been
/// played at least once.
pub trait SelectionPolicy: Send + Sync {
    /// Select a child index.
    ///
    /// `children` are the states reachable by `player` in legal-action
    /// order; it is non-empty and every `(player, child)` has plays.
    fn select(
        &self,
        table: &StatsTable,
        player: Player,
        children: &[State],
        config: &MctsConfig,
    ) -> usize;
}

/// UCB1 (Upper Confidence Bound) selection policy.
///
/// Balances exploitation (win rate) with exploration (low play count).
/// Formula: w/n + c * sqrt(ln(N) / n), where N sums the siblings' plays.
/// The first maximum wins.
#[derive(Clone, Debug, Default)]
pub struct Ucb1;

impl SelectionPolicy for Ucb1 {
    fn select(
        &self,
        table: &StatsTable,
        player: Player,
        children: &[State],
        config: &MctsConfig,
    ) -> usize {
        let total: u64 = children
            .iter()
            .map(|child| u64::from(table.play_count(player, child)))
            .sum();
        let ln_total = (total.max(1) as f64).ln();

        let mut best = (0, f64::NEG_INFINITY);
        for (i, child) in children.iter().enumerate() {
            let stats = table.get(player, child);
            let exploration = if stats.play_count == 0 {
                f64::INFINITY
            } else {
                config.exploration_constant * (ln_total / f64::from(stats.play_count)).sqrt()
            };
            let ucb = stats.win_rate() + exploration;
            if ucb > best.1 {
                best = (i, ucb);
            }
        }
        best.0
    }
}

// =============================================================================
// Simulation Policy
// =============================================================================

/// Policy for playing a position out to its conclusion.
pub trait SimulationPolicy: Send + Sync {
    /// Play from `state` with `to_move` moving first until the game ends.
    fn simulate(&self, state: State, to_move: Player, rng: &mut GameRng) -> OthelloResult<Conclusion>;
}

/// Random simulation policy.
///
/// Plays uniformly random legal actions, passing when the side to move has
/// none, until neither side can move.
#[derive(Clone, Debug, Default)]
pub struct RandomPlayout;

impl SimulationPolicy for RandomPlayout {
    fn simulate(
        &self,
        mut state: State,
        mut to_move: Player,
        rng: &mut GameRng,
    ) -> OthelloResult<Conclusion> {
        loop {
            if let Some(conclusion) = state.conclusion() {
                return Ok(conclusion);
            }

            let actions: Vec<_> = state.legal_actions(to_move).collect();
            if let Some(&action) = rng.choose(&actions) {
                state = state.perform_action(to_move, action)?;
            }
            to_move = to_move.adversary();
        }
    }
}
