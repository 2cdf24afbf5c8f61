//! Move-choosing agents.
//!
//! ## Overview
//!
//! An `Agent` plays one fixed side. Given the current `State` it returns
//! the action to play, or `None` when its side has no legal action and
//! must skip.
//!
//! - `RandomAgent`: uniform random legal move
//! - `GreedyAgent`: one-ply lookahead over an evaluator
//! - `MinimaxAgent`: fixed-depth minimax with random root tie-break
//! - `AlphaBetaAgent`: pruned minimax carrying the best root score forward
//! - `ExpectimaxAgent`: max layers over uniform-chance opponent layers
//!
//! The MCTS agent lives in [`crate::mcts`].
//!
//! ## Search horizon
//!
//! A configured depth of `d` counts full move exchanges. Minimax and
//! Expectimax search `2d - 2` plies below each root move, AlphaBeta
//! searches `2d - 1`. A side without moves passes without spending any of
//! the remaining budget.

pub mod alphabeta;
pub mod config;
pub mod expectimax;
pub mod greedy;
pub mod minimax;
pub mod random;

pub use alphabeta::AlphaBetaAgent;
pub use config::SearchConfig;
pub use expectimax::ExpectimaxAgent;
pub use greedy::GreedyAgent;
pub use minimax::MinimaxAgent;
pub use random::RandomAgent;

use crate::core::{Action, GameRng, OthelloResult, Player, State};

/// Chooses moves for one side.
pub trait Agent {
    /// Side this agent plays.
    fn player(&self) -> Player;

    /// Short name for logs.
    fn name(&self) -> &'static str;

    /// Choose an action, or `None` to skip.
    ///
    /// Returns `None` only when `player()` has no legal action in `state`.
    fn choose_action(&mut self, state: &State) -> OthelloResult<Option<Action>>;
}

impl<A: Agent + ?Sized> Agent for Box<A> {
    fn player(&self) -> Player {
        (**self).player()
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn choose_action(&mut self, state: &State) -> OthelloResult<Option<Action>> {
        (**self).choose_action(state)
    }
}

/// Pick uniformly among the indices whose score equals the maximum.
///
/// Returns `None` for an empty slice.
pub(crate) fn choose_best_index(scores: &[f64], rng: &mut GameRng) -> Option<usize> {
    let best = scores.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let tied: Vec<usize> = scores
        .iter()
        .enumerate()
        .filter(|(_, &score)| score == best)
        .map(|(i, _)| i)
        .collect();
    rng.choose(&tied).copied()
}
