//! Fixed-depth minimax.
//!
//! The agent maximizes over its own moves and minimizes over the
//! adversary's, evaluating positions from its own point of view once the
//! ply budget runs out. Root moves with equal value are broken uniformly at
//! random through the agent's `GameRng`.

use std::time::Instant;

use tracing::{debug, trace};

use crate::core::{Action, GameRng, OthelloResult, Player, State};
use crate::eval::{Evaluator, Heuristic};

use super::config::SearchConfig;
use super::{choose_best_index, Agent};

/// Minimax search agent.
#[derive(Clone, Debug)]
pub struct MinimaxAgent<E = Heuristic> {
    player: Player,
    config: SearchConfig,
    evaluator: E,
    rng: GameRng,
}

impl MinimaxAgent {
    /// Minimax with the comprehensive heuristic.
    #[must_use]
    pub fn new(player: Player, config: SearchConfig) -> Self {
        Self::with_evaluator(player, config, Heuristic::default())
    }
}

impl<E: Evaluator> MinimaxAgent<E> {
    /// Minimax with a custom evaluator.
    #[must_use]
    pub fn with_evaluator(player: Player, config: SearchConfig, evaluator: E) -> Self {
        Self {
            player,
            config,
            evaluator,
            rng: GameRng::new(config.seed),
        }
    }

    /// Replace the tie-break RNG.
    #[must_use]
    pub fn with_rng(mut self, rng: GameRng) -> Self {
        self.rng = rng;
        self
    }

    /// Search configuration.
    #[must_use]
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Plies searched below each root move.
    #[must_use]
    pub fn horizon(&self) -> u32 {
        2 * self.config.effective_depth() - 2
    }

    /// Value of every root move, in legal-action order.
    pub fn root_scores(&self, state: &State) -> OthelloResult<Vec<(Action, f64)>> {
        let mut nodes = 0;
        self.scores_with_count(state, &mut nodes)
    }

    /// Best move and its value, `None` when there is no legal move.
    pub fn search(&mut self, state: &State) -> OthelloResult<Option<(Action, f64)>> {
        let start = Instant::now();
        let mut nodes = 0;
        let scored = self.scores_with_count(state, &mut nodes)?;

        let values: Vec<f64> = scored.iter().map(|&(_, score)| score).collect();
        let chosen = choose_best_index(&values, &mut self.rng).map(|index| scored[index]);

        if let Some((action, score)) = chosen {
            debug!(
                agent = "minimax",
                player = %self.player,
                %action,
                score,
                nodes,
                elapsed_us = start.elapsed().as_micros() as u64,
                "search complete"
            );
        }
        Ok(chosen)
    }

    fn scores_with_count(&self, state: &State, nodes: &mut u64) -> OthelloResult<Vec<(Action, f64)>> {
        let horizon = self.horizon();
        let mut scored = Vec::new();
        for (action, child) in state.successors(self.player)? {
            let score = self.value(&child, self.player.adversary(), horizon, nodes)?;
            trace!(agent = "minimax", %action, score, "root candidate");
            scored.push((action, score));
        }
        Ok(scored)
    }

    fn value(&self, state: &State, to_move: Player, remaining: u32, nodes: &mut u64) -> OthelloResult<f64> {
        *nodes += 1;
        if remaining == 0 || state.is_terminal() {
            return Ok(self.evaluator.evaluate(state, self.player));
        }

        let successors = state.successors(to_move)?;
        if successors.is_empty() {
            return self.value(state, to_move.adversary(), remaining, nodes);
        }

        let maximizing = to_move == self.player;
        let mut best = if maximizing { f64::NEG_INFINITY } else { f64::INFINITY };
        for (_, child) in &successors {
            let score = self.value(child, to_move.adversary(), remaining - 1, nodes)?;
            best = if maximizing { best.max(score) } else { best.min(score) };
        }
        Ok(best)
    }
}

impl<E: Evaluator> Agent for MinimaxAgent<E> {
    fn player(&self) -> Player {
        self.player
    }

    fn name(&self) -> &'static str {
        "minimax"
    }

    fn choose_action(&mut self, state: &State) -> OthelloResult<Option<Action>> {
        Ok(self.search(state)?.map(|(action, _)| action))
    }
}
