//! Expectimax: the adversary is modeled as a uniform random mover.
//!
//! Own layers take the maximum child value. Adversary layers take the mean
//! over the adversary's legal actions; once the ply budget is spent that
//! mean is taken over the evaluation of the position before each action is
//! applied.

use std::time::Instant;

use tracing::{debug, trace};

use crate::core::{Action, GameRng, OthelloResult, Player, State};
use crate::eval::{Evaluator, Heuristic};

use super::config::SearchConfig;
use super::{choose_best_index, Agent};

/// Expectimax search agent.
#[derive(Clone, Debug)]
pub struct ExpectimaxAgent<E = Heuristic> {
    player: Player,
    config: SearchConfig,
    evaluator: E,
    rng: GameRng,
}

impl ExpectimaxAgent {
    /// Expectimax with the comprehensive heuristic.
    #[must_use]
    pub fn new(player: Player, config: SearchConfig) -> Self {
        Self::with_evaluator(player, config, Heuristic::default())
    }
}

impl<E: Evaluator> ExpectimaxAgent<E> {
    /// Expectimax with a custom evaluator.
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

    /// Expected value of every root move, in legal-action order.
    pub fn root_scores(&self, state: &State) -> OthelloResult<Vec<(Action, f64)>> {
        let horizon = self.horizon();
        let mut scored = Vec::new();
        for (action, child) in state.successors(self.player)? {
            let score = self.value(&child, self.player.adversary(), horizon)?;
            trace!(agent = "expectimax", %action, score, "root candidate");
            scored.push((action, score));
        }
        Ok(scored)
    }

    /// Best move and its expected value, `None` when there is no legal move.
    pub fn search(&mut self, state: &State) -> OthelloResult<Option<(Action, f64)>> {
        let start = Instant::now();
        let scored = self.root_scores(state)?;

        let values: Vec<f64> = scored.iter().map(|&(_, score)| score).collect();
        let chosen = choose_best_index(&values, &mut self.rng).map(|index| scored[index]);

        if let Some((action, score)) = chosen {
            debug!(
                agent = "expectimax",
                player = %self.player,
                %action,
                score,
                candidates = scored.len(),
                elapsed_us = start.elapsed().as_micros() as u64,
                "search complete"
            );
        }
        Ok(chosen)
    }

    fn value(&self, state: &State, to_move: Player, remaining: u32) -> OthelloResult<f64> {
        if state.is_terminal() {
            return Ok(self.evaluator.evaluate(state, self.player));
        }

        let actions: Vec<Action> = state.legal_actions(to_move).collect();
        if actions.is_empty() {
            if remaining == 0 {
                return Ok(self.evaluator.evaluate(state, self.player));
            }
            return self.value(state, to_move.adversary(), remaining);
        }

        if to_move == self.player {
            if remaining == 0 {
                return Ok(self.evaluator.evaluate(state, self.player));
            }
            let mut best = f64::NEG_INFINITY;
            for &action in &actions {
                let child = state.perform_action(to_move, action)?;
                best = best.max(self.value(&child, to_move.adversary(), remaining - 1)?);
            }
            return Ok(best);
        }

        let mut total = 0.0;
        for &action in &actions {
            total += if remaining == 0 {
                self.evaluator.evaluate(state, self.player)
            } else {
                let child = state.perform_action(to_move, action)?;
                self.value(&child, to_move.adversary(), remaining - 1)?
            };
        }
        Ok(total / actions.len() as f64)
    }
}

impl<E: Evaluator> Agent for ExpectimaxAgent<E> {
    fn player(&self) -> Player {
        self.player
    }

    fn name(&self) -> &'static str {
        "expectimax"
    }

    fn choose_action(&mut self, state: &State) -> OthelloResult<Option<Action>> {
        Ok(self.search(state)?.map(|(action, _)| action))
    }
}
