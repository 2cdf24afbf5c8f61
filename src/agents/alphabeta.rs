//! Alpha-beta pruned minimax.
//!
//! Root candidates are searched in legal-action order. The best root score
//! found so far is passed as alpha into the search of every later
//! candidate, and a candidate replaces the current best only with a strictly
//! greater score, so the first maximal move wins.

use std::time::Instant;

use tracing::{debug, trace};

use crate::core::{Action, OthelloResult, Player, State};
use crate::eval::{Evaluator, Heuristic};

use super::config::SearchConfig;
use super::Agent;

/// Alpha-beta search agent.
#[derive(Clone, Debug)]
pub struct AlphaBetaAgent<E = Heuristic> {
    player: Player,
    config: SearchConfig,
    evaluator: E,
}

impl AlphaBetaAgent {
    /// Alpha-beta with the comprehensive heuristic.
    #[must_use]
    pub fn new(player: Player, config: SearchConfig) -> Self {
        Self::with_evaluator(player, config, Heuristic::default())
    }
}

impl<E: Evaluator> AlphaBetaAgent<E> {
    /// Alpha-beta with a custom evaluator.
    #[must_use]
    pub fn with_evaluator(player: Player, config: SearchConfig, evaluator: E) -> Self {
        Self { player, config, evaluator }
    }

    /// Search configuration.
    #[must_use]
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Plies searched below each root move.
    #[must_use]
    pub fn horizon(&self) -> u32 {
        2 * self.config.effective_depth() - 1
    }

    /// Best move and its score, `None` when there is no legal move.
    pub fn search(&self, state: &State) -> OthelloResult<Option<(Action, f64)>> {
        let start = Instant::now();
        let horizon = self.horizon();
        let adversary = self.player.adversary();
        let mut nodes = 0u64;

        let mut best: Option<(Action, f64)> = None;
        let mut max_score = f64::NEG_INFINITY;
        for (action, child) in state.successors(self.player)? {
            let score = self.value(&child, adversary, horizon, max_score, f64::INFINITY, &mut nodes)?;
            trace!(agent = "alpha-beta", %action, score, alpha = max_score, "root candidate");
            if best.is_none() || score > max_score {
                best = Some((action, score));
                max_score = score;
            }
        }

        if let Some((action, score)) = best {
            debug!(
                agent = "alpha-beta",
                player = %self.player,
                %action,
                score,
                nodes,
                elapsed_us = start.elapsed().as_micros() as u64,
                "search complete"
            );
        }
        Ok(best)
    }

    fn value(
        &self,
        state: &State,
        to_move: Player,
        remaining: u32,
        mut alpha: f64,
        mut beta: f64,
        nodes: &mut u64,
    ) -> OthelloResult<f64> {
        *nodes += 1;
        if remaining == 0 || state.is_terminal() {
            return Ok(self.evaluator.evaluate(state, self.player));
        }

        let successors = state.successors(to_move)?;
        if successors.is_empty() {
            return self.value(state, to_move.adversary(), remaining, alpha, beta, nodes);
        }

        let next = to_move.adversary();
        if to_move == self.player {
            let mut v = f64::NEG_INFINITY;
            for (_, child) in &successors {
                v = v.max(self.value(child, next, remaining - 1, alpha, beta, nodes)?);
                alpha = alpha.max(v);
                if v > beta {
                    break;
                }
            }
            Ok(v)
        } else {
            let mut v = f64::INFINITY;
            for (_, child) in &successors {
                v = v.min(self.value(child, next, remaining - 1, alpha, beta, nodes)?);
                beta = beta.min(v);
                if v < alpha {
                    break;
                }
            }
            Ok(v)
        }
    }
}

impl<E: Evaluator> Agent for AlphaBetaAgent<E> {
    fn player(&self) -> Player {
        self.player
    }

    fn name(&self) -> &'static str {
        "alpha-beta"
    }

    fn choose_action(&mut self, state: &State) -> OthelloResult<Option<Action>> {
        Ok(self.search(state)?.map(|(action, _)| action))
    }
}
