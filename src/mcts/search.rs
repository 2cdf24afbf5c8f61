//! Core MCTS search algorithm.
//!
//! Each iteration walks down from the real position, alternating the side
//! to move and passing when a side has no legal action. At every node the
//! walk stops at a random child that has never been played (expansion);
//! when all children have been played it follows the selection policy.
//! The position reached is played out by the simulation policy, and every
//! `(player, state)` on the walk is credited with the result from that
//! player's point of view.
//!
//! The walk starts with `(adversary, root)`, the position as the adversary
//! left it. The final move is the root child with the best recorded win
//! rate, first maximum in legal-action order.

use std::time::Instant;

use tracing::{debug, trace};

use crate::agents::Agent;
use crate::core::{Action, GameRng, OthelloResult, Player, State};

use super::config::MctsConfig;
use super::policy::{RandomPlayout, SelectionPolicy, SimulationPolicy, Ucb1};
use super::stats::{NodeStats, SearchStats};
use super::table::StatsTable;

/// Monte Carlo Tree Search agent.
///
/// Owns its statistics table for its whole lifetime, so later searches in
/// a game reuse what earlier ones learned.
pub struct MctsAgent {
    /// Side this agent plays.
    player: Player,

    /// Search configuration.
    config: MctsConfig,

    /// Win/play counts keyed by `(player, state)`.
    table: StatsTable,

    /// RNG for expansion choices; playouts use forks of it.
    rng: GameRng,

    /// Selection policy.
    selection: Box<dyn SelectionPolicy>,

    /// Simulation policy.
    simulation: Box<dyn SimulationPolicy>,

    /// Statistics of the last search.
    stats: SearchStats,
}

impl MctsAgent {
    /// Create an agent for `player` with UCB1 selection and random playouts.
    pub fn new(player: Player, config: MctsConfig) -> Self {
        let rng = GameRng::new(config.seed);

        Self {
            player,
            config,
            table: StatsTable::new(),
            rng,
            selection: Box::new(Ucb1),
            simulation: Box::new(RandomPlayout),
            stats: SearchStats::default(),
        }
    }

    /// Replace the RNG.
    #[must_use]
    pub fn with_rng(mut self, rng: GameRng) -> Self {
        self.rng = rng;
        self
    }

    /// Set a custom selection policy.
    #[must_use]
    pub fn with_selection<S: SelectionPolicy + 'static>(mut self, selection: S) -> Self {
        self.selection = Box::new(selection);
        self
    }

    /// Set a custom simulation policy.
    #[must_use]
    pub fn with_simulation<S: SimulationPolicy + 'static>(mut self, simulation: S) -> Self {
        self.simulation = Box::new(simulation);
        self
    }

    /// Run the configured number of iterations from `state` and pick a move.
    ///
    /// Returns `None` without searching when the agent has no legal move.
    pub fn search(&mut self, state: &State) -> OthelloResult<Option<Action>> {
        let start = Instant::now();
        self.stats.reset();

        let root_children = state.successors(self.player)?;
        if root_children.is_empty() {
            return Ok(None);
        }

        for _ in 0..self.config.iterations {
            self.iteration(state)?;
            self.stats.iterations += 1;
        }

        self.stats.time_us = start.elapsed().as_micros() as u64;

        let mut best: Option<(Action, f64)> = None;
        for (action, child) in &root_children {
            let rate = self.table.win_rate(self.player, child);
            trace!(
                agent = "mcts",
                %action,
                win_rate = rate,
                plays = self.table.play_count(self.player, child),
                "root candidate"
            );
            if best.map_or(true, |(_, best_rate)| rate > best_rate) {
                best = Some((*action, rate));
            }
        }

        if let Some((action, win_rate)) = best {
            debug!(
                agent = "mcts",
                player = %self.player,
                %action,
                win_rate,
                iterations = self.stats.iterations,
                expansions = self.stats.expansions,
                iterations_per_second = self.stats.iterations_per_second(),
                table_entries = self.table.len(),
                elapsed_us = self.stats.time_us,
                "search complete"
            );
        }
        Ok(best.map(|(action, _)| action))
    }

    /// Single MCTS iteration: select, expand, simulate, backpropagate.
    fn iteration(&mut self, root: &State) -> OthelloResult<()> {
        let mut current = *root;
        let mut player = self.player.adversary();
        let mut visited = vec![(player, current)];

        // === SELECTION / EXPANSION ===
        while current.conclusion().is_none() {
            player = player.adversary();
            let children: Vec<State> = current
                .successors(player)?
                .into_iter()
                .map(|(_, child)| child)
                .collect();

            // Pass.
            if children.is_empty() {
                continue;
            }

            let unvisited: Vec<usize> = children
                .iter()
                .enumerate()
                .filter(|(_, child)| self.table.get(player, child).is_unvisited())
                .map(|(i, _)| i)
                .collect();

            if let Some(&index) = self.rng.choose(&unvisited) {
                current = children[index];
                visited.push((player, current));
                self.stats.expansions += 1;
                break;
            }

            let index = self.selection.select(&self.table, player, &children, &self.config);
            current = children[index];
            visited.push((player, current));
        }

        let depth = u16::try_from(visited.len() - 1).unwrap_or(u16::MAX);
        self.stats.max_depth = self.stats.max_depth.max(depth);

        // === SIMULATION ===
        let mut sim_rng = self.rng.fork();
        let conclusion = self.simulation.simulate(current, player.adversary(), &mut sim_rng)?;
        self.stats.simulations += 1;

        // === BACKPROPAGATION ===
        for (player, state) in visited {
            self.table.record(player, state, conclusion.reward_for(player));
        }
        Ok(())
    }

    /// Recorded stats of each root move for this agent, in legal-action order.
    pub fn root_stats(&self, state: &State) -> OthelloResult<Vec<(Action, NodeStats)>> {
        Ok(state
            .successors(self.player)?
            .into_iter()
            .map(|(action, child)| (action, self.table.get(self.player, &child)))
            .collect())
    }

    /// Get search statistics of the last search.
    #[must_use]
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// Get the statistics table.
    #[must_use]
    pub fn table(&self) -> &StatsTable {
        &self.table
    }

    /// Get the configuration.
    #[must_use]
    pub fn config(&self) -> &MctsConfig {
        &self.config
    }
}

impl Agent for MctsAgent {
    fn player(&self) -> Player {
        self.player
    }

    fn name(&self) -> &'static str {
        "mcts"
    }

    fn choose_action(&mut self, state: &State) -> OthelloResult<Option<Action>> {
        self.search(state)
    }
}
