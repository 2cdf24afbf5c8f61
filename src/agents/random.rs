//! Uniform random agent.

use crate::core::{Action, GameRng, OthelloResult, Player, State};

use super::Agent;

/// Plays a uniformly random legal move.
#[derive(Clone, Debug)]
pub struct RandomAgent {
    player: Player,
    rng: GameRng,
}

impl RandomAgent {
    /// Create an agent for `player` drawing from `rng`.
    #[must_use]
    pub fn new(player: Player, rng: GameRng) -> Self {
        Self { player, rng }
    }
}

impl Agent for RandomAgent {
    fn player(&self) -> Player {
        self.player
    }

    fn name(&self) -> &'static str {
        "random"
    }

    fn choose_action(&mut self, state: &State) -> OthelloResult<Option<Action>> {
        let actions: Vec<Action> = state.legal_actions(self.player).collect();
        Ok(self.rng.choose(&actions).copied())
    }
}
