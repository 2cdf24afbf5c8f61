//! One-ply greedy agent.

use tracing::debug;

use crate::core::{Action, OthelloResult, Player, State};
use crate::eval::{Evaluator, Heuristic};

use super::Agent;

/// Plays the move whose resulting state the evaluator likes best.
///
/// Ties go to the first move in ascending square order.
#[derive(Clone, Debug)]
pub struct GreedyAgent<E = Heuristic> {
    player: Player,
    evaluator: E,
}

impl GreedyAgent {
    /// Greedy agent using the comprehensive heuristic.
    #[must_use]
    pub fn new(player: Player) -> Self {
        Self::with_evaluator(player, Heuristic::default())
    }
}

impl<E: Evaluator> GreedyAgent<E> {
    /// Greedy agent using `evaluator`.
    #[must_use]
    pub fn with_evaluator(player: Player, evaluator: E) -> Self {
        Self { player, evaluator }
    }
}

impl<E: Evaluator> Agent for GreedyAgent<E> {
    fn player(&self) -> Player {
        self.player
    }

    fn name(&self) -> &'static str {
        "greedy"
    }

    fn choose_action(&mut self, state: &State) -> OthelloResult<Option<Action>> {
        let mut best: Option<(Action, f64)> = None;
        for (action, child) in state.successors(self.player)? {
            let score = self.evaluator.evaluate(&child, self.player);
            if best.map_or(true, |(_, best_score)| score > best_score) {
                best = Some((action, score));
            }
        }

        if let Some((action, score)) = best {
            debug!(agent = "greedy", player = %self.player, %action, score, "chose move");
        }
        Ok(best.map(|(action, _)| action))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_maximum_on_ties() {
        // Every opening move flips exactly one piece.
        let mut agent = GreedyAgent::with_evaluator(Player::Dark, Heuristic::PieceCount);
        let action = agent.choose_action(&State::initial()).unwrap();

        assert_eq!(action, Some("d3".parse().unwrap()));
    }

    #[test]
    fn test_prefers_corner() {
        let board = "........\n.O......\n..X.....\n........\n\
                     ........\n........\n........\n...OX..."
            .parse()
            .unwrap();
        let state = State::new(board);
        let mut agent = GreedyAgent::with_evaluator(Player::Dark, Heuristic::Corners);

        assert!(state.is_legal_action(Player::Dark, "a1".parse().unwrap()));
        assert_eq!(agent.choose_action(&state).unwrap(), Some("a1".parse().unwrap()));
    }

    #[test]
    fn test_closure_evaluator() {
        // Prefer the highest-index square.
        let by_square = |state: &State, player: Player| {
            -f64::from(state.board().mask(player).leading_zeros())
        };
        let mut agent = GreedyAgent::with_evaluator(Player::Dark, by_square);

        assert_eq!(agent.choose_action(&State::initial()).unwrap(), Some("e6".parse().unwrap()));
    }
}
