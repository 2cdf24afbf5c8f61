//! Pluggable position evaluators.
//!
//! Search agents score leaf positions through the `Evaluator` trait. Any
//! `Fn(&State, Player) -> f64` closure is an evaluator, and `Heuristic`
//! names the built-in projections of the `State` scoring primitives.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::core::{Player, State};

/// Scores a state from the point of view of `player`. Must be pure.
pub trait Evaluator {
    /// Higher is better for `player`.
    fn evaluate(&self, state: &State, player: Player) -> f64;
}

impl<F> Evaluator for F
where
    F: Fn(&State, Player) -> f64,
{
    fn evaluate(&self, state: &State, player: Player) -> f64 {
        self(state, player)
    }
}

/// Built-in evaluators.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Heuristic {
    /// Pieces owned.
    PieceCount,
    /// Pieces on non-corner border squares.
    Edges,
    /// Pieces on corners.
    Corners,
    /// Own legal move count.
    Mobility,
    /// Negated opponent legal move count.
    AdversaryMobility,
    /// The weighted `State::score`.
    #[default]
    Comprehensive,
}

impl Heuristic {
    /// All built-in evaluators.
    pub const ALL: [Heuristic; 6] = [
        Heuristic::PieceCount,
        Heuristic::Edges,
        Heuristic::Corners,
        Heuristic::Mobility,
        Heuristic::AdversaryMobility,
        Heuristic::Comprehensive,
    ];

    /// Kebab-case name, as accepted by `FromStr`.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Heuristic::PieceCount => "piece-count",
            Heuristic::Edges => "edges",
            Heuristic::Corners => "corners",
            Heuristic::Mobility => "mobility",
            Heuristic::AdversaryMobility => "adversary-mobility",
            Heuristic::Comprehensive => "comprehensive",
        }
    }
}

impl Evaluator for Heuristic {
    fn evaluate(&self, state: &State, player: Player) -> f64 {
        match self {
            Heuristic::PieceCount => f64::from(state.piece_count(player)),
            Heuristic::Edges => f64::from(state.edge_count(player)),
            Heuristic::Corners => f64::from(state.corner_count(player)),
            Heuristic::Mobility => f64::from(state.mobility(player)),
            Heuristic::AdversaryMobility => -f64::from(state.mobility(player.adversary())),
            Heuristic::Comprehensive => f64::from(state.score(player)),
        }
    }
}

impl FromStr for Heuristic {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|h| h.name() == s)
            .ok_or_else(|| format!("unknown evaluator {s:?}"))
    }
}

impl std::fmt::Display for Heuristic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Board;

    #[test]
    fn test_initial_values() {
        let state = State::initial();
        let dark = Player::Dark;

        assert_eq!(Heuristic::PieceCount.evaluate(&state, dark), 2.0);
        assert_eq!(Heuristic::Edges.evaluate(&state, dark), 0.0);
        assert_eq!(Heuristic::Corners.evaluate(&state, dark), 0.0);
        assert_eq!(Heuristic::Mobility.evaluate(&state, dark), 4.0);
        assert_eq!(Heuristic::AdversaryMobility.evaluate(&state, dark), -4.0);
        assert_eq!(Heuristic::Comprehensive.evaluate(&state, dark), 4.0);
    }

    #[test]
    fn test_comprehensive_matches_score() {
        let board: Board = "XXXOOO..\n\
                            X.OX....\n\
                            ..XO....\n\
                            ...OX...\n\
                            ...XO...\n\
                            ........\n\
                            ........\n\
                            .......O"
            .parse()
            .unwrap();
        let state = State::new(board);

        for player in Player::ALL {
            assert_eq!(
                Heuristic::Comprehensive.evaluate(&state, player),
                f64::from(state.score(player))
            );
        }
    }

    #[test]
    fn test_closure_is_evaluator() {
        let diff = |state: &State, player: Player| {
            f64::from(state.piece_count(player)) - f64::from(state.piece_count(player.adversary()))
        };
        let state = State::initial()
            .perform_action(Player::Dark, "d3".parse().unwrap())
            .unwrap();

        assert_eq!(diff.evaluate(&state, Player::Dark), 3.0);
        assert_eq!(diff.evaluate(&state, Player::Light), -3.0);
    }

    #[test]
    fn test_names_roundtrip() {
        for heuristic in Heuristic::ALL {
            assert_eq!(heuristic.name().parse::<Heuristic>(), Ok(heuristic));
            let json = serde_json::to_string(&heuristic).unwrap();
            assert_eq!(json, format!("\"{}\"", heuristic.name()));
        }
        assert!("greedy".parse::<Heuristic>().is_err());
    }
}
