//! Action representation: a square to place a piece on.
//!
//! A skip is not an `Action`; APIs that accept "move or skip" take
//! `Option<Action>` with `None` meaning skip.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::error::OthelloError;
use super::player::Player;
use super::square::Square;

/// Place a piece on a square. Ordered and compared by square.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Action(Square);

impl Action {
    /// Create an action placing on `square`.
    #[must_use]
    pub const fn new(square: Square) -> Self {
        Self(square)
    }

    /// The target square.
    #[must_use]
    pub const fn square(self) -> Square {
        self.0
    }
}

impl From<Square> for Action {
    fn from(square: Square) -> Self {
        Self(square)
    }
}

impl FromStr for Action {
    type Err = OthelloError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse().map(Self)
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// A move played in a game, kept for history and replay.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    /// The player who moved.
    pub player: Player,

    /// The action played, `None` for a skip.
    pub action: Option<Action>,

    /// 1-based move number within the game (skips are counted).
    pub number: u32,
}

impl MoveRecord {
    /// Create a new move record.
    #[must_use]
    pub fn new(player: Player, action: Option<Action>, number: u32) -> Self {
        Self {
            player,
            action,
            number,
        }
    }
}

impl std::fmt::Display for MoveRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.action {
            Some(action) => write!(f, "{} plays {}", self.player, action),
            None => write!(f, "{} skips", self.player),
        }
    }
}
