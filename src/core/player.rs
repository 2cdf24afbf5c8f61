//! Players, game conclusions and per-player data storage.
//!
//! ## Player
//!
//! Exactly two players: `Dark` moves first, `Light` second.
//! `adversary` is an involution.
//!
//! ## PlayerMap
//!
//! Fixed two-slot storage indexed by `Player` for O(1) access.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// One of the two Othello players.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Player {
    /// Moves first. Printed as `X`.
    Dark,
    /// Moves second. Printed as `O`.
    Light,
}

impl Player {
    /// Both players, in turn order.
    pub const ALL: [Player; 2] = [Player::Dark, Player::Light];

    /// The other player.
    ///
    /// ```
    /// use othello_search::core::Player;
    ///
    /// assert_eq!(Player::Dark.adversary(), Player::Light);
    /// assert_eq!(Player::Dark.adversary().adversary(), Player::Dark);
    /// ```
    #[must_use]
    pub const fn adversary(self) -> Self {
        match self {
            Player::Dark => Player::Light,
            Player::Light => Player::Dark,
        }
    }

    /// Slot index (Dark = 0, Light = 1).
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Player::Dark => 0,
            Player::Light => 1,
        }
    }

    /// Board glyph for this player's pieces.
    #[must_use]
    pub const fn glyph(self) -> char {
        match self {
            Player::Dark => 'X',
            Player::Light => 'O',
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Player::Dark => write!(f, "Dark"),
            Player::Light => write!(f, "Light"),
        }
    }
}

/// Result of a finished game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Conclusion {
    /// The player with strictly more pieces.
    Winner(Player),
    /// Equal piece counts.
    Draw,
}

impl Conclusion {
    /// Check if a player won.
    #[must_use]
    pub fn is_winner(self, player: Player) -> bool {
        self == Conclusion::Winner(player)
    }

    /// Reward credited to `player`: 1 for a win, 0.5 for a draw, 0 for a loss.
    #[must_use]
    pub fn reward_for(self, player: Player) -> f64 {
        match self {
            Conclusion::Winner(winner) if winner == player => 1.0,
            Conclusion::Winner(_) => 0.0,
            Conclusion::Draw => 0.5,
        }
    }
}

impl std::fmt::Display for Conclusion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Conclusion::Winner(player) => write!(f, "{player} wins!"),
            Conclusion::Draw => write!(f, "Draw!"),
        }
    }
}

/// Per-player data storage with O(1) access.
///
/// ## Example
///
/// ```
/// use othello_search::core::{Player, PlayerMap};
///
/// let mut wins: PlayerMap<u32> = PlayerMap::with_value(0);
/// wins[Player::Light] += 1;
/// assert_eq!(wins[Player::Dark], 0);
/// assert_eq!(wins[Player::Light], 1);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: [T; 2],
}

impl<T> PlayerMap<T> {
    /// Create a new PlayerMap with values from a factory function.
    pub fn new(mut factory: impl FnMut(Player) -> T) -> Self {
        Self {
            data: [factory(Player::Dark), factory(Player::Light)],
        }
    }

    /// Create a new PlayerMap with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(|_| value.clone())
    }

    /// Get a reference to a player's data.
    #[must_use]
    pub fn get(&self, player: Player) -> &T {
        &self.data[player.index()]
    }

    /// Get a mutable reference to a player's data.
    pub fn get_mut(&mut self, player: Player) -> &mut T {
        &mut self.data[player.index()]
    }

    /// Iterate over (Player, &T) pairs in turn order.
    pub fn iter(&self) -> impl Iterator<Item = (Player, &T)> {
        Player::ALL.into_iter().zip(self.data.iter())
    }
}

impl<T> From<[T; 2]> for PlayerMap<T> {
    /// Entries in turn order: Dark, then Light.
    fn from(data: [T; 2]) -> Self {
        Self { data }
    }
}

impl<T> Index<Player> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: Player) -> &Self::Output {
        self.get(player)
    }
}

impl<T> IndexMut<Player> for PlayerMap<T> {
    fn index_mut(&mut self, player: Player) -> &mut Self::Output {
        self.get_mut(player)
    }
}
