//! Core engine types: players, squares, actions, board, state, RNG, errors.
//!
//! Everything here is an immutable value type except `GameRng`.

pub mod action;
pub mod board;
pub mod error;
pub mod player;
pub mod rng;
pub mod square;
pub mod state;

pub use action::{Action, MoveRecord};
pub use board::Board;
pub use error::{OthelloError, OthelloResult};
pub use player::{Conclusion, Player, PlayerMap};
pub use rng::GameRng;
pub use square::Square;
pub use state::{State, Successors};
