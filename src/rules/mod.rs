//! Turn control and match running.
//!
//! - `Game`: the mutable turn tracker (state, side to move, move count,
//!   history, thinking time)
//! - `Referee`: asks agents for moves and applies them to a `Game`

pub mod game;
pub mod referee;

pub use game::Game;
pub use referee::{LogObserver, MatchObserver, NullObserver, Referee};
