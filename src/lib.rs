//! # othello-search
//!
//! A bitboard Othello engine with a family of game-tree search agents.
//!
//! ## Design Principles
//!
//! 1. **Immutable Values**: `Board` and `State` are `Copy` pairs of 64-bit
//!    masks. Every transition returns a new value, so search code never
//!    undoes moves.
//!
//! 2. **Errors, Not Panics**: Malformed squares, boards and illegal moves are
//!    reported through `OthelloError`.
//!
//! 3. **Reproducible**: All randomness flows through a seeded `GameRng`.
//!    The same seed yields the same tie-breaks, expansions and playouts.
//!
//! ## Modules
//!
//! - `core`: Players, squares, actions, board, state, RNG, errors
//! - `eval`: Evaluator trait and built-in heuristics
//! - `agents`: Agent trait plus random, greedy, minimax, alpha-beta and
//!   expectimax agents
//! - `mcts`: Monte Carlo Tree Search agent
//! - `rules`: Turn-tracked `Game` and the match `Referee`
//!
//! ## Example
//!
//! ```
//! use othello_search::{AlphaBetaAgent, Game, Player, SearchConfig};
//! use othello_search::agents::Agent;
//!
//! let mut game = Game::new();
//! let mut agent = AlphaBetaAgent::new(Player::Dark, SearchConfig::alphabeta().with_depth(1));
//!
//! let action = agent.choose_action(game.state()).unwrap();
//! game.play(Player::Dark, action).unwrap();
//! assert_eq!(game.next_player(), Player::Light);
//! ```

pub mod agents;
pub mod core;
pub mod eval;
pub mod mcts;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{
    Action, Board, Conclusion, GameRng, MoveRecord, OthelloError, OthelloResult, Player,
    PlayerMap, Square, State,
};

pub use crate::eval::{Evaluator, Heuristic};

pub use crate::agents::{
    Agent, AlphaBetaAgent, ExpectimaxAgent, GreedyAgent, MinimaxAgent, RandomAgent, SearchConfig,
};

pub use crate::mcts::{MctsAgent, MctsConfig, SearchStats, StatsTable, TableStats};

pub use crate::rules::{Game, LogObserver, MatchObserver, NullObserver, Referee};
