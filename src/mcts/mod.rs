//! Monte Carlo Tree Search agent.
//!
//! ## Overview
//!
//! Statistics live in a flat table keyed by `(player, state)` rather than
//! in an explicit tree. Transpositions share one entry, and the table
//! persists for the agent's lifetime, so every move of a game reuses what
//! earlier searches learned.
//!
//! - **Expansion**: a random never-played child ends the descent
//! - **Selection**: UCB1 over fully played children
//! - **Simulation**: uniformly random playout to the end of the game
//! - **Backpropagation**: 1 per win, 0.5 per draw, credited to each
//!   `(player, state)` on the descent path
//!
//! ## Usage
//!
//! ```rust
//! use othello_search::agents::Agent;
//! use othello_search::core::{Player, State};
//! use othello_search::mcts::{MctsAgent, MctsConfig};
//!
//! let mut agent = MctsAgent::new(Player::Dark, MctsConfig::default().with_iterations(50));
//! let state = State::initial();
//!
//! let action = agent.choose_action(&state).unwrap();
//! assert!(state.is_legal_action(Player::Dark, action.unwrap()));
//! ```
//!
//! ## Custom Policies
//!
//! ```rust,ignore
//! let agent = MctsAgent::new(Player::Light, config)
//!     .with_selection(MySelection)
//!     .with_simulation(MyPlayout);
//! ```

pub mod config;
pub mod policy;
pub mod search;
pub mod stats;
pub mod table;

pub use config::MctsConfig;
pub use policy::{RandomPlayout, SelectionPolicy, SimulationPolicy, Ucb1};
pub use search::MctsAgent;
pub use stats::{NodeStats, SearchStats};
pub use table::{StatsTable, TableStats};
