//! Match runner.
//!
//! The `Referee` asks the agent on turn for an action, applies it to its
//! `Game`, times the decision, and reports to a `MatchObserver` after every
//! move and once the game is over.

use std::time::Instant;

use tracing::info;

use crate::agents::Agent;
use crate::core::{Conclusion, MoveRecord, OthelloResult, PlayerMap};

use super::game::Game;

/// Callbacks invoked while a match runs.
pub trait MatchObserver {
    /// Called after each successful move or skip.
    fn on_move(&mut self, _game: &Game, _record: &MoveRecord) {}

    /// Called once when the game has concluded.
    fn on_game_end(&mut self, _game: &Game, _conclusion: Conclusion) {}
}

/// Observer that ignores everything.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullObserver;

impl MatchObserver for NullObserver {}

/// Observer that logs each move, the board after it, and the result.
#[derive(Clone, Copy, Debug, Default)]
pub struct LogObserver;

impl MatchObserver for LogObserver {
    fn on_move(&mut self, game: &Game, record: &MoveRecord) {
        info!("{record}");
        for row in game.state().board().rows() {
            info!("{row}");
        }
    }

    fn on_game_end(&mut self, _game: &Game, conclusion: Conclusion) {
        info!("{conclusion}");
    }
}

/// Drives a game between two agents.
pub struct Referee {
    game: Game,
    agents: PlayerMap<Box<dyn Agent>>,
}

impl Referee {
    /// New match from the standard opening.
    ///
    /// `dark` and `light` must play the side they are passed for; a
    /// mismatch surfaces as an illegal-move error from `run`.
    pub fn new(dark: Box<dyn Agent>, light: Box<dyn Agent>) -> Self {
        Self {
            game: Game::new(),
            agents: PlayerMap::from([dark, light]),
        }
    }

    /// Start from `game` instead of the standard opening.
    #[must_use]
    pub fn with_game(mut self, game: Game) -> Self {
        self.game = game;
        self
    }

    /// The game being played.
    #[must_use]
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Consume the referee, keeping the game.
    #[must_use]
    pub fn into_game(self) -> Game {
        self.game
    }

    /// Play one turn. Returns the conclusion once the game is over.
    pub fn step(&mut self, observer: &mut dyn MatchObserver) -> OthelloResult<Option<Conclusion>> {
        if let Some(conclusion) = self.game.conclusion() {
            return Ok(Some(conclusion));
        }

        let player = self.game.next_player();
        let start = Instant::now();
        let action = self.agents[player].choose_action(self.game.state())?;
        self.game.play(player, action)?;
        self.game.record_elapsed(player, start.elapsed());

        if let Some(record) = self.game.history().last() {
            observer.on_move(&self.game, record);
        }
        Ok(self.game.conclusion())
    }

    /// Play until the game concludes.
    pub fn run(&mut self, observer: &mut dyn MatchObserver) -> OthelloResult<Conclusion> {
        loop {
            if let Some(conclusion) = self.step(observer)? {
                observer.on_game_end(&self.game, conclusion);
                return Ok(conclusion);
            }
        }
    }
}
