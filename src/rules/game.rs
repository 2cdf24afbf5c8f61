//! Turn-tracked game.
//!
//! `Game` owns the current `State` and enforces whose turn it is and the
//! skip rule: a side with a legal move must play one, a side without any
//! must skip. The turn passes after every successful call, skips included,
//! so the game ends after two consecutive skips.

use std::time::Duration;

use crate::core::{
    Action, Conclusion, MoveRecord, OthelloError, OthelloResult, Player, PlayerMap, State,
};

/// A game in progress.
#[derive(Clone, Debug)]
pub struct Game {
    state: State,
    next_player: Player,
    move_count: u32,
    history: Vec<MoveRecord>,
    elapsed: PlayerMap<Duration>,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// Standard opening with Dark to move.
    #[must_use]
    pub fn new() -> Self {
        Self::from_state(State::initial(), Player::Dark)
    }

    /// Start from an arbitrary position.
    #[must_use]
    pub fn from_state(state: State, next_player: Player) -> Self {
        Self {
            state,
            next_player,
            move_count: 0,
            history: Vec::new(),
            elapsed: PlayerMap::with_value(Duration::ZERO),
        }
    }

    /// Current position.
    #[must_use]
    pub fn state(&self) -> &State {
        &self.state
    }

    /// Side to move.
    #[must_use]
    pub fn next_player(&self) -> Player {
        self.next_player
    }

    /// Number of successful `play` calls, skips included.
    #[must_use]
    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    /// Moves played so far.
    #[must_use]
    pub fn history(&self) -> &[MoveRecord] {
        &self.history
    }

    /// Play `action` for `player`, or skip with `None`.
    pub fn play(&mut self, player: Player, action: Option<Action>) -> OthelloResult<()> {
        if player != self.next_player {
            return Err(OthelloError::OutOfTurn {
                player,
                expected: self.next_player,
            });
        }

        let can_move = self.state.has_legal_action(player);
        match (can_move, action) {
            (true, Some(action)) => {
                self.state = self.state.perform_action(player, action)?;
            }
            (true, None) => return Err(OthelloError::IllegalSkip(player)),
            (false, Some(action)) => return Err(OthelloError::MustSkip { player, action }),
            (false, None) => {}
        }

        self.move_count += 1;
        self.history.push(MoveRecord::new(player, action, self.move_count));
        self.next_player = player.adversary();
        Ok(())
    }

    /// Outcome, `None` while the game is in progress.
    #[must_use]
    pub fn conclusion(&self) -> Option<Conclusion> {
        self.state.conclusion()
    }

    /// Pieces `player` currently has on the board.
    #[must_use]
    pub fn piece_count(&self, player: Player) -> u32 {
        self.state.piece_count(player)
    }

    // === Timing ===

    /// Add thinking time for `player`.
    pub fn record_elapsed(&mut self, player: Player, duration: Duration) {
        self.elapsed[player] += duration;
    }

    /// Total thinking time recorded for `player`.
    #[must_use]
    pub fn elapsed(&self, player: Player) -> Duration {
        self.elapsed[player]
    }
}
