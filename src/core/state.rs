//! Game state and the Othello move rules.
//!
//! A `State` is an immutable wrapper around a `Board`. Every query is a
//! pure function of the state and a player, so results may be recomputed
//! freely; nothing here caches.
//!
//! ## Flip Rule
//!
//! Placing on an empty square flips, in each of the eight compass
//! directions, the contiguous run of opponent pieces that ends at one of
//! the mover's own pieces. Runs that reach an empty square or the board
//! edge flip nothing. A placement is legal iff it flips something.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::action::Action;
use super::board::Board;
use super::error::{OthelloError, OthelloResult};
use super::player::{Conclusion, Player};
use super::square::Square;

/// Compass directions as `(file delta, rank delta)`.
const DIRECTIONS: [(i32, i32); 8] = [
    (1, 0),
    (1, 1),
    (0, 1),
    (-1, 1),
    (-1, 0),
    (-1, -1),
    (0, -1),
    (1, -1),
];

/// a1, h1, a8, h8.
pub const CORNER_MASK: u64 = 0x8100_0000_0000_0081;

/// The 24 border squares that are not corners.
pub const EDGE_MASK: u64 = 0x7E81_8181_8181_817E;

/// Moves paired with the states they lead to.
///
/// Inline capacity covers the usual Othello branching factor.
pub type Successors = SmallVec<[(Action, State); 16]>;

/// Immutable game position.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct State {
    board: Board,
}

impl State {
    /// Wrap a board.
    #[must_use]
    pub const fn new(board: Board) -> Self {
        Self { board }
    }

    /// The standard opening position.
    #[must_use]
    pub const fn initial() -> Self {
        Self::new(Board::initial())
    }

    /// The underlying board.
    #[must_use]
    pub const fn board(&self) -> &Board {
        &self.board
    }

    // === Move Rules ===

    /// Mask of opponent pieces flipped if `player` plays `action`.
    ///
    /// Zero when the square is occupied or nothing is bracketed.
    #[must_use]
    pub fn flip_mask(&self, player: Player, action: Action) -> u64 {
        let origin = action.square();
        if self.board.occupied() & origin.bit() != 0 {
            return 0;
        }

        let own = self.board.mask(player);
        let opponent = self.board.mask(player.adversary());
        let mut flips = 0;

        for (df, dr) in DIRECTIONS {
            let mut run = 0;
            let mut cursor = origin.offset(df, dr);

            while let Some(square) = cursor {
                let bit = square.bit();
                if opponent & bit != 0 {
                    run |= bit;
                    cursor = square.offset(df, dr);
                } else {
                    if own & bit != 0 {
                        flips |= run;
                    }
                    break;
                }
            }
        }

        flips
    }

    /// Check if `action` is legal for `player`.
    #[inline]
    #[must_use]
    pub fn is_legal_action(&self, player: Player, action: Action) -> bool {
        self.flip_mask(player, action) != 0
    }

    /// Legal actions for `player` in ascending square order.
    ///
    /// The iterator owns a copy of the state; call again to restart.
    pub fn legal_actions(&self, player: Player) -> impl Iterator<Item = Action> {
        let state = *self;
        Square::all()
            .map(Action::new)
            .filter(move |&action| state.is_legal_action(player, action))
    }

    /// Check if `player` has at least one legal action.
    #[must_use]
    pub fn has_legal_action(&self, player: Player) -> bool {
        self.legal_actions(player).next().is_some()
    }

    /// Apply `action` for `player`, returning the resulting state.
    pub fn perform_action(&self, player: Player, action: Action) -> OthelloResult<State> {
        let flips = self.flip_mask(player, action);
        if flips == 0 {
            return Err(OthelloError::IllegalAction { player, action });
        }
        Ok(Self::new(self.board.with_placement(player, action.square(), flips)))
    }

    /// Every legal action for `player` paired with its resulting state.
    pub fn successors(&self, player: Player) -> OthelloResult<Successors> {
        self.legal_actions(player)
            .map(|action| Ok((action, self.perform_action(player, action)?)))
            .collect()
    }

    // === Conclusion ===

    /// Outcome of the game, `None` while either side can still move.
    #[must_use]
    pub fn conclusion(&self) -> Option<Conclusion> {
        if Player::ALL.iter().any(|&player| self.has_legal_action(player)) {
            return None;
        }

        let dark = self.piece_count(Player::Dark);
        let light = self.piece_count(Player::Light);
        Some(match dark.cmp(&light) {
            std::cmp::Ordering::Greater => Conclusion::Winner(Player::Dark),
            std::cmp::Ordering::Less => Conclusion::Winner(Player::Light),
            std::cmp::Ordering::Equal => Conclusion::Draw,
        })
    }

    /// Check if neither player can move.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        self.conclusion().is_some()
    }

    // === Scoring Primitives ===

    /// Pieces owned by `player`.
    #[must_use]
    pub fn piece_count(&self, player: Player) -> u32 {
        self.board.count(player)
    }

    /// Pieces owned by `player` on non-corner border squares.
    #[must_use]
    pub fn edge_count(&self, player: Player) -> u32 {
        (self.board.mask(player) & EDGE_MASK).count_ones()
    }

    /// Pieces owned by `player` on corners.
    #[must_use]
    pub fn corner_count(&self, player: Player) -> u32 {
        (self.board.mask(player) & CORNER_MASK).count_ones()
    }

    /// Number of legal actions for `player`.
    #[must_use]
    pub fn mobility(&self, player: Player) -> u32 {
        self.legal_actions(player).count() as u32
    }

    /// Absolute difference between the two players' piece counts.
    #[must_use]
    pub fn piece_difference(&self) -> u32 {
        self.piece_count(Player::Dark)
            .abs_diff(self.piece_count(Player::Light))
    }

    /// Weighted positional score of `player`:
    /// `2*pieces + 5*edges + 10*corners + mobility - adversary mobility`.
    #[must_use]
    pub fn score(&self, player: Player) -> i32 {
        2 * self.piece_count(player) as i32
            + 5 * self.edge_count(player) as i32
            + 10 * self.corner_count(player) as i32
            + self.mobility(player) as i32
            - self.mobility(player.adversary()) as i32
    }
}

impl From<Board> for State {
    fn from(board: Board) -> Self {
        Self::new(board)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn action(text: &str) -> Action {
        text.parse().unwrap()
    }

    fn actions(texts: &[&str]) -> Vec<Action> {
        let mut actions: Vec<Action> = texts.iter().map(|t| action(t)).collect();
        actions.sort();
        actions
    }

    #[test]
    fn test_mask_constants() {
        assert_eq!(CORNER_MASK.count_ones(), 4);
        assert_eq!(EDGE_MASK.count_ones(), 24);
        assert_eq!(CORNER_MASK & EDGE_MASK, 0);

        for square in Square::iter_mask(EDGE_MASK | CORNER_MASK) {
            assert!(
                square.file() == 0 || square.file() == 7 || square.rank() == 0 || square.rank() == 7
            );
        }
    }

    #[test]
    fn test_initial_legal_actions() {
        let state = State::initial();

        let dark: Vec<_> = state.legal_actions(Player::Dark).collect();
        assert_eq!(dark, actions(&["d3", "c4", "f5", "e6"]));

        let light: Vec<_> = state.legal_actions(Player::Light).collect();
        assert_eq!(light, actions(&["e3", "f4", "c5", "d6"]));
    }

    #[test]
    fn test_legal_actions_are_restartable() {
        let state = State::initial();
        assert_eq!(state.legal_actions(Player::Dark).count(), 4);
        assert_eq!(state.legal_actions(Player::Dark).count(), 4);
    }

    #[test]
    fn test_flip_mask() {
        let state = State::initial();
        let d4 = "d4".parse::<Square>().unwrap();

        assert_eq!(state.flip_mask(Player::Dark, action("d3")), d4.bit());
        // occupied
        assert_eq!(state.flip_mask(Player::Dark, action("d4")), 0);
        // empty but brackets nothing
        assert_eq!(state.flip_mask(Player::Dark, action("a1")), 0);
    }

    #[test]
    fn test_flip_mask_multiple_directions() {
        let board = Board::from_rows([
            "X.X.X...",
            ".OOO....",
            "XO.OX...",
            ".OOO....",
            "X.X.X...",
            "........",
            "........",
            "........",
        ])
        .unwrap();
        let state = State::new(board);

        let flips = state.flip_mask(Player::Dark, action("c3"));
        assert_eq!(flips.count_ones(), 8);
        assert_eq!(flips, board.mask(Player::Light));
    }

    #[test]
    fn test_run_to_edge_flips_nothing() {
        let board = Board::from_rows([
            ".OOOOOOO",
            "........",
            "........",
            "........",
            "........",
            "........",
            "........",
            "........",
        ])
        .unwrap();
        let state = State::new(board);

        assert_eq!(state.flip_mask(Player::Dark, action("a1")), 0);
        assert!(!state.has_legal_action(Player::Dark));
    }

    #[test]
    fn test_perform_action() {
        let state = State::initial();
        let next = state.perform_action(Player::Dark, action("d3")).unwrap();

        assert_eq!(next.board().rows()[2], "...X....");
        assert_eq!(next.board().rows()[3], "...XX...");
        assert_eq!(next.board().rows()[4], "...XO...");
        assert_eq!(next.piece_count(Player::Dark), 4);
        assert_eq!(next.piece_count(Player::Light), 1);
        // input untouched
        assert_eq!(state, State::initial());
    }

    #[test]
    fn test_perform_illegal_action() {
        let state = State::initial();
        assert_eq!(
            state.perform_action(Player::Dark, action("a1")),
            Err(OthelloError::IllegalAction { player: Player::Dark, action: action("a1") })
        );
        assert!(state.perform_action(Player::Light, action("d3")).is_err());
    }

    #[test]
    fn test_successors() {
        let state = State::initial();
        let successors = state.successors(Player::Dark).unwrap();

        assert_eq!(successors.len(), 4);
        for (action, child) in successors {
            assert_eq!(child, state.perform_action(Player::Dark, action).unwrap());
        }
    }

    #[test]
    fn test_initial_score() {
        let state = State::initial();

        assert_eq!(state.piece_count(Player::Dark), 2);
        assert_eq!(state.edge_count(Player::Dark), 0);
        assert_eq!(state.corner_count(Player::Dark), 0);
        assert_eq!(state.mobility(Player::Dark), 4);
        // 2*2 + 0 + 0 + 4 - 4
        assert_eq!(state.score(Player::Dark), 4);
        assert_eq!(state.score(Player::Light), 4);
        assert_eq!(state.piece_difference(), 0);
    }

    #[test]
    fn test_score_counts_edges_and_corners() {
        let board = Board::from_rows([
            "XX......",
            "X.......",
            "........",
            "........",
            "........",
            "........",
            "........",
            ".......O",
        ])
        .unwrap();
        let state = State::new(board);

        assert_eq!(state.corner_count(Player::Dark), 1);
        assert_eq!(state.edge_count(Player::Dark), 2);
        assert_eq!(state.corner_count(Player::Light), 1);
        assert_eq!(state.mobility(Player::Dark), 0);
        assert_eq!(state.mobility(Player::Light), 0);
        // 2*3 + 5*2 + 10*1
        assert_eq!(state.score(Player::Dark), 26);
        // 2*1 + 0 + 10*1
        assert_eq!(state.score(Player::Light), 12);
    }

    #[test]
    fn test_conclusion_in_progress() {
        assert_eq!(State::initial().conclusion(), None);
        assert!(!State::initial().is_terminal());
    }

    #[test]
    fn test_conclusion_full_board_draw() {
        let board = Board::from_rows([
            "XXXXXXXX", "XXXXXXXX", "XXXXXXXX", "XXXXXXXX", "OOOOOOOO", "OOOOOOOO", "OOOOOOOO",
            "OOOOOOOO",
        ])
        .unwrap();
        let state = State::new(board);

        assert_eq!(state.conclusion(), Some(Conclusion::Draw));
    }

    #[test]
    fn test_conclusion_blocked_board_with_open_squares() {
        let board = Board::from_rows([
            "X.......", "........", "........", "........", "........", "........", "........",
            ".......O",
        ])
        .unwrap();
        let state = State::new(board);

        assert!(state.is_terminal());
        assert_eq!(state.conclusion(), Some(Conclusion::Draw));

        let dark_ahead = State::new(board.set("b1".parse().unwrap(), Some(Player::Dark)));
        assert_eq!(dark_ahead.conclusion(), Some(Conclusion::Winner(Player::Dark)));
    }
}
