//! Error types for construction and move validation.
//!
//! Construction errors (bad squares, bad coordinates, inconsistent boards)
//! and illegal-move errors are reported to the caller. Once a `State` or
//! `Game` exists, queries on it are total.

use super::action::Action;
use super::player::Player;

/// Errors raised by the engine.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum OthelloError {
    /// Square index outside `0..64`.
    #[error("square index {0} is out of range 0..64")]
    InvalidSquare(usize),

    /// Text coordinate that is not `<file a-h><rank 1-8>`.
    #[error("invalid coordinate {0:?}")]
    InvalidCoordinate(String),

    /// Both players claim the same squares.
    #[error("board masks overlap at {0:#018x}")]
    OverlappingMasks(u64),

    /// Malformed textual board.
    #[error("invalid board text: {0}")]
    InvalidBoardText(String),

    /// The action does not flip anything for the player.
    #[error("{action} is not a legal move for {player}")]
    IllegalAction { player: Player, action: Action },

    /// The player tried to skip while holding a legal move.
    #[error("{0} cannot skip while a legal move exists")]
    IllegalSkip(Player),

    /// The player tried to move while having no legal move.
    #[error("{player} has no legal move and must skip, got {action}")]
    MustSkip { player: Player, action: Action },

    /// The player acted while it was the other side's turn.
    #[error("it is not {player}'s turn ({expected} to move)")]
    OutOfTurn { player: Player, expected: Player },
}

/// Result type alias for engine operations.
pub type OthelloResult<T> = Result<T, OthelloError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Square;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            OthelloError::InvalidSquare(64).to_string(),
            "square index 64 is out of range 0..64"
        );

        let action = Action::new(Square::from_file_rank(3, 2).unwrap());
        let err = OthelloError::IllegalAction { player: Player::Dark, action };
        assert_eq!(err.to_string(), "d3 is not a legal move for Dark");

        let err = OthelloError::OutOfTurn { player: Player::Light, expected: Player::Dark };
        assert_eq!(err.to_string(), "it is not Light's turn (Dark to move)");
    }
}
