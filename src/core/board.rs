//! Bitboard representation of piece placement.
//!
//! Two 64-bit masks, one per player. Bit `i` of a mask is set iff that
//! player has a piece on the square with index `i`. The masks never
//! overlap; every constructor checks this.
//!
//! ## Text Form
//!
//! Eight rows of eight glyphs, rank 1 first, file `a` first in each row:
//! `.` empty, `X` dark, `O` light.
//!
//! ```
//! use othello_search::core::Board;
//!
//! let board = Board::initial();
//! assert_eq!(board.rows()[3], "...OX...");
//! assert_eq!(board.rows()[4], "...XO...");
//! ```

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::error::{OthelloError, OthelloResult};
use super::player::Player;
use super::square::Square;

/// Glyph for an empty square.
pub const EMPTY_GLYPH: char = '.';

/// Immutable piece placement.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "BoardMasks")]
pub struct Board {
    dark: u64,
    light: u64,
}

#[derive(Deserialize)]
struct BoardMasks {
    dark: u64,
    light: u64,
}

impl TryFrom<BoardMasks> for Board {
    type Error = OthelloError;

    fn try_from(masks: BoardMasks) -> Result<Self, Self::Error> {
        Board::new(masks.dark, masks.light)
    }
}

impl Board {
    /// Create a board from the two masks. Fails if they overlap.
    pub fn new(dark: u64, light: u64) -> OthelloResult<Self> {
        let overlap = dark & light;
        if overlap != 0 {
            return Err(OthelloError::OverlappingMasks(overlap));
        }
        Ok(Self { dark, light })
    }

    /// A board with no pieces.
    #[must_use]
    pub const fn empty() -> Self {
        Self { dark: 0, light: 0 }
    }

    /// The standard opening: light on d4 and e5, dark on e4 and d5.
    #[must_use]
    pub const fn initial() -> Self {
        // d4 = 27, e4 = 28, d5 = 35, e5 = 36
        Self {
            dark: (1 << 28) | (1 << 35),
            light: (1 << 27) | (1 << 36),
        }
    }

    /// Piece on a square.
    #[inline]
    #[must_use]
    pub fn get(&self, square: Square) -> Option<Player> {
        let bit = square.bit();
        if self.dark & bit != 0 {
            Some(Player::Dark)
        } else if self.light & bit != 0 {
            Some(Player::Light)
        } else {
            None
        }
    }

    /// Return a new board with `square` cleared or owned by `piece`.
    #[must_use]
    pub fn set(&self, square: Square, piece: Option<Player>) -> Self {
        let bit = square.bit();
        let (dark, light) = (self.dark & !bit, self.light & !bit);
        match piece {
            None => Self { dark, light },
            Some(Player::Dark) => Self { dark: dark | bit, light },
            Some(Player::Light) => Self { dark, light: light | bit },
        }
    }

    /// Occupancy mask of one player.
    #[inline]
    #[must_use]
    pub const fn mask(&self, player: Player) -> u64 {
        match player {
            Player::Dark => self.dark,
            Player::Light => self.light,
        }
    }

    /// Mask of all occupied squares.
    #[inline]
    #[must_use]
    pub const fn occupied(&self) -> u64 {
        self.dark | self.light
    }

    /// Number of pieces a player has on the board.
    #[inline]
    #[must_use]
    pub const fn count(&self, player: Player) -> u32 {
        self.mask(player).count_ones()
    }

    /// Place `player`'s piece on `square` and turn every square of `flips`
    /// to `player`. Callers pass a flip mask taken from the opponent's
    /// pieces, which keeps the masks disjoint.
    #[must_use]
    pub(crate) const fn with_placement(&self, player: Player, square: Square, flips: u64) -> Self {
        let gained = square.bit() | flips;
        match player {
            Player::Dark => Self {
                dark: self.dark | gained,
                light: self.light & !gained,
            },
            Player::Light => Self {
                dark: self.dark & !gained,
                light: self.light | gained,
            },
        }
    }

    /// Parse a board from its eight text rows.
    pub fn from_rows<I, S>(rows: I) -> OthelloResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut board = Self::empty();
        let mut rank_count = 0;

        for (rank, row) in rows.into_iter().enumerate() {
            let row = row.as_ref();
            if rank >= 8 {
                return Err(OthelloError::InvalidBoardText("more than 8 rows".to_string()));
            }
            if row.chars().count() != 8 {
                return Err(OthelloError::InvalidBoardText(format!(
                    "row {} has {} squares, expected 8",
                    rank + 1,
                    row.chars().count()
                )));
            }

            for (file, glyph) in row.chars().enumerate() {
                let piece = match glyph {
                    EMPTY_GLYPH => None,
                    'X' => Some(Player::Dark),
                    'O' => Some(Player::Light),
                    other => {
                        return Err(OthelloError::InvalidBoardText(format!(
                            "unexpected glyph {other:?} in row {}",
                            rank + 1
                        )))
                    }
                };
                board = board.set(Square::from_file_rank(file, rank)?, piece);
            }
            rank_count += 1;
        }

        if rank_count != 8 {
            return Err(OthelloError::InvalidBoardText(format!(
                "{rank_count} rows, expected 8"
            )));
        }

        Ok(board)
    }

    /// The eight text rows, rank 1 first.
    #[must_use]
    pub fn rows(&self) -> Vec<String> {
        let glyphs: Vec<char> = Square::all()
            .map(|square| self.get(square).map_or(EMPTY_GLYPH, Player::glyph))
            .collect();
        glyphs.chunks(8).map(|row| row.iter().collect()).collect()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::initial()
    }
}

impl FromStr for Board {
    type Err = OthelloError;

    /// Parse rows separated by newlines. Surrounding whitespace is ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_rows(s.trim().lines().map(str::trim))
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.rows().join("\n"))
    }
}
