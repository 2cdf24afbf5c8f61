//! Board squares.
//!
//! A `Square` is an index in `0..64` laid out as `rank * 8 + file`, with
//! file `a` = 0 and rank `1` = 0. The bit of the same index in a `u64`
//! bitboard represents the square.
//!
//! ## Text Form
//!
//! ```
//! use othello_search::core::Square;
//!
//! let d4: Square = "D4".parse().unwrap();
//! assert_eq!(d4.file(), 3);
//! assert_eq!(d4.rank(), 3);
//! assert_eq!(d4.index(), 27);
//! assert_eq!(d4.to_string(), "d4");
//! ```

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::error::{OthelloError, OthelloResult};

/// A square of the 8x8 board. Always holds an index below 64.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Square(u8);

impl Square {
    /// Number of squares on the board.
    pub const COUNT: usize = 64;

    /// Create a square from its index.
    pub fn new(index: usize) -> OthelloResult<Self> {
        if index < Self::COUNT {
            Ok(Self(index as u8))
        } else {
            Err(OthelloError::InvalidSquare(index))
        }
    }

    /// Create a square from 0-based file and rank indices.
    pub fn from_file_rank(file: usize, rank: usize) -> OthelloResult<Self> {
        if file >= 8 || rank >= 8 {
            return Err(OthelloError::InvalidCoordinate(format!("file {file}, rank {rank}")));
        }
        Ok(Self((rank * 8 + file) as u8))
    }

    /// Index in `0..64`.
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// 0-based file (column `a` = 0).
    #[inline]
    #[must_use]
    pub const fn file(self) -> usize {
        (self.0 & 0x7) as usize
    }

    /// 0-based rank (rank `1` = 0).
    #[inline]
    #[must_use]
    pub const fn rank(self) -> usize {
        (self.0 >> 3) as usize
    }

    /// Single-bit mask of this square.
    #[inline]
    #[must_use]
    pub const fn bit(self) -> u64 {
        1u64 << self.0
    }

    /// The square offset by `(df, dr)` files and ranks, if still on the board.
    #[must_use]
    pub fn offset(self, df: i32, dr: i32) -> Option<Self> {
        let file = self.file() as i32 + df;
        let rank = self.rank() as i32 + dr;
        if (0..8).contains(&file) && (0..8).contains(&rank) {
            Some(Self((rank * 8 + file) as u8))
        } else {
            None
        }
    }

    /// All squares in ascending index order.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..Self::COUNT as u8).map(Square)
    }

    /// Squares whose bits are set in `mask`, ascending.
    pub fn iter_mask(mut mask: u64) -> impl Iterator<Item = Square> {
        std::iter::from_fn(move || {
            if mask == 0 {
                None
            } else {
                let index = mask.trailing_zeros() as u8;
                mask &= mask - 1;
                Some(Square(index))
            }
        })
    }
}

impl TryFrom<u8> for Square {
    type Error = OthelloError;

    fn try_from(index: u8) -> Result<Self, Self::Error> {
        Self::new(index as usize)
    }
}

impl From<Square> for u8 {
    fn from(square: Square) -> Self {
        square.0
    }
}

impl FromStr for Square {
    type Err = OthelloError;

    /// Parse `<file><rank>`, e.g. `d4` or `D4`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || OthelloError::InvalidCoordinate(s.to_string());

        let mut chars = s.chars();
        let (Some(file), Some(rank), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(invalid());
        };

        let file = match file.to_ascii_lowercase() {
            c @ 'a'..='h' => c as usize - 'a' as usize,
            _ => return Err(invalid()),
        };
        let rank = match rank {
            c @ '1'..='8' => c as usize - '1' as usize,
            _ => return Err(invalid()),
        };

        Self::from_file_rank(file, rank)
    }
}

impl std::fmt::Display for Square {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let file = (b'a' + self.file() as u8) as char;
        write!(f, "{}{}", file, self.rank() + 1)
    }
}
