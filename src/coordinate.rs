//! Grid coordinates in both the zero-based index form the engine uses and
//! the `A1`..`J10` text form callers exchange.

use crate::common::GameError;
use crate::config::{BOARD_SIZE, ROW_LABELS};
use core::fmt;
use core::str::FromStr;

/// A cell on a 10×10 grid. Always in bounds once constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "std", serde(try_from = "RawCoordinate"))]
pub struct Coordinate {
    row: usize,
    col: usize,
}

impl Coordinate {
    /// Build a coordinate from zero-based indices.
    pub fn new(row: usize, col: usize) -> Result<Self, GameError> {
        if row >= BOARD_SIZE as usize || col >= BOARD_SIZE as usize {
            return Err(GameError::InvalidCoordinate);
        }
        Ok(Self { row, col })
    }

    /// Caller guarantees both indices are below `BOARD_SIZE`.
    pub(crate) const fn new_unchecked(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    pub fn row(&self) -> usize {
        self.row
    }

    pub fn col(&self) -> usize {
        self.col
    }

    /// Row letter, `A` for row 0.
    pub fn row_label(&self) -> char {
        ROW_LABELS.as_bytes()[self.row] as char
    }

    /// All grid cells in row-major order.
    pub fn all() -> impl Iterator<Item = Coordinate> {
        let n = BOARD_SIZE as usize;
        (0..n * n).map(move |i| Coordinate::new_unchecked(i / n, i % n))
    }
}

impl FromStr for Coordinate {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let row_ch = chars.next().ok_or(GameError::InvalidCoordinate)?;
        let row = ROW_LABELS
            .find(row_ch)
            .ok_or(GameError::InvalidCoordinate)?;
        let col = match chars.as_str() {
            "10" => 9,
            digit if digit.len() == 1 => match digit.as_bytes()[0] {
                b @ b'1'..=b'9' => (b - b'1') as usize,
                _ => return Err(GameError::InvalidCoordinate),
            },
            _ => return Err(GameError::InvalidCoordinate),
        };
        Coordinate::new(row, col)
    }
}

/// Unchecked wire form; deserialization goes through `Coordinate::new`.
#[cfg(feature = "std")]
#[derive(serde::Deserialize)]
struct RawCoordinate {
    row: usize,
    col: usize,
}

#[cfg(feature = "std")]
impl TryFrom<RawCoordinate> for Coordinate {
    type Error = GameError;

    fn try_from(raw: RawCoordinate) -> Result<Self, Self::Error> {
        Coordinate::new(raw.row, raw.col)
    }
}

impl TryFrom<&str> for Coordinate {
    type Error = GameError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.row_label(), self.col + 1)
    }
}
