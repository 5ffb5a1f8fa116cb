//! Ship definitions and placement geometry.

use core::fmt;
use core::str::FromStr;

use crate::common::GameError;
use crate::config::{BOARD_SIZE, MIN_SHIP_LENGTH};
use crate::coordinate::Coordinate;
use crate::grid::{Cell, Grid, BB};

/// Orientation of a ship on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    /// Fixed row, consecutive columns.
    Row,
    /// Fixed column, consecutive rows.
    Column,
}

impl FromStr for Orientation {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "R" | "ROW" => Ok(Orientation::Row),
            "C" | "COLUMN" => Ok(Orientation::Column),
            _ => Err(GameError::InvalidOrientation),
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Orientation::Row => write!(f, "R"),
            Orientation::Column => write!(f, "C"),
        }
    }
}

/// A placed ship. Its cells are derived from anchor, length and orientation
/// every time they are needed and never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "std", serde(try_from = "RawShip"))]
pub struct Ship {
    anchor: Coordinate,
    length: usize,
    orientation: Orientation,
}

impl Ship {
    /// Describe a ship whose footprint starts at `anchor`.
    ///
    /// Fails with `ShipTooShort` before checking bounds, so a length of 0 or
    /// 1 is reported as too short even near the grid edge.
    pub fn new(
        anchor: Coordinate,
        length: usize,
        orientation: Orientation,
    ) -> Result<Self, GameError> {
        if length < MIN_SHIP_LENGTH {
            return Err(GameError::ShipTooShort { length });
        }
        let start = match orientation {
            Orientation::Row => anchor.col(),
            Orientation::Column => anchor.row(),
        };
        // start < BOARD_SIZE, so the subtraction cannot underflow
        if length > BOARD_SIZE as usize - start {
            return Err(GameError::ShipOutOfBounds);
        }
        Ok(Ship {
            anchor,
            length,
            orientation,
        })
    }

    /// Footprint cell closest to A1.
    pub fn anchor(&self) -> Coordinate {
        self.anchor
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Cells the ship covers, starting at the anchor.
    pub fn footprint(&self) -> impl Iterator<Item = Coordinate> + '_ {
        let (row, col) = (self.anchor.row(), self.anchor.col());
        (0..self.length).map(move |i| match self.orientation {
            Orientation::Row => Coordinate::new_unchecked(row, col + i),
            Orientation::Column => Coordinate::new_unchecked(row + i, col),
        })
    }

    /// Occupancy mask of the footprint.
    pub fn mask(&self) -> BB {
        let mut mask = BB::new();
        for cell in self.footprint() {
            let placed = mask.set(cell.row(), cell.col());
            debug_assert!(placed.is_ok(), "footprint of {} leaves the grid", self);
        }
        mask
    }

    /// `true` once every footprint cell on `grid` is hit.
    pub fn is_sunk(&self, grid: &Grid) -> bool {
        self.footprint().all(|cell| grid.cell(cell) == Cell::Hit)
    }
}

/// Unchecked wire form; deserialization goes through `Ship::new`.
#[cfg(feature = "std")]
#[derive(serde::Deserialize)]
struct RawShip {
    anchor: Coordinate,
    length: usize,
    orientation: Orientation,
}

#[cfg(feature = "std")]
impl TryFrom<RawShip> for Ship {
    type Error = GameError;

    fn try_from(raw: RawShip) -> Result<Self, Self::Error> {
        Ship::new(raw.anchor, raw.length, raw.orientation)
    }
}

impl fmt::Display for Ship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{} at {}", self.length, self.orientation, self.anchor)
    }
}
