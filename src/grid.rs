//! A player's 10×10 grid: ship segments, hits and misses.

use core::fmt;
use rand::Rng;

use crate::bitboard::BitBoard;
use crate::common::GameError;
use crate::config::{BOARD_SIZE, MAX_PLACEMENT_ATTEMPTS, MIN_SHIP_LENGTH};
use crate::coordinate::Coordinate;
use crate::ship::{Orientation, Ship};

/// Bitboard sized for one grid.
pub type BB = BitBoard<u128, { BOARD_SIZE as usize }>;

/// State of a single grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Cell {
    Empty,
    Ship,
    Hit,
    Miss,
}

impl Cell {
    fn symbol(self, reveal: bool) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Ship if reveal => 'S',
            Cell::Ship => '.',
            Cell::Hit => 'X',
            Cell::Miss => 'o',
        }
    }
}

/// Grid contents packed into three bitboards. A hit cell stays in `ships`,
/// so `ships` always records every segment ever placed.
#[derive(Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "std", serde(try_from = "RawGrid"))]
pub struct Grid {
    ships: BB,
    hits: BB,
    misses: BB,
}

impl Grid {
    /// An all-empty grid.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cell(&self, at: Coordinate) -> Cell {
        let (r, c) = (at.row(), at.col());
        if self.hits.get(r, c).unwrap_or(false) {
            Cell::Hit
        } else if self.misses.get(r, c).unwrap_or(false) {
            Cell::Miss
        } else if self.ships.get(r, c).unwrap_or(false) {
            Cell::Ship
        } else {
            Cell::Empty
        }
    }

    /// `true` when every footprint cell of `ship` is empty.
    pub fn can_place(&self, ship: &Ship) -> bool {
        ((self.ships | self.hits | self.misses) & ship.mask()).is_empty()
    }

    /// Mark the footprint of `ship` as ship segments. All-or-nothing.
    pub fn place(&mut self, ship: &Ship) -> Result<(), GameError> {
        if !self.can_place(ship) {
            return Err(GameError::ShipOverlaps);
        }
        self.ships |= ship.mask();
        Ok(())
    }

    pub fn mark_hit(&mut self, at: Coordinate) -> Result<(), GameError> {
        self.hits.set(at.row(), at.col())?;
        Ok(())
    }

    pub fn mark_miss(&mut self, at: Coordinate) -> Result<(), GameError> {
        self.misses.set(at.row(), at.col())?;
        Ok(())
    }

    /// Every cell that has held a ship segment, hit or not.
    pub fn occupied(&self) -> BB {
        self.ships
    }

    pub fn hits(&self) -> BB {
        self.hits
    }

    pub fn misses(&self) -> BB {
        self.misses
    }

    /// Number of cells currently in the `Ship` state.
    pub fn ship_cells(&self) -> usize {
        self.ships.count_ones() - (self.ships & self.hits).count_ones()
    }

    /// Returns a random legal (anchor, orientation) for a ship of `length`.
    pub fn random_placement<R: Rng>(
        &self,
        rng: &mut R,
        length: usize,
    ) -> Result<(Coordinate, Orientation), GameError> {
        let size = BOARD_SIZE as usize;
        if length < MIN_SHIP_LENGTH {
            return Err(GameError::ShipTooShort { length });
        }
        if length > size {
            return Err(GameError::ShipOutOfBounds);
        }
        for _ in 0..MAX_PLACEMENT_ATTEMPTS {
            let orient = if rng.random() {
                Orientation::Row
            } else {
                Orientation::Column
            };
            let (max_r, max_c) = match orient {
                Orientation::Row => (size - 1, size - length),
                Orientation::Column => (size - length, size - 1),
            };
            let anchor = Coordinate::new(rng.random_range(0..=max_r), rng.random_range(0..=max_c))?;
            let ship = Ship::new(anchor, length, orient)?;
            if self.can_place(&ship) {
                return Ok((anchor, orient));
            }
        }
        Err(GameError::UnableToPlaceShip)
    }

    /// View that hides unhit ship segments, as the opponent sees the grid.
    pub fn public_view(&self) -> PublicView<'_> {
        PublicView(self)
    }

    fn render(&self, f: &mut fmt::Formatter<'_>, reveal: bool) -> fmt::Result {
        write!(f, "  ")?;
        for c in 1..=BOARD_SIZE {
            write!(f, " {}", c)?;
        }
        for at in Coordinate::all() {
            if at.col() == 0 {
                write!(f, "\n{} ", at.row_label())?;
            }
            // keep columns aligned under the two-digit "10"
            let pad = if at.col() == BOARD_SIZE as usize - 1 { "  " } else { " " };
            write!(f, "{}{}", pad, self.cell(at).symbol(reveal))?;
        }
        Ok(())
    }
}

/// Unchecked wire form of a grid.
#[cfg(feature = "std")]
#[derive(serde::Deserialize)]
struct RawGrid {
    ships: BB,
    hits: BB,
    misses: BB,
}

#[cfg(feature = "std")]
impl TryFrom<RawGrid> for Grid {
    type Error = GameError;

    /// Hits must land on ship segments and misses on open water.
    fn try_from(raw: RawGrid) -> Result<Self, Self::Error> {
        if (raw.hits & raw.ships) != raw.hits || !(raw.misses & raw.ships).is_empty() {
            return Err(GameError::InvalidSnapshot);
        }
        Ok(Grid {
            ships: raw.ships,
            hits: raw.hits,
            misses: raw.misses,
        })
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.render(f, true)
    }
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Grid {{\n  ships: {:?},\n  hits: {:?},\n  misses: {:?}\n}}",
            self.ships, self.hits, self.misses
        )
    }
}

/// Display adapter returned by [`Grid::public_view`].
pub struct PublicView<'a>(&'a Grid);

impl fmt::Display for PublicView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.render(f, false)
    }
}
