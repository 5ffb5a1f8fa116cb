//! Per-player state: grid, placed ships and sunk accounting.

use alloc::vec::Vec;

#[cfg(feature = "std")]
use crate::common::GameError;
use crate::grid::Grid;
#[cfg(feature = "std")]
use crate::grid::BB;
use crate::ship::Ship;

/// Everything the engine tracks for one player. Performs no validation;
/// the engine checks legality before calling any mutator here.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "std", serde(try_from = "RawPlayerState"))]
pub struct PlayerState {
    grid: Grid,
    ships: Vec<Ship>,
    sunk_ship_count: usize,
}

impl PlayerState {
    /// Empty grid, no ships.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Replace the whole grid.
    pub fn set_grid(&mut self, grid: Grid) {
        self.grid = grid;
    }

    /// Record a ship that is already marked on the grid.
    pub fn add_ship(&mut self, ship: Ship) {
        self.ships.push(ship);
    }

    /// Placed ships in placement order.
    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    pub fn ship_count(&self) -> usize {
        self.ships.len()
    }

    pub fn sunk_ship_count(&self) -> usize {
        self.sunk_ship_count
    }

    pub fn set_sunk_ship_count(&mut self, sunk: usize) {
        self.sunk_ship_count = sunk;
    }

    /// Ships not yet sunk.
    pub fn ships_remaining(&self) -> usize {
        self.ship_count().saturating_sub(self.sunk_ship_count)
    }
}

/// Unchecked wire form of a player's state.
#[cfg(feature = "std")]
#[derive(serde::Deserialize)]
struct RawPlayerState {
    grid: Grid,
    ships: Vec<Ship>,
    sunk_ship_count: usize,
}

#[cfg(feature = "std")]
impl TryFrom<RawPlayerState> for PlayerState {
    type Error = GameError;

    /// Ships must be disjoint, match the grid's segments exactly, and the
    /// sunk count must agree with the hits on the grid.
    fn try_from(raw: RawPlayerState) -> Result<Self, Self::Error> {
        let mut covered = BB::new();
        for ship in &raw.ships {
            let mask = ship.mask();
            if !(covered & mask).is_empty() {
                return Err(GameError::InvalidSnapshot);
            }
            covered |= mask;
        }
        let sunk = raw.ships.iter().filter(|s| s.is_sunk(&raw.grid)).count();
        if covered != raw.grid.occupied() || sunk != raw.sunk_ship_count {
            return Err(GameError::InvalidSnapshot);
        }
        Ok(PlayerState {
            grid: raw.grid,
            ships: raw.ships,
            sunk_ship_count: raw.sunk_ship_count,
        })
    }
}
