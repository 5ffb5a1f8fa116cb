//! Common types: player identity, game outcome, shot results and errors.

use crate::bitboard::BitBoardError;
use core::fmt;

/// One of the two seats at the table. `First` always fires first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum PlayerId {
    First,
    Second,
}

impl PlayerId {
    /// The player whose grid this player fires at.
    pub fn opponent(self) -> Self {
        match self {
            PlayerId::First => PlayerId::Second,
            PlayerId::Second => PlayerId::First,
        }
    }

    pub(crate) fn index(self) -> usize {
        match self {
            PlayerId::First => 0,
            PlayerId::Second => 1,
        }
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlayerId::First => write!(f, "first"),
            PlayerId::Second => write!(f, "second"),
        }
    }
}

impl core::str::FromStr for PlayerId {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "first" | "FIRST" => Ok(PlayerId::First),
            "second" | "SECOND" => Ok(PlayerId::Second),
            _ => Err(GameError::InvalidPlayer),
        }
    }
}

/// Overall status of a game. Both won states are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum GameOutcome {
    Unfinished,
    FirstWon,
    SecondWon,
}

impl GameOutcome {
    /// Outcome in which `player` is the winner.
    pub fn won_by(player: PlayerId) -> Self {
        match player {
            PlayerId::First => GameOutcome::FirstWon,
            PlayerId::Second => GameOutcome::SecondWon,
        }
    }

    pub fn is_finished(self) -> bool {
        self != GameOutcome::Unfinished
    }

    pub fn winner(self) -> Option<PlayerId> {
        match self {
            GameOutcome::Unfinished => None,
            GameOutcome::FirstWon => Some(PlayerId::First),
            GameOutcome::SecondWon => Some(PlayerId::Second),
        }
    }
}

impl fmt::Display for GameOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameOutcome::Unfinished => write!(f, "UNFINISHED"),
            GameOutcome::FirstWon => write!(f, "FIRST_WON"),
            GameOutcome::SecondWon => write!(f, "SECOND_WON"),
        }
    }
}

/// Result of an accepted shot. Every variant consumed the firing player's turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum ShotResult {
    /// Target held no ship segment (including a cell already missed).
    Miss,
    /// Target was a ship segment that had not been hit yet.
    Hit,
    /// Like `Hit`, and the shot completed a ship.
    Sink,
    /// Target was already hit; the grid is unchanged.
    Repeat,
}

impl fmt::Display for ShotResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShotResult::Miss => write!(f, "miss"),
            ShotResult::Hit => write!(f, "hit"),
            ShotResult::Sink => write!(f, "sink"),
            ShotResult::Repeat => write!(f, "repeat"),
        }
    }
}

/// Errors returned by the rules engine and its inputs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// Underlying bitboard error (e.g., index out of range).
    BitBoard(BitBoardError),
    /// Coordinate text is not a row `A`-`J` followed by a column `1`-`10`,
    /// or indices lie outside the grid.
    InvalidCoordinate,
    /// Orientation text is neither row nor column.
    InvalidOrientation,
    /// Player text is neither `first` nor `second`.
    InvalidPlayer,
    /// Ship is shorter than the minimum length.
    ShipTooShort { length: usize },
    /// Ship footprint leaves the grid.
    ShipOutOfBounds,
    /// Ship footprint covers an occupied cell.
    ShipOverlaps,
    /// Ships cannot be added once the first shot has been fired.
    PlacementClosed,
    /// Shot fired by the player who does not hold the turn.
    NotYourTurn,
    /// Shot fired after a player has already won.
    GameOver,
    /// Random placement found no free slot.
    UnableToPlaceShip,
    /// Restored grid or ship list contradicts itself.
    InvalidSnapshot,
}

impl From<BitBoardError> for GameError {
    fn from(err: BitBoardError) -> Self {
        GameError::BitBoard(err)
    }
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::BitBoard(e) => write!(f, "BitBoard error: {}", e),
            GameError::InvalidCoordinate => write!(f, "Coordinate must be A-J followed by 1-10"),
            GameError::InvalidOrientation => write!(f, "Orientation must be R (row) or C (column)"),
            GameError::InvalidPlayer => write!(f, "Player must be first or second"),
            GameError::ShipTooShort { length } => {
                write!(f, "Ship length {} is below the minimum", length)
            }
            GameError::ShipOutOfBounds => write!(f, "Ship placement is out of bounds"),
            GameError::ShipOverlaps => write!(f, "Ship placement overlaps with another ship"),
            GameError::PlacementClosed => write!(f, "Ships cannot be placed after the first shot"),
            GameError::NotYourTurn => write!(f, "It is not this player's turn"),
            GameError::GameOver => write!(f, "The game is already over"),
            GameError::UnableToPlaceShip => write!(f, "Unable to place ship"),
            GameError::InvalidSnapshot => write!(f, "Snapshot is not a reachable game state"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for GameError {}
