//! Commonly used types for ease of import.

pub use crate::{Coordinate, GameEngine, GameError, GameOutcome, Orientation, PlayerId, ShotResult};
