#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

mod bitboard;
mod common;
mod config;
mod coordinate;
mod game;
mod grid;
#[cfg(feature = "std")]
mod logging;
mod player;
pub mod prelude;
mod ship;

pub use bitboard::{BitBoard, BitBoardError};
pub use common::*;
pub use config::*;
pub use coordinate::Coordinate;
pub use game::*;
pub use grid::{Cell, Grid, PublicView, BB};
#[cfg(feature = "std")]
pub use logging::init_logging;
pub use player::PlayerState;
pub use ship::{Orientation, Ship};
