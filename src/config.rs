/// Width and height of every player's grid.
pub const BOARD_SIZE: u8 = 10;

/// Shortest ship the engine accepts.
pub const MIN_SHIP_LENGTH: usize = 2;

/// Row symbols in grid order; `A` is row 0.
pub const ROW_LABELS: &str = "ABCDEFGHIJ";

/// Attempts `Grid::random_placement` makes before giving up.
pub const MAX_PLACEMENT_ATTEMPTS: usize = 100;
