use log::{debug, info, trace};
use rand::Rng;

use crate::{
    common::{GameError, GameOutcome, PlayerId, ShotResult},
    coordinate::Coordinate,
    grid::Cell,
    player::PlayerState,
    ship::{Orientation, Ship},
};

/// Serializable snapshot of a whole game.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct GameState {
    pub first: PlayerState,
    pub second: PlayerState,
    pub turn: PlayerId,
    pub outcome: GameOutcome,
    pub shots_fired: usize,
}

/// Rules engine for one game between two players.
///
/// Ships are placed first; the first accepted shot closes placement. Players
/// then alternate shots at each other's grid until one fleet is sunk.
#[derive(Clone, Debug)]
pub struct GameEngine {
    players: [PlayerState; 2],
    turn: PlayerId,
    outcome: GameOutcome,
    shots_fired: usize,
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl GameEngine {
    /// Create a game with two empty grids and `First` to move.
    pub fn new() -> Self {
        Self {
            players: [PlayerState::new(), PlayerState::new()],
            turn: PlayerId::First,
            outcome: GameOutcome::Unfinished,
            shots_fired: 0,
        }
    }

    pub fn player(&self, id: PlayerId) -> &PlayerState {
        &self.players[id.index()]
    }

    fn player_mut(&mut self, id: PlayerId) -> &mut PlayerState {
        &mut self.players[id.index()]
    }

    /// Player allowed to fire next.
    pub fn turn(&self) -> PlayerId {
        self.turn
    }

    pub fn shots_fired(&self) -> usize {
        self.shots_fired
    }

    /// Place a ship of `length` for `player` with its footprint starting at
    /// `anchor`.
    ///
    /// Checks, in order: placement still open, length, bounds, overlap. On
    /// any failure the player's grid and ship list are left untouched.
    pub fn place_ship(
        &mut self,
        player: PlayerId,
        length: usize,
        anchor: Coordinate,
        orientation: Orientation,
    ) -> Result<(), GameError> {
        if self.shots_fired > 0 {
            trace!("{} cannot place after shots began", player);
            return Err(GameError::PlacementClosed);
        }
        let ship = Ship::new(anchor, length, orientation).map_err(|e| {
            trace!("{} rejected ship {}x{} at {}: {}", player, length, orientation, anchor, e);
            e
        })?;

        let state = self.player_mut(player);
        let mut grid = *state.grid();
        grid.place(&ship).map_err(|e| {
            trace!("{} rejected ship {}: {}", player, ship, e);
            e
        })?;
        state.set_grid(grid);
        state.add_ship(ship);
        debug!("{} placed ship {} ({} ships)", player, ship, state.ship_count());
        Ok(())
    }

    /// Fire at `target` on the opponent's grid.
    ///
    /// Rejected with `NotYourTurn` or `GameOver` without touching any state.
    /// Otherwise the shot is resolved, the turn passes to the opponent
    /// whatever the result, and the opponent's sunk count is recomputed from
    /// the grid. The shot that leaves the opponent with no ships afloat wins.
    pub fn fire_shot(
        &mut self,
        player: PlayerId,
        target: Coordinate,
    ) -> Result<ShotResult, GameError> {
        if self.turn != player {
            trace!("{} fired out of turn", player);
            return Err(GameError::NotYourTurn);
        }
        if self.outcome.is_finished() {
            trace!("{} fired after the game ended ({})", player, self.outcome);
            return Err(GameError::GameOver);
        }

        let opponent = player.opponent();
        let state = self.player_mut(opponent);
        let mut grid = *state.grid();
        let mut result = match grid.cell(target) {
            Cell::Ship => {
                grid.mark_hit(target)?;
                ShotResult::Hit
            }
            Cell::Hit => ShotResult::Repeat,
            Cell::Empty | Cell::Miss => {
                grid.mark_miss(target)?;
                ShotResult::Miss
            }
        };
        state.set_grid(grid);

        let previously_sunk = state.sunk_ship_count();
        let sunk = state.ships().iter().filter(|s| s.is_sunk(&grid)).count();
        state.set_sunk_ship_count(sunk);
        if result == ShotResult::Hit && sunk > previously_sunk {
            result = ShotResult::Sink;
        }
        let fleet_sunk = sunk == state.ship_count();

        self.turn = opponent;
        self.shots_fired += 1;
        debug!("{} fired at {}: {}", player, target, result);

        if fleet_sunk {
            if !self.outcome.is_finished() {
                info!("{} sank the last ship after {} shots", player, self.shots_fired);
            }
            self.outcome = GameOutcome::won_by(player);
        }
        Ok(result)
    }

    /// Current outcome of the game.
    pub fn current_state(&self) -> GameOutcome {
        self.outcome
    }

    /// Ships `player` still has afloat.
    pub fn num_ships_remaining(&self, player: PlayerId) -> usize {
        self.player(player).ships_remaining()
    }

    /// Random legal placement of a ship of `length` on `player`'s grid.
    pub fn random_placement<R: Rng>(
        &self,
        player: PlayerId,
        length: usize,
        rng: &mut R,
    ) -> Result<(Coordinate, Orientation), GameError> {
        self.player(player).grid().random_placement(rng, length)
    }

    /// Generate a serializable snapshot of the current state.
    pub fn state(&self) -> GameState {
        let [first, second] = self.players.clone();
        GameState {
            first,
            second,
            turn: self.turn,
            outcome: self.outcome,
            shots_fired: self.shots_fired,
        }
    }

    /// Restore an engine from a previously saved state.
    pub fn from_state(state: GameState) -> Self {
        Self {
            players: [state.first, state.second],
            turn: state.turn,
            outcome: state.outcome,
            shots_fired: state.shots_fired,
        }
    }
}
