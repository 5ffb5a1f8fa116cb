use proptest::prelude::*;
use rand::{rngs::SmallRng, Rng, SeedableRng};
use shipgame::{
    Cell, Coordinate, GameEngine, GameError, GameOutcome, Orientation, PlayerId, ShotResult,
    BOARD_SIZE,
};

fn coordinate() -> impl Strategy<Value = Coordinate> {
    (0..BOARD_SIZE as usize, 0..BOARD_SIZE as usize)
        .prop_map(|(r, c)| Coordinate::new(r, c).unwrap())
}

fn orientation() -> impl Strategy<Value = Orientation> {
    prop_oneof![Just(Orientation::Row), Just(Orientation::Column)]
}

fn player() -> impl Strategy<Value = PlayerId> {
    prop_oneof![Just(PlayerId::First), Just(PlayerId::Second)]
}

/// Places `fleet` for both players at random legal spots, skipping lengths
/// that no longer fit.
fn random_game(seed: u64, fleet: &[usize]) -> GameEngine {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut engine = GameEngine::new();
    for p in [PlayerId::First, PlayerId::Second] {
        for &len in fleet {
            if let Ok((anchor, orient)) = engine.random_placement(p, len, &mut rng) {
                engine.place_ship(p, len, anchor, orient).unwrap();
            }
        }
    }
    engine
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Ship cells always equal the summed lengths of accepted ships.
    #[test]
    fn ship_cells_match_placed_lengths(
        attempts in prop::collection::vec((2..=6usize, coordinate(), orientation()), 1..20)
    ) {
        let mut engine = GameEngine::new();
        let mut total = 0;
        for (len, anchor, orient) in attempts {
            if engine.place_ship(PlayerId::First, len, anchor, orient).is_ok() {
                total += len;
            }
        }
        let state = engine.player(PlayerId::First);
        let summed: usize = state.ships().iter().map(|s| s.length()).sum();
        prop_assert_eq!(summed, total);
        prop_assert_eq!(state.grid().ship_cells(), total);
        prop_assert_eq!(state.grid().occupied().count_ones(), total);
    }

    #[test]
    fn short_ships_always_rejected(
        seed in any::<u64>(),
        len in 0..2usize,
        anchor in coordinate(),
        orient in orientation(),
        p in player(),
    ) {
        let mut engine = random_game(seed, &[4, 3, 2]);
        let before = engine.state();
        prop_assert_eq!(
            engine.place_ship(p, len, anchor, orient),
            Err(GameError::ShipTooShort { length: len })
        );
        prop_assert_eq!(engine.state(), before);
    }

    #[test]
    fn out_of_bounds_always_rejected(
        len in 2..=10usize,
        anchor in coordinate(),
        orient in orientation(),
    ) {
        let start = match orient {
            Orientation::Row => anchor.col(),
            Orientation::Column => anchor.row(),
        };
        prop_assume!(start + len > BOARD_SIZE as usize);
        let mut engine = GameEngine::new();
        prop_assert_eq!(
            engine.place_ship(PlayerId::Second, len, anchor, orient),
            Err(GameError::ShipOutOfBounds)
        );
        prop_assert_eq!(engine.player(PlayerId::Second).ship_count(), 0);
        prop_assert_eq!(engine.player(PlayerId::Second).grid().ship_cells(), 0);
    }

    #[test]
    fn oversized_lengths_never_overflow(
        len in prop_oneof![Just(usize::MAX), (usize::MAX - 20)..=usize::MAX, 11..=usize::MAX],
        anchor in coordinate(),
        orient in orientation(),
    ) {
        let mut engine = GameEngine::new();
        prop_assert_eq!(
            engine.place_ship(PlayerId::First, len, anchor, orient),
            Err(GameError::ShipOutOfBounds)
        );
        prop_assert_eq!(engine.player(PlayerId::First).ship_count(), 0);
    }

    /// Firing out of turn changes nothing; firing in turn always flips the turn.
    #[test]
    fn turn_alternates_strictly(seed in any::<u64>(), shots in prop::collection::vec(coordinate(), 1..60)) {
        let mut engine = random_game(seed, &[5, 4, 3, 3, 2]);
        for target in shots {
            if engine.current_state().is_finished() {
                break;
            }
            let mover = engine.turn();
            let idle = mover.opponent();

            let before = engine.state();
            prop_assert_eq!(engine.fire_shot(idle, target), Err(GameError::NotYourTurn));
            prop_assert_eq!(engine.state(), before);

            prop_assert!(engine.fire_shot(mover, target).is_ok());
            prop_assert_eq!(engine.turn(), idle);
        }
    }

    /// Random games: sunk counts follow the grid, hits never double count,
    /// and the outcome flips exactly on the shot that sinks the last ship.
    #[test]
    fn outcome_set_exactly_when_fleet_sunk(seed in any::<u64>()) {
        let mut engine = random_game(seed, &[5, 4, 3, 3, 2]);
        let mut rng = SmallRng::seed_from_u64(seed ^ 0x5eed);
        let mut shots = 0;
        while !engine.current_state().is_finished() {
            prop_assert!(shots < 10_000, "game did not finish");
            shots += 1;

            let shooter = engine.turn();
            let target = Coordinate::new(
                rng.random_range(0..BOARD_SIZE as usize),
                rng.random_range(0..BOARD_SIZE as usize),
            ).unwrap();
            let cell_before = engine.player(shooter.opponent()).grid().cell(target);
            let result = engine.fire_shot(shooter, target).unwrap();

            let target_state = engine.player(shooter.opponent());
            match cell_before {
                Cell::Ship => prop_assert!(matches!(result, ShotResult::Hit | ShotResult::Sink)),
                Cell::Hit => prop_assert_eq!(result, ShotResult::Repeat),
                Cell::Empty | Cell::Miss => prop_assert_eq!(result, ShotResult::Miss),
            }

            let sunk = target_state
                .ships()
                .iter()
                .filter(|s| s.footprint().all(|c| target_state.grid().cell(c) == Cell::Hit))
                .count();
            prop_assert_eq!(target_state.sunk_ship_count(), sunk);
            prop_assert!(sunk <= target_state.ship_count());

            let expected = if sunk == target_state.ship_count() {
                GameOutcome::won_by(shooter)
            } else {
                GameOutcome::Unfinished
            };
            prop_assert_eq!(engine.current_state(), expected);
            for p in [PlayerId::First, PlayerId::Second] {
                let s = engine.player(p);
                prop_assert_eq!(engine.num_ships_remaining(p), s.ship_count() - s.sunk_ship_count());
            }
        }
    }
}
