use std::fs;
use std::path::PathBuf;

use anyhow::{anyhow, bail, Context};
use clap::{Parser, Subcommand};
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use serde_json::json;
use shipgame::{
    init_logging, Coordinate, GameEngine, GameError, Orientation, PlayerId, ShotResult,
};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a script of placements and shots against a fresh game.
    Replay {
        /// Script file: `place <player> <length> <coord> <R|C>` or `fire <player> <coord>` per line.
        script: PathBuf,
        #[arg(long, help = "Print a JSON summary instead of the grids")]
        json: bool,
    },
    /// Place a fleet randomly for both players and fire random shots until one side wins.
    Simulate {
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
        #[arg(long, value_delimiter = ',', default_value = "5,4,3,3,2")]
        fleet: Vec<usize>,
        #[arg(long, help = "Print a JSON summary instead of the grids")]
        json: bool,
    },
}

/// One line of a replay script.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Move {
    Place {
        player: PlayerId,
        length: usize,
        anchor: Coordinate,
        orientation: Orientation,
    },
    Fire {
        player: PlayerId,
        target: Coordinate,
    },
}

fn parse_move(line: &str) -> anyhow::Result<Option<Move>> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }
    let words: Vec<&str> = line.split_whitespace().collect();
    let mv = match words.as_slice() {
        ["place", player, length, anchor, orientation] => Move::Place {
            player: player.parse()?,
            length: length
                .parse()
                .with_context(|| format!("invalid ship length '{}'", length))?,
            anchor: anchor.parse()?,
            orientation: orientation.parse()?,
        },
        ["fire", player, target] => Move::Fire {
            player: player.parse()?,
            target: target.parse()?,
        },
        _ => bail!("expected 'place <player> <length> <coord> <R|C>' or 'fire <player> <coord>'"),
    };
    Ok(Some(mv))
}

fn apply(engine: &mut GameEngine, mv: Move) -> Result<Option<ShotResult>, GameError> {
    match mv {
        Move::Place {
            player,
            length,
            anchor,
            orientation,
        } => engine
            .place_ship(player, length, anchor, orientation)
            .map(|()| None),
        Move::Fire { player, target } => engine.fire_shot(player, target).map(Some),
    }
}

fn describe(mv: &Move) -> String {
    match mv {
        Move::Place {
            player,
            length,
            anchor,
            orientation,
        } => format!("place {} {} {} {}", player, length, anchor, orientation),
        Move::Fire { player, target } => format!("fire {} {}", player, target),
    }
}

fn summary(engine: &GameEngine, rejected: usize) -> serde_json::Value {
    let outcome = engine.current_state();
    json!({
        "outcome": outcome.to_string(),
        "winner": outcome.winner().map(|p| p.to_string()),
        "shots_fired": engine.shots_fired(),
        "rejected": rejected,
        "ships_remaining": {
            "first": engine.num_ships_remaining(PlayerId::First),
            "second": engine.num_ships_remaining(PlayerId::Second),
        },
    })
}

fn print_report(engine: &GameEngine) {
    println!("Outcome: {}", engine.current_state());
    for player in [PlayerId::First, PlayerId::Second] {
        let state = engine.player(player);
        println!(
            "\n{} ({} of {} ships remaining):\n{}",
            player,
            engine.num_ships_remaining(player),
            state.ship_count(),
            state.grid()
        );
    }
}

fn replay(script: PathBuf, as_json: bool) -> anyhow::Result<()> {
    let text = fs::read_to_string(&script)
        .with_context(|| format!("failed to read {}", script.display()))?;
    let mut engine = GameEngine::new();
    let mut rejected = 0;
    for (idx, line) in text.lines().enumerate() {
        let mv = match parse_move(line).with_context(|| format!("line {}", idx + 1))? {
            Some(mv) => mv,
            None => continue,
        };
        let outcome = apply(&mut engine, mv);
        if outcome.is_err() {
            rejected += 1;
        }
        if !as_json {
            match outcome {
                Ok(Some(shot)) => println!("{}: {}", describe(&mv), shot),
                Ok(None) => println!("{}: ok", describe(&mv)),
                Err(e) => println!("{}: rejected ({})", describe(&mv), e),
            }
        }
    }
    if as_json {
        println!("{}", serde_json::to_string(&summary(&engine, rejected))?);
    } else {
        print_report(&engine);
    }
    Ok(())
}

fn simulate(seed: Option<u64>, fleet: Vec<usize>, as_json: bool) -> anyhow::Result<()> {
    let mut rng = match seed {
        Some(s) => SmallRng::seed_from_u64(s),
        None => SmallRng::from_rng(&mut rand::rng()),
    };
    let mut engine = GameEngine::new();
    for player in [PlayerId::First, PlayerId::Second] {
        for &length in &fleet {
            let (anchor, orient) = engine
                .random_placement(player, length, &mut rng)
                .map_err(|e| anyhow!("cannot place {}-long ship for {}: {}", length, player, e))?;
            engine.place_ship(player, length, anchor, orient)?;
        }
    }

    let mut targets: [Vec<Coordinate>; 2] = [Coordinate::all().collect(), Coordinate::all().collect()];
    for t in targets.iter_mut() {
        t.shuffle(&mut rng);
    }
    while !engine.current_state().is_finished() {
        let player = engine.turn();
        let idx = if player == PlayerId::First { 0 } else { 1 };
        let target = targets[idx]
            .pop()
            .ok_or_else(|| anyhow!("{} ran out of targets", player))?;
        let shot = engine.fire_shot(player, target)?;
        if !as_json {
            println!("fire {} {}: {}", player, target, shot);
        }
    }

    if as_json {
        println!("{}", serde_json::to_string(&summary(&engine, 0))?);
    } else {
        print_report(&engine);
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();
    match cli.command {
        Commands::Replay { script, json } => replay(script, json),
        Commands::Simulate { seed, fleet, json } => simulate(seed, fleet, json),
    }
}
