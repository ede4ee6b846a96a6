// Copyright 2020 Zachary Stewart
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//! Command line driver: fires a list of shots at a randomly placed fleet and reports
//! what each shot did.
use std::io::{self, BufRead, Write};

use clap::{value_t, App, Arg, ArgMatches, ErrorKind};
use rand::{rngs::StdRng, SeedableRng};
use tracing::info;
use tracing_subscriber::EnvFilter;

use broadside::{
    board::PlaceError, ships::Directions, Board, Coordinate, Direction, ShotOutcome, Vessel,
    VesselClass,
};

/// Environment variable holding the log filter.
const LOG_ENV: &str = "BATTLESHIP_LOG";

fn main() -> io::Result<()> {
    init_logging();
    let matches = App::new("Battleship")
        .version("1.0")
        .author("Zachary Stewart <zachary@zstewart.com>")
        .about("Fires shots at a randomly placed fleet and reports the results.")
        .arg(
            Arg::with_name("rows")
                .short("r")
                .long("rows")
                .value_name("ROWS")
                .help("number of rows on the board, more than 5")
                .takes_value(true)
                .default_value("10"),
        )
        .arg(
            Arg::with_name("cols")
                .short("c")
                .long("cols")
                .value_name("COLS")
                .help("number of columns on the board, more than 5")
                .takes_value(true)
                .default_value("10"),
        )
        .arg(
            Arg::with_name("seed")
                .short("s")
                .long("seed")
                .value_name("SEED")
                .help("seed for fleet placement; random if omitted")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("fleet")
                .short("f")
                .long("fleet")
                .value_name("CLASS")
                .help("vessel classes to place, comma separated")
                .takes_value(true)
                .multiple(true)
                .use_delimiter(true)
                .default_value("battleship,submarine,submarine"),
        )
        .arg(
            Arg::with_name("shots")
                .value_name("ROW,COL")
                .help("shots to fire; read from stdin, one per line, if omitted")
                .multiple(true),
        )
        .get_matches();

    let mut board = build_board(&matches);
    let stdout = io::stdout();
    let mut out = stdout.lock();
    let defeated = match matches.values_of("shots") {
        Some(shots) => fire_all(&mut board, shots.map(str::to_owned), &mut out)?,
        None => {
            let stdin = io::stdin();
            let lines = stdin.lock().lines().collect::<io::Result<Vec<_>>>()?;
            fire_all(&mut board, lines.into_iter(), &mut out)?
        }
    };

    let health = board.health();
    println!(
        "hits taken: {}, hits remaining: {}",
        health.taken, health.remaining
    );
    if defeated {
        println!("fleet destroyed");
    }
    Ok(())
}

/// Install the log subscriber, filtered by `BATTLESHIP_LOG` and defaulting to `info`.
fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Create the target board and place the requested fleet on it. Exits the process on
/// invalid arguments.
fn build_board(matches: &ArgMatches) -> Board {
    let rows = value_t!(matches, "rows", usize).unwrap_or_else(|e| e.exit());
    let cols = value_t!(matches, "cols", usize).unwrap_or_else(|e| e.exit());
    let seed = if matches.is_present("seed") {
        value_t!(matches, "seed", u64).unwrap_or_else(|e| e.exit())
    } else {
        rand::random()
    };
    info!(seed, "placing fleet");

    let mut board = Board::with_size("target", rows, cols)
        .unwrap_or_else(|e| invalid_value(&e.to_string()));
    let fleet = matches
        .values_of("fleet")
        .into_iter()
        .flatten()
        .enumerate()
        .map(|(i, name)| match name.parse::<VesselClass>() {
            Ok(class) => Vessel::of_class(class, format!("{} {}", class, i + 1)),
            Err(e) => invalid_value(&e.to_string()),
        })
        .collect::<Vec<_>>();

    if let Err(e) = place_fleet(&mut board, seed, fleet) {
        invalid_value(&e.to_string());
    }
    board
}

/// Randomly place `fleet` on `board`, pointing each vessel right or down.
fn place_fleet(board: &mut Board, seed: u64, fleet: Vec<Vessel>) -> Result<(), PlaceError> {
    let mut rng = StdRng::seed_from_u64(seed);
    let directions = Directions::from(Direction::Right) | Direction::Down;
    board.populate_random(&mut rng, fleet, directions)?;
    Ok(())
}

/// Fire each shot in turn, writing one line per outcome to `out`. Stops early once the
/// fleet is sunk. Returns whether the fleet was destroyed.
fn fire_all(
    board: &mut Board,
    shots: impl Iterator<Item = String>,
    out: &mut impl Write,
) -> io::Result<bool> {
    for shot in shots {
        let shot = shot.trim();
        if shot.is_empty() {
            continue;
        }
        let coord = match shot.parse::<Coordinate>() {
            Ok(coord) => coord,
            Err(e) => {
                writeln!(out, "{}", e)?;
                continue;
            }
        };
        match board.resolve_fire(coord) {
            Ok(ShotOutcome::Miss) => writeln!(out, "{} miss", coord)?,
            Ok(ShotOutcome::Hit(index)) => {
                let vessel = &board.vessels()[index];
                let verdict = if vessel.is_sunk() { "sunk" } else { "hit" };
                writeln!(out, "{} {} {}", coord, verdict, vessel.name())?;
            }
            Err(e) => writeln!(out, "{}", e)?,
        }
        if board.defeated() {
            return Ok(true);
        }
    }
    Ok(board.defeated())
}

/// Report an invalid argument value the way clap does and exit.
fn invalid_value(msg: &str) -> ! {
    clap::Error::with_description(msg, ErrorKind::InvalidValue).exit()
}
