//! A small command-line demo that runs one match between built-in
//! in-house agents and prints the result. Useful for manually exercising
//! the referee without writing a harness.
use clap::Parser;

use fish::agent::{InHouseAgent, Player};
use fish::common::board::BoardConfig;
use fish::referee::{Referee, RefereeConfig};

#[derive(Parser, Debug)]
#[command(author, version, about = "Runs a single Fish match between in-house agents")]
struct Args {
    /// Number of players to seat, between 2 and 4.
    #[arg(long, default_value_t = 4)]
    players: usize,

    /// Board height in rows.
    #[arg(long, default_value_t = 5)]
    height: u32,

    /// Board width in columns.
    #[arg(long, default_value_t = 5)]
    width: u32,

    /// Number of fish on every tile.
    #[arg(long, default_value_t = 3)]
    fish_per_tile: u8,

    /// Search depth, in the acting agent's own plies, for the in-house
    /// strategy's turn-taking minimax.
    #[arg(long, default_value_t = 2)]
    lookahead: usize,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let config = RefereeConfig {
        board: BoardConfig::Uniform { height: args.height, width: args.width, fish_per_tile: args.fish_per_tile },
        ..RefereeConfig::default()
    };

    let players: Vec<Box<dyn Player>> =
        (0..args.players).map(|_| Box::new(InHouseAgent::new(args.lookahead)) as Box<dyn Player>).collect();

    let mut referee = Referee::new(config);
    match referee.run_match(players) {
        Ok(result) => {
            println!("winners: {:?}", result.winners);
            println!("non-winners: {:?}", result.non_winners);
            println!("failed: {:?}", result.failed);
            println!("cheaters: {:?}", result.cheaters);
        }
        Err(err) => {
            eprintln!("could not run match: {err}");
            std::process::exit(1);
        }
    }
}
