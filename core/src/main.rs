mod arena;
mod args;
mod driver;
mod frame;
mod gambit;
mod openings;
mod render;
mod session;
mod sound;
mod speed;
mod summary;

use std::error::Error;
use std::fs::File;

use arena::Arena;
use args::{Args, Command};
use clap::Parser;
use gambit::Gambit;
use log::info;
use simplelog::{Config, SimpleLogger, WriteLogger};
use summary::Summary;

fn main() -> Result<(), Box<dyn Error>> {
    let args = init()?;

    match &args.command {
        Some(Command::Arena {
            games,
            threads,
            max_plies,
        }) => {
            let seed = args.seed.unwrap_or_else(rand::random);
            println!(
                "Running arena: {} games per pairing, {} ply cap, seed {}",
                games, max_plies, seed
            );

            let arena = Arena::new(*games, *max_plies, seed);
            let results = arena.run(*threads)?;

            println!("{}", Summary::new(&results));
        }
        None => {
            let finished = Gambit::new(&args)?.run()?;
            info!("Finished {} games", finished);
        }
    }

    Ok(())
}

fn init() -> Result<Args, Box<dyn Error>> {
    let args = Args::parse();
    let level = args.log_level();

    match &args.log_file {
        Some(log_file) => WriteLogger::init(level, Config::default(), File::create(log_file)?)?,
        None => SimpleLogger::init(level, Config::default())?,
    }

    Ok(args)
}
