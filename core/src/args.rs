use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, Subcommand};
use log::LevelFilter;
use selector::Personality;

use crate::session::SessionConfig;
use crate::speed::Speed;

#[derive(Parser, Debug)]
#[command(name = "Gambit")]
#[command(author)]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Watch two heuristic personalities play chess in the terminal")]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Pin White's personality (balanced, aggressive, positional, tactician).
    #[arg(long)]
    pub white: Option<Personality>,

    /// Pin Black's personality.
    #[arg(long)]
    pub black: Option<Personality>,

    #[arg(long, value_enum, default_value_t = Speed::Normal)]
    pub speed: Speed,

    /// Fixed delay between moves, overriding --speed.
    #[arg(long)]
    pub delay_ms: Option<u64>,

    /// Stop after this many finished games.
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    pub games: Option<u32>,

    /// Seed for reproducible games.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Ring the terminal bell on captures, checks and game end.
    #[arg(long)]
    pub sound: bool,

    /// Skip board rendering and log moves instead.
    #[arg(short, long)]
    pub quiet: bool,

    /// Append finished games to a PGN file.
    #[arg(long)]
    pub pgn: Option<PathBuf>,

    /// Write logs to a file instead of the terminal.
    #[arg(short, long)]
    pub log_file: Option<PathBuf>,

    #[arg(long)]
    pub log_level: Option<LevelFilter>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play headless games between every pair of personalities.
    Arena {
        /// Games per ordered pairing.
        #[arg(long, default_value_t = 10)]
        games: u32,

        /// Worker threads (defaults to one per core).
        #[arg(long)]
        threads: Option<usize>,

        /// Plies before a game is scored as a draw.
        #[arg(long, default_value_t = 400)]
        max_plies: usize,
    },
}

impl Args {
    pub fn session_config(&self) -> SessionConfig {
        SessionConfig {
            white: self.white,
            black: self.black,
            speed: self.speed,
            delay_override: self.delay_ms.map(Duration::from_millis),
        }
    }

    /// The board and the arena progress bar own the terminal, so only warnings
    /// get through unless asked.
    pub fn log_level(&self) -> LevelFilter {
        self.log_level.unwrap_or_else(|| {
            if self.quiet && self.command.is_none() {
                LevelFilter::Info
            } else {
                LevelFilter::Warn
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from(["gambit"]).unwrap();
        let config = args.session_config();

        assert!(config.white.is_none());
        assert!(config.black.is_none());
        assert_eq!(config.speed, Speed::Normal);
        assert!(config.delay_override.is_none());
        assert_eq!(args.log_level(), LevelFilter::Warn);
        assert!(args.command.is_none());
    }

    #[test]
    fn test_pinned_personalities_and_delay() {
        let args = Args::try_parse_from([
            "gambit", "--white", "Aggressive", "--black", "tactician", "--speed", "fast",
            "--delay-ms", "50", "--quiet",
        ])
        .unwrap();
        let config = args.session_config();

        assert_eq!(config.white.map(|p| p.name), Some("aggressive"));
        assert_eq!(config.black.map(|p| p.name), Some("tactician"));
        assert_eq!(config.speed, Speed::Fast);
        assert_eq!(config.delay_override, Some(Duration::from_millis(50)));
        assert_eq!(args.log_level(), LevelFilter::Info);
    }

    #[test]
    fn test_zero_games_is_rejected() {
        assert!(Args::try_parse_from(["gambit", "--games", "0"]).is_err());

        let args = Args::try_parse_from(["gambit", "--games", "2"]).unwrap();
        assert_eq!(args.games, Some(2));
    }

    #[test]
    fn test_unknown_personality_is_rejected() {
        assert!(Args::try_parse_from(["gambit", "--white", "reckless"]).is_err());
    }

    #[test]
    fn test_arena_subcommand() {
        let args = Args::try_parse_from(["gambit", "arena", "--games", "3"]).unwrap();
        match args.command {
            Some(Command::Arena {
                games,
                threads,
                max_plies,
            }) => {
                assert_eq!(games, 3);
                assert_eq!(threads, None);
                assert_eq!(max_plies, 400);
            }
            None => panic!("expected arena subcommand"),
        }
        assert_eq!(args.log_level(), LevelFilter::Warn);
    }
}
