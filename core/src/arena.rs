use std::error::Error;

use chess::Color;
use indicatif::{ProgressBar, ProgressStyle};
use log::debug;
use rand::rngs::StdRng;
use rand::SeedableRng;
use rayon::prelude::*;
use rayon::ThreadPoolBuilder;
use rules::{ChessRules, Outcome, RulesEngine, RulesError};
use selector::{Personality, PERSONALITIES};

use crate::session::{Session, SessionConfig};

/// A finished arena game. `outcome` is `None` when the ply cap was hit.
#[derive(Debug, Clone)]
pub struct GameResult {
    pub white: Personality,
    pub black: Personality,
    pub outcome: Option<Outcome>,
    pub plies: usize,
}

impl GameResult {
    pub fn winner(&self) -> Option<Color> {
        self.outcome.and_then(|outcome| outcome.winner())
    }
}

/// Headless round robin between every ordered pair of personalities.
pub struct Arena {
    games_per_pairing: u32,
    max_plies: usize,
    seed: u64,
}

impl Arena {
    pub fn new(games_per_pairing: u32, max_plies: usize, seed: u64) -> Self {
        Self {
            games_per_pairing,
            max_plies,
            seed,
        }
    }

    pub fn pairings() -> Vec<(Personality, Personality)> {
        let mut pairings = Vec::new();
        for white in PERSONALITIES {
            for black in PERSONALITIES {
                if white != black {
                    pairings.push((*white, *black));
                }
            }
        }
        pairings
    }

    pub fn run(&self, threads: Option<usize>) -> Result<Vec<GameResult>, Box<dyn Error>> {
        let schedule: Vec<(Personality, Personality)> = Self::pairings()
            .into_iter()
            .flat_map(|pairing| std::iter::repeat(pairing).take(self.games_per_pairing as usize))
            .collect();

        let progress = ProgressBar::new(schedule.len() as u64);
        progress.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.cyan} {pos}/{len} [{wide_bar:.cyan/blue}] {eta_precise} | {msg}")?,
        );

        let play_all = || -> Result<Vec<GameResult>, RulesError> {
            schedule
                .par_iter()
                .enumerate()
                .map(|(index, (white, black))| {
                    let seed = self.seed.wrapping_add(index as u64);
                    let result = self.play_game(*white, *black, seed)?;

                    progress.set_message(format!("{} vs {}", white, black));
                    progress.inc(1);

                    Ok(result)
                })
                .collect()
        };

        let results = match threads {
            Some(num_threads) => ThreadPoolBuilder::new()
                .num_threads(num_threads)
                .build()?
                .install(play_all)?,
            None => play_all()?,
        };

        progress.finish_with_message("done");
        Ok(results)
    }

    pub fn play_game(
        &self,
        white: Personality,
        black: Personality,
        seed: u64,
    ) -> Result<GameResult, RulesError> {
        let mut rng = StdRng::seed_from_u64(seed);
        let config = SessionConfig {
            white: Some(white),
            black: Some(black),
            ..SessionConfig::default()
        };
        let mut session = Session::new(ChessRules::new(), config, &mut rng);

        while session.rules().history().len() < self.max_plies {
            if session.step(&mut rng)?.is_none() {
                break;
            }
        }

        let outcome = session.outcome();
        let plies = session.rules().history().len();
        match outcome {
            Some(outcome) => debug!("{} vs {} = {} ({} plies)", white, black, outcome, plies),
            None => debug!("{} vs {} = Draw (ply cap) ({} plies)", white, black, plies),
        }

        Ok(GameResult {
            white,
            black,
            outcome,
            plies,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pairings_cover_every_ordered_pair() {
        let pairings = Arena::pairings();
        let n = PERSONALITIES.len();
        assert_eq!(pairings.len(), n * (n - 1));
        assert!(pairings.iter().all(|(white, black)| white != black));
    }

    #[test]
    fn test_ply_cap_counts_as_draw() {
        let arena = Arena::new(1, 6, 0);
        let result = arena
            .play_game(Personality::balanced(), PERSONALITIES[1], 5)
            .unwrap();

        assert_eq!(result.plies, 6);
        assert!(result.outcome.is_none());
        assert_eq!(result.winner(), None);
    }

    #[test]
    fn test_games_are_reproducible_from_seed() {
        let arena = Arena::new(1, 80, 0);
        let a = arena
            .play_game(PERSONALITIES[2], PERSONALITIES[3], 42)
            .unwrap();
        let b = arena
            .play_game(PERSONALITIES[2], PERSONALITIES[3], 42)
            .unwrap();

        assert_eq!(a.plies, b.plies);
        assert_eq!(a.outcome, b.outcome);
    }

    #[test]
    fn test_run_plays_the_full_schedule() {
        let arena = Arena::new(2, 20, 9);
        let results = arena.run(Some(2)).unwrap();

        assert_eq!(results.len(), Arena::pairings().len() * 2);
        assert!(results.iter().all(|r| r.plies <= 20));
    }
}
