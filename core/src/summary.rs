use std::fmt;

use ahash::AHashMap;
use chess::Color;

use crate::arena::GameResult;

#[derive(Default)]
struct PersonalitySummary {
    wins_as_white: u32,
    wins_as_black: u32,
    draws: u32,
    num_games: u32,
}

impl PersonalitySummary {
    fn record_game(&mut self, result: &GameResult, playing_as: Color) {
        self.num_games += 1;

        match result.winner() {
            None => self.draws += 1,
            Some(winner) if winner == playing_as => match playing_as {
                Color::White => self.wins_as_white += 1,
                Color::Black => self.wins_as_black += 1,
            },
            Some(_) => {}
        }
    }

    #[inline]
    fn score(&self) -> f64 {
        self.total_wins() as f64 + self.draws as f64 * 0.5
    }

    #[inline]
    fn total_wins(&self) -> u32 {
        self.wins_as_white + self.wins_as_black
    }

    #[inline]
    fn win_rate(&self) -> f64 {
        if self.num_games == 0 {
            0.0
        } else {
            (self.total_wins() as f64 / self.num_games as f64) * 100.0
        }
    }
}

pub struct Summary {
    personalities: AHashMap<&'static str, PersonalitySummary>,
    total_games: u32,
    capped_games: u32,
}

impl Summary {
    pub fn new(results: &[GameResult]) -> Self {
        let mut personalities = AHashMap::new();

        for result in results {
            personalities
                .entry(result.white.name)
                .or_insert_with(PersonalitySummary::default)
                .record_game(result, Color::White);

            personalities
                .entry(result.black.name)
                .or_insert_with(PersonalitySummary::default)
                .record_game(result, Color::Black);
        }

        Summary {
            personalities,
            total_games: results.len() as u32,
            capped_games: results.iter().filter(|r| r.outcome.is_none()).count() as u32,
        }
    }

    fn sorted(&self) -> Vec<(&&'static str, &PersonalitySummary)> {
        let mut personalities: Vec<_> = self.personalities.iter().collect();
        personalities.sort_by(|a, b| {
            b.1.score()
                .partial_cmp(&a.1.score())
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| a.0.cmp(b.0))
        });
        personalities
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Arena Summary")?;
        writeln!(f, "=============")?;
        writeln!(
            f,
            "Total Games: {} ({} reached the ply cap)",
            self.total_games, self.capped_games
        )?;
        writeln!(f)?;
        writeln!(
            f,
            "{:<4} {:<12} {:>7} {:>7} {:>6} {:>11} {:>9}",
            "#", "Personality", "W (wh)", "W (bl)", "Draws", "Score", "Win Rate"
        )?;

        for (rank, (name, summary)) in self.sorted().iter().enumerate() {
            writeln!(
                f,
                "{:<4} {:<12} {:>7} {:>7} {:>6} {:>11} {:>8.1}%",
                format!("{}.", rank + 1),
                name,
                summary.wins_as_white,
                summary.wins_as_black,
                summary.draws,
                format!("{:.1}/{}", summary.score(), summary.num_games),
                summary.win_rate()
            )?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rules::{DrawReason, Outcome};
    use selector::Personality;

    fn result(white: &str, black: &str, outcome: Option<Outcome>) -> GameResult {
        GameResult {
            white: Personality::by_name(white).unwrap(),
            black: Personality::by_name(black).unwrap(),
            outcome,
            plies: 0,
        }
    }

    #[test]
    fn test_summary_tallies_wins_and_draws() {
        let results = vec![
            result(
                "aggressive",
                "positional",
                Some(Outcome::Checkmate {
                    winner: Color::White,
                }),
            ),
            result(
                "positional",
                "aggressive",
                Some(Outcome::Checkmate {
                    winner: Color::White,
                }),
            ),
            result(
                "aggressive",
                "positional",
                Some(Outcome::Draw(DrawReason::Repetition)),
            ),
            result("positional", "aggressive", None),
        ];

        let summary = Summary::new(&results);
        let aggressive = summary.personalities.get("aggressive").unwrap();
        assert_eq!(aggressive.wins_as_white, 1);
        assert_eq!(aggressive.wins_as_black, 0);
        assert_eq!(aggressive.draws, 2);
        assert_eq!(aggressive.score(), 2.0);
        assert_eq!(aggressive.win_rate(), 25.0);

        let positional = summary.personalities.get("positional").unwrap();
        assert_eq!(positional.total_wins(), 1);
        assert_eq!(summary.capped_games, 1);
    }

    #[test]
    fn test_summary_ranks_by_score() {
        let results = vec![result(
            "tactician",
            "balanced",
            Some(Outcome::Checkmate {
                winner: Color::Black,
            }),
        )];

        let text = Summary::new(&results).to_string();
        let balanced = text.find("balanced").unwrap();
        let tactician = text.find("tactician").unwrap();
        assert!(balanced < tactician);
        assert!(text.contains("Total Games: 1 (0 reached the ply cap)"));
        assert!(text.contains("1.0/1"));
    }
}
