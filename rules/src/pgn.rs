use chrono::Local;

use crate::{MoveRecord, Outcome, STANDARD_POSITION_FEN};

#[derive(Debug, Clone)]
pub struct PgnHeaders {
    pub event: String,
    pub site: String,
    pub round: u32,
    pub white: String,
    pub black: String,
}

/// Renders a finished (or abandoned, when `outcome` is `None`) game as PGN.
pub fn to_pgn(
    headers: &PgnHeaders,
    starting_position: &str,
    moves: &[MoveRecord],
    outcome: Option<Outcome>,
) -> String {
    let mut pgn = String::with_capacity(512);

    let result_str = outcome.map(|o| o.pgn_result()).unwrap_or("*");

    pgn.push_str(&format!("[Event \"{}\"]\n", headers.event));
    pgn.push_str(&format!("[Site \"{}\"]\n", headers.site));
    pgn.push_str(&format!("[Date \"{}\"]\n", Local::now().format("%Y.%m.%d")));
    pgn.push_str(&format!("[Round \"{}\"]\n", headers.round));
    pgn.push_str(&format!("[White \"{}\"]\n", headers.white));
    pgn.push_str(&format!("[Black \"{}\"]\n", headers.black));
    pgn.push_str(&format!("[Result \"{}\"]\n", result_str));

    if starting_position != STANDARD_POSITION_FEN {
        pgn.push_str("[SetUp \"1\"]\n");
        pgn.push_str(&format!("[FEN \"{}\"]\n", starting_position));
    }

    pgn.push('\n');

    let fen_parts: Vec<&str> = starting_position.split_whitespace().collect();
    let starting_move_number: u32 = fen_parts.last().and_then(|s| s.parse().ok()).unwrap_or(1);
    let white_started = fen_parts.get(1).map_or(true, |side| *side == "w");

    let mut movetext = String::with_capacity(256);

    for (i, mv) in moves.iter().enumerate() {
        // Black to move first is written as "N... move"
        if i == 0 && !white_started {
            movetext.push_str(&format!("{}... {} ", starting_move_number, mv.san));
            continue;
        }

        let (move_number, is_white_move) = if white_started {
            (starting_move_number + (i / 2) as u32, i % 2 == 0)
        } else {
            (starting_move_number + ((i + 1) / 2) as u32, i % 2 != 0)
        };

        if is_white_move {
            movetext.push_str(&format!("{}. {} ", move_number, mv.san));
        } else {
            movetext.push_str(&format!("{} ", mv.san));
        }
    }

    let movetext = movetext.trim_end();
    pgn.push_str(movetext);
    if !movetext.is_empty() {
        pgn.push(' ');
    }
    pgn.push_str(result_str);
    pgn.push('\n');

    pgn
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ChessRules, RulesEngine};
    use chess::Color;

    fn headers() -> PgnHeaders {
        PgnHeaders {
            event: "Gambit auto-play".to_string(),
            site: "localhost".to_string(),
            round: 3,
            white: "balanced".to_string(),
            black: "aggressive".to_string(),
        }
    }

    fn play_line(rules: &mut ChessRules, line: &[&str]) {
        for san in line {
            let mv = rules
                .moves()
                .into_iter()
                .find(|mv| mv.san == *san)
                .unwrap();
            rules.play(&mv).unwrap();
        }
    }

    #[test]
    fn test_fools_mate_pgn() {
        let mut rules = ChessRules::new();
        play_line(&mut rules, &["f3", "e5", "g4", "Qh4#"]);

        let pgn = to_pgn(
            &headers(),
            STANDARD_POSITION_FEN,
            rules.history(),
            rules.outcome(),
        );

        assert!(pgn.contains("[White \"balanced\"]"));
        assert!(pgn.contains("[Round \"3\"]"));
        assert!(pgn.contains("[Result \"0-1\"]"));
        assert!(!pgn.contains("[FEN"));
        assert!(pgn.ends_with("1. f3 e5 2. g4 Qh4# 0-1\n"));
        assert_eq!(
            rules.outcome().and_then(|o| o.winner()),
            Some(Color::Black)
        );
    }

    #[test]
    fn test_black_to_move_start() {
        let fen = "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq - 0 1";
        let mut rules = ChessRules::from_fen(fen).unwrap();
        play_line(&mut rules, &["e5", "Nf3"]);

        let pgn = to_pgn(&headers(), fen, rules.history(), None);

        assert!(pgn.contains("[FEN \"rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq - 0 1\"]"));
        assert!(pgn.ends_with("1... e5 2. Nf3 *\n"));
    }
}
