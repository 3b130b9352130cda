use chess::{Color, Piece, Square};
use rules::RulesEngine;
use selector::Personality;
use utils::{color_name, find_king, material, Grid};

use crate::session::Session;
use crate::sound::SoundCue;
use crate::speed::Speed;

/// Seconds before a finished game is replaced by a new one.
pub const RESTART_SECONDS: u64 = 3;

/// Snapshot of everything the renderer draws for one ply.
#[derive(Debug, Clone)]
pub struct Frame {
    pub game_number: u32,
    pub grid: Grid,
    pub turn: Color,
    pub last_move: Option<(Square, Square)>,
    pub checked_king: Option<Square>,
    pub status: String,
    pub white_material: i16,
    pub black_material: i16,
    pub captured_by_white: Vec<Piece>,
    pub captured_by_black: Vec<Piece>,
    pub history: Vec<String>,
    pub opening: &'static str,
    pub white: Personality,
    pub black: Personality,
    pub speed: Speed,
    pub cue: Option<SoundCue>,
    pub game_over: bool,
}

impl Frame {
    pub fn capture<R: RulesEngine>(
        session: &Session<R>,
        cue: Option<SoundCue>,
        restarting: bool,
    ) -> Frame {
        let rules = session.rules();
        let grid = rules.board();
        let turn = rules.turn();
        let history = rules.history();

        let checked_king = if rules.in_check() {
            find_king(&grid, turn)
        } else {
            None
        };

        Frame {
            game_number: session.game_number(),
            grid,
            turn,
            last_move: history.last().map(|mv| (mv.from, mv.to)),
            checked_king,
            status: status_text(session, restarting),
            white_material: material(&grid, Color::White),
            black_material: material(&grid, Color::Black),
            captured_by_white: session.captured_by(Color::White).to_vec(),
            captured_by_black: session.captured_by(Color::Black).to_vec(),
            history: history.iter().map(|mv| mv.san.clone()).collect(),
            opening: session.opening(),
            white: session.personality(Color::White),
            black: session.personality(Color::Black),
            speed: session.speed(),
            cue,
            game_over: rules.game_over(),
        }
    }

    pub fn is_highlighted(&self, square: Square) -> bool {
        self.last_move
            .map_or(false, |(from, to)| from == square || to == square)
    }
}

fn status_text<R: RulesEngine>(session: &Session<R>, restarting: bool) -> String {
    match session.outcome() {
        Some(outcome) if restarting => {
            format!("{} - Restarting in {}s...", outcome, RESTART_SECONDS)
        }
        Some(outcome) => outcome.to_string(),
        None => format!("{}'s Turn", color_name(session.rules().turn())),
    }
}
