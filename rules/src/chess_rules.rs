use std::str::FromStr;

use ahash::AHashMap;
use chess::{Board, BoardStatus, Color, MoveGen, Piece, Rank, Square, EMPTY};
use log::trace;
use utils::{grid_from_board, has_insufficient_material, square_name, Grid};

use crate::{DrawReason, MoveRecord, Outcome, RulesEngine, RulesError};

pub const STANDARD_POSITION_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// Halfmoves without a capture or pawn move before the game is drawn.
const FIFTY_MOVE_LIMIT: u32 = 100;
const REPETITION_LIMIT: u8 = 3;

/// [`RulesEngine`] backed by the `chess` crate.
///
/// The crate covers move generation and mate/stalemate detection. Repetition,
/// the fifty-move rule and the FEN move counters are tracked here.
#[derive(Debug, Clone)]
pub struct ChessRules {
    board: Board,
    history: Vec<MoveRecord>,
    repetitions: AHashMap<u64, u8>,
    halfmove_clock: u32,
    fullmove_number: u32,
}

impl ChessRules {
    pub fn new() -> Self {
        Self::with_board(Board::default(), 0, 1)
    }

    pub fn from_fen(fen: &str) -> Result<Self, RulesError> {
        let board = Board::from_str(fen).map_err(|e| RulesError::InvalidFen(e.to_string()))?;

        let fields: Vec<&str> = fen.split_whitespace().collect();
        let halfmove_clock = fields.get(4).and_then(|s| s.parse().ok()).unwrap_or(0);
        let fullmove_number = fields.get(5).and_then(|s| s.parse().ok()).unwrap_or(1);

        Ok(Self::with_board(board, halfmove_clock, fullmove_number))
    }

    fn with_board(board: Board, halfmove_clock: u32, fullmove_number: u32) -> Self {
        let mut repetitions = AHashMap::new();
        repetitions.insert(board.get_hash(), 1);

        Self {
            board,
            history: Vec::new(),
            repetitions,
            halfmove_clock,
            fullmove_number,
        }
    }

    #[inline]
    pub fn halfmove_clock(&self) -> u32 {
        self.halfmove_clock
    }

    fn draw_reason(&self) -> Option<DrawReason> {
        if has_insufficient_material(&self.board) {
            Some(DrawReason::InsufficientMaterial)
        } else if self.repetition_count() >= REPETITION_LIMIT {
            Some(DrawReason::Repetition)
        } else if self.halfmove_clock >= FIFTY_MOVE_LIMIT {
            Some(DrawReason::FiftyMoves)
        } else {
            None
        }
    }

    /// FEN en-passant field: the square a capturing pawn would land on.
    fn en_passant_target(&self) -> String {
        match self.board.en_passant() {
            Some(pawn) => {
                let rank = match self.board.side_to_move() {
                    Color::White => Rank::Sixth,
                    Color::Black => Rank::Third,
                };
                square_name(Square::make_square(rank, pawn.get_file()))
            }
            None => "-".to_string(),
        }
    }

    #[inline]
    fn repetition_count(&self) -> u8 {
        self.repetitions
            .get(&self.board.get_hash())
            .copied()
            .unwrap_or(0)
    }
}

impl Default for ChessRules {
    fn default() -> Self {
        Self::new()
    }
}

impl RulesEngine for ChessRules {
    fn reset(&mut self) {
        *self = Self::new();
    }

    fn board(&self) -> Grid {
        grid_from_board(&self.board)
    }

    fn moves(&self) -> Vec<MoveRecord> {
        MoveGen::new_legal(&self.board)
            .filter_map(|mv| MoveRecord::new(&self.board, mv))
            .collect()
    }

    fn play(&mut self, mv: &MoveRecord) -> Result<MoveRecord, RulesError> {
        let chess_move = mv.chess_move();
        if !self.board.legal(chess_move) {
            return Err(RulesError::IllegalMove(mv.uci()));
        }

        // Rebuild from our own board so the caller can't smuggle in a stale SAN
        let record = MoveRecord::new(&self.board, chess_move)
            .ok_or_else(|| RulesError::IllegalMove(mv.uci()))?;

        if record.piece == Piece::Pawn || record.is_capture() {
            self.halfmove_clock = 0;
        } else {
            self.halfmove_clock += 1;
        }
        if self.board.side_to_move() == Color::Black {
            self.fullmove_number += 1;
        }

        self.board = self.board.make_move_new(chess_move);
        *self.repetitions.entry(self.board.get_hash()).or_insert(0) += 1;

        trace!("Played {} ({}-{})", record.san, record.from_name(), record.to_name());

        self.history.push(record.clone());
        Ok(record)
    }

    #[inline]
    fn turn(&self) -> Color {
        self.board.side_to_move()
    }

    #[inline]
    fn in_check(&self) -> bool {
        *self.board.checkers() != EMPTY
    }

    #[inline]
    fn in_checkmate(&self) -> bool {
        self.board.status() == BoardStatus::Checkmate
    }

    #[inline]
    fn in_stalemate(&self) -> bool {
        self.board.status() == BoardStatus::Stalemate
    }

    fn in_draw(&self) -> bool {
        !self.in_checkmate() && (self.in_stalemate() || self.draw_reason().is_some())
    }

    fn outcome(&self) -> Option<Outcome> {
        match self.board.status() {
            BoardStatus::Checkmate => Some(Outcome::Checkmate {
                winner: !self.board.side_to_move(),
            }),
            BoardStatus::Stalemate => Some(Outcome::Stalemate),
            BoardStatus::Ongoing => self.draw_reason().map(Outcome::Draw),
        }
    }

    fn history(&self) -> &[MoveRecord] {
        &self.history
    }

    fn fen(&self) -> String {
        // The board's own FEN reports "0 1" for the counters and names the
        // double-pushed pawn instead of the square behind it
        let board_fen = self.board.to_string();
        let fields: Vec<&str> = board_fen.split_whitespace().take(3).collect();
        format!(
            "{} {} {} {}",
            fields.join(" "),
            self.en_passant_target(),
            self.halfmove_clock,
            self.fullmove_number
        )
    }
}
