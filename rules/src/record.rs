use std::fmt;

use chess::{Board, ChessMove, Color, Piece, Square};
use utils::square_name;

use crate::san::to_san;

/// A legal move annotated with everything the selector and the display need.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveRecord {
    pub from: Square,
    pub to: Square,
    pub piece: Piece,
    pub color: Color,
    pub captured: Option<Piece>,
    pub promotion: Option<Piece>,
    pub san: String,
}

impl MoveRecord {
    /// Describes `mv` as played from `board`. Returns `None` when the source
    /// square is empty, which never happens for a legal move.
    pub fn new(board: &Board, mv: ChessMove) -> Option<Self> {
        let from = mv.get_source();
        let to = mv.get_dest();
        let piece = board.piece_on(from)?;
        let color = board.color_on(from)?;

        let captured = match board.piece_on(to) {
            Some(victim) => Some(victim),
            // En passant: a pawn changing file onto an empty square
            None if piece == Piece::Pawn && from.get_file() != to.get_file() => Some(Piece::Pawn),
            None => None,
        };

        Some(Self {
            from,
            to,
            piece,
            color,
            captured,
            promotion: mv.get_promotion(),
            san: to_san(board, mv),
        })
    }

    #[inline]
    pub fn chess_move(&self) -> ChessMove {
        ChessMove::new(self.from, self.to, self.promotion)
    }

    #[inline]
    pub fn is_capture(&self) -> bool {
        self.captured.is_some()
    }

    #[inline]
    pub fn is_castle(&self) -> bool {
        self.piece == Piece::King
            && self.from.get_file().to_index().abs_diff(self.to.get_file().to_index()) == 2
    }

    #[inline]
    pub fn is_promotion(&self) -> bool {
        self.promotion.is_some()
    }

    #[inline]
    pub fn gives_check(&self) -> bool {
        self.san.ends_with('+') || self.is_mate()
    }

    #[inline]
    pub fn is_mate(&self) -> bool {
        self.san.ends_with('#')
    }

    /// SAN without the check or mate suffix.
    pub fn bare_san(&self) -> &str {
        self.san.trim_end_matches(['+', '#'])
    }

    pub fn uci(&self) -> String {
        self.chess_move().to_string()
    }

    pub fn from_name(&self) -> String {
        square_name(self.from)
    }

    pub fn to_name(&self) -> String {
        square_name(self.to)
    }
}

impl fmt::Display for MoveRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.san)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chess::MoveGen;
    use std::str::FromStr;

    fn record(fen: &str, uci: &str) -> MoveRecord {
        let board = Board::from_str(fen).unwrap();
        let mv = MoveGen::new_legal(&board)
            .find(|mv| mv.to_string() == uci)
            .unwrap();
        MoveRecord::new(&board, mv).unwrap()
    }

    #[test]
    fn test_quiet_pawn_push() {
        let mv = record(crate::STANDARD_POSITION_FEN, "e2e4");
        assert_eq!(mv.piece, Piece::Pawn);
        assert_eq!(mv.color, Color::White);
        assert_eq!(mv.captured, None);
        assert_eq!(mv.san, "e4");
        assert_eq!(mv.to_name(), "e4");
        assert!(!mv.is_capture());
        assert!(!mv.gives_check());
    }

    #[test]
    fn test_en_passant_reports_pawn_capture() {
        let mv = record(
            "rnbqkbnr/ppp1p1pp/8/3pPp2/8/8/PPPP1PPP/RNBQKBNR w KQkq f6 0 3",
            "e5f6",
        );
        assert_eq!(mv.captured, Some(Piece::Pawn));
        assert!(mv.is_capture());
        assert_eq!(mv.san, "exf6");
    }

    #[test]
    fn test_castle_detection() {
        let mv = record(
            "r1bqkbnr/pppp1ppp/2n5/1B2p3/4P3/5N2/PPPP1PPP/RNBQK2R w KQkq - 3 4",
            "e1g1",
        );
        assert!(mv.is_castle());
        assert_eq!(mv.san, "O-O");
        assert!(!mv.is_capture());
    }

    #[test]
    fn test_promotion_record() {
        let mv = record("8/4P3/8/8/8/8/k7/7K w - - 0 1", "e7e8q");
        assert_eq!(mv.promotion, Some(Piece::Queen));
        assert!(mv.is_promotion());
        assert_eq!(mv.uci(), "e7e8q");
        assert_eq!(mv.san, "e8=Q");
    }

    #[test]
    fn test_bare_san_strips_suffix() {
        let mv = record(
            "rnbqkbnr/pppp1ppp/8/4p3/6P1/5P2/PPPPP2P/RNBQKBNR b KQkq - 0 2",
            "d8h4",
        );
        assert_eq!(mv.san, "Qh4#");
        assert_eq!(mv.bare_san(), "Qh4");
        assert!(mv.is_mate());
        assert!(mv.gives_check());
    }
}
