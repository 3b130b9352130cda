use chess::{Board, BoardStatus, ChessMove, File, MoveGen, Piece, EMPTY};
use utils::square_name;

/// Standard Algebraic Notation for `mv` played from `board`, including the
/// `+`/`#` suffix. `mv` must be legal in `board`.
pub fn to_san(board: &Board, mv: ChessMove) -> String {
    let mut san = match board.piece_on(mv.get_source()) {
        Some(piece) => san_body(board, mv, piece),
        None => return mv.to_string(),
    };

    let next = board.make_move_new(mv);
    if next.status() == BoardStatus::Checkmate {
        san.push('#');
    } else if *next.checkers() != EMPTY {
        san.push('+');
    }

    san
}

fn san_body(board: &Board, mv: ChessMove, moving_piece: Piece) -> String {
    let from_square = mv.get_source();
    let to_square = mv.get_dest();
    let is_capture = board.piece_on(to_square).is_some()
        || (moving_piece == Piece::Pawn && from_square.get_file() != to_square.get_file());

    if moving_piece == Piece::King && from_square.get_file() == File::E {
        match to_square.get_file() {
            File::G => return "O-O".to_string(),
            File::C => return "O-O-O".to_string(),
            _ => {}
        }
    }

    let mut san = String::new();

    if moving_piece != Piece::Pawn {
        san.push(piece_to_char(moving_piece));
        san.push_str(&disambiguation(board, mv, moving_piece));
    } else if is_capture {
        san.push(file_to_char(from_square.get_file()));
    }

    if is_capture {
        san.push('x');
    }

    san.push_str(&square_name(to_square));

    if let Some(promotion) = mv.get_promotion() {
        san.push('=');
        san.push(piece_to_char(promotion));
    }

    san
}

#[inline]
fn piece_to_char(piece: Piece) -> char {
    match piece {
        Piece::Pawn => 'P',
        Piece::Knight => 'N',
        Piece::Bishop => 'B',
        Piece::Rook => 'R',
        Piece::Queen => 'Q',
        Piece::King => 'K',
    }
}

#[inline]
fn file_to_char(file: File) -> char {
    (b'a' + file.to_index() as u8) as char
}

fn disambiguation(board: &Board, mv: ChessMove, piece: Piece) -> String {
    let dest = mv.get_dest();
    let source = mv.get_source();

    // Other pieces of the same type that could also reach the destination
    let rivals: Vec<ChessMove> = MoveGen::new_legal(board)
        .filter(|other| {
            other.get_dest() == dest
                && other.get_source() != source
                && board.piece_on(other.get_source()) == Some(piece)
        })
        .collect();

    if rivals.is_empty() {
        return String::new();
    }

    let source_file = source.get_file();
    if !rivals
        .iter()
        .any(|other| other.get_source().get_file() == source_file)
    {
        return file_to_char(source_file).to_string();
    }

    let source_rank = source.get_rank();
    if !rivals
        .iter()
        .any(|other| other.get_source().get_rank() == source_rank)
    {
        return (source_rank.to_index() + 1).to_string();
    }

    square_name(source)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn san(fen: &str, uci: &str) -> String {
        let board = Board::from_str(fen).unwrap();
        let mv = MoveGen::new_legal(&board)
            .find(|mv| mv.to_string() == uci)
            .unwrap();
        to_san(&board, mv)
    }

    #[test]
    fn test_opening_moves() {
        let start = crate::STANDARD_POSITION_FEN;
        assert_eq!(san(start, "e2e4"), "e4");
        assert_eq!(san(start, "g1f3"), "Nf3");
        assert_eq!(san(start, "b1c3"), "Nc3");
    }

    #[test]
    fn test_castling_both_sides() {
        let fen = "r3k2r/pppq1ppp/2npbn2/2b1p3/2B1P3/2NPBN2/PPPQ1PPP/R3K2R w KQkq - 4 8";
        assert_eq!(san(fen, "e1g1"), "O-O");
        assert_eq!(san(fen, "e1c1"), "O-O-O");
    }

    #[test]
    fn test_file_disambiguation() {
        // Knights on b1 and f3 can both reach d2
        let fen = "4k3/8/8/8/8/5N2/8/1N2K3 w - - 0 1";
        assert_eq!(san(fen, "b1d2"), "Nbd2");
        assert_eq!(san(fen, "f3d2"), "Nfd2");
    }

    #[test]
    fn test_rank_disambiguation() {
        // Rooks on a1 and a5 can both reach a3
        let fen = "4k3/8/8/R7/8/8/8/R3K3 w - - 0 1";
        assert_eq!(san(fen, "a1a3"), "R1a3");
        assert_eq!(san(fen, "a5a3"), "R5a3");
    }

    #[test]
    fn test_pawn_capture_and_promotion() {
        let fen = "3r3k/4P3/8/8/8/8/8/K7 w - - 0 1";
        assert_eq!(san(fen, "e7d8q"), "exd8=Q+");
        assert_eq!(san(fen, "e7e8n"), "e8=N");
    }

    #[test]
    fn test_check_and_mate_suffixes() {
        // Scholar's mate final move
        let fen = "r1bqkb1r/pppp1ppp/2n2n2/4p2Q/2B1P3/8/PPPP1PPP/RNB1K1NR w KQkq - 4 4";
        assert_eq!(san(fen, "h5f7"), "Qxf7#");

        let fen = "4k3/8/8/8/8/8/8/R3K3 w - - 0 1";
        assert_eq!(san(fen, "a1a8"), "Ra8+");
    }
}
