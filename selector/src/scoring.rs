use chess::Square;
use rules::MoveRecord;
use utils::piece_value;

use crate::Personality;

pub const CENTER_SQUARES: [Square; 4] = [Square::D4, Square::D5, Square::E4, Square::E5];

/// Deterministic part of a move's score, before noise is added.
///
/// Captures always pay the full value of the moving piece, whether or not the
/// destination is defended. Check is read from the SAN rather than by playing
/// the move out, so a mating move (`#`) earns no check bonus.
#[inline]
pub fn base_score(mv: &MoveRecord, personality: &Personality) -> f32 {
    let mut score = 0.0;

    if let Some(captured) = mv.captured {
        score += piece_value(captured) as f32 * personality.capture_weight;
        score -= piece_value(mv.piece) as f32;
    }

    if let Some(promotion) = mv.promotion {
        score += piece_value(promotion) as f32 * personality.promotion_weight;
    }

    if CENTER_SQUARES.contains(&mv.to) {
        score += personality.center_weight;
    }

    if mv.san.contains('+') {
        score += personality.check_weight;
    }

    score
}

#[cfg(test)]
mod tests {
    use super::*;
    use chess::{Color, Piece};

    fn record(
        from: Square,
        to: Square,
        piece: Piece,
        captured: Option<Piece>,
        promotion: Option<Piece>,
        san: &str,
    ) -> MoveRecord {
        MoveRecord {
            from,
            to,
            piece,
            color: Color::White,
            captured,
            promotion,
            san: san.to_string(),
        }
    }

    #[test]
    fn test_queen_promotion_scores_45_for_balanced() {
        let mv = record(Square::A7, Square::A8, Piece::Pawn, None, Some(Piece::Queen), "a8=Q");
        assert_eq!(base_score(&mv, &Personality::balanced()), 45.0);
    }

    #[test]
    fn test_center_bonus_is_exactly_center_weight() {
        let mv = record(Square::E2, Square::E4, Piece::Pawn, None, None, "e4");
        for personality in crate::PERSONALITIES {
            assert_eq!(base_score(&mv, personality), personality.center_weight);
        }
    }

    #[test]
    fn test_center_check_scores_center_plus_check() {
        let mv = record(Square::B2, Square::D4, Piece::Queen, None, None, "Qd4+");
        for personality in crate::PERSONALITIES {
            assert_eq!(
                base_score(&mv, personality),
                personality.center_weight + personality.check_weight
            );
        }
    }

    #[test]
    fn test_mate_suffix_earns_no_check_bonus() {
        let mv = record(Square::D8, Square::H4, Piece::Queen, None, None, "Qh4#");
        assert_eq!(base_score(&mv, &Personality::balanced()), 0.0);
    }

    #[test]
    fn test_capture_charges_full_attacker_value() {
        // Queen takes a pawn on an undefended square: 1 * 10 - 9
        let mv = record(Square::H5, Square::F7, Piece::Queen, Some(Piece::Pawn), None, "Qxf7");
        assert_eq!(base_score(&mv, &Personality::balanced()), 1.0);

        // Pawn takes a rook: 5 * 10 - 1
        let mv = record(Square::G2, Square::H3, Piece::Pawn, Some(Piece::Rook), None, "gxh3");
        assert_eq!(base_score(&mv, &Personality::balanced()), 49.0);
    }

    #[test]
    fn test_capture_promotion_with_check_stacks() {
        // 5 * 10 - 1 + 9 * 5 + 1
        let mv = record(
            Square::E7,
            Square::D8,
            Piece::Pawn,
            Some(Piece::Rook),
            Some(Piece::Queen),
            "exd8=Q+",
        );
        assert_eq!(base_score(&mv, &Personality::balanced()), 95.0);
    }

    #[test]
    fn test_quiet_move_scores_zero() {
        let mv = record(Square::G1, Square::F3, Piece::Knight, None, None, "Nf3");
        assert_eq!(base_score(&mv, &Personality::balanced()), 0.0);
    }
}
