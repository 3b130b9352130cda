use rules::MoveRecord;

/// Audible feedback for a ply. Only the highest-priority cue is played.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundCue {
    Move,
    Capture,
    Castle,
    Promote,
    Check,
    GameEnd,
}

impl SoundCue {
    pub fn for_move(mv: &MoveRecord, game_over: bool) -> SoundCue {
        if game_over {
            SoundCue::GameEnd
        } else if mv.gives_check() {
            SoundCue::Check
        } else if mv.is_promotion() {
            SoundCue::Promote
        } else if mv.is_castle() {
            SoundCue::Castle
        } else if mv.is_capture() {
            SoundCue::Capture
        } else {
            SoundCue::Move
        }
    }

    /// Whether the terminal bell should ring for this cue.
    pub fn rings(self) -> bool {
        matches!(self, SoundCue::Capture | SoundCue::Check | SoundCue::GameEnd)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chess::{Color, Piece, Square};

    fn record(piece: Piece, to: Square, captured: Option<Piece>, san: &str) -> MoveRecord {
        MoveRecord {
            from: Square::E1,
            to,
            piece,
            color: Color::White,
            captured,
            promotion: None,
            san: san.to_string(),
        }
    }

    #[test]
    fn test_priority_order() {
        let capture_check = record(Piece::Queen, Square::E7, Some(Piece::Pawn), "Qxe7+");
        assert_eq!(SoundCue::for_move(&capture_check, false), SoundCue::Check);
        assert_eq!(SoundCue::for_move(&capture_check, true), SoundCue::GameEnd);

        let castle = record(Piece::King, Square::G1, None, "O-O");
        assert_eq!(SoundCue::for_move(&castle, false), SoundCue::Castle);

        let capture = record(Piece::Rook, Square::E7, Some(Piece::Knight), "Rxe7");
        assert_eq!(SoundCue::for_move(&capture, false), SoundCue::Capture);

        let quiet = record(Piece::King, Square::F1, None, "Kf1");
        assert_eq!(SoundCue::for_move(&quiet, false), SoundCue::Move);
    }

    #[test]
    fn test_promotion_beats_capture() {
        let mut promo = record(Piece::Pawn, Square::D8, Some(Piece::Rook), "exd8=Q");
        promo.promotion = Some(Piece::Queen);
        assert_eq!(SoundCue::for_move(&promo, false), SoundCue::Promote);
    }

    #[test]
    fn test_bell_cues() {
        assert!(SoundCue::Check.rings());
        assert!(SoundCue::GameEnd.rings());
        assert!(!SoundCue::Move.rings());
        assert!(!SoundCue::Castle.rings());
    }
}
