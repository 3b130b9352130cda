use std::fmt;

use chess::Color;
use utils::color_name;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawReason {
    InsufficientMaterial,
    Repetition,
    FiftyMoves,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Checkmate { winner: Color },
    Stalemate,
    Draw(DrawReason),
}

impl Outcome {
    #[inline]
    pub fn winner(&self) -> Option<Color> {
        match self {
            Outcome::Checkmate { winner } => Some(*winner),
            _ => None,
        }
    }

    #[inline]
    pub fn is_draw(&self) -> bool {
        self.winner().is_none()
    }

    #[inline]
    pub fn pgn_result(&self) -> &'static str {
        match self {
            Outcome::Checkmate {
                winner: Color::White,
            } => "1-0",
            Outcome::Checkmate {
                winner: Color::Black,
            } => "0-1",
            Outcome::Stalemate | Outcome::Draw(_) => "1/2-1/2",
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Checkmate { winner } => write!(f, "Checkmate! {} Wins", color_name(*winner)),
            Outcome::Stalemate => write!(f, "Stalemate"),
            Outcome::Draw(DrawReason::InsufficientMaterial) => {
                write!(f, "Draw (insufficient material)")
            }
            Outcome::Draw(DrawReason::Repetition) => write!(f, "Draw (threefold repetition)"),
            Outcome::Draw(DrawReason::FiftyMoves) => write!(f, "Draw (fifty-move rule)"),
        }
    }
}
