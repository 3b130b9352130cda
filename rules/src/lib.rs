mod chess_rules;
mod engine;
mod error;
mod outcome;
mod pgn;
mod record;
mod san;

pub use chess_rules::{ChessRules, STANDARD_POSITION_FEN};
pub use engine::RulesEngine;
pub use error::RulesError;
pub use outcome::{DrawReason, Outcome};
pub use pgn::{to_pgn, PgnHeaders};
pub use record::MoveRecord;
pub use san::to_san;
