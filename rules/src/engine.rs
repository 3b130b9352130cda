use chess::Color;
use utils::Grid;

use crate::{MoveRecord, Outcome, RulesError};

/// Legal-move generation and game-state bookkeeping for one game.
///
/// Everything the auto-play driver knows about chess goes through this trait;
/// the move selector only ever sees the records returned by [`moves`].
///
/// [`moves`]: RulesEngine::moves
pub trait RulesEngine: Send {
    /// Returns to the standard starting position and clears the history.
    fn reset(&mut self);

    fn board(&self) -> Grid;

    /// Legal moves for the side to move, in generation order.
    fn moves(&self) -> Vec<MoveRecord>;

    /// Applies a move and returns the record as the engine saw it.
    /// Illegal moves are rejected and leave the game untouched.
    fn play(&mut self, mv: &MoveRecord) -> Result<MoveRecord, RulesError>;

    fn turn(&self) -> Color;

    fn in_check(&self) -> bool;
    fn in_checkmate(&self) -> bool;
    fn in_stalemate(&self) -> bool;

    /// Stalemate, insufficient material, threefold repetition or the fifty-move rule.
    fn in_draw(&self) -> bool;

    fn game_over(&self) -> bool {
        self.in_checkmate() || self.in_draw()
    }

    fn outcome(&self) -> Option<Outcome>;

    fn history(&self) -> &[MoveRecord];

    fn fen(&self) -> String;
}
