use chess::Color;
use log::trace;
use rand::seq::SliceRandom;
use rand::Rng;
use rules::MoveRecord;

use crate::{base_score, Personality};

/// Upper bound (exclusive) of the uniform noise added to every score.
pub const NOISE_AMPLITUDE: f32 = 0.5;

/// Picks a move for `side` with the thread-local RNG.
pub fn select_move<'a>(
    moves: &'a [MoveRecord],
    personality: &Personality,
    side: Color,
) -> Option<&'a MoveRecord> {
    select_move_with(moves, personality, side, &mut rand::thread_rng())
}

/// Scores every move, then picks uniformly among those sharing the top score.
///
/// Returns `None` only for an empty move list; callers are expected to check
/// for game over first.
pub fn select_move_with<'a, R: Rng + ?Sized>(
    moves: &'a [MoveRecord],
    personality: &Personality,
    side: Color,
    rng: &mut R,
) -> Option<&'a MoveRecord> {
    let mut best_score = f32::NEG_INFINITY;
    let mut best_moves: Vec<&MoveRecord> = Vec::new();

    for mv in moves {
        let score = base_score(mv, personality) + rng.gen::<f32>() * NOISE_AMPLITUDE;

        if score > best_score {
            best_score = score;
            best_moves.clear();
            best_moves.push(mv);
        } else if score == best_score {
            best_moves.push(mv);
        }
    }

    let choice = best_moves.choose(rng).copied();

    if let Some(mv) = choice {
        trace!(
            "{:?} ({}) picks {} at {:.3} from {} tied of {}",
            side,
            personality.name,
            mv.san,
            best_score,
            best_moves.len(),
            moves.len()
        );
    }

    choice
}
