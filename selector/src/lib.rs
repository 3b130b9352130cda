mod personality;
mod scoring;
mod select;


pub use personality::{Personality, PERSONALITIES};
pub use scoring::{base_score, CENTER_SQUARES};
pub use select::{select_move, select_move_with, NOISE_AMPLITUDE};
