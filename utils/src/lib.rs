mod board;
mod material;
mod symbols;

pub use board::{find_king, grid_from_board, has_insufficient_material, square_at, square_name, Grid};
pub use material::{material, piece_value, total_value};
pub use symbols::{color_name, piece_symbol};
