use chess::{BitBoard, Board, Color, File, Piece, Rank, Square, EMPTY};

const LIGHT_SQUARES_MASK: u64 = 0x55AA55AA55AA55AA;

/// Checks if the position is a dead draw for both sides:
/// - K vs K
/// - K+N vs K (either side)
/// - kings and bishops only, with every bishop on the same square colour
pub fn has_insufficient_material(board: &Board) -> bool {
    let pawns = board.pieces(Piece::Pawn);
    let rooks = board.pieces(Piece::Rook);
    let queens = board.pieces(Piece::Queen);

    if (pawns | rooks | queens) != EMPTY {
        return false;
    }

    let knights = *board.pieces(Piece::Knight);
    let bishops = *board.pieces(Piece::Bishop);

    // K vs K, K+minor vs K
    if (knights | bishops).popcnt() <= 1 {
        return true;
    }

    if knights != EMPTY {
        return false;
    }

    let light_squares = BitBoard(LIGHT_SQUARES_MASK);
    let on_light = (bishops & light_squares).popcnt();
    on_light == 0 || on_light == bishops.popcnt()
}

/// Board contents by display coordinates, row 0 is rank 8 and col 0 is the a-file.
pub type Grid = [[Option<(Piece, Color)>; 8]; 8];

pub fn grid_from_board(board: &Board) -> Grid {
    let mut grid = [[None; 8]; 8];
    for (row, cells) in grid.iter_mut().enumerate() {
        for (col, cell) in cells.iter_mut().enumerate() {
            let square = square_at(row, col);
            *cell = board.piece_on(square).zip(board.color_on(square));
        }
    }
    grid
}

/// Board square from zero-based display coordinates, where row 0 is rank 8
/// and col 0 is the a-file.
#[inline]
pub fn square_at(row: usize, col: usize) -> Square {
    Square::make_square(Rank::from_index(7 - row), File::from_index(col))
}

#[inline]
pub fn square_name(square: Square) -> String {
    format!(
        "{}{}",
        (b'a' + square.get_file().to_index() as u8) as char,
        square.get_rank().to_index() + 1
    )
}

/// Locates the king of `color` on a display grid.
pub fn find_king(grid: &Grid, color: Color) -> Option<Square> {
    grid.iter().enumerate().find_map(|(row, cells)| {
        cells
            .iter()
            .position(|cell| *cell == Some((Piece::King, color)))
            .map(|col| square_at(row, col))
    })
}
