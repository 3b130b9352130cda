pub const STARTING_POSITION: &str = "Starting Position";

/// A named opening line, written as SAN without check suffixes.
#[derive(Clone, Debug)]
pub struct Opening {
    pub name: &'static str,
    pub moves: &'static [&'static str],
}

const OPENINGS: &[Opening] = &[
    Opening {
        name: "King's Pawn Opening",
        moves: &["e4"],
    },
    Opening {
        name: "Queen's Pawn Opening",
        moves: &["d4"],
    },
    Opening {
        name: "English Opening",
        moves: &["c4"],
    },
    Opening {
        name: "Réti Opening",
        moves: &["Nf3"],
    },
    Opening {
        name: "Bird's Opening",
        moves: &["f4"],
    },
    Opening {
        name: "Open Game",
        moves: &["e4", "e5"],
    },
    Opening {
        name: "King's Knight Opening",
        moves: &["e4", "e5", "Nf3"],
    },
    Opening {
        name: "King's Gambit",
        moves: &["e4", "e5", "f4"],
    },
    Opening {
        name: "Vienna Game",
        moves: &["e4", "e5", "Nc3"],
    },
    Opening {
        name: "Petrov's Defense",
        moves: &["e4", "e5", "Nf3", "Nf6"],
    },
    Opening {
        name: "Ruy Lopez",
        moves: &["e4", "e5", "Nf3", "Nc6", "Bb5"],
    },
    Opening {
        name: "Italian Game",
        moves: &["e4", "e5", "Nf3", "Nc6", "Bc4"],
    },
    Opening {
        name: "Giuoco Piano",
        moves: &["e4", "e5", "Nf3", "Nc6", "Bc4", "Bc5"],
    },
    Opening {
        name: "Two Knights Defense",
        moves: &["e4", "e5", "Nf3", "Nc6", "Bc4", "Nf6"],
    },
    Opening {
        name: "Scotch Game",
        moves: &["e4", "e5", "Nf3", "Nc6", "d4"],
    },
    Opening {
        name: "Sicilian Defense",
        moves: &["e4", "c5"],
    },
    Opening {
        name: "French Defense",
        moves: &["e4", "e6"],
    },
    Opening {
        name: "Caro-Kann Defense",
        moves: &["e4", "c6"],
    },
    Opening {
        name: "Scandinavian Defense",
        moves: &["e4", "d5"],
    },
    Opening {
        name: "Alekhine's Defense",
        moves: &["e4", "Nf6"],
    },
    Opening {
        name: "Pirc Defense",
        moves: &["e4", "d6"],
    },
    Opening {
        name: "Queen's Gambit",
        moves: &["d4", "d5", "c4"],
    },
    Opening {
        name: "Queen's Gambit Declined",
        moves: &["d4", "d5", "c4", "e6"],
    },
    Opening {
        name: "Queen's Gambit Accepted",
        moves: &["d4", "d5", "c4", "dxc4"],
    },
    Opening {
        name: "Slav Defense",
        moves: &["d4", "d5", "c4", "c6"],
    },
    Opening {
        name: "Indian Defense",
        moves: &["d4", "Nf6"],
    },
    Opening {
        name: "King's Indian Defense",
        moves: &["d4", "Nf6", "c4", "g6"],
    },
    Opening {
        name: "Nimzo-Indian Defense",
        moves: &["d4", "Nf6", "c4", "e6", "Nc3", "Bb4"],
    },
    Opening {
        name: "Dutch Defense",
        moves: &["d4", "f5"],
    },
];

/// Names the longest known line that the game so far starts with.
pub fn identify<S: AsRef<str>>(played: &[S]) -> Option<&'static Opening> {
    OPENINGS
        .iter()
        .filter(|opening| {
            opening.moves.len() <= played.len()
                && opening
                    .moves
                    .iter()
                    .zip(played)
                    .all(|(expected, actual)| *expected == actual.as_ref())
        })
        .max_by_key(|opening| opening.moves.len())
}
