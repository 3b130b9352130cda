use std::fmt;
use std::str::FromStr;

use rand::seq::SliceRandom;
use rand::Rng;

/// Heuristic weights that shape which moves a side prefers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Personality {
    pub name: &'static str,
    pub capture_weight: f32,
    pub check_weight: f32,
    pub center_weight: f32,
    pub promotion_weight: f32,
}

pub const PERSONALITIES: &[Personality] = &[
    Personality {
        name: "balanced",
        capture_weight: 10.0,
        check_weight: 1.0,
        center_weight: 0.5,
        promotion_weight: 5.0,
    },
    Personality {
        name: "aggressive",
        capture_weight: 12.0,
        check_weight: 3.0,
        center_weight: 0.25,
        promotion_weight: 5.0,
    },
    Personality {
        name: "positional",
        capture_weight: 8.0,
        check_weight: 0.5,
        center_weight: 2.0,
        promotion_weight: 4.0,
    },
    Personality {
        name: "tactician",
        capture_weight: 10.0,
        check_weight: 4.0,
        center_weight: 0.5,
        promotion_weight: 6.0,
    },
];

impl Personality {
    pub fn balanced() -> Personality {
        PERSONALITIES[0]
    }

    /// Case-insensitive lookup in [`PERSONALITIES`].
    pub fn by_name(name: &str) -> Option<Personality> {
        PERSONALITIES
            .iter()
            .find(|p| p.name.eq_ignore_ascii_case(name.trim()))
            .copied()
    }

    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Personality {
        *PERSONALITIES
            .choose(rng)
            .unwrap_or(&PERSONALITIES[0])
    }

    pub fn names() -> Vec<&'static str> {
        PERSONALITIES.iter().map(|p| p.name).collect()
    }
}

impl Default for Personality {
    fn default() -> Self {
        Self::balanced()
    }
}

impl FromStr for Personality {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Personality::by_name(s).ok_or_else(|| {
            format!(
                "Unknown personality '{}' (expected one of: {})",
                s,
                Personality::names().join(", ")
            )
        })
    }
}

impl fmt::Display for Personality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}
