use std::fmt;
use std::time::Duration;

use clap::ValueEnum;

/// Delay between plies. Cycles Normal -> Fast -> Slow -> Normal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Speed {
    Normal,
    Fast,
    Slow,
}

impl Speed {
    pub fn delay(self) -> Duration {
        match self {
            Speed::Normal => Duration::from_millis(800),
            Speed::Fast => Duration::from_millis(200),
            Speed::Slow => Duration::from_millis(2000),
        }
    }

    pub fn next(self) -> Speed {
        match self {
            Speed::Normal => Speed::Fast,
            Speed::Fast => Speed::Slow,
            Speed::Slow => Speed::Normal,
        }
    }
}

impl fmt::Display for Speed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Speed::Normal => write!(f, "Normal"),
            Speed::Fast => write!(f, "Fast"),
            Speed::Slow => write!(f, "Slow"),
        }
    }
}
