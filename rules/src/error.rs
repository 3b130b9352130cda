use std::error::Error;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RulesError {
    InvalidFen(String),
    IllegalMove(String),
}

impl fmt::Display for RulesError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RulesError::InvalidFen(reason) => write!(f, "Invalid FEN: {}", reason),
            RulesError::IllegalMove(uci) => write!(f, "Illegal move: {}", uci),
        }
    }
}

impl Error for RulesError {}
