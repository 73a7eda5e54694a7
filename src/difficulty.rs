//! Difficulty levels.

use std::fmt::{self, Display};

use clap::ValueEnum;

/// How much the grid tries to mislead the player.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, ValueEnum)]
pub enum Difficulty {
    /// Only the given words, everything else is random letters.
    #[default]
    Easy,

    /// Leftover space is filled with unrelated decoy words.
    Medium,

    /// Like medium, plus decoys cut from the given words themselves.
    Hard,
}

impl Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Difficulty::Easy => write!(f, "easy"),
            Difficulty::Medium => write!(f, "medium"),
            Difficulty::Hard => write!(f, "hard"),
        }
    }
}
