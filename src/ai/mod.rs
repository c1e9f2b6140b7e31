//! Opponent AI: difficulty tiers, evaluation and search

use anyhow::{bail, Result};
use std::str::FromStr;

pub mod choose;
pub mod eval;
pub mod search;

pub use choose::{choose_move, choose_placement};
pub use eval::evaluate;
pub use search::{SearchOptions, SearchResult};

/// AI strength selected at game setup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Difficulty {
    /// Greedy destination fish.
    Weak,
    /// One-ply territory lookahead.
    Normal,
    /// Iterative-deepening alpha-beta.
    Strong,
}

impl Default for Difficulty {
    fn default() -> Self {
        Difficulty::Normal
    }
}

impl FromStr for Difficulty {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "weak" => Ok(Difficulty::Weak),
            "normal" => Ok(Difficulty::Normal),
            "strong" => Ok(Difficulty::Strong),
            _ => bail!("Unknown difficulty: {}", s),
        }
    }
}
