//! Players and their seat colors

use anyhow::{anyhow, Result};
use num_derive::{FromPrimitive, ToPrimitive};
use num_traits::{FromPrimitive, ToPrimitive};

use super::board::PenguinId;
use super::convert::{FromIndex, ToIndex};

/// Seat colors, assigned in turn order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, FromPrimitive, ToPrimitive)]
pub enum Color {
    Red,
    Blue,
    Green,
    Yellow,
}

impl Color {
    pub fn all() -> [Color; 4] {
        [Color::Red, Color::Blue, Color::Green, Color::Yellow]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Color::Red => "Red",
            Color::Blue => "Blue",
            Color::Green => "Green",
            Color::Yellow => "Yellow",
        }
    }
}

impl FromIndex for Color {
    fn from_index(idx: usize) -> Result<Self> {
        FromPrimitive::from_usize(idx)
            .ok_or_else(|| anyhow!("Invalid color index: {}", idx))
    }
}

impl ToIndex for Color {
    fn to_index(&self) -> Result<usize> {
        ToPrimitive::to_usize(self)
            .ok_or_else(|| anyhow!("Invalid color value"))
    }
}

/// Index of a player in the game's turn order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PlayerId(pub usize);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    pub color: Color,
    /// Owned penguins, in placement order.
    pub penguins: Vec<PenguinId>,
    /// Fish banked from every tile this player has vacated or collected.
    pub score: u32,
    pub tiles_collected: u32,
    pub is_ai: bool,
    pub eliminated: bool,
}

impl Player {
    pub fn new(color: Color, is_ai: bool) -> Self {
        Self {
            color,
            penguins: Vec::new(),
            score: 0,
            tiles_collected: 0,
            is_ai,
            eliminated: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_from_index() {
        assert_eq!(Color::from_index(0).unwrap(), Color::Red);
        assert_eq!(Color::from_index(3).unwrap(), Color::Yellow);
        assert!(Color::from_index(4).is_err());
    }

    #[test]
    fn test_color_to_index() {
        for (i, color) in Color::all().into_iter().enumerate() {
            assert_eq!(color.to_index().unwrap(), i);
        }
    }
}
