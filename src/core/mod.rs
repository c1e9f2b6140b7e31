//! Core game representations and rules

pub mod board;
pub mod convert;
pub mod display;
pub mod game;
pub mod hex;
pub mod moves;
pub mod player;
pub mod territory;

pub use board::{Board, Penguin, PenguinId, Tile};
pub use convert::{FromIndex, ToIndex};
pub use game::{EliminationPolicy, Game, GameConfig, Phase};
pub use hex::{Dir, Hex, HexDelta, DIRS};
pub use moves::{Move, Undo};
pub use player::{Color, Player, PlayerId};
pub use territory::{player_can_move, reachable_fish};
