//! Board generation, tile storage and sliding-move validity

use std::collections::HashMap;

use rand::prelude::*;

use super::hex::Hex;
use super::player::PlayerId;

pub const NUM_ROWS: i32 = 8;
pub const NUM_TILES: usize = 60;

/// Fish deck dealt onto a fresh board: 30 ones, 20 twos, 10 threes.
const FISH_COUNTS: [(u8, usize); 3] = [(1, 30), (2, 20), (3, 10)];

/// Index of a penguin in the board's penguin arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PenguinId(pub usize);

/// A playing piece. `tile` is None only before placement, or after the
/// piece has been taken off the board by an elimination.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Penguin {
    pub owner: PlayerId,
    pub tile: Option<Hex>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tile {
    pub hex: Hex,
    pub fish: u8,
    /// Cleared forever once the tile sinks.
    pub active: bool,
    pub penguin: Option<PenguinId>,
}

/// The hex board: a tile per axial coordinate plus the penguin arena.
///
/// Tile and penguin hold mutual back-references by id; both sides are
/// only ever updated together (see `moves::apply` / `moves::undo`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    pub tiles: HashMap<Hex, Tile>,
    pub penguins: Vec<Penguin>,
}

impl Board {
    /// Generate the fixed 8-row board (alternating 8 and 7 columns, 60
    /// tiles) with the fish deck shuffled uniformly. Row-offset cells map
    /// to axial coordinates as `q = col - floor(row / 2)`, `r = row`.
    pub fn generate(rng: &mut impl Rng) -> Self {
        let mut deck: Vec<u8> = FISH_COUNTS
            .iter()
            .flat_map(|&(fish, n)| std::iter::repeat(fish).take(n))
            .collect();
        deck.shuffle(rng);

        let mut cells = Vec::with_capacity(NUM_TILES);
        for row in 0..NUM_ROWS {
            let cols = if row % 2 == 0 { 8 } else { 7 };
            for col in 0..cols {
                cells.push(Hex::new(col - row.div_euclid(2), row));
            }
        }

        let tiles = cells
            .into_iter()
            .zip(deck)
            .map(|(hex, fish)| {
                (hex, Tile { hex, fish, active: true, penguin: None })
            })
            .collect();

        Self {
            tiles,
            penguins: Vec::new(),
        }
    }

    pub fn tile(&self, hex: Hex) -> Option<&Tile> {
        self.tiles.get(&hex)
    }

    pub fn tile_mut(&mut self, hex: Hex) -> Option<&mut Tile> {
        self.tiles.get_mut(&hex)
    }

    pub fn penguin(&self, id: PenguinId) -> &Penguin {
        &self.penguins[id.0]
    }

    /// Create a penguin on `hex` and link both sides of the relation.
    /// The caller must have validated the placement.
    pub fn add_penguin(&mut self, owner: PlayerId, hex: Hex) -> PenguinId {
        let id = PenguinId(self.penguins.len());
        self.penguins.push(Penguin {
            owner,
            tile: Some(hex),
        });
        if let Some(tile) = self.tiles.get_mut(&hex) {
            debug_assert!(tile.active && tile.penguin.is_none());
            tile.penguin = Some(id);
        }
        id
    }

    /// Stored tiles adjacent to `hex` (at most 6).
    pub fn neighbors(&self, hex: Hex) -> Vec<&Tile> {
        hex.neighbors()
            .iter()
            .filter_map(|n| self.tiles.get(n))
            .collect()
    }

    /// True iff the tile exists, is afloat and unoccupied.
    pub fn is_open(&self, hex: Hex) -> bool {
        self.tile(hex)
            .map_or(false, |t| t.active && t.penguin.is_none())
    }

    /// Walk the line between `from` (exclusive) and `to` (exclusive);
    /// fails on any missing, sunk or occupied tile in between.
    pub fn path_is_clear(&self, from: Hex, to: Hex) -> bool {
        let Some(step) = from.step_toward(&to) else {
            return false;
        };
        let mut cur = &from + &step;
        while cur != to {
            if !self.is_open(cur) {
                return false;
            }
            cur = &cur + &step;
        }
        true
    }

    /// Full sliding-move validity: target open, on a straight axial line
    /// from the penguin's tile, with a clear path in between.
    pub fn is_valid_move(&self, penguin: PenguinId, target: Hex) -> bool {
        let Some(from) = self.penguin(penguin).tile else {
            return false;
        };
        self.is_open(target)
            && from.is_straight_line(&target)
            && self.path_is_clear(from, target)
    }
}
