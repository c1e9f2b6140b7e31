//! Reachable-fish territory analysis and mobility checks

use std::collections::HashSet;

use super::board::{Board, PenguinId};

/// Sum of fish over the connected component of active, unoccupied tiles
/// adjoining the given penguins, the penguins' own tiles included.
///
/// This is a static territory estimate, not turn-by-turn reachability:
/// doglegs need intermediate turns, but connected-component fish is what
/// the heuristics and the search evaluation want.
pub fn reachable_fish(board: &Board, penguins: &[PenguinId]) -> u32 {
    let mut seen = HashSet::new();
    let mut stack = Vec::new();
    let mut total = 0u32;

    for &id in penguins {
        let Some(hex) = board.penguin(id).tile else {
            continue;
        };
        if let Some(tile) = board.tile(hex) {
            if seen.insert(hex) {
                total += u32::from(tile.fish);
                stack.push(hex);
            }
        }
    }

    while let Some(hex) = stack.pop() {
        for tile in board.neighbors(hex) {
            if tile.active && tile.penguin.is_none() && seen.insert(tile.hex) {
                total += u32::from(tile.fish);
                stack.push(tile.hex);
            }
        }
    }

    total
}

/// Cheap mobility check: true iff any penguin has at least one open
/// neighbor. Used for turn-advance and elimination decisions.
pub fn player_can_move(board: &Board, penguins: &[PenguinId]) -> bool {
    penguins.iter().any(|&id| {
        board.penguin(id).tile.map_or(false, |hex| {
            board
                .neighbors(hex)
                .iter()
                .any(|t| t.active && t.penguin.is_none())
        })
    })
}
