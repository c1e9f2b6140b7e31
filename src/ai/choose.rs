//! Difficulty-tiered move and placement selection

use rand::prelude::*;

use crate::core::game::Game;
use crate::core::hex::Hex;
use crate::core::moves::{self, Move};
use crate::core::territory;

use super::search::{search, SearchOptions};
use super::Difficulty;

/// Small random perturbation that breaks ties between equal candidates
/// so the weak and normal tiers do not play deterministically.
fn jitter(rng: &mut impl Rng) -> f64 {
    rng.random_range(0.0..0.5)
}

/// Placement choice for every tier: a uniformly random open single-fish
/// tile, or None when the board has none left.
pub fn choose_placement(game: &Game, rng: &mut impl Rng) -> Option<Hex> {
    let candidates: Vec<Hex> = game
        .board
        .tiles
        .values()
        .filter(|t| t.active && t.fish == 1 && t.penguin.is_none())
        .map(|t| t.hex)
        .collect();
    candidates.choose(rng).copied()
}

/// Pick a move for the current player at the given difficulty. None iff
/// the player has no legal moves; the caller advances the turn instead.
pub fn choose_move(
    game: &mut Game,
    difficulty: Difficulty,
    options: &SearchOptions,
    rng: &mut impl Rng,
) -> Option<Move> {
    match difficulty {
        Difficulty::Weak => choose_greedy(game, rng),
        Difficulty::Normal => choose_one_ply(game, rng),
        Difficulty::Strong => search(game, options)
            .map(|result| result.best)
            // budget too small for even one root pass; take the greedy move
            .or_else(|| choose_greedy(game, rng)),
    }
}

/// Weak tier: destination fish plus jitter, no board mutation.
pub fn choose_greedy(game: &Game, rng: &mut impl Rng) -> Option<Move> {
    let candidates =
        moves::player_moves(&game.board, &game.players[game.current].penguins);
    candidates
        .into_iter()
        .map(|mv| {
            let fish = game.board.tile(mv.to).map_or(0, |t| t.fish);
            (mv, f64::from(fish) + jitter(rng))
        })
        .max_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(mv, _)| mv)
}

/// Normal tier: one-ply lookahead. Each candidate is applied, scored by
/// own territory with a destination-fish tiebreak, then undone.
pub fn choose_one_ply(game: &mut Game, rng: &mut impl Rng) -> Option<Move> {
    let actor = game.current;
    let candidates = moves::player_moves(&game.board, &game.players[actor].penguins);

    candidates
        .into_iter()
        .map(|mv| {
            let fish = game.board.tile(mv.to).map_or(0, |t| t.fish);
            let undo = moves::apply(game, mv);
            let reach = territory::reachable_fish(&game.board, &game.players[actor].penguins);
            moves::undo(game, undo);
            let score = f64::from(reach) + 0.1 * f64::from(fish) + jitter(rng);
            (mv, score)
        })
        .max_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(mv, _)| mv)
}
