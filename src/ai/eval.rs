//! Static position evaluation for the alpha-beta search

use crate::core::game::Game;
use crate::core::moves;
use crate::core::territory;

pub const SCORE_WEIGHT: i32 = 100;
pub const TERRITORY_WEIGHT: i32 = 10;
pub const MOBILITY_WEIGHT: i32 = 1;
pub const OPPONENT_TERRITORY_WEIGHT: i32 = 5;

/// Score a position from one seat's point of view: banked-fish lead over
/// the strongest opponent, weighted territory and mobility, minus the
/// opponents' combined territory. Hand-tuned weights, not a derived
/// optimum.
pub fn evaluate(game: &Game, maximizer: usize) -> i32 {
    let me = &game.players[maximizer];

    let best_opponent_score = game
        .players
        .iter()
        .enumerate()
        .filter(|&(i, _)| i != maximizer)
        .map(|(_, p)| p.score)
        .max()
        .unwrap_or(0);
    let score_diff = me.score as i32 - best_opponent_score as i32;

    let my_reachable = territory::reachable_fish(&game.board, &me.penguins) as i32;
    let my_mobility = moves::player_moves(&game.board, &me.penguins).len() as i32;
    let opponent_reachable: i32 = game
        .players
        .iter()
        .enumerate()
        .filter(|&(i, _)| i != maximizer)
        .map(|(_, p)| territory::reachable_fish(&game.board, &p.penguins) as i32)
        .sum();

    SCORE_WEIGHT * score_diff
        + TERRITORY_WEIGHT * my_reachable
        + MOBILITY_WEIGHT * my_mobility
        - OPPONENT_TERRITORY_WEIGHT * opponent_reachable
}
