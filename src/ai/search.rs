//! Iterative-deepening alpha-beta search with a wall-clock budget

use anyhow::{bail, Context};
use std::cmp::Reverse;
use std::str::FromStr;
use std::time::{Duration, Instant};

use crate::core::game::Game;
use crate::core::moves::{self, Move};

use super::eval::evaluate;

/// Sentinel well clear of any reachable evaluation.
const INF: i32 = i32::MAX / 2;

/// Options for configuring the search behavior
#[derive(Debug, Clone)]
pub struct SearchOptions {
    /// Maximum time to search in milliseconds
    pub move_time: u64,
    /// Hard ply cap for the deepening loop
    pub max_depth: u32,
}

impl FromStr for SearchOptions {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut i = 0;
        let mut search_options = SearchOptions::default();

        let parts = s.split_whitespace().collect::<Vec<_>>();

        while i < parts.len() {
            match parts[i] {
                "movetime" if i + 1 < parts.len() => {
                    let time = parts[i + 1].parse().context("invalid movetime")?;
                    search_options.move_time = time;
                    i += 1;
                }
                "depth" if i + 1 < parts.len() => {
                    let d = parts[i + 1].parse().context("invalid depth")?;
                    search_options.max_depth = d;
                    i += 1;
                }
                p => bail!("invalid go argument {}", p),
            }
            i += 1;
        }
        Ok(search_options)
    }
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            move_time: 2000,
            max_depth: 10,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct SearchResult {
    pub best: Move,
    pub value: i32,
    /// Deepest fully completed iteration.
    pub depth: u32,
    pub nodes: u64,
}

/// Iterative deepening driver. Each depth runs to completion or is
/// discarded whole; the last completed depth wins. Returns None iff the
/// acting player has no legal moves.
///
/// The board is perturbed in place and restored through the apply/undo
/// stack before returning.
pub fn search(game: &mut Game, options: &SearchOptions) -> Option<SearchResult> {
    let maximizer = game.current;
    let deadline = Instant::now() + Duration::from_millis(options.move_time);
    let mut nodes = 0u64;
    let mut result = None;

    for depth in 1..=options.max_depth {
        let Some((best, value)) = search_root(game, maximizer, depth, deadline, &mut nodes)
        else {
            break;
        };
        result = Some(SearchResult { best, value, depth, nodes });
        if Instant::now() >= deadline {
            break;
        }
    }
    result
}

/// One full-depth pass over the root moves. Returns None when there are
/// no moves, or when the budget expires mid-pass (partial pass dropped).
fn search_root(
    game: &mut Game,
    maximizer: usize,
    depth: u32,
    deadline: Instant,
    nodes: &mut u64,
) -> Option<(Move, i32)> {
    let root_moves = ordered_moves(game, maximizer);
    let mut best = None;
    let mut alpha = -INF;

    for mv in root_moves {
        if best.is_some() && Instant::now() >= deadline {
            return None;
        }
        let undo = moves::apply(game, mv);
        let actor = next_actor(game, maximizer);
        let value = alpha_beta(game, actor, maximizer, depth - 1, alpha, INF, deadline, nodes);
        moves::undo(game, undo);

        if best.is_none() || value > alpha {
            alpha = value;
            best = Some(mv);
        }
    }
    best.map(|mv| (mv, alpha))
}

/// Single-maximizer reduction: the root seat maximizes, every other seat
/// minimizes against it. The budget is polled at node entry only, so one
/// expensive subtree can overrun it.
#[allow(clippy::too_many_arguments)]
fn alpha_beta(
    game: &mut Game,
    actor: usize,
    maximizer: usize,
    depth: u32,
    mut alpha: i32,
    mut beta: i32,
    deadline: Instant,
    nodes: &mut u64,
) -> i32 {
    *nodes += 1;
    if depth == 0 || Instant::now() >= deadline {
        return evaluate(game, maximizer);
    }

    let candidates = ordered_moves(game, actor);
    if candidates.is_empty() {
        // stuck actor: score the position as it stands rather than
        // modelling the elimination turn
        return evaluate(game, maximizer);
    }

    let next = next_actor(game, actor);
    if actor == maximizer {
        let mut value = -INF;
        for mv in candidates {
            let undo = moves::apply(game, mv);
            value = value.max(alpha_beta(
                game, next, maximizer, depth - 1, alpha, beta, deadline, nodes,
            ));
            moves::undo(game, undo);
            alpha = alpha.max(value);
            if alpha >= beta {
                break;
            }
        }
        value
    } else {
        let mut value = INF;
        for mv in candidates {
            let undo = moves::apply(game, mv);
            value = value.min(alpha_beta(
                game, next, maximizer, depth - 1, alpha, beta, deadline, nodes,
            ));
            moves::undo(game, undo);
            beta = beta.min(value);
            if alpha >= beta {
                break;
            }
        }
        value
    }
}

/// A seat's legal moves sorted by destination fish descending. Cheap
/// ordering that improves pruning without evaluating positions.
fn ordered_moves(game: &Game, actor: usize) -> Vec<Move> {
    let mut candidates = moves::player_moves(&game.board, &game.players[actor].penguins);
    candidates.sort_by_key(|mv| {
        Reverse(game.board.tile(mv.to).map_or(0, |t| t.fish))
    });
    candidates
}

/// Next seat in turn order, skipping eliminated players. Falls back to
/// `actor` in the degenerate all-eliminated case.
fn next_actor(game: &Game, actor: usize) -> usize {
    let len = game.players.len();
    let mut idx = actor;
    for _ in 0..len {
        idx = (idx + 1) % len;
        if !game.players[idx].eliminated {
            return idx;
        }
    }
    actor
}
