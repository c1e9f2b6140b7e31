//! Legal-move enumeration and the apply/undo move primitive

use std::fmt;

use super::board::{Board, PenguinId};
use super::game::Game;
use super::hex::{Hex, HexDelta, DIRS};

/// A sliding move of one penguin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Move {
    pub penguin: PenguinId,
    pub from: Hex,
    pub to: Hex,
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.from, self.to)
    }
}

/// Record reversing exactly one `apply`. Undo records must be consumed
/// in reverse order of their application.
#[derive(Debug, Clone, Copy)]
pub struct Undo {
    mv: Move,
    fish: u8,
}

/// All destinations the penguin can slide to: per direction, every open
/// tile until the first missing, sunk or occupied one. No jumping.
pub fn legal_moves(board: &Board, penguin: PenguinId) -> Vec<Move> {
    let mut moves = Vec::new();
    let Some(from) = board.penguin(penguin).tile else {
        return moves;
    };
    for dir in DIRS {
        let step: HexDelta = dir.into();
        let mut cur = &from + &step;
        while board.is_open(cur) {
            moves.push(Move { penguin, from, to: cur });
            cur = &cur + &step;
        }
    }
    moves
}

/// Legal moves over all of a player's penguins.
pub fn player_moves(board: &Board, penguins: &[PenguinId]) -> Vec<Move> {
    penguins
        .iter()
        .flat_map(|&id| legal_moves(board, id))
        .collect()
}

/// Execute a validated move: detach the penguin, bank the vacated tile's
/// fish for its owner, sink the vacated tile, attach to the target.
///
/// The single mutating primitive for movement. Live play and search both
/// route through it, so simulation cannot diverge from the real rules.
pub fn apply(game: &mut Game, mv: Move) -> Undo {
    let owner = game.board.penguins[mv.penguin.0].owner.0;

    let origin = game
        .board
        .tile_mut(mv.from)
        .expect("move origin on board");
    debug_assert_eq!(origin.penguin, Some(mv.penguin));
    let fish = origin.fish;
    origin.penguin = None;
    origin.active = false;

    let target = game
        .board
        .tile_mut(mv.to)
        .expect("move target on board");
    debug_assert!(target.active && target.penguin.is_none());
    target.penguin = Some(mv.penguin);
    game.board.penguins[mv.penguin.0].tile = Some(mv.to);

    let player = &mut game.players[owner];
    player.score += u32::from(fish);
    player.tiles_collected += 1;

    Undo { mv, fish }
}

/// Exact inverse of `apply`: refloat the vacated tile and revert the
/// score and tile-count bookkeeping.
pub fn undo(game: &mut Game, undo: Undo) {
    let mv = undo.mv;
    let owner = game.board.penguins[mv.penguin.0].owner.0;

    let player = &mut game.players[owner];
    player.score -= u32::from(undo.fish);
    player.tiles_collected -= 1;

    let target = game
        .board
        .tile_mut(mv.to)
        .expect("move target on board");
    target.penguin = None;

    let origin = game
        .board
        .tile_mut(mv.from)
        .expect("move origin on board");
    origin.active = true;
    origin.penguin = Some(mv.penguin);
    game.board.penguins[mv.penguin.0].tile = Some(mv.from);
}
