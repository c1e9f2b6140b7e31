//! Game state machine: phases, placement, turn order and elimination

use anyhow::{ensure, Result};
use rand::prelude::*;
use std::str::FromStr;

use super::board::{Board, PenguinId, Tile};
use super::convert::FromIndex;
use super::hex::Hex;
use super::moves::{self, Move};
use super::player::{Color, Player, PlayerId};
use super::territory;

/// Phase of a game. Strictly forward; no phase is ever re-entered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Setup,
    Placement,
    Gameplay,
    End,
}

/// What happens to a player who cannot move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EliminationPolicy {
    /// The stuck player's penguins leave the board, each immediately
    /// crediting its tile's fish to the player and sinking the tile.
    /// The player is permanently out of rotation.
    RemoveAndCollect,
    /// The stuck player's penguins stay on the board as obstacles and
    /// their turns are skipped; mobility is re-checked every cycle. The
    /// game ends only when nobody at all can move.
    LeaveAsObstacle,
}

impl Default for EliminationPolicy {
    fn default() -> Self {
        EliminationPolicy::RemoveAndCollect
    }
}

impl FromStr for EliminationPolicy {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "remove" => Ok(EliminationPolicy::RemoveAndCollect),
            "obstacle" => Ok(EliminationPolicy::LeaveAsObstacle),
            _ => anyhow::bail!("Unknown elimination policy: {}", s),
        }
    }
}

/// Static per-game configuration.
#[derive(Debug, Clone, Copy)]
pub struct GameConfig {
    pub num_players: usize,
    pub num_ai: usize,
    pub penguins_per_player: usize,
    pub elimination: EliminationPolicy,
}

impl GameConfig {
    pub fn new(num_players: usize, num_ai: usize) -> Result<Self> {
        ensure!(
            (2..=4).contains(&num_players),
            "player count must be between 2 and 4, got {}",
            num_players
        );
        ensure!(
            num_ai <= num_players,
            "more AI seats ({}) than players ({})",
            num_ai,
            num_players
        );
        let penguins_per_player = match num_players {
            2 => 4,
            3 => 3,
            _ => 2,
        };
        Ok(Self {
            num_players,
            num_ai,
            penguins_per_player,
            elimination: EliminationPolicy::default(),
        })
    }
}

/// A running game: explicit context object, no process-wide state.
#[derive(Debug, Clone)]
pub struct Game {
    pub config: GameConfig,
    pub board: Board,
    pub players: Vec<Player>,
    pub phase: Phase,
    /// Index of the player to act.
    pub current: usize,
}

impl Game {
    /// Generate the board and enter the placement phase. AI seats fill
    /// from the back of the turn order.
    pub fn new(config: GameConfig, rng: &mut impl Rng) -> Result<Self> {
        let board = Board::generate(rng);
        let players = (0..config.num_players)
            .map(|i| {
                let color = Color::from_index(i)?;
                Ok(Player::new(color, i >= config.num_players - config.num_ai))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            config,
            board,
            players,
            phase: Phase::Placement,
            current: 0,
        })
    }

    pub fn current_player(&self) -> &Player {
        &self.players[self.current]
    }

    /// Tiles still afloat, with their occupancy, for rendering.
    pub fn active_tiles(&self) -> impl Iterator<Item = &Tile> {
        self.board.tiles.values().filter(|t| t.active)
    }

    /// Place a penguin for the current player. Refused (no state change)
    /// unless the game is in placement and the tile is an open
    /// single-fish tile.
    pub fn submit_placement(&mut self, hex: Hex) -> bool {
        if self.phase != Phase::Placement {
            return false;
        }
        let valid = self
            .board
            .tile(hex)
            .map_or(false, |t| t.active && t.fish == 1 && t.penguin.is_none());
        if !valid {
            return false;
        }

        let id = self.board.add_penguin(PlayerId(self.current), hex);
        self.players[self.current].penguins.push(id);
        self.advance_turn();
        true
    }

    /// Move the current player's penguin on `from` to `to`. Refused (no
    /// state change) unless it is a legal sliding move.
    pub fn submit_move(&mut self, from: Hex, to: Hex) -> bool {
        if self.phase != Phase::Gameplay {
            return false;
        }
        let Some(id) = self.board.tile(from).and_then(|t| t.penguin) else {
            return false;
        };
        if self.board.penguin(id).owner != PlayerId(self.current) {
            return false;
        }
        if !self.board.is_valid_move(id, to) {
            return false;
        }

        moves::apply(self, Move { penguin: id, from, to });
        self.advance_turn();
        true
    }

    /// Hand the turn to the next player who can act, eliminating stuck
    /// players along the way per the configured policy. Ends the game
    /// when nobody can act. Also drives the placement round-robin.
    pub fn advance_turn(&mut self) {
        match self.phase {
            Phase::Placement => self.advance_placement(),
            Phase::Gameplay => self.advance_gameplay(),
            Phase::Setup | Phase::End => {}
        }
    }

    fn advance_placement(&mut self) {
        let done = self
            .players
            .iter()
            .all(|p| p.penguins.len() >= self.config.penguins_per_player);
        if done {
            self.phase = Phase::Gameplay;
            self.current = 0;
        } else {
            self.current = (self.current + 1) % self.players.len();
        }
    }

    fn advance_gameplay(&mut self) {
        match self.config.elimination {
            EliminationPolicy::RemoveAndCollect => self.advance_removing(),
            EliminationPolicy::LeaveAsObstacle => self.advance_skipping(),
        }
    }

    fn advance_removing(&mut self) {
        if self.players.iter().all(|p| p.eliminated) {
            self.phase = Phase::End;
            return;
        }
        let len = self.players.len();
        let mut idx = self.current;
        for _ in 0..len {
            idx = (idx + 1) % len;
            if self.players[idx].eliminated {
                continue;
            }
            if self.can_move(idx) {
                self.current = idx;
                return;
            }
            self.eliminate_and_collect(idx);
        }
        self.phase = Phase::End;
    }

    fn advance_skipping(&mut self) {
        let len = self.players.len();
        let mut idx = self.current;
        for _ in 0..len {
            idx = (idx + 1) % len;
            if self.can_move(idx) {
                // a freed board square can bring a skipped player back
                self.players[idx].eliminated = false;
                self.current = idx;
                return;
            }
            self.players[idx].eliminated = true;
        }
        self.phase = Phase::End;
    }

    fn can_move(&self, idx: usize) -> bool {
        territory::player_can_move(&self.board, &self.players[idx].penguins)
    }

    /// Remove a stuck player's penguins, crediting each occupied tile's
    /// fish to them and sinking it.
    fn eliminate_and_collect(&mut self, idx: usize) {
        self.players[idx].eliminated = true;
        let ids: Vec<PenguinId> = self.players[idx].penguins.clone();
        for id in ids {
            let Some(hex) = self.board.penguin(id).tile else {
                continue;
            };
            if let Some(tile) = self.board.tile_mut(hex) {
                if tile.active {
                    self.players[idx].score += u32::from(tile.fish);
                    self.players[idx].tiles_collected += 1;
                    tile.active = false;
                }
                tile.penguin = None;
            }
            self.board.penguins[id.0].tile = None;
        }
    }

    /// Player indices ordered for the final summary: score descending,
    /// ties broken by tiles collected descending.
    pub fn ranking(&self) -> Vec<usize> {
        let mut order: Vec<usize> = (0..self.players.len()).collect();
        order.sort_by(|&a, &b| {
            let (pa, pb) = (&self.players[a], &self.players[b]);
            pb.score
                .cmp(&pa.score)
                .then(pb.tiles_collected.cmp(&pa.tiles_collected))
        });
        order
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;
    use crate::core::board::Tile;

    /// Game over exactly the given tiles (all afloat, unoccupied),
    /// already in the gameplay phase with no penguins placed.
    pub(crate) fn game_of(cells: &[(i32, i32, u8)], num_players: usize) -> Game {
        let tiles = cells
            .iter()
            .map(|&(q, r, fish)| {
                let hex = Hex::new(q, r);
                (hex, Tile { hex, fish, active: true, penguin: None })
            })
            .collect();
        let players = (0..num_players)
            .map(|i| Player::new(Color::all()[i], false))
            .collect();
        Game {
            config: GameConfig::new(num_players, 0).unwrap(),
            board: Board {
                tiles,
                penguins: Vec::new(),
            },
            players,
            phase: Phase::Gameplay,
            current: 0,
        }
    }

    /// Place a penguin for `player` on `(q, r)` without turn bookkeeping.
    pub(crate) fn put(game: &mut Game, player: usize, q: i32, r: i32) -> PenguinId {
        let id = game.board.add_penguin(PlayerId(player), Hex::new(q, r));
        game.players[player].penguins.push(id);
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};
    use test_case::test_case;

    fn fresh_game(num_players: usize, seed: u64) -> Game {
        let config = GameConfig::new(num_players, 0).unwrap();
        Game::new(config, &mut StdRng::seed_from_u64(seed)).unwrap()
    }

    fn one_fish_tiles(game: &Game) -> Vec<Hex> {
        let mut hexes: Vec<Hex> = game
            .board
            .tiles
            .values()
            .filter(|t| t.fish == 1 && t.penguin.is_none())
            .map(|t| t.hex)
            .collect();
        hexes.sort();
        hexes
    }

    #[test_case(2, 4)]
    #[test_case(3, 3)]
    #[test_case(4, 2)]
    fn test_penguins_per_player(num_players: usize, expected: usize) {
        let config = GameConfig::new(num_players, 0).unwrap();
        assert_eq!(config.penguins_per_player, expected);
    }

    #[test]
    fn test_config_rejects_bad_counts() {
        assert!(GameConfig::new(1, 0).is_err());
        assert!(GameConfig::new(5, 0).is_err());
        assert!(GameConfig::new(2, 3).is_err());
    }

    #[test]
    fn test_placement_round_robin_then_gameplay() {
        let mut game = fresh_game(2, 3);
        assert_eq!(game.phase, Phase::Placement);

        // placements refused off single-fish tiles
        let two_fish = game
            .board
            .tiles
            .values()
            .find(|t| t.fish == 2)
            .unwrap()
            .hex;
        assert!(!game.submit_placement(two_fish));
        assert_eq!(game.phase, Phase::Placement);

        for (i, hex) in one_fish_tiles(&game).into_iter().take(8).enumerate() {
            assert_eq!(game.current, i % 2);
            assert!(game.submit_placement(hex));
        }

        assert_eq!(game.phase, Phase::Gameplay);
        assert_eq!(game.current, 0);
        for player in &game.players {
            assert_eq!(player.penguins.len(), 4);
        }
    }

    #[test]
    fn test_placement_refused_on_occupied_tile() {
        let mut game = fresh_game(2, 3);
        let hex = one_fish_tiles(&game)[0];
        assert!(game.submit_placement(hex));
        assert!(!game.submit_placement(hex));
    }

    #[test]
    fn test_move_banks_vacated_fish_and_passes_turn() {
        // straight corridor for player 0; player 1 parked with room to move
        let mut game = fixtures::game_of(
            &[
                (0, 0, 1),
                (1, 0, 1),
                (2, 0, 1),
                (3, 0, 2),
                (0, 2, 1),
                (1, 2, 1),
            ],
            2,
        );
        fixtures::put(&mut game, 0, 0, 0);
        fixtures::put(&mut game, 1, 0, 2);

        assert!(game.submit_move(Hex::new(0, 0), Hex::new(3, 0)));

        // the vacated tile's fish is banked, not the destination's
        assert_eq!(game.players[0].score, 1);
        assert_eq!(game.players[0].tiles_collected, 1);
        assert!(!game.board.tile(Hex::new(0, 0)).unwrap().active);
        assert!(game.board.tile(Hex::new(3, 0)).unwrap().active);
        assert_eq!(game.current, 1);
    }

    #[test]
    fn test_illegal_moves_refused_without_state_change() {
        let mut game = fixtures::game_of(&[(0, 0, 1), (1, 0, 1), (1, 1, 1)], 2);
        fixtures::put(&mut game, 0, 0, 0);
        fixtures::put(&mut game, 1, 1, 0);

        let before = game.board.clone();
        // dogleg
        assert!(!game.submit_move(Hex::new(0, 0), Hex::new(1, 1)));
        // occupied target
        assert!(!game.submit_move(Hex::new(0, 0), Hex::new(1, 0)));
        // not the mover's penguin
        assert!(!game.submit_move(Hex::new(1, 0), Hex::new(1, 1)));
        // empty origin
        assert!(!game.submit_move(Hex::new(1, 1), Hex::new(0, 0)));
        assert_eq!(game.board, before);
        assert_eq!(game.current, 0);
    }

    #[test]
    fn test_stuck_player_removed_and_collects() {
        // player 1's only penguin sits on an isolated tile
        let mut game = fixtures::game_of(
            &[(0, 0, 1), (1, 0, 1), (2, 0, 1), (0, 5, 3)],
            2,
        );
        fixtures::put(&mut game, 0, 0, 0);
        fixtures::put(&mut game, 1, 0, 5);

        assert!(game.submit_move(Hex::new(0, 0), Hex::new(1, 0)));

        let p1 = &game.players[1];
        assert!(p1.eliminated);
        assert_eq!(p1.score, 3);
        assert_eq!(p1.tiles_collected, 1);
        assert!(!game.board.tile(Hex::new(0, 5)).unwrap().active);
        assert_eq!(game.board.penguins[1].tile, None);
        // turn came back to player 0, who can still move
        assert_eq!(game.current, 0);
        assert_eq!(game.phase, Phase::Gameplay);
    }

    #[test]
    fn test_stuck_player_left_as_obstacle() {
        let mut game = fixtures::game_of(
            &[(0, 0, 1), (1, 0, 1), (2, 0, 1), (0, 5, 3)],
            2,
        );
        game.config.elimination = EliminationPolicy::LeaveAsObstacle;
        fixtures::put(&mut game, 0, 0, 0);
        fixtures::put(&mut game, 1, 0, 5);

        assert!(game.submit_move(Hex::new(0, 0), Hex::new(1, 0)));

        let p1 = &game.players[1];
        assert!(p1.eliminated);
        // nothing collected, penguin still on the board
        assert_eq!(p1.score, 0);
        assert!(game.board.tile(Hex::new(0, 5)).unwrap().active);
        assert_eq!(game.board.penguins[1].tile, Some(Hex::new(0, 5)));
        assert_eq!(game.current, 0);
    }

    #[test]
    fn test_obstacle_player_rejoins_when_mobile() {
        let mut game = fixtures::game_of(
            &[(0, 0, 1), (1, 0, 1), (0, 2, 1), (1, 2, 1)],
            2,
        );
        game.config.elimination = EliminationPolicy::LeaveAsObstacle;
        fixtures::put(&mut game, 0, 0, 0);
        fixtures::put(&mut game, 1, 0, 2);
        game.players[1].eliminated = true;

        // mobility is re-checked every cycle under the obstacle policy
        game.advance_turn();
        assert!(!game.players[1].eliminated);
        assert_eq!(game.current, 1);
    }

    #[test_case(EliminationPolicy::RemoveAndCollect)]
    #[test_case(EliminationPolicy::LeaveAsObstacle)]
    fn test_all_stuck_ends_game(policy: EliminationPolicy) {
        // player 0 moves into a dead end; then nobody can move
        let mut game = fixtures::game_of(&[(0, 0, 1), (1, 0, 3), (0, 5, 2)], 2);
        game.config.elimination = policy;
        fixtures::put(&mut game, 0, 0, 0);
        fixtures::put(&mut game, 1, 0, 5);

        assert!(game.submit_move(Hex::new(0, 0), Hex::new(1, 0)));
        assert_eq!(game.phase, Phase::End);
    }

    #[test]
    fn test_ranking_sorts_by_score_then_tiles() {
        let mut game = fixtures::game_of(&[], 3);
        game.players[0].score = 7;
        game.players[0].tiles_collected = 3;
        game.players[1].score = 9;
        game.players[1].tiles_collected = 2;
        game.players[2].score = 7;
        game.players[2].tiles_collected = 5;

        assert_eq!(game.ranking(), vec![1, 2, 0]);
    }
}
