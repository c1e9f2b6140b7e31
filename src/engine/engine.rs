use crate::ai::{self, Difficulty, SearchOptions};
use crate::core::game::{Game, GameConfig, Phase};
use crate::core::hex::Hex;
use crate::core::moves::Move;
use crate::utils::make_rng;

use super::options::EngineOptions;

use anyhow::{Context, Result};
use rand::rngs::StdRng;

/// Engine owns the game state, the AI and the randomness source, and
/// mediates every state change requested over the text protocol.
pub struct Engine {
    pub options: EngineOptions,
    pub difficulty: Difficulty,
    game: Option<Game>,
    rng: StdRng,
}

impl Engine {
    /// Create a new engine instance with default options
    pub fn new() -> Self {
        Self {
            options: EngineOptions::default(),
            difficulty: Difficulty::default(),
            game: None,
            rng: make_rng(),
        }
    }

    /// Start a fresh game, replacing any game in progress.
    pub fn setup(
        &mut self,
        num_players: usize,
        num_ai: usize,
        difficulty: Difficulty,
    ) -> Result<()> {
        let mut config = GameConfig::new(num_players, num_ai)?;
        config.elimination = self.options.elimination;
        self.difficulty = difficulty;
        self.game = Some(Game::new(config, &mut self.rng)?);
        Ok(())
    }

    /// Set engine options
    pub fn set_option(&mut self, name: &str, value: &str) -> Result<()> {
        self.options.set_option(name, value)
    }

    pub fn game(&self) -> Result<&Game> {
        self.game.as_ref().context("No game in progress")
    }

    fn game_mut(&mut self) -> Result<&mut Game> {
        self.game.as_mut().context("No game in progress")
    }

    pub fn phase(&self) -> Phase {
        self.game.as_ref().map_or(Phase::Setup, |g| g.phase)
    }

    /// Place a penguin for the current player. Ok(false) means the
    /// placement was refused without touching the game.
    pub fn submit_placement(&mut self, hex: Hex) -> Result<bool> {
        Ok(self.game_mut()?.submit_placement(hex))
    }

    /// Move the current player's penguin. Ok(false) means the move was
    /// refused without touching the game.
    pub fn submit_move(&mut self, from: Hex, to: Hex) -> Result<bool> {
        Ok(self.game_mut()?.submit_move(from, to))
    }

    /// Pick a placement for the current player. None when no open
    /// single-fish tile remains.
    pub fn request_ai_placement(&mut self) -> Result<Option<Hex>> {
        let Self { game, rng, .. } = self;
        let game = game.as_mut().context("No game in progress")?;
        Ok(ai::choose_placement(game, rng))
    }

    /// Pick a move for the current player with the engine's configured
    /// budget. None means the player is stuck and the caller should
    /// advance the turn instead.
    pub fn request_ai_move(&mut self) -> Result<Option<Move>> {
        let search_options = SearchOptions {
            move_time: self.options.move_time,
            max_depth: self.options.depth,
        };
        self.request_ai_move_with(&search_options)
    }

    pub fn request_ai_move_with(
        &mut self,
        search_options: &SearchOptions,
    ) -> Result<Option<Move>> {
        let Self {
            game,
            rng,
            difficulty,
            ..
        } = self;
        let game = game.as_mut().context("No game in progress")?;
        Ok(ai::choose_move(game, *difficulty, search_options, rng))
    }

    /// Run elimination checks and hand the turn onward.
    pub fn advance_turn(&mut self) -> Result<()> {
        self.game_mut()?.advance_turn();
        Ok(())
    }

    pub fn display(&self) -> Result<()> {
        println!("{}", self.game()?);
        Ok(())
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::game::EliminationPolicy;

    #[test]
    fn test_lifecycle_placement_to_gameplay() {
        let mut engine = Engine::new();
        assert_eq!(engine.phase(), Phase::Setup);
        assert!(engine.submit_placement(Hex::new(0, 0)).is_err());

        engine.setup(2, 2, Difficulty::Weak).unwrap();
        assert_eq!(engine.phase(), Phase::Placement);

        // both seats are AI; drive all eight placements
        for _ in 0..8 {
            let hex = engine.request_ai_placement().unwrap().unwrap();
            assert!(engine.submit_placement(hex).unwrap());
        }
        assert_eq!(engine.phase(), Phase::Gameplay);

        let mv = engine.request_ai_move().unwrap().unwrap();
        assert!(engine.submit_move(mv.from, mv.to).unwrap());
    }

    #[test]
    fn test_setup_applies_elimination_option() {
        let mut engine = Engine::new();
        engine.set_option("elimination", "obstacle").unwrap();
        engine.setup(3, 0, Difficulty::Normal).unwrap();
        assert_eq!(
            engine.game().unwrap().config.elimination,
            EliminationPolicy::LeaveAsObstacle
        );
    }

    #[test]
    fn test_setup_rejects_bad_player_counts() {
        let mut engine = Engine::new();
        assert!(engine.setup(5, 0, Difficulty::Weak).is_err());
        assert!(engine.setup(2, 3, Difficulty::Weak).is_err());
    }
}
