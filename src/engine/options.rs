/// Configuration options for the engine
use anyhow::{bail, Result};

use crate::core::game::EliminationPolicy;

#[derive(Debug, Clone)]
pub struct EngineOptions {
    /// What happens to stuck players; applied at the next `setup`.
    pub elimination: EliminationPolicy,
    /// Whether strict mode is enabled
    pub strict_mode: bool,
    /// Default search budget in milliseconds
    pub move_time: u64,
    /// Default search depth cap
    pub depth: u32,
}

impl EngineOptions {
    pub fn set_option(&mut self, name: &str, value: &str) -> Result<()> {
        match name {
            "elimination" => self.elimination = value.parse()?,
            "strictmode" => self.strict_mode = value.parse()?,
            "movetime" => self.move_time = value.parse()?,
            "depth" => self.depth = value.parse()?,
            _ => bail!("Unknown option: {}", name),
        }

        Ok(())
    }
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self {
            elimination: EliminationPolicy::default(),
            strict_mode: true,
            move_time: 2000,
            depth: 10,
        }
    }
}
