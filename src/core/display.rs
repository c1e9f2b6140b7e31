use colored::{ColoredString, Colorize};
use std::fmt;

use super::{
    board::Board,
    game::{Game, Phase},
    hex::Hex,
    player::{Color, Player},
};

use super::board::NUM_ROWS;

fn colorize(s: &str, color: Color) -> ColoredString {
    match color {
        Color::Red => s.bright_red(),
        Color::Blue => s.bright_blue(),
        Color::Green => s.bright_green(),
        Color::Yellow => s.bright_yellow(),
    }
}

impl fmt::Display for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f)?;
        writeln!(f, "Phase: {}", self.phase)?;
        if self.phase != Phase::End {
            writeln!(f, "To act: {}", self.current_player())?;
        }
        for player in &self.players {
            let tag = if player.eliminated { " (out)" } else { "" };
            writeln!(
                f,
                "{}: {} fish, {} tiles{}",
                player, player.score, player.tiles_collected, tag
            )?;
        }
        writeln!(f)?;
        write_board(f, &self.board, &self.players)
    }
}

/// Row-offset rendering: odd rows shifted half a cell, sunk tiles as
/// dots, penguins as the first letter of their owner's color.
fn write_board(f: &mut fmt::Formatter<'_>, board: &Board, players: &[Player]) -> fmt::Result {
    write!(f, "   ")?;
    for col in 0..8 {
        write!(f, " {} ", col)?;
    }
    writeln!(f)?;

    for row in 0..NUM_ROWS {
        let cols = if row % 2 == 0 { 8 } else { 7 };
        let indent = if row % 2 == 0 { "" } else { "  " };
        write!(f, "{:2} {}", row, indent)?;
        for col in 0..cols {
            let hex = Hex::new(col - row.div_euclid(2), row);
            match board.tile(hex) {
                Some(tile) if tile.active => match tile.penguin {
                    Some(id) => {
                        let color = players[board.penguin(id).owner.0].color;
                        write!(f, " {} ", colorize(&color.name()[..1], color))?;
                    }
                    None => write!(f, " {} ", tile.fish)?,
                },
                _ => write!(f, " · ")?,
            }
        }
        writeln!(f)?;
    }
    Ok(())
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.color)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", colorize(self.name(), *self))
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Phase::Setup => "setup",
            Phase::Placement => "placement",
            Phase::Gameplay => "gameplay",
            Phase::End => "end",
        };
        write!(f, "{}", name)
    }
}
