//! FPI protocol implementation

use anyhow::{bail, ensure, Result};
use std::io::{self, Write};

use floe::{
    ai::{Difficulty, SearchOptions},
    core::game::Phase,
    core::hex::Hex,
    engine::Engine,
};

/// Handle an FPI command
pub fn handle_command(cmd: &str, engine: &mut Engine) -> Result<()> {
    let parts: Vec<&str> = cmd.split_whitespace().collect();

    if parts.is_empty() {
        return Ok(());
    }

    match parts[0] {
        "fpi" => {
            println!("id name Floe");
            println!("option name elimination type string default remove");
            println!("option name strictmode type bool default true");
            println!("option name movetime type int default 2000");
            println!("option name depth type int default 10");
            println!("fpiok");
            io::stdout().flush()?;
        }
        "isready" => {
            println!("readyok");
            io::stdout().flush()?;
        }
        "setoption" => {
            ensure!(
                parts.len() == 5 && parts[1] == "name" && parts[3] == "value",
                "invalid setoption command"
            );

            engine.set_option(parts[2], parts[4])?;
        }
        "setup" => {
            ensure!(parts.len() == 4, "setup requires players, ai and difficulty");

            let num_players = parts[1].parse()?;
            let num_ai = parts[2].parse()?;
            let difficulty = parts[3].parse::<Difficulty>()?;

            engine.setup(num_players, num_ai, difficulty)?;
        }
        "place" => {
            ensure!(parts.len() == 2, "place requires a tile");

            let hex = parts[1].parse::<Hex>()?;
            if engine.submit_placement(hex)? {
                println!("ok");
            } else {
                println!("refused");
            }
        }
        "move" => {
            ensure!(parts.len() == 3, "move requires origin and target tiles");

            let from = parts[1].parse::<Hex>()?;
            let to = parts[2].parse::<Hex>()?;
            if engine.submit_move(from, to)? {
                println!("ok");
            } else {
                println!("refused");
            }
        }
        "go" => {
            let args = parts[1..].join(" ");
            let search_options = args.parse::<SearchOptions>()?;

            match engine.phase() {
                Phase::Placement => {
                    let Some(hex) = engine.request_ai_placement()? else {
                        bail!("no placement available");
                    };
                    engine.submit_placement(hex)?;
                    println!("place {}", hex);
                }
                Phase::Gameplay => match engine.request_ai_move_with(&search_options)? {
                    Some(mv) => {
                        engine.submit_move(mv.from, mv.to)?;
                        println!("move {}", mv);
                    }
                    None => {
                        // stuck player: run the elimination check instead
                        engine.advance_turn()?;
                        println!("none");
                    }
                },
                phase => bail!("cannot search in phase {}", phase),
            }
        }
        "display" => {
            engine.display()?;
        }
        "status" => {
            println!("phase {}", engine.phase());
            if let Ok(game) = engine.game() {
                if game.phase != Phase::End {
                    println!("toact {}", game.current_player().color.name().to_lowercase());
                }
                for idx in game.ranking() {
                    let player = &game.players[idx];
                    println!(
                        "player {} score {} tiles {}{}",
                        player.color.name().to_lowercase(),
                        player.score,
                        player.tiles_collected,
                        if player.eliminated { " out" } else { "" },
                    );
                }
            }
            io::stdout().flush()?;
        }
        "quit" => {
            std::process::exit(0);
        }
        cmd => {
            bail!("Unknown command: {}", cmd);
        }
    }

    Ok(())
}
