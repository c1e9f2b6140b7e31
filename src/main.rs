use floe::Engine;
use std::io::{self, BufRead};

mod repl;
use repl::command::parse_command;
use repl::protocol::handle_command;

fn main() {
    println!("Floe - Penguin Engine");

    let stdin = io::stdin();
    let mut engine = Engine::new();

    for line in stdin.lock().lines() {
        let Ok(input) = line else {
            break;
        };

        if let Some(cmd) = parse_command(&input) {
            if let Err(err) = handle_command(&cmd, &mut engine) {
                if engine.options.strict_mode {
                    panic!("{}", err);
                } else {
                    eprintln!("{}", err);
                }
            }
        }
    }
}
