use std::env;
use std::io::{self, IsTerminal};

use anyhow::Context;
use checkers_engine::{console::Console, Game};
use log::info;

fn main() -> anyhow::Result<()> {
    env_logger::init(); // Log to stderr (if you run with `RUST_LOG=debug`).
    let colored = io::stdout().is_terminal() && env::var_os("NO_COLOR").is_none();

    let mut game = Game::default();
    info!("New game, {} moves first", game.current_turn_color());
    let mut console = Console::new(io::stdin().lock(), io::stdout().lock(), colored);
    console
        .run(&mut game)
        .context("failed to talk to the terminal")?;
    Ok(())
}
