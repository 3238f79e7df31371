use std::error::Error;
use std::fs::File;

use log::{info, LevelFilter};
use simplelog::WriteLogger;

use torus_snake::config::Config;
use torus_snake::game::Game;

const LOG_FILE: &str = "torus-snake.log";

fn main() -> Result<(), Box<dyn Error>> {
    // The terminal is taken over by the game, so logs go to a file.
    WriteLogger::init(
        LevelFilter::Info,
        simplelog::Config::default(),
        File::create(LOG_FILE)?,
    )?;

    let config = Config::default();
    info!("starting torus-snake with {:?}", config);

    let mut game = Game::new(&config)?;

    // Runs forever; the game exits cleanly on CTRL+C by itself.
    game.run();

    Ok(())
}
