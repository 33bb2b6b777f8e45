mod config;
mod game;
mod graphics;
mod gui;
mod input_system;
mod rng;
mod session;
mod text;
mod ui;
mod word_list;

use config::GameConfig;
use game::Game;
use graphics::GraphicsContext;
use rng::WordRng;
use tracing::{info, warn};
use word_list::WordList;

fn main() -> Result<(), String> {
    let (config, config_error) = GameConfig::load_or_default(config::default_path());

    tracing_subscriber::fmt()
        .with_max_level(config.log_level())
        .init();

    if let Some(e) = config_error {
        warn!("Ignoring {}: {}", config::CONFIG_FILENAME, e);
    }

    let words = WordList::load_or_default(word_list::default_path());
    let rng = WordRng::from_entropy();
    info!("Word pool: {} words (seed {})", words.len(), rng.seed());

    let mut graphics = GraphicsContext::init(&config)?;

    let mut game = Game::new(words, rng);
    let result = game.run(&mut graphics);

    graphics.shutdown();
    result
}
