// Game module - owns the active session and drives the frame loop
//
// This module contains:
// - mod.rs: Game struct, construction, restart and the main loop
// - events.rs: Applying GameActions to the session
// - rendering.rs: Drawing one frame

pub mod events;
pub mod rendering;

use crate::graphics::GraphicsContext;
use crate::gui::GameOverScreen;
use crate::input_system::InputSystem;
use crate::rng::WordRng;
use crate::session::Session;
use crate::ui::{Gallows, Hud};
use crate::word_list::WordList;
use std::time::Duration;
use tracing::info;

// ~60 FPS
const FRAME_TIME: Duration = Duration::new(0, 1_000_000_000u32 / 60);

/// Whether the main loop should keep going after an action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopControl {
    Continue,
    Exit,
}

/// Top-level game state
///
/// Holds the single active [`Session`] plus everything needed to replace it
/// (word pool and RNG) and to draw it. Restarting swaps the session in place;
/// the loop in [`Game::run`] never re-enters itself.
pub struct Game {
    session: Session,
    words: WordList,
    rng: WordRng,
    input: InputSystem,
    gallows: Gallows,
    hud: Hud,
    game_over_screen: GameOverScreen,
    games_played: u32,
}

impl Game {
    /// Create a game and start its first session
    pub fn new(words: WordList, mut rng: WordRng) -> Self {
        let session = words.new_session(&mut rng);
        Game {
            session,
            words,
            rng,
            input: InputSystem::new(),
            gallows: Gallows::new(),
            hud: Hud::new(),
            game_over_screen: GameOverScreen::new(),
            games_played: 1,
        }
    }

    /// Throw away the current session and start a new one with a fresh word
    pub fn restart(&mut self) {
        self.session = self.words.new_session(&mut self.rng);
        self.games_played += 1;
        info!("Starting game #{}", self.games_played);
    }

    /// Run until the player quits or closes the window
    pub fn run(&mut self, graphics: &mut GraphicsContext) -> Result<(), String> {
        'running: loop {
            self.input.update_context(self.session.is_over());

            for action in self.input.poll_events(&mut graphics.event_pump) {
                if self.handle_action(&action) == LoopControl::Exit {
                    break 'running;
                }
            }

            self.render(&mut graphics.canvas)?;
            graphics.canvas.present();

            std::thread::sleep(FRAME_TIME);
        }

        Ok(())
    }
}
