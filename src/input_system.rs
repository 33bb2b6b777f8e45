use sdl2::event::Event;
use sdl2::keyboard::Keycode;
use sdl2::mouse::MouseButton;
use sdl2::EventPump;

/// Actions the player can perform in the game
///
/// This enum represents all possible high-level game actions that can be
/// triggered by input. It decouples SDL2 events from what the game does with
/// them, so the game loop can be tested without a window.
#[derive(Debug, Clone, PartialEq)]
pub enum GameAction {
    // === Playing ===
    Guess(char),

    // === Game Over ===
    PlayAgain,
    Click(i32, i32),     // x, y in logical coordinates
    MouseMove(i32, i32), // x, y - for button hover

    // === System ===
    Quit,
}

/// Input context determines which actions are available
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputContext {
    /// Session in progress - letter keys are guesses
    Playing,
    /// Session won or lost - only restart/exit
    GameOver,
}

/// InputSystem processes SDL2 events and produces GameActions
///
/// Input processing happens in phases:
/// 1. Set the InputContext from the session outcome
/// 2. Poll all pending SDL2 events
/// 3. Filter events based on context
/// 4. Return the translated GameActions to the game loop
pub struct InputSystem {
    pub context: InputContext,
}

impl InputSystem {
    /// Creates a new InputSystem starting in Playing context
    pub fn new() -> Self {
        InputSystem {
            context: InputContext::Playing,
        }
    }

    /// Update the input context from whether the session is over
    ///
    /// Call this before poll_events() every frame.
    pub fn update_context(&mut self, session_over: bool) {
        self.context = if session_over {
            InputContext::GameOver
        } else {
            InputContext::Playing
        };
    }

    /// Drain all pending SDL2 events and return the actions they map to
    pub fn poll_events(&self, event_pump: &mut EventPump) -> Vec<GameAction> {
        event_pump
            .poll_iter()
            .filter_map(|event| self.translate(event))
            .collect()
    }

    /// Translate a single SDL2 event
    pub fn translate(&self, event: Event) -> Option<GameAction> {
        match event {
            Event::Quit { .. } => Some(GameAction::Quit),
            Event::KeyDown {
                keycode: Some(key),
                repeat: false,
                ..
            } => self.handle_keydown(key),
            Event::MouseButtonDown {
                mouse_btn: MouseButton::Left,
                x,
                y,
                ..
            } => Some(GameAction::Click(x, y)),
            Event::MouseMotion { x, y, .. } => Some(GameAction::MouseMove(x, y)),
            _ => None,
        }
    }

    /// Handle keyboard key press events
    ///
    /// Escape quits from any context.
    fn handle_keydown(&self, key: Keycode) -> Option<GameAction> {
        if key == Keycode::Escape {
            return Some(GameAction::Quit);
        }

        match self.context {
            InputContext::Playing => letter_for_key(key).map(GameAction::Guess),
            InputContext::GameOver => self.handle_game_over_keys(key),
        }
    }

    /// Return/Space is a keyboard shortcut for the Play Again button
    fn handle_game_over_keys(&self, key: Keycode) -> Option<GameAction> {
        if key == Keycode::Return || key == Keycode::Space {
            Some(GameAction::PlayAgain)
        } else {
            None
        }
    }
}

impl Default for InputSystem {
    fn default() -> Self {
        Self::new()
    }
}

/// Lowercase letter for an A-Z key, `None` for every other key
pub fn letter_for_key(key: Keycode) -> Option<char> {
    let name = key.name();
    let mut chars = name.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_ascii_alphabetic() => Some(c.to_ascii_lowercase()),
        _ => None,
    }
}
