//! Screen-Space GUI System
//!
//! UI elements that render at fixed screen positions on top of the playfield.
//! Unlike the HUD components in [`crate::ui`], these are stateful (hover
//! tracking) and respond to mouse clicks.
//!
//! # Available Components
//!
//! - [`Button`] - Labelled clickable rectangle
//! - [`GameOverScreen`] - Win/lose overlay with Play Again and Exit buttons
//!
//! # Example Usage
//!
//! ```rust
//! use crate::gui::{GameOverScreen, GameOverOption};
//!
//! let screen = GameOverScreen::new();
//!
//! if let Some(option) = screen.hit_test(x, y) {
//!     match option {
//!         GameOverOption::PlayAgain => { /* ... */ }
//!         GameOverOption::Exit => { /* ... */ }
//!     }
//! }
//! ```

pub mod button;
pub mod game_over_screen;

pub use button::Button;
pub use game_over_screen::{GameOverOption, GameOverScreen};
