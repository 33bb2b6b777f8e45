//! In-game HUD Components
//!
//! Stateless rendering components drawn every frame while a session is on
//! screen. They read the [`Session`](crate::session::Session) and never modify
//! it.
//!
//! # Available Components
//!
//! - [`Gallows`] - Gallows frame and the stick figure, one part per wrong guess
//! - [`Hud`] - Masked word, guessed letters and attempts left
//!
//! # Example Usage
//!
//! ```rust
//! use crate::ui::{Gallows, Hud};
//!
//! // Create once
//! let gallows = Gallows::new();
//! let hud = Hud::new();
//!
//! // In render loop
//! gallows.render(&mut canvas, session.attempts_remaining())?;
//! hud.render(&mut canvas, &session)?;
//! ```

pub mod gallows;
pub mod hud;

pub use gallows::Gallows;
pub use hud::Hud;
