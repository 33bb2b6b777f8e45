//! Game Over Screen Component
//!
//! Shown once a session is won or lost: a panel with a banner, the revealed
//! word on a loss, and the Play Again / Exit buttons.
//!
//! The panel takes the place of the guessed-letters and attempts readout
//! (the HUD stops drawing those once the session is over), so the banner never
//! overlaps them. The masked word and the gallows stay visible.

use super::Button;
use crate::session::Outcome;
use crate::text::{draw_text_centered, fit_scale};
use sdl2::pixels::Color;
use sdl2::rect::Rect;
use sdl2::render::Canvas;
use sdl2::video::Window;

/// Buttons on the game over screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOverOption {
    PlayAgain,
    Exit,
}

impl GameOverOption {
    pub const ALL: [GameOverOption; 2] = [GameOverOption::PlayAgain, GameOverOption::Exit];
}

/// Configuration for game over screen appearance
#[derive(Debug, Clone)]
pub struct GameOverStyle {
    /// Top-left corner of the panel
    pub panel_x: i32,
    pub panel_y: i32,
    pub panel_width: u32,
    pub panel_height: u32,
    pub panel_color: Color,
    pub border_color: Color,

    pub win_color: Color,
    pub lose_color: Color,
    pub word_color: Color,
}

impl Default for GameOverStyle {
    fn default() -> Self {
        GameOverStyle {
            panel_x: 270,
            panel_y: 140,
            panel_width: 340,
            panel_height: 170,
            panel_color: Color::RGB(30, 30, 40),
            border_color: Color::RGB(100, 100, 120),
            win_color: Color::RGB(100, 255, 100),
            lose_color: Color::RGB(255, 50, 50),
            word_color: Color::RGB(255, 255, 100),
        }
    }
}

/// Game over overlay with its two buttons
///
/// # Example
///
/// ```rust
/// let mut screen = GameOverScreen::new();
///
/// // Mouse tracking for hover
/// screen.set_hover(x, y);
///
/// // Click handling
/// match screen.hit_test(x, y) {
///     Some(GameOverOption::PlayAgain) => game.restart(),
///     Some(GameOverOption::Exit) => break,
///     None => {}
/// }
///
/// screen.render(&mut canvas, session.outcome(), session.word())?;
/// ```
pub struct GameOverScreen {
    play_again: Button,
    exit: Button,
    hovered: Option<GameOverOption>,
    style: GameOverStyle,
}

impl GameOverScreen {
    pub fn new() -> Self {
        let style = GameOverStyle::default();
        let panel = panel_rect(&style);

        let button_width = 130;
        let button_height = 34;
        let button_y = panel.bottom() - button_height as i32 - 20;

        let play_again = Button::new(
            "PLAY AGAIN",
            Rect::new(panel.x() + 20, button_y, button_width, button_height),
        );
        let exit = Button::new(
            "EXIT",
            Rect::new(
                panel.right() - button_width as i32 - 20,
                button_y,
                button_width,
                button_height,
            ),
        );

        GameOverScreen {
            play_again,
            exit,
            hovered: None,
            style,
        }
    }

    pub fn button(&self, option: GameOverOption) -> &Button {
        match option {
            GameOverOption::PlayAgain => &self.play_again,
            GameOverOption::Exit => &self.exit,
        }
    }

    /// Which button, if any, is under the point
    pub fn hit_test(&self, x: i32, y: i32) -> Option<GameOverOption> {
        GameOverOption::ALL
            .into_iter()
            .find(|&option| self.button(option).contains(x, y))
    }

    /// Track the mouse for hover highlighting
    pub fn set_hover(&mut self, x: i32, y: i32) {
        self.hovered = self.hit_test(x, y);
    }

    /// Render the overlay; does nothing while the session is still in progress
    pub fn render(&self, canvas: &mut Canvas<Window>, outcome: Outcome, word: &str) -> Result<(), String> {
        let (banner, banner_color) = match outcome {
            Outcome::InProgress => return Ok(()),
            Outcome::Won => ("YOU WIN!", self.style.win_color),
            Outcome::Lost => ("YOU LOSE!", self.style.lose_color),
        };

        // Panel with double border
        let panel = panel_rect(&self.style);
        canvas.set_draw_color(self.style.panel_color);
        canvas.fill_rect(panel)?;
        canvas.set_draw_color(self.style.border_color);
        canvas.draw_rect(panel)?;
        canvas.draw_rect(Rect::new(
            panel.x() + 2,
            panel.y() + 2,
            panel.width() - 4,
            panel.height() - 4,
        ))?;

        let center_x = panel.center().x();
        draw_text_centered(canvas, banner, center_x, panel.y() + 18, banner_color, 4)?;

        if outcome == Outcome::Lost {
            let reveal = format!("THE WORD WAS: {}", word.to_ascii_uppercase());
            let scale = fit_scale(&reveal, panel.width() - 20, 2);
            draw_text_centered(canvas, &reveal, center_x, panel.y() + 70, self.style.word_color, scale)?;
        }

        for option in GameOverOption::ALL {
            self.button(option).render(canvas, self.hovered == Some(option))?;
        }

        Ok(())
    }
}

impl Default for GameOverScreen {
    fn default() -> Self {
        Self::new()
    }
}

fn panel_rect(style: &GameOverStyle) -> Rect {
    Rect::new(style.panel_x, style.panel_y, style.panel_width, style.panel_height)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graphics::{GAME_HEIGHT, GAME_WIDTH};

    #[test]
    fn test_buttons_hit_test() {
        let screen = GameOverScreen::new();

        let play = screen.play_again.rect().center();
        let exit = screen.exit.rect().center();

        assert_eq!(screen.hit_test(play.x(), play.y()), Some(GameOverOption::PlayAgain));
        assert_eq!(screen.hit_test(exit.x(), exit.y()), Some(GameOverOption::Exit));
    }

    #[test]
    fn test_click_outside_buttons() {
        let screen = GameOverScreen::new();
        assert_eq!(screen.hit_test(0, 0), None);
        assert_eq!(screen.hit_test(GAME_WIDTH as i32 / 2, GAME_HEIGHT as i32 / 2 - 60), None);
    }

    #[test]
    fn test_buttons_do_not_overlap() {
        let screen = GameOverScreen::new();
        assert!(!screen.play_again.rect().has_intersection(screen.exit.rect()));
    }

    #[test]
    fn test_buttons_inside_panel() {
        let screen = GameOverScreen::new();
        let panel = panel_rect(&screen.style);
        assert!(panel.contains_rect(screen.play_again.rect()));
        assert!(panel.contains_rect(screen.exit.rect()));
    }

    #[test]
    fn test_panel_on_screen() {
        let panel = panel_rect(&GameOverStyle::default());
        let screen = Rect::new(0, 0, GAME_WIDTH, GAME_HEIGHT);
        assert!(screen.contains_rect(panel));
    }

    #[test]
    fn test_hover_tracking() {
        let mut screen = GameOverScreen::new();
        assert_eq!(screen.hovered, None);

        let exit = screen.exit.rect().center();
        screen.set_hover(exit.x(), exit.y());
        assert_eq!(screen.hovered, Some(GameOverOption::Exit));

        screen.set_hover(0, 0);
        assert_eq!(screen.hovered, None);
    }
}
