//! Session readout
//!
//! Shows the masked word, the guessed letters and the attempts left on the
//! right-hand side of the screen. Like the gallows, the HUD keeps no state of
//! its own; it reads the session every frame.

use crate::session::Session;
use crate::text::{draw_text, draw_text_centered, fit_scale, GLYPH_HEIGHT};
use sdl2::pixels::Color;
use sdl2::render::Canvas;
use sdl2::video::Window;

/// Configuration for HUD layout and colors
#[derive(Debug, Clone)]
pub struct HudStyle {
    /// Left edge and width of the readout panel
    pub panel_x: i32,
    pub panel_width: u32,

    pub title_color: Color,
    pub word_color: Color,
    pub label_color: Color,
    pub letters_color: Color,
    pub attempts_color: Color,

    /// Attempts color once only one or two are left
    pub low_attempts_color: Color,

    pub hint_color: Color,

    /// Guessed letters shown per row before wrapping
    pub letters_per_row: usize,
}

impl Default for HudStyle {
    fn default() -> Self {
        HudStyle {
            panel_x: 260,
            panel_width: 360,
            title_color: Color::RGB(220, 220, 240),
            word_color: Color::RGB(255, 255, 255),
            label_color: Color::RGB(150, 150, 160),
            letters_color: Color::RGB(180, 200, 255),
            attempts_color: Color::RGB(100, 255, 100),
            low_attempts_color: Color::RGB(255, 80, 80),
            hint_color: Color::RGB(120, 120, 130),
            letters_per_row: 13,
        }
    }
}

pub struct Hud {
    style: HudStyle,
}

impl Hud {
    pub fn new() -> Self {
        Hud {
            style: HudStyle::default(),
        }
    }

    pub fn render(&self, canvas: &mut Canvas<Window>, session: &Session) -> Result<(), String> {
        let center_x = self.style.panel_x + self.style.panel_width as i32 / 2;

        draw_text_centered(canvas, "HANGMAN", center_x, 30, self.style.title_color, 3)?;

        // Masked word, shrunk for long words so it stays inside the panel
        let masked = session.masked_word();
        let scale = fit_scale(&masked, self.style.panel_width, 3);
        draw_text_centered(canvas, &masked, center_x, 100, self.style.word_color, scale)?;

        // Guessed letters and attempts make way for the game over panel
        if session.is_over() {
            return Ok(());
        }

        // Guessed letters
        let label_x = self.style.panel_x + 20;
        draw_text(canvas, "GUESSED:", label_x, 160, self.style.label_color, 2)?;
        let letters: Vec<char> = session.guessed_letters().collect();
        let row_height = (GLYPH_HEIGHT * 2) as i32 + 8;
        for (i, row) in guessed_rows(&letters, self.style.letters_per_row).iter().enumerate() {
            draw_text(
                canvas,
                row,
                label_x,
                184 + i as i32 * row_height,
                self.style.letters_color,
                2,
            )?;
        }

        // Attempts
        let attempts = session.attempts_remaining();
        let attempts_color = if attempts <= 2 {
            self.style.low_attempts_color
        } else {
            self.style.attempts_color
        };
        draw_text(canvas, &attempts_label(attempts), label_x, 270, attempts_color, 2)?;

        draw_text_centered(
            canvas,
            "TYPE A LETTER - ESC TO QUIT",
            center_x,
            330,
            self.style.hint_color,
            1,
        )
    }
}

impl Default for Hud {
    fn default() -> Self {
        Self::new()
    }
}

/// Guessed letters as space-separated uppercase rows
pub fn guessed_rows(letters: &[char], per_row: usize) -> Vec<String> {
    letters
        .chunks(per_row.max(1))
        .map(|row| {
            row.iter()
                .map(|c| c.to_ascii_uppercase().to_string())
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect()
}

pub fn attempts_label(attempts: u8) -> String {
    format!("ATTEMPTS LEFT: {}", attempts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::text_width;

    #[test]
    fn test_fit_scale_long_word() {
        // "programming" masked is 21 characters: 375px at scale 3, 250px at 2
        let masked = Session::new("programming").masked_word();
        assert_eq!(fit_scale(&masked, 360, 3), 2);
    }

    #[test]
    fn test_guessed_rows_wrap() {
        let letters: Vec<char> = ('a'..='e').collect();
        assert_eq!(guessed_rows(&letters, 2), vec!["A B", "C D", "E"]);
    }

    #[test]
    fn test_guessed_rows_empty() {
        assert!(guessed_rows(&[], 13).is_empty());
    }

    #[test]
    fn test_full_alphabet_fits_panel() {
        let style = HudStyle::default();
        let letters: Vec<char> = ('a'..='z').collect();
        for row in guessed_rows(&letters, style.letters_per_row) {
            assert!(text_width(&row, 2) + 20 <= style.panel_width);
        }
    }

    #[test]
    fn test_attempts_label() {
        assert_eq!(attempts_label(6), "ATTEMPTS LEFT: 6");
        assert_eq!(attempts_label(0), "ATTEMPTS LEFT: 0");
    }
}
