//! Clickable Button Component
//!
//! A labelled rectangle with a hover highlight. Buttons don't handle events
//! themselves; the owner hit-tests clicks with [`Button::contains`].

use crate::text::{draw_text_centered, GLYPH_HEIGHT};
use sdl2::pixels::Color;
use sdl2::rect::Rect;
use sdl2::render::Canvas;
use sdl2::video::Window;

/// Configuration for button appearance
#[derive(Debug, Clone)]
pub struct ButtonStyle {
    pub background_color: Color,
    pub hover_color: Color,
    pub border_color: Color,
    pub text_color: Color,
    pub text_scale: u32,
}

impl Default for ButtonStyle {
    fn default() -> Self {
        ButtonStyle {
            background_color: Color::RGB(50, 60, 80),
            hover_color: Color::RGB(80, 100, 140),
            border_color: Color::RGB(140, 150, 180),
            text_color: Color::RGB(255, 255, 255),
            text_scale: 2,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Button {
    label: String,
    rect: Rect,
    style: ButtonStyle,
}

impl Button {
    pub fn new(label: impl Into<String>, rect: Rect) -> Self {
        Button {
            label: label.into(),
            rect,
            style: ButtonStyle::default(),
        }
    }

    #[allow(dead_code)] // Read by layout tests
    pub fn rect(&self) -> Rect {
        self.rect
    }

    /// Whether the point (logical coordinates) is inside the button
    pub fn contains(&self, x: i32, y: i32) -> bool {
        self.rect.contains_point((x, y))
    }

    pub fn render(&self, canvas: &mut Canvas<Window>, hovered: bool) -> Result<(), String> {
        canvas.set_draw_color(if hovered {
            self.style.hover_color
        } else {
            self.style.background_color
        });
        canvas.fill_rect(self.rect)?;

        canvas.set_draw_color(self.style.border_color);
        canvas.draw_rect(self.rect)?;

        let text_height = (GLYPH_HEIGHT * self.style.text_scale) as i32;
        let center = self.rect.center();
        draw_text_centered(
            canvas,
            &self.label,
            center.x(),
            center.y() - text_height / 2,
            self.style.text_color,
            self.style.text_scale,
        )
    }
}
