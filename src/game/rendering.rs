// Drawing one frame

use super::Game;
use sdl2::pixels::Color;
use sdl2::render::Canvas;
use sdl2::video::Window;

const BACKGROUND_COLOR: Color = Color::RGB(20, 22, 30);

impl Game {
    /// Draw the full game state; the caller presents the canvas
    pub fn render(&self, canvas: &mut Canvas<Window>) -> Result<(), String> {
        canvas.set_draw_color(BACKGROUND_COLOR);
        canvas.clear();

        self.gallows.render(canvas, self.session.attempts_remaining())?;
        self.hud.render(canvas, &self.session)?;
        self.game_over_screen
            .render(canvas, self.session.outcome(), self.session.word())?;

        Ok(())
    }
}
