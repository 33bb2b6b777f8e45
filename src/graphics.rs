//! SDL2 process state
//!
//! Everything SDL hands out once per process (context, window canvas, event
//! pump) lives in [`GraphicsContext`]. `main` creates it with
//! [`GraphicsContext::init`], lends it to the game loop, and tears it down with
//! [`GraphicsContext::shutdown`].

use crate::config::GameConfig;
use sdl2::EventPump;
use sdl2::render::Canvas;
use sdl2::video::Window;
use tracing::{info, warn};

// Logical resolution; SDL scales it to the real window
pub const GAME_WIDTH: u32 = 640;
pub const GAME_HEIGHT: u32 = 360;

pub struct GraphicsContext {
    pub canvas: Canvas<Window>,
    pub event_pump: EventPump,
    _sdl_context: sdl2::Sdl,
}

impl GraphicsContext {
    /// Initialise SDL, open the window and create the event pump
    pub fn init(config: &GameConfig) -> Result<Self, String> {
        let sdl_context = sdl2::init()?;
        let video_subsystem = sdl_context.video()?;

        let window_scale = config
            .window_scale
            .map(|scale| scale.clamp(1, 4))
            .unwrap_or_else(|| calculate_window_scale(&video_subsystem));
        let window_width = GAME_WIDTH * window_scale;
        let window_height = GAME_HEIGHT * window_scale;

        info!("Window scale: {}x (window: {}x{})", window_scale, window_width, window_height);

        let window = video_subsystem
            .window(&config.window_title, window_width, window_height)
            .position_centered()
            .build()
            .map_err(|e| e.to_string())?;

        let mut canvas = window.into_canvas().build().map_err(|e| e.to_string())?;

        // Mouse events are reported in logical coordinates too
        canvas.set_logical_size(GAME_WIDTH, GAME_HEIGHT).map_err(|e| e.to_string())?;

        let event_pump = sdl_context.event_pump()?;

        Ok(GraphicsContext {
            canvas,
            event_pump,
            _sdl_context: sdl_context,
        })
    }

    /// Close the window and release SDL
    pub fn shutdown(self) {
        info!("Shutting down");
        drop(self);
    }
}

/// Pick the largest integer scale that fits on the primary monitor
fn calculate_window_scale(video_subsystem: &sdl2::VideoSubsystem) -> u32 {
    match video_subsystem.desktop_display_mode(0) {
        Ok(display_mode) => scale_for_display(display_mode.w, display_mode.h),
        Err(e) => {
            warn!("Could not detect monitor size ({}), using 2x scale", e);
            2
        }
    }
}

fn scale_for_display(display_w: i32, display_h: i32) -> u32 {
    // Leave 10% margin for taskbars/decorations
    let usable_w = (display_w as f32 * 0.9) as i32;
    let usable_h = (display_h as f32 * 0.9) as i32;

    let max_scale_w = usable_w / GAME_WIDTH as i32;
    let max_scale_h = usable_h / GAME_HEIGHT as i32;

    max_scale_w.min(max_scale_h).clamp(1, 4) as u32
}
