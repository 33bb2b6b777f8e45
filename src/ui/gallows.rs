//! Gallows drawing
//!
//! The gallows frame is always drawn. Body parts appear one per wrong guess,
//! keyed directly off the attempts the player has left: 6 left shows an empty
//! noose, 0 left shows the whole figure.
//!
//! Everything is procedural (SDL2 lines and points), no textures.

use crate::session::MAX_ATTEMPTS;
use sdl2::pixels::Color;
use sdl2::rect::{Point, Rect};
use sdl2::render::Canvas;
use sdl2::video::Window;

/// Stick figure parts in the order they are revealed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyPart {
    Head,
    Body,
    LeftArm,
    RightArm,
    LeftLeg,
    RightLeg,
}

impl BodyPart {
    pub const ALL: [BodyPart; 6] = [
        BodyPart::Head,
        BodyPart::Body,
        BodyPart::LeftArm,
        BodyPart::RightArm,
        BodyPart::LeftLeg,
        BodyPart::RightLeg,
    ];

    /// Parts visible when `attempts_remaining` attempts are left
    pub fn revealed(attempts_remaining: u8) -> &'static [BodyPart] {
        let misses = MAX_ATTEMPTS.saturating_sub(attempts_remaining) as usize;
        &Self::ALL[..misses.min(Self::ALL.len())]
    }
}

/// Configuration for gallows appearance
#[derive(Debug, Clone)]
pub struct GallowsStyle {
    /// Screen position of the left end of the base
    pub origin_x: i32,
    pub base_y: i32,

    pub frame_color: Color,
    pub figure_color: Color,

    /// Line thickness in pixels
    pub thickness: u32,

    pub head_radius: i32,
}

impl Default for GallowsStyle {
    fn default() -> Self {
        GallowsStyle {
            origin_x: 40,
            base_y: 320,
            frame_color: Color::RGB(150, 110, 70), // Wood
            figure_color: Color::RGB(230, 230, 230),
            thickness: 3,
            head_radius: 16,
        }
    }
}

/// Stateless gallows renderer, create once and render every frame
pub struct Gallows {
    style: GallowsStyle,
}

impl Gallows {
    pub fn new() -> Self {
        Gallows {
            style: GallowsStyle::default(),
        }
    }

    /// X coordinate the rope and figure hang from
    fn rope_x(&self) -> i32 {
        self.style.origin_x + 150
    }

    fn beam_y(&self) -> i32 {
        self.style.base_y - 260
    }

    fn head_center(&self) -> Point {
        Point::new(self.rope_x(), self.beam_y() + 30 + self.style.head_radius)
    }

    /// Line segments making up one body part
    pub fn part_segments(&self, part: BodyPart) -> Vec<(Point, Point)> {
        let x = self.rope_x();
        let neck_y = self.head_center().y() + self.style.head_radius;
        let shoulder_y = neck_y + 15;
        let hip_y = neck_y + 70;

        match part {
            // Head is a circle, see draw_circle
            BodyPart::Head => Vec::new(),
            BodyPart::Body => vec![(Point::new(x, neck_y), Point::new(x, hip_y))],
            BodyPart::LeftArm => vec![(Point::new(x, shoulder_y), Point::new(x - 30, shoulder_y + 35))],
            BodyPart::RightArm => vec![(Point::new(x, shoulder_y), Point::new(x + 30, shoulder_y + 35))],
            BodyPart::LeftLeg => vec![(Point::new(x, hip_y), Point::new(x - 25, hip_y + 50))],
            BodyPart::RightLeg => vec![(Point::new(x, hip_y), Point::new(x + 25, hip_y + 50))],
        }
    }

    /// Render the frame and every body part revealed so far
    pub fn render(&self, canvas: &mut Canvas<Window>, attempts_remaining: u8) -> Result<(), String> {
        self.render_frame(canvas)?;

        canvas.set_draw_color(self.style.figure_color);
        for &part in BodyPart::revealed(attempts_remaining) {
            if part == BodyPart::Head {
                self.draw_circle(canvas, self.head_center(), self.style.head_radius)?;
                continue;
            }
            for (start, end) in self.part_segments(part) {
                self.draw_thick_line(canvas, start, end)?;
            }
        }

        Ok(())
    }

    fn render_frame(&self, canvas: &mut Canvas<Window>) -> Result<(), String> {
        let t = self.style.thickness;
        let left = self.style.origin_x;
        let base_y = self.style.base_y;
        let pole_x = left + 40;
        let beam_y = self.beam_y();
        let rope_x = self.rope_x();

        canvas.set_draw_color(self.style.frame_color);

        // Base, pole and beam as filled bars
        canvas.fill_rect(Rect::new(left, base_y, 160, t * 2))?;
        canvas.fill_rect(Rect::new(pole_x, beam_y, t * 2, (base_y - beam_y) as u32))?;
        canvas.fill_rect(Rect::new(pole_x, beam_y, (rope_x - pole_x) as u32 + t, t * 2))?;

        // Diagonal brace
        self.draw_thick_line(canvas, Point::new(pole_x, beam_y + 40), Point::new(pole_x + 40, beam_y))?;

        // Rope
        canvas.fill_rect(Rect::new(rope_x - 1, beam_y, 2, 30))?;

        Ok(())
    }

    fn draw_thick_line(&self, canvas: &mut Canvas<Window>, start: Point, end: Point) -> Result<(), String> {
        let half = self.style.thickness as i32 / 2;
        for offset in -half..=half {
            canvas.draw_line(start.offset(offset, 0), end.offset(offset, 0))?;
            canvas.draw_line(start.offset(0, offset), end.offset(0, offset))?;
        }
        Ok(())
    }

    /// Midpoint circle outline, drawn a few pixels thick
    fn draw_circle(&self, canvas: &mut Canvas<Window>, center: Point, radius: i32) -> Result<(), String> {
        let half = self.style.thickness as i32 / 2;
        for r in (radius - half)..=(radius + half) {
            canvas.draw_points(circle_points(center, r).as_slice())?;
        }
        Ok(())
    }
}

impl Default for Gallows {
    fn default() -> Self {
        Self::new()
    }
}

/// Outline points of a circle (midpoint algorithm, all eight octants)
fn circle_points(center: Point, radius: i32) -> Vec<Point> {
    let mut points = Vec::new();
    let mut x = radius;
    let mut y = 0;
    let mut err = 1 - radius;

    while x >= y {
        for (dx, dy) in [
            (x, y), (y, x), (-y, x), (-x, y),
            (-x, -y), (-y, -x), (y, -x), (x, -y),
        ] {
            points.push(center.offset(dx, dy));
        }

        y += 1;
        if err < 0 {
            err += 2 * y + 1;
        } else {
            x -= 1;
            err += 2 * (y - x) + 1;
        }
    }

    points
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_parts_at_full_attempts() {
        assert!(BodyPart::revealed(6).is_empty());
    }

    #[test]
    fn test_one_part_per_miss() {
        for attempts in 0..=6u8 {
            assert_eq!(BodyPart::revealed(attempts).len(), (6 - attempts) as usize);
        }
    }

    #[test]
    fn test_reveal_order() {
        assert_eq!(BodyPart::revealed(5), &[BodyPart::Head]);
        assert_eq!(BodyPart::revealed(4), &[BodyPart::Head, BodyPart::Body]);
        assert_eq!(BodyPart::revealed(0), &BodyPart::ALL);
        assert_eq!(BodyPart::revealed(0).last(), Some(&BodyPart::RightLeg));
    }

    #[test]
    fn test_stages_are_cumulative() {
        for attempts in 1..=6u8 {
            let fewer = BodyPart::revealed(attempts);
            let more = BodyPart::revealed(attempts - 1);
            assert!(more.starts_with(fewer));
        }
    }

    #[test]
    fn test_circle_points_on_radius() {
        let center = Point::new(100, 100);
        let points = circle_points(center, 10);
        assert!(!points.is_empty());
        for p in points {
            let dx = (p.x() - center.x()) as f32;
            let dy = (p.y() - center.y()) as f32;
            let distance = (dx * dx + dy * dy).sqrt();
            assert!((distance - 10.0).abs() < 1.0, "point {:?} off circle", p);
        }
    }

    #[test]
    fn test_limbs_attach_to_body() {
        let gallows = Gallows::new();
        let body = gallows.part_segments(BodyPart::Body)[0];
        let left_arm = gallows.part_segments(BodyPart::LeftArm)[0];
        let right_leg = gallows.part_segments(BodyPart::RightLeg)[0];

        assert_eq!(left_arm.0.x(), body.0.x());
        assert!(left_arm.0.y() > body.0.y() && left_arm.0.y() < body.1.y());
        assert_eq!(right_leg.0, body.1);
    }

    #[test]
    fn test_figure_stays_above_base() {
        let gallows = Gallows::new();
        let base_y = GallowsStyle::default().base_y;
        for part in BodyPart::ALL {
            for (start, end) in gallows.part_segments(part) {
                assert!(start.y() < base_y && end.y() < base_y);
            }
        }
    }
}
