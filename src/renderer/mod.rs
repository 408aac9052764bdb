//! Drawing contract
//!
//! The window, shaders and GPU calls live in the presentation layer. Entities
//! only describe themselves as primitives on a [`Canvas`], in world space; the
//! implementation applies the camera.

pub mod shapes;

use glam::Vec2;

/// Palette used by the game's vector art
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Yellow,
    Pink,
    SkyBlue,
    Red,
}

impl Color {
    /// RGBA in 0-1 range
    pub fn rgba(&self) -> [f32; 4] {
        match self {
            Color::White => [1.0, 1.0, 1.0, 1.0],
            Color::Yellow => [0.99, 0.98, 0.0, 1.0],
            Color::Pink => [1.0, 0.43, 0.76, 1.0],
            Color::SkyBlue => [0.4, 0.75, 1.0, 1.0],
            Color::Red => [0.9, 0.16, 0.22, 1.0],
        }
    }
}

/// Sink for world-space primitives
pub trait Canvas {
    /// Connected line segments; `closed` joins the last point to the first
    fn line_strip(&mut self, points: &[Vec2], closed: bool, color: Color);
    fn triangle(&mut self, a: Vec2, b: Vec2, c: Vec2, color: Color);
    fn circle(&mut self, center: Vec2, radius: f32, color: Color);
}

/// Canvas that only counts what it is asked to draw
///
/// Used headless and in tests.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DrawStats {
    pub line_strips: usize,
    pub line_points: usize,
    pub triangles: usize,
    pub circles: usize,
}

impl DrawStats {
    pub fn total(&self) -> usize {
        self.line_strips + self.triangles + self.circles
    }
}

impl Canvas for DrawStats {
    fn line_strip(&mut self, points: &[Vec2], _closed: bool, _color: Color) {
        self.line_strips += 1;
        self.line_points += points.len();
    }

    fn triangle(&mut self, _a: Vec2, _b: Vec2, _c: Vec2, _color: Color) {
        self.triangles += 1;
    }

    fn circle(&mut self, _center: Vec2, _radius: f32, _color: Color) {
        self.circles += 1;
    }
}
