//! Shape generation for 2D primitives

use glam::Vec2;
use std::f32::consts::TAU;

use crate::rotate;

/// Regular-ish polygon around the origin.
///
/// Vertex `i` is the unit vector `(0, 1)` rotated by `TAU * i / sides`,
/// scaled by `radius_at(i)`.
pub fn jagged_polygon(sides: usize, mut radius_at: impl FnMut(usize) -> f32) -> Vec<Vec2> {
    (0..sides)
        .map(|i| rotate(Vec2::Y, TAU * i as f32 / sides as f32) * radius_at(i))
        .collect()
}

/// Place a unit outline in the world: scale, rotate, then translate
pub fn transform_outline(outline: &[Vec2], pos: Vec2, angle: f32, scale: f32) -> Vec<Vec2> {
    let rotation = Vec2::from_angle(angle);
    outline
        .iter()
        .map(|&p| pos + rotation.rotate(p * scale))
        .collect()
}
