//! Rocks and their shared outlines

use std::collections::HashMap;
use std::sync::Arc;

use glam::Vec2;
use rand::Rng;

use super::collision::split_velocities;
use super::entity::Entity;
use crate::TypeRegistry;
use crate::consts::*;
use crate::renderer::shapes::{jagged_polygon, transform_outline};
use crate::renderer::{Canvas, Color};

/// A drifting, spinning polygonal rock
#[derive(Debug, Clone)]
pub struct Rock {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Spin in degrees/s
    pub angular_speed: f32,
    /// Current rotation (radians)
    pub angle: f32,
    /// Size class; halves on each split
    pub size: u8,
    /// World units per size step
    pub scale: f32,
    pub alive_time: f32,
    /// Seconds before the rock despawns
    pub lifetime: f32,
    /// Unit outline, shared with every rock using the same template
    shape: Arc<[Vec2]>,
}

impl Rock {
    pub fn new(pos: Vec2, vel: Vec2, angular_speed: f32, size: u8, shape: Arc<[Vec2]>) -> Self {
        Self {
            pos,
            vel,
            angular_speed,
            angle: 0.0,
            size,
            scale: ROCK_SCALE,
            alive_time: 0.0,
            lifetime: ROCK_LIFETIME,
            shape,
        }
    }

    /// Collision radius
    #[inline]
    pub fn radius(&self) -> f32 {
        self.size as f32 * self.scale
    }

    pub fn shape(&self) -> &Arc<[Vec2]> {
        &self.shape
    }

    /// The two halves a hit produces. Both share this rock's outline, start
    /// with a fresh lifetime and drift apart.
    pub fn split(&self) -> [Rock; 2] {
        split_velocities(self.vel).map(|vel| Rock {
            vel,
            size: self.size >> 1,
            alive_time: 0.0,
            ..self.clone()
        })
    }

    /// Outline in world space
    pub fn outline(&self) -> Vec<Vec2> {
        transform_outline(&self.shape, self.pos, self.angle, self.radius())
    }
}

impl Entity for Rock {
    fn update(&mut self, dt: f32, _registry: &mut TypeRegistry) -> bool {
        if self.alive_time > self.lifetime {
            return false;
        }
        self.angle += self.angular_speed.to_radians() * dt;
        self.pos += self.vel * dt;
        self.alive_time += dt;
        true
    }

    fn draw(&self, canvas: &mut dyn Canvas) {
        canvas.line_strip(&self.outline(), true, Color::Pink);
    }
}

/// Outline templates, built once per side count and shared by handle
#[derive(Debug, Default)]
pub struct RockShapes {
    templates: HashMap<usize, Vec<Arc<[Vec2]>>>,
}

impl RockShapes {
    pub fn new() -> Self {
        Self::default()
    }

    /// A template with `sides` vertices. The first request for a side count
    /// builds its variants; later requests pick one of them.
    pub fn pick(&mut self, sides: usize, rng: &mut impl Rng) -> Arc<[Vec2]> {
        let variants = self.templates.entry(sides).or_insert_with(|| {
            log::debug!("Building {} rock outlines with {} sides", ROCK_SHAPE_VARIANTS, sides);
            (0..ROCK_SHAPE_VARIANTS)
                .map(|_| {
                    let outline =
                        jagged_polygon(sides, |_| rng.random_range(85..=99) as f32 / 100.0);
                    Arc::from(outline)
                })
                .collect()
        });
        let index = rng.random_range(0..variants.len());
        Arc::clone(&variants[index])
    }

    /// Number of side counts with built templates
    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}
