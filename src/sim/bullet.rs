//! Projectiles fired by the ship

use glam::Vec2;

use super::collision::point_in_circle;
use super::entity::Entity;
use super::rock::Rock;
use super::state::GameState;
use crate::consts::*;
use crate::renderer::{Canvas, Color};
use crate::{Settings, TypeRegistry};

/// A projectile travelling in a straight line
#[derive(Debug, Clone, PartialEq)]
pub struct Bullet {
    pub pos: Vec2,
    pub vel: Vec2,
    pub alive_time: f32,
    /// Seconds before the bullet expires
    pub lifetime: f32,
}

impl Bullet {
    pub fn new(pos: Vec2, vel: Vec2) -> Self {
        Self {
            pos,
            vel,
            alive_time: 0.0,
            lifetime: BULLET_LIFETIME,
        }
    }

    #[inline]
    pub fn hits(&self, rock: &Rock) -> bool {
        point_in_circle(self.pos, rock.pos, rock.radius())
    }
}

impl Entity for Bullet {
    /// Consumes the bullet on the first rock it touches. The rock is
    /// swap-removed, replaced by its two halves unless it is already at the
    /// smallest size, and the hit is scored.
    fn update(&mut self, dt: f32, registry: &mut TypeRegistry) -> bool {
        if self.alive_time > self.lifetime {
            return false;
        }

        let min_split_size = registry.get_ref::<Settings>().rock_min_split_size;
        let rocks = registry.get::<Vec<Rock>>();
        if let Some(index) = rocks.iter().position(|rock| self.hits(rock)) {
            let rock = rocks.swap_remove(index);
            if rock.size > min_split_size {
                rocks.extend(rock.split());
            }
            let state = registry.get::<GameState>();
            state.score += 1;
            log::debug!("Rock (size {}) hit, score {}", rock.size, state.score);
            return false;
        }

        self.pos += self.vel * dt;
        self.alive_time += dt;
        true
    }

    fn draw(&self, canvas: &mut dyn Canvas) {
        canvas.circle(self.pos, BULLET_RADIUS, Color::Yellow);
    }
}
