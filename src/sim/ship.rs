//! The player's ship

use glam::Vec2;

use super::bullet::Bullet;
use super::collision::circles_overlap;
use super::entity::Entity;
use super::rock::Rock;
use super::state::{GameState, ShipInput};
use crate::consts::*;
use crate::renderer::{Canvas, Color};
use crate::{FixedRingBuffer, Settings, TypeRegistry, rotate};

/// A triangular ship steered by rotating its local frame
#[derive(Debug, Clone)]
pub struct Ship {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Nose direction (unit length)
    forward: Vec2,
    /// Rear corners relative to `pos`, in hull units
    left: Vec2,
    right: Vec2,
    /// Thrusting this frame (drives the flame)
    thrust: bool,
    /// Hull size, also the collision radius
    pub scale: f32,
    /// Recent exhaust positions, `None` for frames without thrust
    trail: FixedRingBuffer<Option<Vec2>, TRAIL_LENGTH>,
}

impl Ship {
    pub fn new(pos: Vec2, scale: f32) -> Self {
        Self {
            pos,
            vel: Vec2::ZERO,
            forward: Vec2::new(0.0, -1.0),
            left: Vec2::new(0.5, 0.5),
            right: Vec2::new(-0.5, 0.5),
            thrust: false,
            scale,
            trail: FixedRingBuffer::new(),
        }
    }

    pub fn forward(&self) -> Vec2 {
        self.forward
    }

    pub fn is_thrusting(&self) -> bool {
        self.thrust
    }

    /// Tip of the nose, where bullets leave the hull
    pub fn muzzle(&self) -> Vec2 {
        self.pos + self.forward * self.scale
    }

    #[inline]
    pub fn hits(&self, rock: &Rock) -> bool {
        circles_overlap(self.pos, self.scale, rock.pos, rock.radius())
    }

    fn turn(&mut self, angle: f32) {
        self.forward = rotate(self.forward, angle);
        self.left = rotate(self.left, angle);
        self.right = rotate(self.right, angle);
    }

    /// Exhaust positions oldest to newest, split where thrust was released
    pub fn exhaust_trail(&self) -> Vec<Vec<Vec2>> {
        let len = self.trail.len();
        let cursor = self.trail.cursor();
        let mut runs = Vec::new();
        let mut run = Vec::new();
        for i in 0..len {
            match self.trail[(cursor + i) % len] {
                Some(p) => run.push(p),
                None if run.len() >= 2 => runs.push(std::mem::take(&mut run)),
                None => run.clear(),
            }
        }
        if run.len() >= 2 {
            runs.push(run);
        }
        runs
    }
}

impl Entity for Ship {
    /// Steer from the frame's [`ShipInput`], fire, then test for rock hits.
    /// A hit ends the run and returns false.
    fn update(&mut self, dt: f32, registry: &mut TypeRegistry) -> bool {
        let input = *registry.get_ref::<ShipInput>();
        let settings = registry.get_ref::<Settings>();
        let (rotation_speed, acceleration) = (settings.rotation_speed, settings.acceleration);
        let (bullet_speed, bullet_lifetime) = (settings.bullet_speed, settings.bullet_lifetime);

        self.thrust = false;
        let turn = if input.rotate_right {
            rotation_speed * dt
        } else if input.rotate_left {
            -rotation_speed * dt
        } else {
            0.0
        };
        if turn != 0.0 {
            self.turn(turn);
        }

        if input.thrust {
            self.vel += self.forward * acceleration * dt;
            self.thrust = true;
        }
        self.pos += self.vel * dt;
        let exhaust = self.thrust.then(|| self.pos - self.forward * self.scale);
        self.trail.add(exhaust);

        if input.fire {
            let mut bullet = Bullet::new(self.muzzle(), self.vel + self.forward * bullet_speed);
            bullet.lifetime = bullet_lifetime;
            registry.get::<Vec<Bullet>>().push(bullet);
        }

        if registry.get_ref::<Vec<Rock>>().iter().any(|rock| self.hits(rock)) {
            let state = registry.get::<GameState>();
            state.end_run();
            log::info!(
                "Ship destroyed after {:.1}s with score {} (best {})",
                state.elapsed,
                state.score,
                state.best_score
            );
            return false;
        }
        true
    }

    fn draw(&self, canvas: &mut dyn Canvas) {
        let nose = self.pos + self.forward * self.scale;
        let right = self.pos + self.right * self.scale;
        let left = self.pos + self.left * self.scale;
        canvas.triangle(nose, right, self.pos, Color::White);
        canvas.triangle(left, nose, self.pos, Color::White);

        if self.thrust {
            let flame = self.pos - self.forward * (self.scale * 1.5);
            let core = self.pos - self.forward * (self.scale * 0.7);
            canvas.triangle(right, flame, left, Color::Yellow);
            canvas.triangle(self.pos, right, left, Color::SkyBlue);
            canvas.triangle(right, core, left, Color::SkyBlue);
        }

        for run in self.exhaust_trail() {
            canvas.line_strip(&run, false, Color::SkyBlue);
        }
    }
}
