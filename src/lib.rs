//! Rock Split - An Asteroids-style arcade game core
//!
//! Core modules:
//! - `registry`: Type-keyed store that all gameplay state flows through
//! - `ring_buffer`: Fixed-capacity circular buffer
//! - `sim`: Ship, bullets, rocks and the per-frame tick
//! - `renderer`: Drawing contract implemented by the presentation layer
//! - `settings`: Data-driven game tuning

pub mod registry;
pub mod renderer;
pub mod ring_buffer;
pub mod settings;
pub mod sim;

pub use registry::TypeRegistry;
pub use ring_buffer::FixedRingBuffer;
pub use settings::Settings;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// World dimensions
    pub const WIDTH: f32 = 1000.0;
    pub const HEIGHT: f32 = 1000.0;

    /// Ship defaults
    pub const ROTATION_SPEED: f32 = 4.0; // radians/s
    pub const ACCELERATION: f32 = 100.0;
    pub const SHIP_SCALE: f32 = 20.0;

    /// Bullet defaults
    pub const BULLET_SPEED: f32 = WIDTH / 2.0;
    pub const BULLET_LIFETIME: f32 = 2.0;
    pub const BULLET_RADIUS: f32 = 2.0;

    /// Rock defaults
    pub const ROCK_SIDES: usize = 36;
    pub const ROCK_SCALE: f32 = 10.0;
    pub const ROCK_SPAWN_SIZE: u8 = 8;
    pub const ROCK_MIN_SPLIT_SIZE: u8 = 2;
    pub const ROCK_LIFETIME: f32 = 6.0;
    /// Outline variants cached per side count
    pub const ROCK_SHAPE_VARIANTS: usize = 4;

    /// Ship exhaust trail samples
    pub const TRAIL_LENGTH: usize = 16;
}

/// Rotate `v` by `angle` radians (counter-clockwise in a y-up frame)
#[inline]
pub fn rotate(v: Vec2, angle: f32) -> Vec2 {
    Vec2::from_angle(angle).rotate(v)
}

/// Vector of the given length at `angle` radians from +x
#[inline]
pub fn from_polar(length: f32, angle: f32) -> Vec2 {
    Vec2::from_angle(angle) * length
}
