//! Game tuning settings
//!
//! Loaded once at startup from an optional JSON file and registered in the
//! [`TypeRegistry`](crate::TypeRegistry). Missing fields take their defaults.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Gameplay tunables
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === World ===
    /// View width in world units
    pub width: f32,
    /// View height in world units
    pub height: f32,

    // === Ship ===
    /// Turn rate (radians/s)
    pub rotation_speed: f32,
    /// Thrust acceleration (units/s²)
    pub acceleration: f32,
    /// Hull size, also the ship's collision radius
    pub ship_scale: f32,

    // === Bullets ===
    /// Muzzle speed added to ship velocity
    pub bullet_speed: f32,
    /// Seconds before a bullet expires
    pub bullet_lifetime: f32,

    // === Rocks ===
    /// Polygon side count for rock outlines
    pub rock_sides: usize,
    /// World units per size step
    pub rock_scale: f32,
    /// Size of freshly spawned rocks
    pub rock_spawn_size: u8,
    /// Rocks at or below this size shatter without splitting
    pub rock_min_split_size: u8,
    /// Seconds before a rock expires
    pub rock_lifetime: f32,
    /// Approach speed range for spawned rocks
    pub rock_min_speed: f32,
    pub rock_max_speed: f32,
    /// Spin range for spawned rocks (degrees/s, symmetric)
    pub rock_max_spin: i32,

    // === Spawning ===
    /// Seconds between spawns at the start of a run
    pub spawn_interval: f32,
    /// Interval reduction after each spawn
    pub spawn_interval_step: f32,
    /// Interval never drops below this
    pub min_spawn_interval: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,

            rotation_speed: ROTATION_SPEED,
            acceleration: ACCELERATION,
            ship_scale: SHIP_SCALE,

            bullet_speed: BULLET_SPEED,
            bullet_lifetime: BULLET_LIFETIME,

            rock_sides: ROCK_SIDES,
            rock_scale: ROCK_SCALE,
            rock_spawn_size: ROCK_SPAWN_SIZE,
            rock_min_split_size: ROCK_MIN_SPLIT_SIZE,
            rock_lifetime: ROCK_LIFETIME,
            rock_min_speed: 150.0,
            rock_max_speed: 300.0,
            rock_max_spin: 180,

            spawn_interval: 5.0,
            spawn_interval_step: 0.1,
            min_spawn_interval: 1.0,
        }
    }
}

impl Settings {
    /// Parse settings from JSON (missing fields use defaults)
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> String {
        // Plain numeric struct, serialization cannot fail
        serde_json::to_string_pretty(self).unwrap_or_default()
    }

    /// World centre, where the ship spawns
    pub fn center(&self) -> glam::Vec2 {
        glam::Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    /// Reject values the simulation cannot run with
    pub fn validate(&self) -> Result<(), String> {
        if !(self.width > 0.0 && self.height > 0.0) {
            return Err(format!("world size {}x{} must be positive", self.width, self.height));
        }
        if self.rock_sides == 0 {
            return Err("rock_sides must be at least 1".to_string());
        }
        if !(self.rock_min_speed <= self.rock_max_speed) {
            return Err(format!(
                "rock speed range {}..={} is empty",
                self.rock_min_speed, self.rock_max_speed
            ));
        }
        if self.rock_max_spin < 0 {
            return Err(format!("rock_max_spin {} is negative", self.rock_max_spin));
        }
        Ok(())
    }

    /// These settings if they validate, otherwise the defaults
    pub fn validated(self) -> Self {
        match self.validate() {
            Ok(()) => self,
            Err(e) => {
                log::warn!("Ignoring invalid settings: {}", e);
                Self::default()
            }
        }
    }

    /// Load settings from a JSON file, falling back to defaults
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match std::fs::read_to_string(path) {
            Ok(json) => match Self::from_json(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from {}", path.display());
                    settings.validated()
                }
                Err(e) => {
                    log::warn!("Ignoring malformed settings in {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                log::info!("Using default settings ({}: {})", path.display(), e);
                Self::default()
            }
        }
    }
}
