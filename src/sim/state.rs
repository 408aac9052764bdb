//! Shared run state
//!
//! Small value types that live in the [`TypeRegistry`](crate::TypeRegistry)
//! next to the entities: score bookkeeping, the spawn timer, the camera and
//! the per-frame input snapshot.

use glam::Vec2;

/// Score and liveness of the current run
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    /// False once the ship has been hit, until restart
    pub is_running: bool,
    /// Rocks hit this run
    pub score: u32,
    /// Best score across runs in this session
    pub best_score: u32,
    /// Seconds survived this run
    pub elapsed: f32,
}

impl Default for GameState {
    fn default() -> Self {
        Self {
            is_running: true,
            score: 0,
            best_score: 0,
            elapsed: 0.0,
        }
    }
}

impl GameState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark the run as lost and fold its score into the best score
    pub fn end_run(&mut self) {
        self.is_running = false;
        self.best_score = self.best_score.max(self.score);
    }

    /// Start a fresh run, keeping the best score
    pub fn restart(&mut self) {
        self.is_running = true;
        self.score = 0;
        self.elapsed = 0.0;
    }
}

/// Timer that spawns rocks at a shrinking interval
#[derive(Debug, Clone, PartialEq)]
pub struct Spawner {
    /// Seconds since the last spawn
    pub since_last: f32,
    /// Seconds between spawns
    pub interval: f32,
}

impl Spawner {
    pub fn new(interval: f32) -> Self {
        Self {
            since_last: 0.0,
            interval,
        }
    }

    /// Advance by `dt`. Returns true when a rock is due; the interval then
    /// shrinks by `step`, never below `min_interval`.
    pub fn advance(&mut self, dt: f32, step: f32, min_interval: f32) -> bool {
        self.since_last += dt;
        if self.since_last < self.interval {
            return false;
        }
        self.since_last = 0.0;
        self.interval = (self.interval - step).max(min_interval);
        true
    }
}

/// World-space point the view is centred on
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Camera {
    pub target: Vec2,
}

/// Input commands for a single frame
///
/// Written by the input layer before each tick. `fire` and `restart` are
/// edge-triggered: the input layer sets them on key release only.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ShipInput {
    pub rotate_left: bool,
    pub rotate_right: bool,
    pub thrust: bool,
    pub fire: bool,
    pub restart: bool,
}
