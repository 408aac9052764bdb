//! Gameplay simulation
//!
//! Entities and run state live in a [`TypeRegistry`](crate::TypeRegistry);
//! the frame loop writes a [`ShipInput`], calls [`tick`] and then [`draw`].
//! - Seeded RNG only, so equal seeds and inputs replay identically
//! - No window, GPU or input-device dependencies

pub mod bullet;
pub mod collision;
pub mod entity;
pub mod rock;
pub mod ship;
pub mod state;
pub mod tick;

pub use bullet::Bullet;
pub use collision::{circles_overlap, point_in_circle, split_velocities};
pub use entity::Entity;
pub use rock::{Rock, RockShapes};
pub use ship::Ship;
pub use state::{Camera, GameState, ShipInput, Spawner};
pub use tick::{draw, make_rock, reset_run, setup, spawn_random_rock, tick, update_all};
