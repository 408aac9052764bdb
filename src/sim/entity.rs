//! The contract the frame loop and renderer use on game objects

use crate::TypeRegistry;
use crate::renderer::Canvas;

/// A game object with a per-frame update and a draw pass
pub trait Entity {
    /// Advance by `dt` seconds. Returns false once the entity should be
    /// discarded.
    fn update(&mut self, dt: f32, registry: &mut TypeRegistry) -> bool;

    fn draw(&self, canvas: &mut dyn Canvas);
}
