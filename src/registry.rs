//! Type-keyed state registry
//!
//! Holds exactly one value per type. Gameplay routines share the ship, the
//! entity lists and the run state through it instead of threading every piece
//! through their signatures.

use std::any::{Any, TypeId, type_name};
use std::collections::HashMap;

/// A heterogeneous store with one slot per type
#[derive(Default)]
pub struct TypeRegistry {
    slots: HashMap<TypeId, Box<dyn Any>>,
}

impl TypeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `value`, dropping any previous value of the same type
    pub fn register_or_replace<T: Any>(&mut self, value: T) {
        if self.slots.insert(TypeId::of::<T>(), Box::new(value)).is_some() {
            log::debug!("Replaced registry entry {}", type_name::<T>());
        } else {
            log::debug!("Registered {}", type_name::<T>());
        }
    }

    /// Mutable access to the stored `T`.
    ///
    /// # Panics
    ///
    /// Panics if no `T` has been registered. All state is registered at setup,
    /// so a miss here is a wiring bug.
    pub fn get<T: Any>(&mut self) -> &mut T {
        self.try_get::<T>().unwrap_or_else(|| missing::<T>())
    }

    /// Shared access to the stored `T`. Panics like [`TypeRegistry::get`].
    pub fn get_ref<T: Any>(&self) -> &T {
        log::trace!("Registry lookup {}", type_name::<T>());
        self.slots
            .get(&TypeId::of::<T>())
            .and_then(|slot| slot.downcast_ref())
            .unwrap_or_else(|| missing::<T>())
    }

    pub fn try_get<T: Any>(&mut self) -> Option<&mut T> {
        log::trace!("Registry lookup {}", type_name::<T>());
        self.slots.get_mut(&TypeId::of::<T>())?.downcast_mut()
    }

    pub fn contains<T: Any>(&self) -> bool {
        self.slots.contains_key(&TypeId::of::<T>())
    }

    /// Take the stored `T` out of the registry
    pub fn remove<T: Any>(&mut self) -> Option<T> {
        let slot = self.slots.remove(&TypeId::of::<T>())?;
        slot.downcast::<T>().ok().map(|boxed| *boxed)
    }

    /// Run `f` with the `T` entry lifted out of the registry.
    ///
    /// Lets code that operates on one entry reach every other entry through
    /// the same registry. The detached value is put back afterwards and
    /// replaces anything `f` registered for `T` in the meantime.
    ///
    /// # Panics
    ///
    /// Panics if no `T` has been registered.
    pub fn with_detached<T: Any, R>(&mut self, f: impl FnOnce(&mut T, &mut Self) -> R) -> R {
        let key = TypeId::of::<T>();
        let mut slot = self.slots.remove(&key).unwrap_or_else(|| missing::<T>());
        let result = match slot.downcast_mut::<T>() {
            Some(value) => f(value, self),
            None => missing::<T>(),
        };
        if self.slots.insert(key, slot).is_some() {
            log::debug!("Dropped {} registered while detached", type_name::<T>());
        }
        result
    }

    /// Number of occupied slots
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

impl std::fmt::Debug for TypeRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TypeRegistry")
            .field("slots", &self.slots.len())
            .finish()
    }
}

#[cold]
fn missing<T>() -> ! {
    panic!("{} was not registered", type_name::<T>())
}
