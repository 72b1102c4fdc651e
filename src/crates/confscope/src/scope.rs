//! Thread-local configuration overrides.
//!
//! Each thread owns a stack of override layers per configurable class. While
//! a class has at least one layer, that thread resolves reads and writes
//! against the topmost one instead of the class's base store. Other threads
//! are unaffected.
//!
//! Layers are only ever pushed through a [`ConfigScope`] guard, and each
//! guard removes exactly its own layer when dropped. Nested scopes therefore
//! unwind in stack order, a panic inside a scope still restores the outer
//! state during unwinding, and dropping an outer guard early only discards
//! the outer layer.

use std::cell::RefCell;
use std::collections::HashMap;
use std::marker::PhantomData;
use std::sync::atomic::{AtomicU64, Ordering};

use tracing::{trace, warn};

use crate::class::{ClassId, ConfigClass};
use crate::store::ConfigStore;

static NEXT_LAYER_ID: AtomicU64 = AtomicU64::new(1);

/// One override pushed by a [`ConfigScope`].
struct Layer {
    id: u64,
    store: ConfigStore,
}

// Thread-local override layers, keyed by class identity. Empty stacks are removed.
thread_local! {
    static OVERRIDES: RefCell<HashMap<ClassId, Vec<Layer>>> = RefCell::new(HashMap::new());
}

/// Run `f` against the current thread's topmost override for `id`.
///
/// Hands `f` back unchanged when no override is active.
pub(crate) fn with_override<R, F>(id: ClassId, f: F) -> Result<R, F>
where
    F: FnOnce(&mut ConfigStore) -> R,
{
    OVERRIDES.with(|slots| {
        match slots
            .borrow_mut()
            .get_mut(&id)
            .and_then(|layers| layers.last_mut())
        {
            Some(layer) => Ok(f(&mut layer.store)),
            None => Err(f),
        }
    })
}

/// Returns true if the current thread has an override for `id`.
pub(crate) fn has_override(id: ClassId) -> bool {
    OVERRIDES.with(|slots| {
        slots
            .borrow()
            .get(&id)
            .map_or(false, |layers| !layers.is_empty())
    })
}

#[cfg(test)]
fn depth(id: ClassId) -> usize {
    OVERRIDES.with(|slots| slots.borrow().get(&id).map_or(0, Vec::len))
}

/// RAII guard for a thread-local configuration override.
///
/// Created by [`ConfigClass::scope`]. While the guard is alive, the current
/// thread sees its own copy of the class's configuration. Dropping it
/// removes that copy again.
///
/// # Example
///
/// ```rust
/// use confscope::ConfigClass;
///
/// let mailer = ConfigClass::new("Mailer");
/// mailer.configure([("host", "smtp.example.com")]).unwrap();
///
/// {
///     let _scope = mailer.scope([("host", "localhost")]).unwrap();
///     assert_eq!(mailer.get("host").unwrap(), Some("localhost".into()));
/// }
///
/// assert_eq!(mailer.get("host").unwrap(), Some("smtp.example.com".into()));
/// ```
///
/// The guard is bound to the thread that created it. Guards for the same
/// class may be dropped in any order: each one removes only its own layer,
/// and the most recently created live guard stays in effect. A guard passed
/// to [`std::mem::forget`] keeps its layer for the rest of the thread.
#[must_use = "the override is removed as soon as the scope is dropped"]
pub struct ConfigScope<'a> {
    class: &'a ConfigClass,
    layer: u64,
    nested: bool,
    _thread_bound: PhantomData<*const ()>,
}

impl<'a> ConfigScope<'a> {
    /// Push `store` as the current thread's topmost override for `class`.
    pub(crate) fn install(class: &'a ConfigClass, store: ConfigStore) -> Self {
        let layer = NEXT_LAYER_ID.fetch_add(1, Ordering::Relaxed);
        let nested = OVERRIDES.with(|slots| {
            let mut slots = slots.borrow_mut();
            let layers = slots.entry(class.id()).or_default();
            layers.push(Layer { id: layer, store });
            layers.len() > 1
        });
        trace!(
            "Entering config scope for {} (nested: {})",
            class.name(),
            nested
        );

        Self {
            class,
            layer,
            nested,
            _thread_bound: PhantomData,
        }
    }

    /// The class this scope overrides.
    pub fn class(&self) -> &'a ConfigClass {
        self.class
    }
}

impl Drop for ConfigScope<'_> {
    fn drop(&mut self) {
        let id = self.class.id();
        let layer = self.layer;

        // Err: the thread is tearing down and its layers are gone with it.
        let Ok(removed) = OVERRIDES.try_with(|slots| {
            let Ok(mut slots) = slots.try_borrow_mut() else {
                return false;
            };
            if let Some(layers) = slots.get_mut(&id) {
                let was_top = layers.last().map(|l| l.id) == Some(layer);
                layers.retain(|l| l.id != layer);
                if layers.is_empty() {
                    slots.remove(&id);
                }
                trace!(
                    "Leaving config scope for {} (out of order: {})",
                    self.class.name(),
                    !was_top
                );
            }
            true
        }) else {
            return;
        };

        if !removed {
            warn!(
                "Config scope for {} dropped while overrides were borrowed; layer left in place",
                self.class.name()
            );
        }
    }
}

impl std::fmt::Debug for ConfigScope<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConfigScope")
            .field("class", &self.class.name())
            .field("nested", &self.nested)
            .finish()
    }
}
