use std::ops::{Deref, DerefMut};

use crate::{ContainerId, Poolable, PrefabId, ResetOutcome};

/// Makes any value poolable by tracking activation and identity next to it.
///
/// Resetting deactivates the wrapper and restarting activates it again. The wrapped value
/// itself is left untouched, so types that need their fields restored on reuse should
/// implement [`Poolable`] directly instead.
///
/// The wrapper dereferences to the wrapped value.
///
/// # Example
///
/// ```rust
/// use prefab_pool::{DefaultPoolable, Poolable};
///
/// let mut door = DefaultPoolable::new("door".to_string());
/// assert!(door.is_active());
/// assert!(door.prefab_id().is_none());
///
/// let _outcome = door.reset();
/// assert!(!door.is_active());
///
/// door.restart();
/// assert!(door.is_active());
/// assert_eq!(door.len(), 4);
/// ```
#[derive(Clone, Debug)]
pub struct DefaultPoolable<V> {
    value: V,
    prefab_id: Option<PrefabId>,
    active: bool,
    container: Option<ContainerId>,
}

impl<V> DefaultPoolable<V> {
    /// Wraps a value. The wrapper starts out active and without an identity.
    #[must_use]
    pub fn new(value: V) -> Self {
        Self {
            value,
            prefab_id: None,
            active: true,
            container: None,
        }
    }

    /// Whether the wrapper is in the active state.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// The container the wrapper was last parked under while idle, if any.
    #[must_use]
    pub fn container(&self) -> Option<ContainerId> {
        self.container
    }

    /// Unwraps the value, discarding the pooling state.
    #[must_use]
    pub fn into_inner(self) -> V {
        self.value
    }
}

impl<V> Poolable for DefaultPoolable<V> {
    fn prefab_id(&self) -> Option<PrefabId> {
        self.prefab_id
    }

    fn set_prefab_id(&mut self, prefab_id: PrefabId) {
        self.prefab_id = Some(prefab_id);
    }

    fn reset(&mut self) -> ResetOutcome {
        self.active = false;
        ResetOutcome::Recycle
    }

    fn restart(&mut self) {
        self.active = true;
    }

    fn park(&mut self, container: ContainerId) {
        self.container = Some(container);
    }
}

impl<V> Deref for DefaultPoolable<V> {
    type Target = V;

    fn deref(&self) -> &Self::Target {
        &self.value
    }
}

impl<V> DerefMut for DefaultPoolable<V> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.value
    }
}
