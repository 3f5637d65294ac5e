use std::collections::VecDeque;
use std::fmt;

use crate::metrics::{ACQUIRE_CREATED, ACQUIRE_REUSED, DISCARDED, RECYCLED};
use crate::{ContainerId, Poolable, Prefab, PrefabId, ResetOutcome};

/// Queue of idle instances of one prefab, with construction of new instances when the queue
/// is empty.
///
/// Instances are reused in FIFO order: the instance that has been idle the longest is issued
/// first. Every queued instance carries the identity of the prefab and has been reset.
///
/// A [`PoolRegistry`][crate::PoolRegistry] creates one pool per prefab on demand. A pool can
/// also be used on its own when only one prefab is involved.
///
/// # Example
///
/// ```rust
/// use prefab_pool::{InstancePool, PoolRegistry};
///
/// let mut registry = PoolRegistry::new();
/// let coin = registry.register_default(100_u32);
///
/// let mut pool = InstancePool::new(coin);
/// assert!(pool.is_empty());
///
/// let first = pool.take_or_create();
/// let second = pool.take_or_create();
///
/// assert!(pool.recycle(first));
/// assert!(pool.recycle(second));
/// assert_eq!(pool.len(), 2);
/// ```
pub struct InstancePool<T> {
    prefab: Prefab<T>,

    /// Idle instances, oldest at the front.
    idle: VecDeque<T>,

    /// Where idle instances are parked, if the host groups them.
    container: Option<ContainerId>,
}

impl<T: Poolable> InstancePool<T> {
    /// Creates an empty pool for a prefab.
    #[must_use]
    pub fn new(prefab: Prefab<T>) -> Self {
        Self::with_container(prefab, None)
    }

    pub(crate) fn with_container(prefab: Prefab<T>, container: Option<ContainerId>) -> Self {
        Self {
            prefab,
            idle: VecDeque::new(),
            container,
        }
    }

    /// Issues the oldest idle instance, or constructs a new one from the prefab if no instance
    /// is idle.
    ///
    /// A reused instance is returned in the idle state. The caller is responsible for calling
    /// [`Poolable::restart()`] before using it. A newly constructed instance is stamped with the
    /// identity of the prefab and is otherwise left as the factory made it.
    #[must_use]
    pub fn take_or_create(&mut self) -> T {
        if let Some(instance) = self.idle.pop_front() {
            ACQUIRE_REUSED.with(|e| e.observe_once());
            return instance;
        }

        ACQUIRE_CREATED.with(|e| e.observe_once());
        self.prefab.instantiate()
    }

    /// Resets an instance and queues it for reuse.
    ///
    /// Returns `true` if the instance was queued, or `false` if [`Poolable::reset()`] reported
    /// that the instance cannot be reused, in which case it is dropped.
    ///
    /// The instance is taken by value, so the same instance cannot be recycled twice without
    /// being issued again in between:
    ///
    /// ```rust,compile_fail
    /// use prefab_pool::{InstancePool, PoolRegistry};
    ///
    /// let mut registry = PoolRegistry::new();
    /// let mut pool = InstancePool::new(registry.register_default(1_u8));
    ///
    /// let instance = pool.take_or_create();
    /// pool.recycle(instance);
    /// pool.recycle(instance); // Error: use of moved value.
    /// ```
    ///
    /// # Panics
    ///
    /// Panics if the instance does not carry the identity of this pool's prefab.
    pub fn recycle(&mut self, mut instance: T) -> bool {
        assert_eq!(
            instance.prefab_id(),
            Some(self.prefab.id()),
            "instance does not belong to the pool of prefab {}",
            self.prefab.id()
        );

        match instance.reset() {
            ResetOutcome::Discard => {
                DISCARDED.with(|e| e.observe_once());
                false
            }
            ResetOutcome::Recycle => {
                if let Some(container) = self.container {
                    instance.park(container);
                }

                self.idle.push_back(instance);
                RECYCLED.with(|e| e.observe_once());
                true
            }
        }
    }
}

impl<T> InstancePool<T> {
    /// The number of idle instances in the pool.
    #[must_use]
    pub fn len(&self) -> usize {
        self.idle.len()
    }

    /// Whether the pool has no idle instances.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.idle.is_empty()
    }

    /// The identity of the prefab this pool serves.
    #[must_use]
    pub fn prefab_id(&self) -> PrefabId {
        self.prefab.id()
    }

    /// The prefab this pool constructs new instances from.
    #[must_use]
    pub fn prefab(&self) -> &Prefab<T> {
        &self.prefab
    }

    /// The container idle instances are parked under, if the host groups them.
    #[must_use]
    pub fn container(&self) -> Option<ContainerId> {
        self.container
    }
}

impl<T> fmt::Debug for InstancePool<T> {
    #[cfg_attr(test, mutants::skip)] // No API contract.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InstancePool")
            .field("prefab", &self.prefab)
            .field("idle", &self.idle.len())
            .field("container", &self.container)
            .finish()
    }
}
