use std::fmt;
use std::num::NonZero;

/// Identifies a prefab and every instance constructed from it.
///
/// A [`PoolRegistry`][crate::PoolRegistry] assigns identities sequentially, starting from 1,
/// when a prefab is registered. The identity is stamped on the prototype and on every instance
/// created from it, so a released instance can be routed back to its pool even though it is a
/// different object from the prototype.
///
/// An identity also remembers the registry that assigned it. Two registries both number their
/// prefabs from 1, but their identities never compare equal, so an instance released to a
/// registry that did not issue it is rejected instead of joining an unrelated pool.
///
/// # Example
///
/// ```rust
/// use prefab_pool::PoolRegistry;
///
/// let mut registry = PoolRegistry::new();
///
/// let first = registry.register_default(1_u32);
/// let second = registry.register_default(1_u32);
///
/// assert_eq!(first.id().get(), 1);
/// assert_eq!(second.id().get(), 2);
///
/// let mut other = PoolRegistry::new();
/// let elsewhere = other.register_default(1_u32);
///
/// assert_eq!(elsewhere.id().get(), 1);
/// assert_ne!(elsewhere.id(), first.id());
/// ```
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct PrefabId {
    registry_id: u64,
    value: NonZero<u64>,
}

impl PrefabId {
    /// The identity assigned to the first prefab registered in a registry.
    pub(crate) const fn first(registry_id: u64) -> Self {
        Self::new(registry_id, NonZero::<u64>::MIN)
    }

    pub(crate) const fn new(registry_id: u64, value: NonZero<u64>) -> Self {
        Self { registry_id, value }
    }

    /// Returns the sequence number of the identity within the registry that assigned it.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.value.get()
    }

    /// The registry that assigned this identity.
    pub(crate) const fn registry_id(self) -> u64 {
        self.registry_id
    }

    /// Returns the identity that follows this one in the same registry.
    ///
    /// # Panics
    ///
    /// Panics if the identity space is exhausted.
    #[must_use]
    pub(crate) fn next(self) -> Self {
        Self::new(
            self.registry_id,
            self.value
                .checked_add(1)
                .expect("prefab identity space exhausted - cannot register more than u64::MAX prefabs"),
        )
    }
}

impl fmt::Display for PrefabId {
    #[cfg_attr(test, mutants::skip)] // Cosmetic.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.value)
    }
}
