use crate::{PoolRegistry, Poolable};

/// Method call syntax for returning an instance to its pool.
///
/// Implemented for every [`Poolable`] type. The counterpart for acquiring is
/// [`Prefab::acquire_from()`][crate::Prefab::acquire_from].
///
/// # Example
///
/// ```rust
/// use prefab_pool::{PoolRegistry, ReleaseTo};
///
/// let mut registry = PoolRegistry::new();
/// let crate_prefab = registry.register_default([0_u8; 4]);
///
/// let instance = crate_prefab.acquire_from(&mut registry);
/// instance.release_to(&mut registry);
///
/// assert_eq!(registry.idle_count(crate_prefab.id()), 1);
/// ```
pub trait ReleaseTo: Poolable + Sized + 'static {
    /// Returns this instance to the pool of the prefab it was constructed from.
    ///
    /// Equivalent to [`PoolRegistry::release()`].
    ///
    /// # Panics
    ///
    /// Panics if the instance was not constructed from a prefab of `registry`.
    fn release_to(self, registry: &mut PoolRegistry) {
        registry.release(self);
    }
}

impl<T: Poolable + 'static> ReleaseTo for T {}
