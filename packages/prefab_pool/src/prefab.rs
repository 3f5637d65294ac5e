use std::fmt;
use std::rc::Rc;

use crate::{PoolRegistry, Poolable, PrefabId};

/// Constructs a new instance from a prototype.
pub(crate) type Factory<T> = Box<dyn Fn(&T) -> T>;

/// A registered prototype from which pooled instances are constructed.
///
/// Obtained from [`PoolRegistry::register()`], [`PoolRegistry::register_default()`] or
/// [`PoolRegistry::prefab()`]. The prefab carries its [`PrefabId`], the prototype value and the
/// factory used to construct new instances from the prototype.
///
/// This type is a cheap handle. Clones refer to the same prefab and share its identity.
///
/// A prefab can only be used with the registry that issued it.
///
/// # Example
///
/// ```rust
/// use prefab_pool::{PoolRegistry, Poolable};
///
/// let mut registry = PoolRegistry::new();
/// let tree = registry.register_default("oak".to_string());
///
/// // The prototype is stamped with the identity of the prefab.
/// assert_eq!(tree.prototype().prefab_id(), Some(tree.id()));
///
/// // So is every instance constructed from it.
/// let instance = tree.acquire_from(&mut registry);
/// assert_eq!(instance.prefab_id(), Some(tree.id()));
/// assert_eq!(*instance, "oak");
/// ```
pub struct Prefab<T> {
    inner: Rc<PrefabInner<T>>,
}

struct PrefabInner<T> {
    id: PrefabId,
    name: String,
    prototype: T,
    factory: Factory<T>,
}

impl<T: Poolable> Prefab<T> {
    pub(crate) fn new(id: PrefabId, name: String, mut prototype: T, factory: Factory<T>) -> Self {
        prototype.set_prefab_id(id);

        Self {
            inner: Rc::new(PrefabInner {
                id,
                name,
                prototype,
                factory,
            }),
        }
    }

    /// Constructs a new instance from the prototype and stamps it with the identity of the prefab.
    pub(crate) fn instantiate(&self) -> T {
        let mut instance = (self.inner.factory)(&self.inner.prototype);
        instance.set_prefab_id(self.inner.id);
        instance
    }
}

impl<T> Prefab<T> {
    /// The identity of the prefab, shared by every instance constructed from it.
    #[must_use]
    pub fn id(&self) -> PrefabId {
        self.inner.id
    }

    /// The display name of the prefab.
    ///
    /// Used to name the container of the pool when the registry has a
    /// [`SceneAnchor`][crate::SceneAnchor].
    #[must_use]
    pub fn name(&self) -> &str {
        &self.inner.name
    }

    /// The prototype that new instances are constructed from.
    #[must_use]
    pub fn prototype(&self) -> &T {
        &self.inner.prototype
    }
}

impl<T: Poolable + 'static> Prefab<T> {
    /// Acquires an instance of this prefab from a registry.
    ///
    /// Equivalent to [`PoolRegistry::acquire()`].
    ///
    /// # Panics
    ///
    /// Panics if the prefab was not issued by `registry`.
    #[must_use]
    pub fn acquire_from(&self, registry: &mut PoolRegistry) -> T {
        registry.acquire(self)
    }
}

impl<T> Clone for Prefab<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T> fmt::Debug for Prefab<T> {
    #[cfg_attr(test, mutants::skip)] // No API contract.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Prefab")
            .field("id", &self.inner.id)
            .field("name", &self.inner.name)
            .finish_non_exhaustive()
    }
}
