use std::any::type_name;
use std::fmt;

use crate::prefab::Factory;
use crate::{PoolRegistry, Poolable, Prefab, SceneAnchor};

/// Builder for creating an instance of [`PoolRegistry`].
///
/// # Examples
///
/// ```
/// use prefab_pool::{ContainerId, PoolRegistry, SceneAnchor};
///
/// // Default registry, without a scene anchor.
/// let registry = PoolRegistry::builder().build();
///
/// // With a host that groups idle instances.
/// #[derive(Debug)]
/// struct Counter(u64);
///
/// impl SceneAnchor for Counter {
///     fn create_container(&mut self, _name: &str, _parent: Option<ContainerId>) -> ContainerId {
///         self.0 += 1;
///         ContainerId::new(self.0)
///     }
/// }
///
/// let registry = PoolRegistry::builder().scene_anchor(Counter(0)).build();
/// ```
#[must_use]
pub struct PoolRegistryBuilder {
    scene_anchor: Option<Box<dyn SceneAnchor>>,
}

impl PoolRegistryBuilder {
    pub(crate) fn new() -> Self {
        Self { scene_anchor: None }
    }

    /// Sets the host capability used to group idle instances under containers.
    ///
    /// Without a scene anchor, instances are pooled in the same way but are never parked.
    pub fn scene_anchor(mut self, scene_anchor: impl SceneAnchor + 'static) -> Self {
        self.scene_anchor = Some(Box::new(scene_anchor));
        self
    }

    /// Builds the registry with the specified configuration.
    ///
    /// For simple cases, prefer [`PoolRegistry::new()`] which is equivalent to
    /// `PoolRegistry::builder().build()`.
    #[must_use]
    pub fn build(self) -> PoolRegistry {
        PoolRegistry::new_inner(self.scene_anchor)
    }
}

impl fmt::Debug for PoolRegistryBuilder {
    #[cfg_attr(test, mutants::skip)] // No API contract.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PoolRegistryBuilder")
            .field("scene_anchor", &self.scene_anchor.is_some())
            .finish()
    }
}

/// Builder for registering a [`Prefab`] with a [`PoolRegistry`].
///
/// Obtained from [`PoolRegistry::prefab()`] or [`PoolRegistry::prefab_with_factory()`]. The
/// identity of the prefab is assigned when [`build()`][Self::build] is called.
///
/// # Examples
///
/// ```
/// use prefab_pool::{DefaultPoolable, PoolRegistry};
///
/// let mut registry = PoolRegistry::new();
///
/// let enemy = registry
///     .prefab(DefaultPoolable::new(vec![0_u8; 16]))
///     .name("enemy")
///     .factory(|prototype| DefaultPoolable::new(prototype.to_vec()))
///     .build();
///
/// assert_eq!(enemy.name(), "enemy");
/// ```
#[must_use]
pub struct PrefabBuilder<'r, T> {
    registry: &'r mut PoolRegistry,
    prototype: T,
    name: Option<String>,
    factory: Factory<T>,
}

impl<'r, T: Poolable + 'static> PrefabBuilder<'r, T> {
    pub(crate) fn new(registry: &'r mut PoolRegistry, prototype: T, factory: Factory<T>) -> Self {
        Self {
            registry,
            prototype,
            name: None,
            factory,
        }
    }

    /// Sets the display name of the prefab.
    ///
    /// Defaults to the name of the instance type.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the function that constructs new instances from the prototype.
    ///
    /// The constructed instance is stamped with the identity of the prefab afterwards, so the
    /// factory does not need to do that.
    pub fn factory(mut self, factory: impl Fn(&T) -> T + 'static) -> Self {
        self.factory = Box::new(factory);
        self
    }

    /// Assigns the next identity of the registry to the prototype and returns the prefab.
    ///
    /// The pool for the prefab is not created until the prefab is first acquired from or
    /// released to.
    #[must_use]
    pub fn build(self) -> Prefab<T> {
        let name = self.name.unwrap_or_else(|| type_name::<T>().to_string());

        self.registry
            .register_prefab(self.prototype, name, self.factory)
    }
}

impl<T> fmt::Debug for PrefabBuilder<'_, T> {
    #[cfg_attr(test, mutants::skip)] // No API contract.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PrefabBuilder")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}
