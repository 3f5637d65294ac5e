use std::any::{Any, type_name};
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use foldhash::{HashMap, HashMapExt};

use crate::metrics::POOLS_CREATED;
use crate::prefab::Factory;
use crate::{
    ContainerId, DefaultPoolable, Error, InstancePool, Poolable, Prefab, PrefabBuilder, PrefabId,
    PoolRegistryBuilder, ROOT_CONTAINER_NAME, Result, SceneAnchor,
};

/// A registry of instance pools, one per registered prefab.
///
/// Prefabs are registered to receive an identity. Acquiring an instance of a prefab takes an
/// idle instance from the pool of that prefab or constructs a new one. Releasing an instance
/// reads the identity stamped on the instance and recycles it into the matching pool.
///
/// The pool for a prefab is created on first use, by whichever of acquire or release happens
/// first, and lives as long as the registry. At most one pool exists per prefab.
///
/// # Single-threaded design
///
/// This type is designed for single-threaded use and is neither [`Send`] nor [`Sync`].
/// Create it once, typically at the start of the main loop of the host, and pass it by
/// reference to the code that acquires and releases instances.
///
/// Every registry has its own identity, which is part of every [`PrefabId`] it assigns.
/// Prefabs and instances are only accepted by the registry that issued them.
///
/// # Example
///
/// ```rust
/// use prefab_pool::{PoolRegistry, Poolable};
///
/// let mut registry = PoolRegistry::new();
/// let arrow = registry.register_default("arrow".to_string());
///
/// assert!(!registry.has_pool(arrow.id()));
///
/// let mut first = registry.acquire(&arrow);
/// first.restart();
///
/// let mut second = registry.acquire(&arrow);
/// second.restart();
///
/// assert!(registry.has_pool(arrow.id()));
/// assert_eq!(registry.pool_count(), 1);
///
/// registry.release(first);
/// registry.release(second);
///
/// assert_eq!(registry.idle_count(arrow.id()), 2);
/// ```
pub struct PoolRegistry {
    /// Part of every identity this registry assigns, so foreign prefabs and instances can be
    /// rejected.
    id: u64,

    /// Identity assigned to the next registered prefab.
    next_id: PrefabId,

    slots: HashMap<PrefabId, Box<dyn ErasedSlot>>,

    scene_anchor: Option<Box<dyn SceneAnchor>>,

    /// Created on first acquire or release, if there is a scene anchor.
    root_container: Option<ContainerId>,
}

static REGISTRY_ID_COUNTER: AtomicU64 = AtomicU64::new(1);

/// Generates a unique registry ID.
fn generate_registry_id() -> u64 {
    REGISTRY_ID_COUNTER.fetch_add(1, Ordering::Relaxed)
}

impl PoolRegistry {
    /// Creates a new [`PoolRegistry`] with default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::builder().build()
    }

    /// Returns a builder for creating a [`PoolRegistry`] with custom configuration.
    pub fn builder() -> PoolRegistryBuilder {
        PoolRegistryBuilder::new()
    }

    pub(crate) fn new_inner(scene_anchor: Option<Box<dyn SceneAnchor>>) -> Self {
        let id = generate_registry_id();

        Self {
            id,
            next_id: PrefabId::first(id),
            slots: HashMap::new(),
            scene_anchor,
            root_container: None,
        }
    }

    /// Registers a prototype whose instances are constructed by cloning it.
    ///
    /// Equivalent to `registry.prefab(prototype).build()`.
    #[must_use]
    pub fn register<T>(&mut self, prototype: T) -> Prefab<T>
    where
        T: Poolable + Clone + 'static,
    {
        self.prefab(prototype).build()
    }

    /// Registers a plain value, wrapped in [`DefaultPoolable`] so that it can be pooled.
    ///
    /// The prefab is named after the type of the value.
    ///
    /// # Example
    ///
    /// ```rust
    /// use prefab_pool::PoolRegistry;
    ///
    /// let mut registry = PoolRegistry::new();
    /// let prefab = registry.register_default(3.5_f64);
    ///
    /// assert_eq!(prefab.name(), "f64");
    /// assert!(prefab.prototype().is_active());
    /// ```
    #[must_use]
    pub fn register_default<V>(&mut self, value: V) -> Prefab<DefaultPoolable<V>>
    where
        V: Clone + 'static,
    {
        self.prefab(DefaultPoolable::new(value))
            .name(type_name::<V>())
            .build()
    }

    /// Starts registering a prototype whose instances are constructed by cloning it, unless
    /// a different factory is set on the builder.
    pub fn prefab<T>(&mut self, prototype: T) -> PrefabBuilder<'_, T>
    where
        T: Poolable + Clone + 'static,
    {
        PrefabBuilder::new(self, prototype, Box::new(T::clone))
    }

    /// Starts registering a prototype whose instances are constructed by `factory`.
    ///
    /// Use this for prototypes that cannot be cloned.
    ///
    /// # Example
    ///
    /// ```rust
    /// use prefab_pool::{PoolRegistry, Poolable, PrefabId, ResetOutcome};
    ///
    /// #[derive(Debug)]
    /// struct Socket {
    ///     prefab_id: Option<PrefabId>,
    ///     port: u16,
    /// }
    ///
    /// impl Poolable for Socket {
    ///     fn prefab_id(&self) -> Option<PrefabId> {
    ///         self.prefab_id
    ///     }
    ///
    ///     fn set_prefab_id(&mut self, prefab_id: PrefabId) {
    ///         self.prefab_id = Some(prefab_id);
    ///     }
    ///
    ///     fn reset(&mut self) -> ResetOutcome {
    ///         ResetOutcome::Recycle
    ///     }
    ///
    ///     fn restart(&mut self) {}
    /// }
    ///
    /// let mut registry = PoolRegistry::new();
    /// let socket = registry
    ///     .prefab_with_factory(Socket { prefab_id: None, port: 8080 }, |prototype| Socket {
    ///         prefab_id: None,
    ///         port: prototype.port,
    ///     })
    ///     .build();
    ///
    /// assert_eq!(registry.acquire(&socket).port, 8080);
    /// ```
    pub fn prefab_with_factory<T>(
        &mut self,
        prototype: T,
        factory: impl Fn(&T) -> T + 'static,
    ) -> PrefabBuilder<'_, T>
    where
        T: Poolable + 'static,
    {
        PrefabBuilder::new(self, prototype, Box::new(factory))
    }

    pub(crate) fn register_prefab<T>(
        &mut self,
        prototype: T,
        name: String,
        factory: Factory<T>,
    ) -> Prefab<T>
    where
        T: Poolable + 'static,
    {
        let id = self.next_id;
        self.next_id = id.next();

        let prefab = Prefab::new(id, name, prototype, factory);

        self.slots.insert(
            id,
            Box::new(PoolSlot {
                prefab: prefab.clone(),
                pool: None,
            }),
        );

        prefab
    }

    /// Issues an instance of a prefab, reusing an idle one if available.
    ///
    /// The oldest idle instance is issued first. If none is idle, a new instance is constructed
    /// from the prototype and stamped with the identity of the prefab. Reused instances are
    /// issued in the idle state, so call [`Poolable::restart()`] before using them.
    ///
    /// # Panics
    ///
    /// Panics if the prefab was not issued by this registry. See
    /// [`try_acquire()`][Self::try_acquire] for a non-panicking variant.
    #[must_use]
    pub fn acquire<T>(&mut self, prefab: &Prefab<T>) -> T
    where
        T: Poolable + 'static,
    {
        self.try_acquire(prefab)
            .unwrap_or_else(|error| panic!("cannot acquire instance: {error}"))
    }

    /// Issues an instance of a prefab, reusing an idle one if available.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ForeignPrefab`] if the prefab was not issued by this registry.
    pub fn try_acquire<T>(&mut self, prefab: &Prefab<T>) -> Result<T>
    where
        T: Poolable + 'static,
    {
        if prefab.id().registry_id() != self.id {
            return Err(Error::ForeignPrefab {
                prefab_id: prefab.id(),
            });
        }

        Ok(self.pool_mut::<T>(prefab.id())?.take_or_create())
    }

    /// Returns an instance to the pool of the prefab it was constructed from.
    ///
    /// The instance is reset via [`Poolable::reset()`] and queued for reuse, unless the reset
    /// reports that the instance cannot be reused, in which case it is dropped.
    ///
    /// The instance is taken by value, so releasing the same instance twice does not compile:
    ///
    /// ```rust,compile_fail
    /// use prefab_pool::PoolRegistry;
    ///
    /// let mut registry = PoolRegistry::new();
    /// let prefab = registry.register_default(1_u8);
    ///
    /// let instance = registry.acquire(&prefab);
    /// registry.release(instance);
    /// registry.release(instance); // Error: use of moved value.
    /// ```
    ///
    /// # Panics
    ///
    /// Panics if the instance was not constructed from a prefab of this registry. See
    /// [`try_release()`][Self::try_release] for a non-panicking variant.
    pub fn release<T>(&mut self, instance: T)
    where
        T: Poolable + 'static,
    {
        self.try_release(instance)
            .unwrap_or_else(|error| panic!("cannot release instance: {error}"));
    }

    /// Returns an instance to the pool of the prefab it was constructed from.
    ///
    /// On error, the instance is dropped.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Unstamped`] if the instance carries no prefab identity,
    /// [`Error::ForeignInstance`] if the identity was assigned by a different registry,
    /// [`Error::UnknownPrefab`] if the identity was not registered with this registry and
    /// [`Error::PrefabTypeMismatch`] if the identity was registered for a different type.
    pub fn try_release<T>(&mut self, instance: T) -> Result<()>
    where
        T: Poolable + 'static,
    {
        let prefab_id = instance.prefab_id().ok_or(Error::Unstamped)?;

        if prefab_id.registry_id() != self.id {
            return Err(Error::ForeignInstance { prefab_id });
        }

        // Discarding on reset is not an error.
        let _recycled = self.pool_mut::<T>(prefab_id)?.recycle(instance);

        Ok(())
    }

    /// Resolves the pool of a prefab, creating it and the root container if this is the first
    /// time they are needed.
    fn pool_mut<T>(&mut self, prefab_id: PrefabId) -> Result<&mut InstancePool<T>>
    where
        T: Poolable + 'static,
    {
        let root_container = self.ensure_root_container();

        let slot = self
            .slots
            .get_mut(&prefab_id)
            .ok_or(Error::UnknownPrefab { prefab_id })?;

        let expected = slot.instance_type_name();

        let slot = slot
            .as_any_mut()
            .downcast_mut::<PoolSlot<T>>()
            .ok_or(Error::PrefabTypeMismatch {
                prefab_id,
                expected,
                actual: type_name::<T>(),
            })?;

        Ok(slot.pool_or_create(self.scene_anchor.as_deref_mut(), root_container))
    }

    fn ensure_root_container(&mut self) -> Option<ContainerId> {
        if self.root_container.is_none() {
            self.root_container = self
                .scene_anchor
                .as_deref_mut()
                .map(|anchor| anchor.create_container(ROOT_CONTAINER_NAME, None));
        }

        self.root_container
    }

    /// The pool of a prefab, if it has been created.
    ///
    /// Returns `None` if the pool has not been created yet, if the identity is unknown or if
    /// the prefab was registered for a different instance type.
    #[must_use]
    pub fn pool<T>(&self, prefab_id: PrefabId) -> Option<&InstancePool<T>>
    where
        T: Poolable + 'static,
    {
        self.slots
            .get(&prefab_id)?
            .as_any()
            .downcast_ref::<PoolSlot<T>>()?
            .pool
            .as_ref()
    }

    /// Whether the pool of a prefab has been created.
    #[must_use]
    pub fn has_pool(&self, prefab_id: PrefabId) -> bool {
        self.slots
            .get(&prefab_id)
            .is_some_and(|slot| slot.has_pool())
    }

    /// The number of idle instances in the pool of a prefab.
    ///
    /// Returns zero if the pool has not been created yet or the identity is unknown.
    #[must_use]
    pub fn idle_count(&self, prefab_id: PrefabId) -> usize {
        self.slots
            .get(&prefab_id)
            .map_or(0, |slot| slot.idle_count())
    }

    /// The number of prefabs registered with this registry.
    #[must_use]
    pub fn prefab_count(&self) -> usize {
        self.slots.len()
    }

    /// The number of pools that have been created.
    #[must_use]
    pub fn pool_count(&self) -> usize {
        self.slots.values().filter(|slot| slot.has_pool()).count()
    }

    /// The container that all per-prefab containers are nested under.
    ///
    /// `None` until the first acquire or release, and always `None` without a scene anchor.
    #[must_use]
    pub fn root_container(&self) -> Option<ContainerId> {
        self.root_container
    }

    /// Whether the registry was built with a scene anchor.
    #[must_use]
    pub fn has_scene_anchor(&self) -> bool {
        self.scene_anchor.is_some()
    }

    #[cfg(test)]
    pub(crate) fn id(&self) -> u64 {
        self.id
    }
}

impl Default for PoolRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for PoolRegistry {
    #[cfg_attr(test, mutants::skip)] // No API contract.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PoolRegistry")
            .field("id", &self.id)
            .field("next_id", &self.next_id)
            .field("slots", &self.slots)
            .field("scene_anchor", &self.scene_anchor.is_some())
            .field("root_container", &self.root_container)
            .finish_non_exhaustive()
    }
}

/// Type-erased access to the [`PoolSlot`] of one prefab.
trait ErasedSlot: fmt::Debug {
    fn as_any(&self) -> &dyn Any;

    fn as_any_mut(&mut self) -> &mut dyn Any;

    fn instance_type_name(&self) -> &'static str;

    fn has_pool(&self) -> bool;

    fn idle_count(&self) -> usize;
}

/// A registered prefab and, once it has been used, its pool.
struct PoolSlot<T> {
    prefab: Prefab<T>,
    pool: Option<InstancePool<T>>,
}

impl<T: Poolable> PoolSlot<T> {
    fn pool_or_create(
        &mut self,
        scene_anchor: Option<&mut (dyn SceneAnchor + 'static)>,
        root_container: Option<ContainerId>,
    ) -> &mut InstancePool<T> {
        let prefab = &self.prefab;

        self.pool.get_or_insert_with(|| {
            POOLS_CREATED.with(|e| e.observe_once());

            let container = scene_anchor
                .map(|anchor| anchor.create_container(prefab.name(), root_container));

            InstancePool::with_container(prefab.clone(), container)
        })
    }
}

impl<T: Poolable + 'static> ErasedSlot for PoolSlot<T> {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn instance_type_name(&self) -> &'static str {
        type_name::<T>()
    }

    fn has_pool(&self) -> bool {
        self.pool.is_some()
    }

    fn idle_count(&self) -> usize {
        self.pool.as_ref().map_or(0, InstancePool::len)
    }
}

impl<T> fmt::Debug for PoolSlot<T> {
    #[cfg_attr(test, mutants::skip)] // No API contract.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PoolSlot")
            .field("prefab", &self.prefab)
            .field("pool", &self.pool)
            .finish()
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use static_assertions::assert_not_impl_any;

    use super::*;
    use crate::ResetOutcome;

    assert_not_impl_any!(PoolRegistry: Send, Sync);

    /// Records every container created, shared with the test through an `Rc`.
    #[derive(Debug, Default)]
    struct RecordingAnchor {
        created: Rc<RefCell<Vec<(String, Option<ContainerId>)>>>,
    }

    impl SceneAnchor for RecordingAnchor {
        fn create_container(&mut self, name: &str, parent: Option<ContainerId>) -> ContainerId {
            let mut created = self.created.borrow_mut();
            created.push((name.to_string(), parent));
            ContainerId::new(created.len() as u64)
        }
    }

    /// Declines to be recycled once it has been marked as spent.
    #[derive(Clone, Debug, Default)]
    struct Cartridge {
        prefab_id: Option<PrefabId>,
        spent: bool,
    }

    impl Poolable for Cartridge {
        fn prefab_id(&self) -> Option<PrefabId> {
            self.prefab_id
        }

        fn set_prefab_id(&mut self, prefab_id: PrefabId) {
            self.prefab_id = Some(prefab_id);
        }

        fn reset(&mut self) -> ResetOutcome {
            if self.spent {
                ResetOutcome::Discard
            } else {
                ResetOutcome::Recycle
            }
        }

        fn restart(&mut self) {}
    }

    #[test]
    fn identities_are_sequential() {
        let mut registry = PoolRegistry::new();

        let a = registry.register_default(1_u8);
        let b = registry.register_default(1_u8);
        let c = registry.register(Cartridge::default());

        assert_eq!(a.id().get(), 1);
        assert_eq!(b.id().get(), 2);
        assert_eq!(c.id().get(), 3);
        assert_eq!(registry.prefab_count(), 3);
    }

    #[test]
    fn registries_have_distinct_identities() {
        let first = PoolRegistry::new();
        let second = PoolRegistry::new();

        assert_ne!(first.id(), second.id());
    }

    #[test]
    fn registration_stamps_prototype() {
        let mut registry = PoolRegistry::new();
        let prefab = registry.register(Cartridge::default());

        assert_eq!(prefab.prototype().prefab_id(), Some(prefab.id()));
    }

    #[test]
    fn pool_created_lazily_once() {
        let mut registry = PoolRegistry::new();
        let prefab = registry.register_default(1_u8);

        assert!(!registry.has_pool(prefab.id()));
        assert_eq!(registry.pool_count(), 0);
        assert!(registry.pool::<DefaultPoolable<u8>>(prefab.id()).is_none());

        let first = registry.acquire(&prefab);
        let second = registry.acquire(&prefab);
        registry.release(first);
        registry.release(second);

        assert!(registry.has_pool(prefab.id()));
        assert_eq!(registry.pool_count(), 1);

        let pool = registry.pool::<DefaultPoolable<u8>>(prefab.id()).unwrap();
        assert_eq!(pool.prefab_id(), prefab.id());
        assert_eq!(pool.len(), 2);
    }

    #[test]
    fn release_before_acquire_creates_pool() {
        let mut registry = PoolRegistry::new();
        let prefab = registry.register(Cartridge::default());

        // Constructed outside the registry, from the same prefab.
        let mut standalone = InstancePool::new(prefab.clone());
        let instance = standalone.take_or_create();

        assert!(!registry.has_pool(prefab.id()));
        registry.release(instance);

        assert!(registry.has_pool(prefab.id()));
        assert_eq!(registry.idle_count(prefab.id()), 1);
    }

    #[test]
    fn pools_are_separate_per_prefab() {
        let mut registry = PoolRegistry::new();
        let a = registry.register_default(1_u8);
        let b = registry.register_default(2_u8);

        let from_a = registry.acquire(&a);
        registry.release(from_a);

        assert_eq!(registry.idle_count(a.id()), 1);
        assert_eq!(registry.idle_count(b.id()), 0);

        let from_b = registry.acquire(&b);
        assert_eq!(*from_b, 2);
        assert_eq!(registry.idle_count(a.id()), 1);
    }

    #[test]
    fn discarded_instance_is_dropped() {
        let mut registry = PoolRegistry::new();
        let prefab = registry.register(Cartridge::default());

        let mut instance = registry.acquire(&prefab);
        instance.spent = true;
        registry.release(instance);

        assert!(registry.has_pool(prefab.id()));
        assert_eq!(registry.idle_count(prefab.id()), 0);
    }

    #[test]
    fn foreign_prefab_is_rejected() {
        let mut registry = PoolRegistry::new();
        let mut other = PoolRegistry::new();
        let prefab = other.register_default(1_u8);

        let result = registry.try_acquire(&prefab);

        assert!(matches!(result, Err(Error::ForeignPrefab { prefab_id }) if prefab_id == prefab.id()));
        assert_eq!(registry.pool_count(), 0);
    }

    #[test]
    #[should_panic]
    fn acquire_foreign_prefab_panics() {
        let mut registry = PoolRegistry::new();
        let mut other = PoolRegistry::new();
        let prefab = other.register_default(1_u8);

        let _instance = registry.acquire(&prefab);
    }

    #[test]
    fn unstamped_instance_is_rejected() {
        let mut registry = PoolRegistry::new();

        let result = registry.try_release(DefaultPoolable::new(1_u8));

        assert!(matches!(result, Err(Error::Unstamped)));
    }

    #[test]
    fn unknown_identity_is_rejected() {
        let mut registry = PoolRegistry::new();
        let _first = registry.register_default(1_u8);

        // Same registry, but a number that was never assigned.
        let mut instance = DefaultPoolable::new(1_u8);
        instance.set_prefab_id(PrefabId::first(registry.id()).next());

        let result = registry.try_release(instance);

        assert!(matches!(result, Err(Error::UnknownPrefab { prefab_id }) if prefab_id.get() == 2));
        assert_eq!(registry.pool_count(), 0);
    }

    #[test]
    fn instance_from_other_registry_is_rejected() {
        let mut registry = PoolRegistry::new();
        let mut other = PoolRegistry::new();

        // Both prefabs have the same type and the same sequence number.
        let here = registry.register_default("here");
        let there = other.register_default("there");
        assert_eq!(here.id().get(), there.id().get());

        let instance = other.acquire(&there);
        let result = registry.try_release(instance);

        assert!(matches!(result, Err(Error::ForeignInstance { prefab_id }) if prefab_id == there.id()));
        assert_eq!(registry.idle_count(here.id()), 0);
        assert_eq!(registry.pool_count(), 0);

        let issued = registry.acquire(&here);
        assert_eq!(*issued, "here");
    }

    #[test]
    #[should_panic]
    fn release_to_other_registry_panics() {
        let mut registry = PoolRegistry::new();
        let mut other = PoolRegistry::new();
        let _here = registry.register_default(1_u8);
        let there = other.register_default(1_u8);

        let instance = other.acquire(&there);
        registry.release(instance);
    }

    #[test]
    fn type_mismatch_is_rejected() {
        let mut registry = PoolRegistry::new();
        let prefab = registry.register_default(1_u8);

        let mut impostor = Cartridge::default();
        impostor.set_prefab_id(prefab.id());

        let result = registry.try_release(impostor);

        assert!(matches!(
            result,
            Err(Error::PrefabTypeMismatch { prefab_id, expected, actual })
                if prefab_id == prefab.id()
                    && expected == type_name::<DefaultPoolable<u8>>()
                    && actual == type_name::<Cartridge>()
        ));
        assert!(!registry.has_pool(prefab.id()));
    }

    #[test]
    #[should_panic]
    fn release_unstamped_panics() {
        let mut registry = PoolRegistry::new();
        registry.release(DefaultPoolable::new(1_u8));
    }

    #[test]
    fn no_root_container_without_anchor() {
        let mut registry = PoolRegistry::new();
        let prefab = registry.register_default(1_u8);

        let instance = registry.acquire(&prefab);
        registry.release(instance);

        assert!(registry.root_container().is_none());
        let pool = registry.pool::<DefaultPoolable<u8>>(prefab.id()).unwrap();
        assert!(pool.container().is_none());
    }

    #[test]
    fn anchor_creates_root_once_and_one_container_per_pool() {
        let anchor = RecordingAnchor::default();
        let created = Rc::clone(&anchor.created);

        let mut registry = PoolRegistry::builder().scene_anchor(anchor).build();
        let rock = registry
            .prefab(DefaultPoolable::new(1_u8))
            .name("rock")
            .build();
        let tree = registry
            .prefab(DefaultPoolable::new(2_u8))
            .name("tree")
            .build();

        // Registration alone creates nothing.
        assert!(created.borrow().is_empty());
        assert!(registry.root_container().is_none());

        let a = registry.acquire(&rock);
        let b = registry.acquire(&rock);
        let c = registry.acquire(&tree);
        registry.release(a);
        registry.release(b);
        registry.release(c);

        let root = registry.root_container().unwrap();
        assert_eq!(root, ContainerId::new(1));

        assert_eq!(
            *created.borrow(),
            vec![
                (ROOT_CONTAINER_NAME.to_string(), None),
                ("rock".to_string(), Some(root)),
                ("tree".to_string(), Some(root)),
            ]
        );

        let rock_pool = registry.pool::<DefaultPoolable<u8>>(rock.id()).unwrap();
        assert_eq!(rock_pool.container(), Some(ContainerId::new(2)));

        let parked = registry.acquire(&rock);
        assert_eq!(parked.container(), Some(ContainerId::new(2)));
    }

    #[test]
    fn root_container_created_by_release_too() {
        let anchor = RecordingAnchor::default();
        let created = Rc::clone(&anchor.created);

        let mut registry = PoolRegistry::builder().scene_anchor(anchor).build();
        let prefab = registry.register_default(1_u8);

        // Constructed by a standalone pool, so the registry has not been touched yet.
        let instance = InstancePool::new(prefab.clone()).take_or_create();
        registry.release(instance);

        assert!(registry.root_container().is_some());
        assert_eq!(created.borrow().len(), 2);
    }
}
