use crate::{ContainerId, PrefabId};

/// Capability of an object to be kept in an [`InstancePool`][crate::InstancePool].
///
/// A poolable object stores the identity of the prefab it was created from and moves between
/// two states:
///
/// - **Active** - issued to a caller and in use. Reached via [`restart()`][Self::restart],
///   which the caller invokes after acquiring the instance. Acquiring does not restart.
/// - **Idle** - owned by a pool and waiting in its queue. Reached via [`reset()`][Self::reset],
///   which the pool invokes when the instance is released.
///
/// Freshly constructed instances are in whatever state the factory leaves them in.
///
/// Types that do not need custom reset logic can be wrapped in
/// [`DefaultPoolable`][crate::DefaultPoolable] instead of implementing this trait.
///
/// # Example
///
/// ```rust
/// use prefab_pool::{PoolRegistry, Poolable, PrefabId, ResetOutcome};
///
/// #[derive(Clone, Debug, Default)]
/// struct Particle {
///     prefab_id: Option<PrefabId>,
///     visible: bool,
///     age_ticks: u32,
/// }
///
/// impl Poolable for Particle {
///     fn prefab_id(&self) -> Option<PrefabId> {
///         self.prefab_id
///     }
///
///     fn set_prefab_id(&mut self, prefab_id: PrefabId) {
///         self.prefab_id = Some(prefab_id);
///     }
///
///     fn reset(&mut self) -> ResetOutcome {
///         self.visible = false;
///         self.age_ticks = 0;
///         ResetOutcome::Recycle
///     }
///
///     fn restart(&mut self) {
///         self.visible = true;
///     }
/// }
///
/// let mut registry = PoolRegistry::new();
/// let spark = registry.register(Particle::default());
///
/// let mut particle = registry.acquire(&spark);
/// particle.restart();
/// particle.age_ticks = 30;
///
/// registry.release(particle);
///
/// let particle = registry.acquire(&spark);
/// assert_eq!(particle.age_ticks, 0);
/// assert!(!particle.visible);
/// ```
pub trait Poolable {
    /// Returns the identity of the prefab this object was created from, if it has been stamped.
    fn prefab_id(&self) -> Option<PrefabId>;

    /// Stamps the object with the identity of the prefab it was created from.
    fn set_prefab_id(&mut self, prefab_id: PrefabId);

    /// Transitions the object to the idle state before it is queued for reuse.
    ///
    /// Returning [`ResetOutcome::Discard`] tells the pool that the object is not fit for reuse,
    /// in which case the pool drops it instead of queueing it.
    fn reset(&mut self) -> ResetOutcome;

    /// Transitions the object to the active state after it has been acquired.
    fn restart(&mut self);

    /// Called after a successful reset to group the idle object under the container of its pool.
    ///
    /// Only called when the registry has a [`SceneAnchor`][crate::SceneAnchor]. The default
    /// implementation does nothing.
    fn park(&mut self, _container: ContainerId) {}
}

/// Tells the pool what to do with an object after [`Poolable::reset()`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[must_use]
#[non_exhaustive]
pub enum ResetOutcome {
    /// The object is idle and can be queued for reuse.
    Recycle,

    /// The object cannot be reused and is dropped.
    Discard,
}
