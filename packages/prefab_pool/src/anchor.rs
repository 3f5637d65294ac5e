/// Identifies a container created by a [`SceneAnchor`].
///
/// The value is chosen by the host and is opaque to the pool.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct ContainerId(u64);

impl ContainerId {
    /// Creates a container identifier from a host-defined value.
    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Returns the host-defined value.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

/// Name of the container that all per-prefab containers are grouped under.
pub const ROOT_CONTAINER_NAME: &str = "Pool Container";

/// Host capability for grouping idle instances under a common parent, such as a node in a
/// scene graph.
///
/// When a registry is built with a scene anchor, it creates one root container named
/// [`ROOT_CONTAINER_NAME`] the first time an instance is acquired or released, and one child
/// container per prefab, named after the prefab, when the pool for that prefab is created.
/// Idle instances are parked under the container of their pool via [`Poolable::park()`].
///
/// Pooling behaves the same with or without a scene anchor.
///
/// # Example
///
/// ```rust
/// use prefab_pool::{ContainerId, PoolRegistry, SceneAnchor};
///
/// #[derive(Debug, Default)]
/// struct Scene {
///     nodes: Vec<(String, Option<ContainerId>)>,
/// }
///
/// impl SceneAnchor for Scene {
///     fn create_container(&mut self, name: &str, parent: Option<ContainerId>) -> ContainerId {
///         self.nodes.push((name.to_string(), parent));
///         ContainerId::new(self.nodes.len() as u64)
///     }
/// }
///
/// let mut registry = PoolRegistry::builder().scene_anchor(Scene::default()).build();
/// let rock = registry.prefab(prefab_pool::DefaultPoolable::new(0_u8)).name("rock").build();
///
/// let instance = registry.acquire(&rock);
/// registry.release(instance);
///
/// assert!(registry.root_container().is_some());
/// ```
///
/// [`Poolable::park()`]: crate::Poolable::park
pub trait SceneAnchor {
    /// Creates a named container, optionally nested under a parent container.
    fn create_container(&mut self, name: &str, parent: Option<ContainerId>) -> ContainerId;
}
