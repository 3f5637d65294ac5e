#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! This package provides [`PoolRegistry`], a single-threaded registry of instance pools that
//! reuses instances of prototype objects ("prefabs") instead of constructing new ones on every
//! request.
//!
//! Each registered prefab receives a [`PrefabId`] that is stamped on every instance created from
//! it. When an instance is released, the registry reads that identity to route the instance back
//! to the [`InstancePool`] it came from, where it is reset and queued for reuse.
//!
//! # Features
//!
//! - **Lazy pools**: The pool for a prefab is created the first time the prefab is acquired
//!   from or released to.
//! - **FIFO reuse**: The instance that has been idle the longest is issued first.
//! - **Default capability**: Types that do not implement [`Poolable`] can be wrapped in
//!   [`DefaultPoolable`], which activates and deactivates the wrapped value.
//! - **Injected construction**: New instances are cloned from the prototype by default or built
//!   by a custom factory function.
//! - **Optional scene grouping**: A host can supply a [`SceneAnchor`] to group idle instances
//!   under per-prefab containers.
//!
//! # Example
//!
//! ```rust
//! use prefab_pool::{PoolRegistry, Poolable};
//!
//! #[derive(Clone, Debug)]
//! struct Bullet {
//!     speed: f32,
//! }
//!
//! let mut registry = PoolRegistry::new();
//! let bullet = registry.register_default(Bullet { speed: 10.0 });
//!
//! // The first request constructs a new instance from the prototype.
//! let mut first = registry.acquire(&bullet);
//! first.restart();
//! assert_eq!(first.speed, 10.0);
//!
//! // Releasing resets the instance and queues it for reuse.
//! registry.release(first);
//! assert_eq!(registry.idle_count(bullet.id()), 1);
//!
//! // The next request reuses the queued instance.
//! let second = registry.acquire(&bullet);
//! assert!(!second.is_active());
//! assert_eq!(registry.idle_count(bullet.id()), 0);
//! ```
//!
//! The same operations are available with method call syntax on the prefab and the instance:
//!
//! ```rust
//! use prefab_pool::{PoolRegistry, ReleaseTo};
//!
//! let mut registry = PoolRegistry::new();
//! let label = registry.register_default("label".to_string());
//!
//! let instance = label.acquire_from(&mut registry);
//! instance.release_to(&mut registry);
//!
//! assert_eq!(registry.idle_count(label.id()), 1);
//! ```
//!
//! # Metrics
//!
//! The package publishes the following [`nm`] events, visible via `nm::Report::collect()`:
//!
//! - `prefab_pool_acquire_reused` - an acquire was served from the idle queue.
//! - `prefab_pool_acquire_created` - an acquire constructed a new instance.
//! - `prefab_pool_recycled` - a released instance was queued for reuse.
//! - `prefab_pool_discarded` - a released instance declined to be recycled and was dropped.
//! - `prefab_pool_pools_created` - a registry created the pool for a prefab.
//!
//! # Thread safety
//!
//! All types in this package are single-threaded and neither [`Send`] nor [`Sync`]. The
//! registry is meant to be owned by the main loop of the host and passed by reference to the
//! code that needs it.

mod anchor;
mod builder;
mod default_poolable;
mod error;
mod ext;
mod instance_pool;
mod metrics;
mod poolable;
mod prefab;
mod prefab_id;
mod registry;

pub use anchor::*;
pub use builder::*;
pub use default_poolable::*;
pub use error::*;
pub use ext::*;
pub use instance_pool::*;
pub use poolable::*;
pub use prefab::*;
pub use prefab_id::*;
pub use registry::*;
