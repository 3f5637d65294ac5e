//! Metrics for instance reuse.
//!
//! Counters only. The events use per-thread instances, which matches the single-threaded
//! design of the registry.

use nm::Event;

thread_local! {
    /// An acquire was served from the idle queue of a pool.
    pub(crate) static ACQUIRE_REUSED: Event = Event::builder()
        .name("prefab_pool_acquire_reused")
        .build();

    /// An acquire found the idle queue empty and constructed a new instance.
    pub(crate) static ACQUIRE_CREATED: Event = Event::builder()
        .name("prefab_pool_acquire_created")
        .build();

    /// A released instance was reset and queued for reuse.
    pub(crate) static RECYCLED: Event = Event::builder()
        .name("prefab_pool_recycled")
        .build();

    /// A released instance declined to be recycled and was dropped.
    pub(crate) static DISCARDED: Event = Event::builder()
        .name("prefab_pool_discarded")
        .build();

    /// A registry created the pool for a prefab.
    pub(crate) static POOLS_CREATED: Event = Event::builder()
        .name("prefab_pool_pools_created")
        .build();
}
