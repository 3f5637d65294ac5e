use thiserror::Error;

use crate::PrefabId;

/// Errors that can occur when acquiring instances from or releasing instances to a
/// [`PoolRegistry`][crate::PoolRegistry].
///
/// All of these indicate a bug in the calling code. The panicking
/// [`acquire()`][crate::PoolRegistry::acquire] and [`release()`][crate::PoolRegistry::release]
/// methods report them by panicking with the error message.
#[derive(Debug, Error)]
#[non_exhaustive]
#[allow(
    variant_size_differences,
    reason = "error path only, the two type names are not worth a heap allocation"
)]
pub enum Error {
    /// The prefab was registered with a different registry.
    #[error("prefab {prefab_id} was registered with a different registry")]
    ForeignPrefab {
        /// Identity of the prefab in the registry that issued it.
        prefab_id: PrefabId,
    },

    /// The released instance carries no prefab identity, so it was never issued by a pool.
    #[error("released instance carries no prefab identity")]
    Unstamped,

    /// The released instance was constructed from a prefab of a different registry.
    #[error("instance of prefab {prefab_id} was issued by a different registry")]
    ForeignInstance {
        /// Identity carried by the released instance.
        prefab_id: PrefabId,
    },

    /// The released instance carries an identity that was never registered with this registry.
    #[error("prefab {prefab_id} is not registered with this registry")]
    UnknownPrefab {
        /// Identity carried by the released instance.
        prefab_id: PrefabId,
    },

    /// The identity is registered for a different instance type than the one requested.
    #[error("prefab {prefab_id} is registered for instances of type {expected}, not {actual}")]
    PrefabTypeMismatch {
        /// Identity of the prefab.
        prefab_id: PrefabId,

        /// Name of the instance type the prefab was registered with.
        expected: &'static str,

        /// Name of the instance type used in the failed operation.
        actual: &'static str,
    },
}

/// A specialized `Result` type for pool registry operations, returning the crate's
/// [`Error`] type as the error value.
pub type Result<T> = std::result::Result<T, Error>;
