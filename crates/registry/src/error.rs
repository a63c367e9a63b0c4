//! crates/registry/src/error.rs
//! Error taxonomy for administrative registry operations.

use thiserror::Error;

/// Error returned by administrative operations on the level registry.
///
/// Logging call sites never see these values: [`LevelResolver`] absorbs
/// every failure and falls back to the process default, so only operator
/// surfaces (a console, an admin endpoint) deal with this enum.
///
/// [`LevelResolver`]: crate::LevelResolver
#[derive(Copy, Clone, Debug, Eq, PartialEq, Error)]
pub enum RegistryError {
    /// A mutating call was given an empty component name.
    #[error("component name must not be empty")]
    InvalidComponentName,
    /// The volatile store could not be read or written.
    ///
    /// Treated as transient; administrative callers are expected to degrade
    /// to a no-op rather than take down the host logging pipeline.
    #[error("level registry is unavailable")]
    Unavailable,
}
