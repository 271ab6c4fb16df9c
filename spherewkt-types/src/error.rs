//! Error type used by the crate.

use thiserror::Error;

/// Error enum.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SphereTypesError {
    /// A vector that cannot be normalized onto the unit sphere.
    #[error("cannot place vector ({0}, {1}, {2}) on the unit sphere")]
    Degenerate(f64, f64, f64),
}
