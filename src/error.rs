//! Error type shared by all operations of the crate.

use thiserror::Error;

/// Failure kinds reported by group, point and key operations.
///
/// `InProgress` is not a failure: it is returned by restartable
/// operations when the operation budget (see `restart::set_max_ops()`)
/// has been exhausted, and the same call should be made again, with the
/// same arguments and restart context, to continue the computation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum Error {
    /// Malformed or out-of-range argument.
    #[error("bad input data")]
    BadInputData,

    /// A point or scalar failed curve membership or range validation.
    #[error("invalid key")]
    InvalidKey,

    /// The destination buffer cannot hold the encoded value.
    #[error("buffer too small")]
    BufferTooSmall,

    /// The curve is not compiled in, or the operation is not defined
    /// for the curve type.
    #[error("feature unavailable")]
    FeatureUnavailable,

    /// Allocation of a precomputed table or scratch value failed.
    #[error("allocation failed")]
    AllocFailed,

    /// The random source failed, or rejection sampling ran out of tries.
    #[error("random generation failed")]
    RandomFailed,

    /// Operation budget exhausted; call again to resume.
    #[error("operation in progress")]
    InProgress,
}

pub type Result<T> = core::result::Result<T, Error>;
