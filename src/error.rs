//! Error types for lattice-simd operations.
//!
//! Every failure in this crate is a caller bug: a buffer that is too short,
//! a pointer that breaks an alignment contract, a rotation amount past the
//! lane count or an exchange granularity the lane kind does not have. These
//! are reported through [`fatal`], which logs the diagnostic and panics.
//! [`LaneError`] is also returned by the few `try_*` entry points so callers
//! can validate input up front.

use thiserror::Error;

/// Precondition violations detected by the vector layer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LaneError {
    /// A slice did not hold enough scalars to fill a vector.
    #[error("buffer too short: need {needed} lanes, got {got}")]
    ShortBuffer {
        /// Lanes required by the vector type.
        needed: usize,
        /// Lanes actually available.
        got: usize,
    },
    /// A pointer did not meet the alignment required by an aligned access.
    #[error("misaligned pointer {addr:#x} (requires {alignment} byte alignment)")]
    Misaligned {
        /// Address of the offending pointer.
        addr: usize,
        /// Required alignment in bytes.
        alignment: usize,
    },
    /// A null pointer was passed to a load or store.
    #[error("null pointer passed to a vector load or store")]
    NullPointer,
    /// A rotation amount outside `0..=lanes`.
    #[error("rotation by {amount} is out of range for {lanes} lanes")]
    RotationOutOfRange {
        /// Requested rotation.
        amount: usize,
        /// Lane count of the vector.
        lanes: usize,
    },
    /// An exchange level with no implementation for the lane kind.
    #[error("exchange level {level} is not implemented for {kind} vectors")]
    UnsupportedExchange {
        /// Requested exchange level.
        level: usize,
        /// Lane kind name.
        kind: &'static str,
    },
    /// Two slices that must pair up lane by lane have different lengths.
    #[error("slice lengths differ (left: {left}, right: {right})")]
    LengthMismatch { left: usize, right: usize },
    /// A slice length that does not split into whole vectors.
    #[error("slice length {len} is not a multiple of {lanes} lanes")]
    NotLaneMultiple { len: usize, lanes: usize },
}

/// Result type alias for lattice-simd operations.
pub type Result<T> = std::result::Result<T, LaneError>;

/// Reports a precondition violation and aborts the current computation.
///
/// The diagnostic goes to the `log` facade at error level before the panic,
/// so it is visible even when the panic is caught further up.
#[cold]
#[inline(never)]
#[track_caller]
pub fn fatal(err: LaneError) -> ! {
    log::error!("lattice-simd precondition violated: {err}");
    panic!("{err}");
}
