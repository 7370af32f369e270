//! Vector types and the capability traits they implement.
//!
//! The active backend is selected at compile time. The only backend shipped
//! is [`fixedsize`], which holds each 512-bit register as a fixed-size lane
//! array and expresses every lane reorder as a precomputed index table.

pub mod fixedsize;
pub mod prefetch;
pub mod slice;
pub mod traits;

pub use fixedsize::convert::PrecisionChange;
pub use fixedsize::reduce::reduce;
pub use fixedsize::{F16x32, F32x16, F64x8, FixedSize, LaneKind, U32x16, Vector};
pub use prefetch::{prefetch_hint_t0, v_prefetch0, NoPrefetch};
pub use traits::{
    PrecisionConvert, PrefetchHint, Reduce, SimdBackend, SimdComplex, SimdComplexSlice,
    SimdExchange, SimdPermute, SimdRotate, SimdVec,
};

/// Backend chosen for this build.
pub type Active = FixedSize;

/// Reduced precision vector, used for halved communication volume.
pub type SimdHtype = <Active as SimdBackend>::Half;
/// Single precision vector.
pub type SimdFtype = <Active as SimdBackend>::Single;
/// Double precision vector.
pub type SimdDtype = <Active as SimdBackend>::Double;
/// Integer vector.
pub type SimdItype = <Active as SimdBackend>::Integer;
