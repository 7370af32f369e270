//! Fixed-size 512-bit backend.
//!
//! Every vector is a 64-byte aligned lane array. Lane reorders go through
//! index tables that are built by `const fn` from the stride formulas in
//! [`tables`], so each pattern is one fixed gather the compiler can lower to
//! a single shuffle for the target.
//!
//! # Available Types
//!
//! - [`F16x32`]: 32 half precision lanes (communication buffers)
//! - [`F32x16`]: 16 single precision lanes, or 8 interleaved complex values
//! - [`F64x8`]: 8 double precision lanes, or 4 interleaved complex values
//! - [`U32x16`]: 16 unsigned 32-bit integer lanes

use std::fmt::Debug;
use std::mem::size_of;
use std::ops::Neg;

use half::f16;

use crate::simd::prefetch::NoPrefetch;
use crate::simd::traits::SimdBackend;
use crate::GEN_SIMD_WIDTH;

pub mod arith;
pub mod convert;
pub mod lanes;
pub mod permute;
pub mod reduce;
pub mod tables;

/// Lanes of each kind in one register.
pub const F16_LANES: usize = GEN_SIMD_WIDTH / size_of::<f16>();
pub const F32_LANES: usize = GEN_SIMD_WIDTH / size_of::<f32>();
pub const F64_LANES: usize = GEN_SIMD_WIDTH / size_of::<f64>();
pub const U32_LANES: usize = GEN_SIMD_WIDTH / size_of::<u32>();

pub type F16x32 = Vector<f16, F16_LANES>;
pub type F32x16 = Vector<f32, F32_LANES>;
pub type F64x8 = Vector<f64, F64_LANES>;
pub type U32x16 = Vector<u32, U32_LANES>;

mod sealed {
    pub trait Sealed {}

    impl Sealed for half::f16 {}
    impl Sealed for f32 {}
    impl Sealed for f64 {}
    impl Sealed for u32 {}
}

/// Scalar kinds that can fill a lane.
pub trait LaneKind: sealed::Sealed + Copy + PartialEq + Debug + Send + Sync + 'static {
    const NAME: &'static str;
    const ZERO: Self;
    /// Number of exchange levels implemented for this kind.
    const EXCHANGE_LEVELS: usize;
}

impl LaneKind for f16 {
    const NAME: &'static str = "f16";
    const ZERO: Self = f16::ZERO;
    const EXCHANGE_LEVELS: usize = 3;
}

impl LaneKind for f32 {
    const NAME: &'static str = "f32";
    const ZERO: Self = 0.0;
    const EXCHANGE_LEVELS: usize = 4;
}

// The finest exchange would need a sub-lane stride at 8 lanes.
impl LaneKind for f64 {
    const NAME: &'static str = "f64";
    const ZERO: Self = 0.0;
    const EXCHANGE_LEVELS: usize = 3;
}

impl LaneKind for u32 {
    const NAME: &'static str = "u32";
    const ZERO: Self = 0;
    const EXCHANGE_LEVELS: usize = 3;
}

/// A register-sized vector of `N` lanes of kind `T`.
///
/// Only lane counts that exactly fill [`GEN_SIMD_WIDTH`] bytes can be built;
/// anything else is rejected when the constructor is monomorphized.
#[derive(Copy, Clone, Debug, PartialEq)]
#[repr(C, align(64))]
pub struct Vector<T, const N: usize> {
    elements: [T; N],
}

impl<T: LaneKind, const N: usize> Vector<T, N> {
    const WIDTH_CHECK: () = assert!(
        N * size_of::<T>() == GEN_SIMD_WIDTH && N % 2 == 0,
        "lane count must fill the register exactly"
    );

    pub(crate) const BUTTERFLY: [[usize; N]; tables::MAX_LEVELS] = tables::butterfly_levels::<N>();
    pub(crate) const PAIR_SWAP: [usize; N] = tables::butterfly::<N>(tables::log2(N) - 1);
    pub(crate) const DUP_EVEN: [usize; N] = tables::duplicate::<N>(false);
    pub(crate) const DUP_ODD: [usize; N] = tables::duplicate::<N>(true);
    pub(crate) const EVEN: [bool; N] = tables::parity::<N>(false);
    pub(crate) const ODD: [bool; N] = tables::parity::<N>(true);
    pub(crate) const EXCHANGE: [([usize; N], [usize; N]); tables::EXCHANGE_TABLES] =
        tables::exchange_levels::<N>();

    #[inline(always)]
    pub(crate) fn from_array(elements: [T; N]) -> Self {
        #[allow(clippy::let_unit_value)]
        let () = Self::WIDTH_CHECK;
        Self { elements }
    }

    /// Copies the lanes out.
    #[inline(always)]
    pub fn to_array(self) -> [T; N] {
        self.elements
    }

    /// Single-source gather: lane `i` becomes `self[table[i]]`.
    #[inline(always)]
    pub(crate) fn lookup(self, table: &[usize; N]) -> Self {
        Self::from_array(std::array::from_fn(|i| self.elements[table[i]]))
    }

    /// Two-source gather over `self ++ other`.
    #[inline(always)]
    pub(crate) fn lookup2(self, other: Self, table: &[usize; N]) -> Self {
        Self::from_array(std::array::from_fn(|i| {
            let src = table[i];
            if src < N {
                self.elements[src]
            } else {
                other.elements[src - N]
            }
        }))
    }

    #[inline(always)]
    pub(crate) fn zip_map(self, other: Self, f: impl Fn(T, T) -> T) -> Self {
        Self::from_array(std::array::from_fn(|i| {
            f(self.elements[i], other.elements[i])
        }))
    }

    /// Zeroes every lane outside `mask`.
    #[inline(always)]
    pub(crate) fn masked(self, mask: &[bool; N]) -> Self {
        Self::from_array(std::array::from_fn(|i| {
            if mask[i] {
                self.elements[i]
            } else {
                T::ZERO
            }
        }))
    }
}

impl<T: LaneKind + Neg<Output = T>, const N: usize> Vector<T, N> {
    /// Negates the lanes selected by `mask`.
    #[inline(always)]
    pub(crate) fn negate_where(self, mask: &[bool; N]) -> Self {
        Self::from_array(std::array::from_fn(|i| {
            if mask[i] {
                -self.elements[i]
            } else {
                self.elements[i]
            }
        }))
    }
}

impl<T: LaneKind, const N: usize> From<[T; N]> for Vector<T, N> {
    #[inline(always)]
    fn from(elements: [T; N]) -> Self {
        Self::from_array(elements)
    }
}

/// The fixed-size 512-bit backend.
#[derive(Copy, Clone, Debug, Default)]
pub struct FixedSize;

impl SimdBackend for FixedSize {
    const NAME: &'static str = "fixedsize-512";
    const WIDTH_BYTES: usize = GEN_SIMD_WIDTH;

    type Half = F16x32;
    type Single = F32x16;
    type Double = F64x8;
    type Integer = U32x16;
    type Convert = convert::PrecisionChange;
    type Prefetch = NoPrefetch;
}
