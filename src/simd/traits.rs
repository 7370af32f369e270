use num::complex::Complex;
use std::ops::{Add, AddAssign, Div, Mul, Sub, SubAssign};

use crate::error::Result;

/// Lane container operations shared by every vector kind.
pub trait SimdVec<T: Copy>: Copy + Sized {
    /// Number of `T` lanes in one register.
    const LANES: usize;

    /// Creates a vector from the first `LANES` scalars of `slice`.
    ///
    /// A slice shorter than `LANES` is fatal.
    fn new(slice: &[T]) -> Self;

    /// Like [`SimdVec::new`] but reports a short slice instead of aborting.
    fn try_new(slice: &[T]) -> Result<Self>;

    /// Broadcasts `value` into every lane.
    fn splat(value: T) -> Self;

    /// Checks if the pointer is aligned to the register width.
    fn is_aligned(ptr: *const T) -> bool;

    /// Loads `LANES` contiguous scalars. Unaligned pointers are fine.
    ///
    /// # Safety
    ///
    /// `ptr` must be valid for reads of `LANES` scalars.
    unsafe fn load(ptr: *const T) -> Self;

    /// Loads `LANES` contiguous scalars from a register-aligned address.
    /// A misaligned pointer is fatal.
    ///
    /// # Safety
    ///
    /// `ptr` must be valid for reads of `LANES` scalars.
    unsafe fn load_aligned(ptr: *const T) -> Self;

    /// Stores all lanes at `ptr`.
    ///
    /// # Safety
    ///
    /// `ptr` must be valid for writes of `LANES` scalars and must not overlap
    /// the vector being stored.
    unsafe fn store_at(&self, ptr: *mut T);

    /// Stores all lanes at `ptr` with a non-temporal hint.
    ///
    /// The observable effect matches [`SimdVec::store_at`]. There is no
    /// ordering guarantee against a later ordinary load of the same address
    /// without an external fence.
    ///
    /// # Safety
    ///
    /// Same contract as [`SimdVec::store_at`].
    unsafe fn stream_at(&self, ptr: *mut T);

    /// Returns lane `index`.
    fn lane(&self, index: usize) -> T;

    fn as_slice(&self) -> &[T];

    fn to_vec(self) -> Vec<T> {
        self.as_slice().to_vec()
    }
}

/// Arithmetic on vectors holding interleaved complex numbers: even lanes are
/// real parts, odd lanes imaginary parts.
pub trait SimdComplex<T: Copy>: SimdVec<T> {
    /// Lanes alternate `re, im, re, im, ...`.
    fn splat_complex(re: T, im: T) -> Self;

    /// Loads `LANES / 2` complex scalars.
    ///
    /// # Safety
    ///
    /// `ptr` must be valid for reads of `LANES / 2` complex scalars.
    unsafe fn load_complex(ptr: *const Complex<T>) -> Self;

    /// Creates a vector from the first `LANES / 2` complex scalars of `slice`.
    fn from_complex_slice(slice: &[Complex<T>]) -> Self;

    /// Complex product of every lane pair.
    fn mult_complex(self, rhs: Self) -> Self;

    /// Real part of the complex product, written to both lanes of each pair.
    fn mult_real_part(self, rhs: Self) -> Self;

    /// `acc + self.mult_real_part(rhs)`.
    fn madd_real_part(self, rhs: Self, acc: Self) -> Self;

    /// Negates the imaginary lanes.
    fn conj(self) -> Self;

    /// Multiplies every complex lane pair by `i`.
    fn times_i(self) -> Self;

    /// Multiplies every complex lane pair by `-i`.
    fn times_minus_i(self) -> Self;
}

/// Butterfly permutations within one vector.
///
/// Level `k` swaps lane `i` with lane `i ^ (LANES >> (k + 1))`: level 0 swaps
/// the two halves, the last level swaps adjacent lanes.
pub trait SimdPermute: Sized {
    /// `log2(LANES)`. Levels at or past this are the identity.
    const LEVELS: usize;

    fn permute(self, level: usize) -> Self;

    #[inline(always)]
    fn permute0(self) -> Self {
        self.permute(0)
    }

    #[inline(always)]
    fn permute1(self) -> Self {
        self.permute(1)
    }

    #[inline(always)]
    fn permute2(self) -> Self {
        self.permute(2)
    }

    #[inline(always)]
    fn permute3(self) -> Self {
        self.permute(3)
    }
}

/// Cyclic lane rotation.
pub trait SimdRotate: Sized {
    /// Rotates left by `n` lanes: lane `i` of the result is lane
    /// `(i + n) % LANES` of `self`. `n` may be `0..=LANES`; anything larger is
    /// fatal.
    fn rotate(self, n: usize) -> Self;

    /// Rotation by a compile-time amount, taken modulo `LANES`.
    fn rotate_by<const N: usize>(self) -> Self;
}

/// Paired-vector interleave at decreasing strides.
///
/// For `mask = LANES >> (level + 1)`, lane `i` of `out1` is
/// `in1[i & !mask]` when `i & mask == 0` and `in2[i & !mask]` otherwise;
/// lane `i` of `out2` is `in1[i | mask]` or `in2[i | mask]` likewise.
/// Every level is its own inverse.
pub trait SimdExchange: Sized {
    /// Levels `0..EXCHANGE_LEVELS` are implemented; others are fatal.
    const EXCHANGE_LEVELS: usize;

    fn exchange(self, other: Self, level: usize) -> (Self, Self);

    #[inline(always)]
    fn exchange0(self, other: Self) -> (Self, Self) {
        self.exchange(other, 0)
    }

    #[inline(always)]
    fn exchange1(self, other: Self) -> (Self, Self) {
        self.exchange(other, 1)
    }

    #[inline(always)]
    fn exchange2(self, other: Self) -> (Self, Self) {
        self.exchange(other, 2)
    }

    #[inline(always)]
    fn exchange3(self, other: Self) -> (Self, Self) {
        self.exchange(other, 3)
    }
}

/// Horizontal reduction of a vector to a scalar of kind `Out`.
///
/// Only meaningful pairings are implemented, so an undefined pairing fails
/// to compile.
pub trait Reduce<Out> {
    fn reduce(self) -> Out;
}

/// Inert prefetch entry points. Kernels call them unconditionally; a backend
/// may do nothing.
pub trait PrefetchHint {
    fn prefetch0(size: usize, ptr: *const u8);
    fn prefetch_hint_t0(ptr: *const u8);
}

/// Narrowing and widening between the float kinds of one backend.
///
/// Conversions concatenate lanes in order, so an interleaved complex layout
/// keeps real and imaginary parts in place.
pub trait PrecisionConvert {
    type Half;
    type Single;
    type Double;

    fn s_to_h(sa: Self::Single, sb: Self::Single) -> Self::Half;
    fn h_to_s(h: Self::Half) -> (Self::Single, Self::Single);
    fn d_to_s(a: Self::Double, b: Self::Double) -> Self::Single;
    fn s_to_d(s: Self::Single) -> (Self::Double, Self::Double);
    fn d_to_h(a: Self::Double, b: Self::Double, c: Self::Double, d: Self::Double) -> Self::Half;
    fn h_to_d(h: Self::Half) -> (Self::Double, Self::Double, Self::Double, Self::Double);
}

/// The capability set of one instruction-set backend.
pub trait SimdBackend {
    const NAME: &'static str;

    /// Register width in bytes.
    const WIDTH_BYTES: usize;

    type Half: SimdVec<half::f16> + SimdPermute + SimdRotate + SimdExchange;

    type Single: SimdComplex<f32>
        + SimdPermute
        + SimdRotate
        + SimdExchange
        + Reduce<f32>
        + Reduce<Complex<f32>>
        + Add<Output = Self::Single>
        + Sub<Output = Self::Single>
        + Mul<Output = Self::Single>
        + Div<Output = Self::Single>
        + AddAssign
        + SubAssign;

    type Double: SimdComplex<f64>
        + SimdPermute
        + SimdRotate
        + SimdExchange
        + Reduce<f64>
        + Reduce<Complex<f64>>
        + Add<Output = Self::Double>
        + Sub<Output = Self::Double>
        + Mul<Output = Self::Double>
        + Div<Output = Self::Double>
        + AddAssign
        + SubAssign;

    type Integer: SimdVec<u32>
        + SimdPermute
        + SimdRotate
        + SimdExchange
        + Reduce<u32>
        + Add<Output = Self::Integer>
        + Sub<Output = Self::Integer>
        + Mul<Output = Self::Integer>;

    type Convert: PrecisionConvert<Half = Self::Half, Single = Self::Single, Double = Self::Double>;

    type Prefetch: PrefetchHint;
}

/// Bulk kernels over interleaved complex slices, in scalar, SIMD and
/// multi-threaded SIMD flavours.
pub trait SimdComplexSlice<Rhs = Self> {
    type Output;
    type Scalar;

    fn mult_complex(self, rhs: Rhs) -> Self::Output;
    fn par_mult_complex(self, rhs: Rhs) -> Self::Output;
    fn scalar_mult_complex(self, rhs: Rhs) -> Self::Output;

    /// Sum over sites of `conj(self) * rhs`.
    fn inner_product(self, rhs: Rhs) -> Self::Scalar;
    fn par_inner_product(self, rhs: Rhs) -> Self::Scalar;
    fn scalar_inner_product(self, rhs: Rhs) -> Self::Scalar;
}
