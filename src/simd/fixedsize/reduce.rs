//! Horizontal reductions.
//!
//! Sums use a pairwise tree by default. With the `ordered-reduction`
//! feature they accumulate left to right from zero instead. Complex
//! reductions sum the even lanes into the real part and the odd lanes into
//! the imaginary part.

use num::complex::Complex;

use crate::simd::fixedsize::{LaneKind, Vector};
use crate::simd::traits::Reduce;

#[inline(always)]
fn horizontal_sum<T: LaneKind, const N: usize>(lanes: [T; N], add: impl Fn(T, T) -> T) -> T {
    if cfg!(feature = "ordered-reduction") {
        return lanes.into_iter().fold(T::ZERO, &add);
    }
    let mut buf = lanes;
    let mut width = N;
    while width > 1 {
        let half = width / 2;
        for i in 0..half {
            buf[i] = add(buf[i], buf[i + half]);
        }
        width = half;
    }
    buf[0]
}

macro_rules! impl_float_reduce {
    ($($t:ty),*) => {$(
        impl<const N: usize> Reduce<$t> for Vector<$t, N> {
            #[inline(always)]
            fn reduce(self) -> $t {
                horizontal_sum(self.elements, |a, b| a + b)
            }
        }

        impl<const N: usize> Reduce<Complex<$t>> for Vector<$t, N> {
            #[inline(always)]
            fn reduce(self) -> Complex<$t> {
                let re = horizontal_sum(self.masked(&Self::EVEN).elements, |a, b| a + b);
                let im = horizontal_sum(self.masked(&Self::ODD).elements, |a, b| a + b);
                Complex::new(re, im)
            }
        }
    )*};
}

impl_float_reduce!(f32, f64);

impl<const N: usize> Reduce<u32> for Vector<u32, N> {
    #[inline(always)]
    fn reduce(self) -> u32 {
        horizontal_sum(self.elements, u32::wrapping_add)
    }
}

/// Reduces `v` to the scalar kind named by the caller.
///
/// ```rust
/// use lattice_simd::simd::{reduce, F64x8, SimdVec};
///
/// let total: f64 = reduce(F64x8::splat(0.5));
/// assert_eq!(total, 4.0);
/// ```
#[inline(always)]
pub fn reduce<Out, V: Reduce<Out>>(v: V) -> Out {
    v.reduce()
}
