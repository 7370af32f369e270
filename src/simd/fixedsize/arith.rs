//! Elementwise arithmetic and interleaved-complex operations.
//!
//! Complex products use the complex multiply-accumulate contract: a rotation
//! 0 step adds `(a_re * b_re, a_re * b_im)` to the accumulator and a rotation
//! 90 step adds `(-a_im * b_im, a_im * b_re)`. Running both gives the full
//! product. Both steps are a lane duplication, an optional pair swap with
//! selective negation, and one multiply-add.

use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use num::complex::Complex;

use crate::error::{fatal, LaneError};
use crate::simd::fixedsize::Vector;
use crate::simd::traits::{SimdComplex, SimdVec};

macro_rules! impl_binary_op {
    ($t:ty, $trait:ident, $method:ident, $assign_trait:ident, $assign_method:ident, $op:expr) => {
        impl<const N: usize> $trait for Vector<$t, N> {
            type Output = Self;

            #[inline(always)]
            fn $method(self, rhs: Self) -> Self::Output {
                self.zip_map(rhs, $op)
            }
        }

        impl<const N: usize> $assign_trait for Vector<$t, N> {
            #[inline(always)]
            fn $assign_method(&mut self, rhs: Self) {
                *self = $trait::$method(*self, rhs);
            }
        }
    };
}

macro_rules! impl_float_ops {
    ($($t:ty),*) => {$(
        impl_binary_op!($t, Add, add, AddAssign, add_assign, |a, b| a + b);
        impl_binary_op!($t, Sub, sub, SubAssign, sub_assign, |a, b| a - b);
        impl_binary_op!($t, Mul, mul, MulAssign, mul_assign, |a, b| a * b);
        // Real division only, complex-encoded lanes are divided one by one.
        impl_binary_op!($t, Div, div, DivAssign, div_assign, |a, b| a / b);

        impl<const N: usize> Neg for Vector<$t, N> {
            type Output = Self;

            #[inline(always)]
            fn neg(self) -> Self::Output {
                self.negate_where(&[true; N])
            }
        }
    )*};
}

impl_float_ops!(f32, f64);

// Integer lanes wrap like the hardware does.
impl_binary_op!(u32, Add, add, AddAssign, add_assign, u32::wrapping_add);
impl_binary_op!(u32, Sub, sub, SubAssign, sub_assign, u32::wrapping_sub);
impl_binary_op!(u32, Mul, mul, MulAssign, mul_assign, u32::wrapping_mul);

macro_rules! impl_complex {
    ($($t:ty),*) => {$(
        impl<const N: usize> Vector<$t, N> {
            /// `self + (a_re * b_re, a_re * b_im)` per lane pair.
            #[inline(always)]
            fn cmla_rot0(self, a: Self, b: Self) -> Self {
                self + a.lookup(&Self::DUP_EVEN) * b
            }

            /// `self + (-a_im * b_im, a_im * b_re)` per lane pair.
            #[inline(always)]
            fn cmla_rot90(self, a: Self, b: Self) -> Self {
                let b_rotated = b.lookup(&Self::PAIR_SWAP).negate_where(&Self::EVEN);
                self + a.lookup(&Self::DUP_ODD) * b_rotated
            }
        }

        impl<const N: usize> SimdComplex<$t> for Vector<$t, N> {
            #[inline(always)]
            fn splat_complex(re: $t, im: $t) -> Self {
                Self::from_array(std::array::from_fn(|i| if i % 2 == 0 { re } else { im }))
            }

            #[inline(always)]
            unsafe fn load_complex(ptr: *const Complex<$t>) -> Self {
                // SAFETY: `Complex` is `repr(C)` as `[re, im]`, and the caller
                // guarantees `N / 2` readable values.
                unsafe { Self::load(ptr.cast::<$t>()) }
            }

            fn from_complex_slice(slice: &[Complex<$t>]) -> Self {
                if slice.len() * 2 < N {
                    fatal(LaneError::ShortBuffer {
                        needed: N,
                        got: slice.len() * 2,
                    });
                }
                // SAFETY: the slice holds at least `N / 2` complex values.
                unsafe { Self::load_complex(slice.as_ptr()) }
            }

            #[inline(always)]
            fn mult_complex(self, rhs: Self) -> Self {
                Self::splat(0.0)
                    .cmla_rot0(self, rhs)
                    .cmla_rot90(self, rhs)
            }

            #[inline(always)]
            fn mult_real_part(self, rhs: Self) -> Self {
                self.mult_complex(rhs).lookup(&Self::DUP_EVEN)
            }

            #[inline(always)]
            fn madd_real_part(self, rhs: Self, acc: Self) -> Self {
                acc + self.mult_real_part(rhs)
            }

            #[inline(always)]
            fn conj(self) -> Self {
                self.negate_where(&Self::ODD)
            }

            /// `(re, im) -> (-im, re)`.
            #[inline(always)]
            fn times_i(self) -> Self {
                self.lookup(&Self::PAIR_SWAP).negate_where(&Self::EVEN)
            }

            /// `(re, im) -> (im, -re)`.
            #[inline(always)]
            fn times_minus_i(self) -> Self {
                self.lookup(&Self::PAIR_SWAP).negate_where(&Self::ODD)
            }
        }
    )*};
}

impl_complex!(f32, f64);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simd::fixedsize::{F32x16, F64x8, U32x16};

    fn pairs_f64(v: F64x8) -> Vec<(f64, f64)> {
        v.as_slice().chunks(2).map(|p| (p[0], p[1])).collect()
    }

    #[test]
    fn test_elementwise_ops() {
        let a = F64x8::from([1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0]);
        let b = F64x8::splat(2.0);
        assert_eq!((a + b).to_array(), [3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0]);
        assert_eq!((a - b).to_array(), [-1.0, 0.0, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
        assert_eq!((a * b).to_array(), [2.0, 4.0, 6.0, 8.0, 10.0, 12.0, 14.0, 16.0]);
        assert_eq!((a / b).to_array(), [0.5, 1.0, 1.5, 2.0, 2.5, 3.0, 3.5, 4.0]);
        assert_eq!((-a).lane(7), -8.0);

        let mut c = a;
        c += b;
        c -= b;
        c *= b;
        c /= b;
        assert_eq!(c, a);
    }

    #[test]
    fn test_division_by_zero_is_ieee() {
        let r = F32x16::splat(1.0) / F32x16::splat(0.0);
        assert!(r.as_slice().iter().all(|x| *x == f32::INFINITY));
        let r = F32x16::splat(0.0) / F32x16::splat(0.0);
        assert!(r.as_slice().iter().all(|x| x.is_nan()));
    }

    #[test]
    fn test_integer_ops_wrap() {
        let a = U32x16::splat(u32::MAX);
        let one = U32x16::splat(1);
        assert_eq!((a + one).to_array(), [0; 16]);
        assert_eq!((U32x16::splat(0) - one).to_array(), [u32::MAX; 16]);
        assert_eq!((U32x16::splat(0x8000_0000) * U32x16::splat(2)).to_array(), [0; 16]);
    }

    #[test]
    fn test_mult_complex_single_pair() {
        let a = F64x8::splat_complex(1.0, 2.0);
        let b = F64x8::splat_complex(3.0, 4.0);
        for pair in pairs_f64(a.mult_complex(b)) {
            assert_eq!(pair, (-5.0, 10.0));
        }
    }

    #[test]
    fn test_mult_real_part_duplicates_real() {
        let a = F64x8::splat_complex(1.0, 2.0);
        let b = F64x8::splat_complex(3.0, 4.0);
        assert_eq!(a.mult_real_part(b).to_array(), [-5.0; 8]);

        let c = F64x8::splat_complex(0.5, 0.25);
        for pair in pairs_f64(a.madd_real_part(b, c)) {
            assert_eq!(pair, (-4.5, -4.75));
        }
    }

    #[test]
    fn test_conj_and_rotations() {
        let v = F64x8::from([1.0, 2.0, -3.0, 4.0, 0.0, -0.5, 8.0, 9.0]);
        assert_eq!(
            v.conj().to_array(),
            [1.0, -2.0, -3.0, -4.0, 0.0, 0.5, 8.0, -9.0]
        );
        assert_eq!(
            v.times_i().to_array(),
            [-2.0, 1.0, -4.0, -3.0, 0.5, 0.0, -9.0, 8.0]
        );
        assert_eq!(
            v.times_minus_i().to_array(),
            [2.0, -1.0, 4.0, 3.0, -0.5, -0.0, 9.0, -8.0]
        );
    }

    #[test]
    fn test_from_complex_slice() {
        let data: Vec<Complex<f32>> = (0..8).map(|i| Complex::new(i as f32, -(i as f32))).collect();
        let v = F32x16::from_complex_slice(&data);
        assert_eq!(v.lane(4), 2.0);
        assert_eq!(v.lane(5), -2.0);
    }

    #[test]
    #[should_panic(expected = "buffer too short")]
    fn test_from_complex_slice_short_panics() {
        let data = [Complex::new(1.0f64, 0.0); 3];
        let _ = F64x8::from_complex_slice(&data);
    }
}
