//! Bulk kernels over interleaved complex slices.
//!
//! A slice of `2 * n` scalars holds `n` complex values as `re, im, re, im`.
//! Both operands must have the same length, and that length must be a whole
//! number of vectors; anything else is fatal.
//!
//! | Method | Use for |
//! |--------|---------|
//! | `scalar_*` | Reference results in tests |
//! | `mult_complex`, `inner_product` | One lattice block on one thread |
//! | `par_*` | Whole lattices, split over rayon tasks |

use std::ops::Add;

use num::complex::Complex;
use num::Zero;
use rayon::prelude::*;

use crate::error::{fatal, LaneError};
use crate::simd::fixedsize::{F32x16, F64x8};
use crate::simd::traits::{Reduce, SimdComplex, SimdComplexSlice, SimdVec};
use crate::PARALLEL_CHUNK_SIZE;

#[inline(always)]
fn check_operands(left: usize, right: usize, lanes: usize) {
    if left != right {
        fatal(LaneError::LengthMismatch { left, right });
    }
    if left % lanes != 0 {
        fatal(LaneError::NotLaneMultiple { len: left, lanes });
    }
}

#[inline(always)]
fn mult_complex_block<T: Copy, V: SimdComplex<T>>(a: &[T], b: &[T], c: &mut [T]) {
    for ((a_chunk, b_chunk), c_chunk) in a
        .chunks_exact(V::LANES)
        .zip(b.chunks_exact(V::LANES))
        .zip(c.chunks_exact_mut(V::LANES))
    {
        let product = V::new(a_chunk).mult_complex(V::new(b_chunk));
        // SAFETY: `c_chunk` holds exactly `V::LANES` scalars.
        unsafe { product.store_at(c_chunk.as_mut_ptr()) };
    }
}

#[inline(always)]
fn inner_product_block<T, V>(a: &[T], b: &[T]) -> Complex<T>
where
    T: Copy + Zero,
    V: SimdComplex<T> + Add<Output = V> + Reduce<Complex<T>>,
{
    let mut acc = V::splat(T::zero());
    for (a_chunk, b_chunk) in a.chunks_exact(V::LANES).zip(b.chunks_exact(V::LANES)) {
        acc = acc + V::new(a_chunk).conj().mult_complex(V::new(b_chunk));
    }
    Reduce::<Complex<T>>::reduce(acc)
}

#[inline(always)]
fn complex_pairs<T: Copy>(s: &[T]) -> impl Iterator<Item = Complex<T>> + '_ {
    s.chunks_exact(2).map(|p| Complex::new(p[0], p[1]))
}

macro_rules! impl_complex_slice {
    ($t:ty, $v:ty) => {
        impl<'b> SimdComplexSlice<&'b [$t]> for &[$t] {
            type Output = Vec<$t>;
            type Scalar = Complex<$t>;

            fn mult_complex(self, rhs: &'b [$t]) -> Self::Output {
                check_operands(self.len(), rhs.len(), <$v as SimdVec<$t>>::LANES);
                let mut c = vec![0.0; self.len()];
                mult_complex_block::<$t, $v>(self, rhs, &mut c);
                c
            }

            fn par_mult_complex(self, rhs: &'b [$t]) -> Self::Output {
                check_operands(self.len(), rhs.len(), <$v as SimdVec<$t>>::LANES);
                log::trace!(
                    "par_mult_complex: {} lanes in chunks of {}",
                    self.len(),
                    PARALLEL_CHUNK_SIZE
                );
                let mut c = vec![0.0; self.len()];
                c.par_chunks_mut(PARALLEL_CHUNK_SIZE)
                    .zip(self.par_chunks(PARALLEL_CHUNK_SIZE))
                    .zip(rhs.par_chunks(PARALLEL_CHUNK_SIZE))
                    .for_each(|((c_chunk, a_chunk), b_chunk)| {
                        mult_complex_block::<$t, $v>(a_chunk, b_chunk, c_chunk);
                    });
                c
            }

            fn scalar_mult_complex(self, rhs: &'b [$t]) -> Self::Output {
                check_operands(self.len(), rhs.len(), <$v as SimdVec<$t>>::LANES);
                complex_pairs(self)
                    .zip(complex_pairs(rhs))
                    .flat_map(|(x, y)| {
                        let p = x * y;
                        [p.re, p.im]
                    })
                    .collect()
            }

            fn inner_product(self, rhs: &'b [$t]) -> Self::Scalar {
                check_operands(self.len(), rhs.len(), <$v as SimdVec<$t>>::LANES);
                inner_product_block::<$t, $v>(self, rhs)
            }

            fn par_inner_product(self, rhs: &'b [$t]) -> Self::Scalar {
                check_operands(self.len(), rhs.len(), <$v as SimdVec<$t>>::LANES);
                log::trace!(
                    "par_inner_product: {} lanes in chunks of {}",
                    self.len(),
                    PARALLEL_CHUNK_SIZE
                );
                self.par_chunks(PARALLEL_CHUNK_SIZE)
                    .zip(rhs.par_chunks(PARALLEL_CHUNK_SIZE))
                    .map(|(a_chunk, b_chunk)| inner_product_block::<$t, $v>(a_chunk, b_chunk))
                    .reduce(Complex::zero, |x, y| x + y)
            }

            fn scalar_inner_product(self, rhs: &'b [$t]) -> Self::Scalar {
                check_operands(self.len(), rhs.len(), <$v as SimdVec<$t>>::LANES);
                complex_pairs(self)
                    .zip(complex_pairs(rhs))
                    .fold(Complex::zero(), |acc, (x, y)| acc + x.conj() * y)
            }
        }
    };
}

impl_complex_slice!(f32, F32x16);
impl_complex_slice!(f64, F64x8);
