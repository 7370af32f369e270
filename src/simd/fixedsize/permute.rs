//! Butterfly permutations, cyclic rotation and the paired-vector exchange.

use crate::error::{fatal, LaneError};
use crate::simd::fixedsize::{tables, LaneKind, Vector};
use crate::simd::traits::{SimdExchange, SimdPermute, SimdRotate};

impl<T: LaneKind, const N: usize> SimdPermute for Vector<T, N> {
    const LEVELS: usize = tables::log2(N);

    #[inline(always)]
    fn permute(self, level: usize) -> Self {
        if level < Self::LEVELS {
            self.lookup(&Self::BUTTERFLY[level])
        } else {
            self
        }
    }
}

/// The rotation table for one amount, fixed at compile time.
struct Rotation<const N: usize, const K: usize>;

impl<const N: usize, const K: usize> Rotation<N, K> {
    const TABLE: [usize; N] = tables::rotation::<N>(K);
}

// One arm per amount so every case is a fixed-distance rotate. Amounts past
// the lane count fall through to the fatal arm.
macro_rules! rotate_cases {
    ($v:ident, $n:ident; $($k:literal)+) => {
        match $n {
            $( $k if $k < N + 1 => $v.rotate_by::<$k>(), )+
            amount => fatal(LaneError::RotationOutOfRange { amount, lanes: N }),
        }
    };
}

impl<T: LaneKind, const N: usize> SimdRotate for Vector<T, N> {
    #[inline(always)]
    fn rotate(self, n: usize) -> Self {
        rotate_cases!(self, n;
            0 1 2 3 4 5 6 7 8 9 10 11 12 13 14 15 16
            17 18 19 20 21 22 23 24 25 26 27 28 29 30 31 32)
    }

    #[inline(always)]
    fn rotate_by<const K: usize>(self) -> Self {
        self.lookup(&Rotation::<N, K>::TABLE)
    }
}

impl<T: LaneKind, const N: usize> SimdExchange for Vector<T, N> {
    const EXCHANGE_LEVELS: usize = T::EXCHANGE_LEVELS;

    #[inline(always)]
    fn exchange(self, other: Self, level: usize) -> (Self, Self) {
        if level >= Self::EXCHANGE_LEVELS {
            fatal(LaneError::UnsupportedExchange {
                level,
                kind: T::NAME,
            });
        }
        let (out1, out2) = Self::EXCHANGE[level];
        (self.lookup2(other, &out1), self.lookup2(other, &out2))
    }
}
