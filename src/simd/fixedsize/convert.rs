//! Precision changes between half, single and double vectors.
//!
//! Narrowing concatenates the converted inputs in order and widening splits
//! a vector into consecutive halves (or quarters), so the interleaved
//! complex layout is untouched. Rounding is round-to-nearest-even.

use half::f16;

use crate::simd::fixedsize::{F16x32, F32x16, F64x8, F32_LANES, F64_LANES};
use crate::simd::traits::PrecisionConvert;

/// Precision conversions of the fixed-size backend.
#[derive(Copy, Clone, Debug, Default)]
pub struct PrecisionChange;

impl PrecisionChange {
    /// Double to half in two stages, through single precision.
    #[inline(always)]
    pub fn d_to_h_composed(a: F64x8, b: F64x8, c: F64x8, d: F64x8) -> F16x32 {
        Self::s_to_h(Self::d_to_s(a, b), Self::d_to_s(c, d))
    }

    /// Double to half in one pass over the output lanes.
    ///
    /// Each lane is still rounded to single precision first, so the result
    /// is bitwise identical to [`PrecisionChange::d_to_h_composed`].
    #[inline(always)]
    pub fn d_to_h_fused(a: F64x8, b: F64x8, c: F64x8, d: F64x8) -> F16x32 {
        let sources = [a.elements, b.elements, c.elements, d.elements];
        F16x32::from_array(std::array::from_fn(|i| {
            f16::from_f32(sources[i / F64_LANES][i % F64_LANES] as f32)
        }))
    }

    #[inline(always)]
    pub fn h_to_d_composed(h: F16x32) -> (F64x8, F64x8, F64x8, F64x8) {
        let (sa, sb) = Self::h_to_s(h);
        let (a, b) = Self::s_to_d(sa);
        let (c, d) = Self::s_to_d(sb);
        (a, b, c, d)
    }

    #[inline(always)]
    pub fn h_to_d_fused(h: F16x32) -> (F64x8, F64x8, F64x8, F64x8) {
        let quarter = |q: usize| {
            F64x8::from_array(std::array::from_fn(|i| {
                h.elements[q * F64_LANES + i].to_f64()
            }))
        };
        (quarter(0), quarter(1), quarter(2), quarter(3))
    }
}

impl PrecisionConvert for PrecisionChange {
    type Half = F16x32;
    type Single = F32x16;
    type Double = F64x8;

    #[inline(always)]
    fn s_to_h(sa: F32x16, sb: F32x16) -> F16x32 {
        F16x32::from_array(std::array::from_fn(|i| {
            if i < F32_LANES {
                f16::from_f32(sa.elements[i])
            } else {
                f16::from_f32(sb.elements[i - F32_LANES])
            }
        }))
    }

    #[inline(always)]
    fn h_to_s(h: F16x32) -> (F32x16, F32x16) {
        let sa = F32x16::from_array(std::array::from_fn(|i| h.elements[i].to_f32()));
        let sb = F32x16::from_array(std::array::from_fn(|i| {
            h.elements[F32_LANES + i].to_f32()
        }));
        (sa, sb)
    }

    #[inline(always)]
    fn d_to_s(a: F64x8, b: F64x8) -> F32x16 {
        F32x16::from_array(std::array::from_fn(|i| {
            if i < F64_LANES {
                a.elements[i] as f32
            } else {
                b.elements[i - F64_LANES] as f32
            }
        }))
    }

    #[inline(always)]
    fn s_to_d(s: F32x16) -> (F64x8, F64x8) {
        let a = F64x8::from_array(std::array::from_fn(|i| f64::from(s.elements[i])));
        let b = F64x8::from_array(std::array::from_fn(|i| {
            f64::from(s.elements[F64_LANES + i])
        }));
        (a, b)
    }

    #[inline(always)]
    fn d_to_h(a: F64x8, b: F64x8, c: F64x8, d: F64x8) -> F16x32 {
        if cfg!(feature = "fused-conversion") {
            Self::d_to_h_fused(a, b, c, d)
        } else {
            Self::d_to_h_composed(a, b, c, d)
        }
    }

    #[inline(always)]
    fn h_to_d(h: F16x32) -> (F64x8, F64x8, F64x8, F64x8) {
        if cfg!(feature = "fused-conversion") {
            Self::h_to_d_fused(h)
        } else {
            Self::h_to_d_composed(h)
        }
    }
}
