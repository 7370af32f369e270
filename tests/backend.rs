//! The build-time backend and its uniform call surface.

use lattice_simd::simd::{
    prefetch_hint_t0, v_prefetch0, Active, PrecisionConvert, SimdBackend, SimdDtype, SimdFtype,
    SimdHtype, SimdItype, SimdVec,
};
use lattice_simd::GEN_SIMD_WIDTH;

/// A small kernel written only against the backend's associated types.
fn axpy_real<B: SimdBackend>(a: f32, x: &[f32], y: &[f32]) -> f32 {
    let x = B::Single::new(x);
    let y = B::Single::new(y);
    let r = B::Single::splat(a) * x + y;
    lattice_simd::simd::Reduce::<f32>::reduce(r)
}

#[test]
fn test_lane_counts_follow_width() {
    assert_eq!(<SimdHtype as SimdVec<half::f16>>::LANES * 2, GEN_SIMD_WIDTH);
    assert_eq!(<SimdFtype as SimdVec<f32>>::LANES * 4, GEN_SIMD_WIDTH);
    assert_eq!(<SimdDtype as SimdVec<f64>>::LANES * 8, GEN_SIMD_WIDTH);
    assert_eq!(<SimdItype as SimdVec<u32>>::LANES * 4, GEN_SIMD_WIDTH);
    assert_eq!(<Active as SimdBackend>::WIDTH_BYTES, GEN_SIMD_WIDTH);
}

#[test]
fn test_generic_kernel_over_backend() {
    let x = [1.0f32; 16];
    let y = [0.5f32; 16];
    assert_eq!(axpy_real::<Active>(2.0, &x, &y), 40.0);
}

#[test]
fn test_backend_conversion_capability() {
    type Convert = <Active as SimdBackend>::Convert;
    let s = SimdFtype::splat(0.5);
    let (a, b) = Convert::s_to_d(s);
    assert_eq!(Convert::d_to_s(a, b), s);
}

#[test]
fn test_prefetch_hooks_are_inert() {
    let data = vec![3.0f64; 64];
    v_prefetch0(data.len() * 8, data.as_ptr().cast());
    prefetch_hint_t0(data.as_ptr().cast());
    assert!(data.iter().all(|x| *x == 3.0));
}
