//! Prefetch hooks.
//!
//! Kernels call these around their streaming loops. The fixed-size backend
//! leaves prefetching to the hardware, so both hooks compile to nothing.

use crate::simd::traits::{PrefetchHint, SimdBackend};
use crate::simd::Active;

/// A prefetch capability that does no work.
#[derive(Copy, Clone, Debug, Default)]
pub struct NoPrefetch;

impl PrefetchHint for NoPrefetch {
    #[inline(always)]
    fn prefetch0(_size: usize, _ptr: *const u8) {}

    #[inline(always)]
    fn prefetch_hint_t0(_ptr: *const u8) {}
}

/// Prefetches `size` bytes at `ptr` into the nearest cache level.
#[inline(always)]
pub fn v_prefetch0(size: usize, ptr: *const u8) {
    <<Active as SimdBackend>::Prefetch as PrefetchHint>::prefetch0(size, ptr)
}

/// Prefetches the cache line holding `ptr` with the T0 locality hint.
#[inline(always)]
pub fn prefetch_hint_t0(ptr: *const u8) {
    <<Active as SimdBackend>::Prefetch as PrefetchHint>::prefetch_hint_t0(ptr)
}
