use std::ptr;

use crate::error::{fatal, LaneError, Result};
use crate::simd::fixedsize::{LaneKind, Vector};
use crate::simd::traits::SimdVec;
use crate::GEN_SIMD_WIDTH;

#[inline(always)]
fn check_not_null<T>(ptr: *const T) {
    if ptr.is_null() {
        fatal(LaneError::NullPointer);
    }
}

impl<T: LaneKind, const N: usize> SimdVec<T> for Vector<T, N> {
    const LANES: usize = N;

    /// Creates a new vector from the first `N` scalars of a slice.
    #[inline(always)]
    fn new(slice: &[T]) -> Self {
        match Self::try_new(slice) {
            Ok(v) => v,
            Err(err) => fatal(err),
        }
    }

    #[inline(always)]
    fn try_new(slice: &[T]) -> Result<Self> {
        if slice.len() < N {
            return Err(LaneError::ShortBuffer {
                needed: N,
                got: slice.len(),
            });
        }
        Ok(Self::from_array(std::array::from_fn(|i| slice[i])))
    }

    #[inline(always)]
    fn splat(value: T) -> Self {
        Self::from_array([value; N])
    }

    #[inline(always)]
    fn is_aligned(ptr: *const T) -> bool {
        (ptr as usize) % GEN_SIMD_WIDTH == 0
    }

    #[inline(always)]
    unsafe fn load(ptr: *const T) -> Self {
        check_not_null(ptr);
        // SAFETY: the caller guarantees `N` readable scalars at `ptr`.
        Self::from_array(unsafe { ptr::read_unaligned(ptr.cast::<[T; N]>()) })
    }

    #[inline(always)]
    unsafe fn load_aligned(ptr: *const T) -> Self {
        check_not_null(ptr);
        if !Self::is_aligned(ptr) {
            fatal(LaneError::Misaligned {
                addr: ptr as usize,
                alignment: GEN_SIMD_WIDTH,
            });
        }
        // SAFETY: readable per the caller, and register alignment exceeds the
        // alignment of `[T; N]`.
        Self::from_array(unsafe { ptr::read(ptr.cast::<[T; N]>()) })
    }

    #[inline(always)]
    unsafe fn store_at(&self, ptr: *mut T) {
        check_not_null(ptr);
        // SAFETY: the caller guarantees `N` writable scalars at `ptr`.
        unsafe { ptr::write_unaligned(ptr.cast::<[T; N]>(), self.elements) }
    }

    #[inline(always)]
    unsafe fn stream_at(&self, ptr: *mut T) {
        check_not_null(ptr);
        // No portable non-temporal store exists; the copy has the same
        // observable effect as `store_at`.
        // SAFETY: the caller guarantees `N` writable scalars at `ptr` that do
        // not overlap `self`.
        unsafe { ptr::copy_nonoverlapping(self.elements.as_ptr(), ptr, N) }
    }

    #[inline(always)]
    fn lane(&self, index: usize) -> T {
        self.elements[index]
    }

    #[inline(always)]
    fn as_slice(&self) -> &[T] {
        &self.elements
    }
}

#[cfg(test)]
mod tests {
    use half::f16;

    use crate::simd::fixedsize::{F16x32, F32x16, F64x8, U32x16, F32_LANES};
    use crate::simd::traits::SimdVec;

    // Helper for creating aligned data arrays.
    #[repr(align(64))]
    struct AlignedData<const N: usize>([f32; N]);

    // Helper for precise f32 slice comparison (bitwise for NaNs).
    fn assert_f32_slice_eq_bitwise(a: &[f32], b: &[f32]) {
        assert_eq!(
            a.len(),
            b.len(),
            "Slice lengths differ (left: {}, right: {})",
            a.len(),
            b.len()
        );
        for i in 0..a.len() {
            assert_eq!(
                a[i].to_bits(),
                b[i].to_bits(),
                "Elements at index {} differ: left={}({:08x}), right={}({:08x})",
                i,
                a[i],
                a[i].to_bits(),
                b[i],
                b[i].to_bits()
            );
        }
    }

    #[test]
    fn test_new_full_slice() {
        let data: Vec<f32> = (0..F32_LANES).map(|i| i as f32).collect();
        let v = F32x16::new(&data);
        assert_f32_slice_eq_bitwise(v.as_slice(), &data);
    }

    #[test]
    fn test_new_larger_slice() {
        let data = [2.5f32; F32_LANES + 4];
        let v = F32x16::new(&data);
        assert_f32_slice_eq_bitwise(&v.to_vec(), &data[..F32_LANES]);
    }

    #[test]
    #[should_panic(expected = "buffer too short: need 16 lanes, got 5")]
    fn test_new_short_slice_panics() {
        F32x16::new(&[1.0; 5]);
    }

    #[test]
    fn test_try_new_short_slice() {
        let err = F64x8::try_new(&[1.0; 3]).unwrap_err();
        assert_eq!(
            err,
            crate::error::LaneError::ShortBuffer { needed: 8, got: 3 }
        );
    }

    #[test]
    fn test_splat_every_kind() {
        assert!(F16x32::splat(f16::ONE)
            .as_slice()
            .iter()
            .all(|&h| h == f16::ONE));
        assert_eq!(F64x8::splat(-3.0).to_array(), [-3.0; 8]);
        assert_eq!(U32x16::splat(7).to_array(), [7; 16]);
        let v = F32x16::splat(std::f32::consts::E);
        assert_f32_slice_eq_bitwise(v.as_slice(), &[std::f32::consts::E; F32_LANES]);
    }

    #[test]
    fn test_is_aligned() {
        let aligned = AlignedData([0.0f32; F32_LANES]);
        let unaligned_ptr = unsafe { aligned.0.as_ptr().add(1) };
        assert!(F32x16::is_aligned(aligned.0.as_ptr()));
        assert!(!F32x16::is_aligned(unaligned_ptr));
    }

    #[test]
    fn test_load_unaligned() {
        let data: Vec<f32> = (0..F32_LANES + 1).map(|i| i as f32).collect();
        let v = unsafe { F32x16::load(data[1..].as_ptr()) };
        assert_f32_slice_eq_bitwise(v.as_slice(), &data[1..]);
    }

    #[test]
    fn test_load_aligned() {
        let data = AlignedData([4.0f32; F32_LANES]);
        let v = unsafe { F32x16::load_aligned(data.0.as_ptr()) };
        assert_f32_slice_eq_bitwise(v.as_slice(), &data.0);
    }

    #[test]
    #[should_panic(expected = "requires 64 byte alignment")]
    fn test_load_aligned_misaligned_panics() {
        let data = AlignedData([0.0f32; F32_LANES * 2]);
        let _ = unsafe { F32x16::load_aligned(data.0.as_ptr().add(1)) };
    }

    #[test]
    #[should_panic(expected = "null pointer")]
    fn test_load_null_panics() {
        let _ = unsafe { F64x8::load(std::ptr::null()) };
    }

    #[test]
    fn test_store_and_stream_match() {
        let data: Vec<f32> = (0..F32_LANES).map(|i| i as f32 * 0.5).collect();
        let v = F32x16::new(&data);

        let mut stored = [f32::NAN; F32_LANES + 1];
        let mut streamed = [f32::NAN; F32_LANES + 1];
        unsafe {
            v.store_at(stored.as_mut_ptr().add(1));
            v.stream_at(streamed.as_mut_ptr().add(1));
        }
        assert_f32_slice_eq_bitwise(&stored[1..], &data);
        assert_f32_slice_eq_bitwise(&stored, &streamed);
        assert!(stored[0].is_nan());
    }

    #[test]
    fn test_lane_access() {
        let v = U32x16::from(std::array::from_fn(|i| i as u32 * 3));
        assert_eq!(v.lane(0), 0);
        assert_eq!(v.lane(15), 45);
    }
}
