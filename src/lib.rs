//! Fixed-width SIMD lane manipulation and interleaved-complex arithmetic.
//!
//! `lattice-simd` gives stencil kernels over a regular lattice one uniform
//! call surface over four lane kinds (half, single and double precision
//! floats, and 32-bit integers) held in 512-bit vectors:
//!
//! - splat, load, store and non-temporal store ([`simd::traits::SimdVec`])
//! - elementwise `+ - * /` through the `std::ops` operators
//! - interleaved complex math: multiply, conjugate, rotation by `i` and `-i`,
//!   real-part multiply(-add) ([`simd::traits::SimdComplex`])
//! - the butterfly permutations, the paired-vector exchange network and
//!   cyclic rotation used for neighbour communication
//! - precision changes that keep the interleaved layout
//!   ([`simd::PrecisionChange`])
//! - horizontal reductions to real or complex scalars ([`simd::reduce`])
//!
//! Width and backend are fixed when the crate is compiled; nothing is
//! detected at runtime. Precondition violations are fatal: they are logged
//! through the `log` facade and then panic (see [`error::fatal`]).
//!
//! ```rust
//! use lattice_simd::simd::{reduce, F32x16, SimdComplex};
//! use num::complex::Complex32;
//!
//! let a = F32x16::splat_complex(1.0, 2.0);
//! let b = F32x16::splat_complex(3.0, 4.0);
//! let total: Complex32 = reduce(a.mult_complex(b));
//! assert_eq!(total, Complex32::new(-5.0 * 8.0, 10.0 * 8.0));
//! ```

pub mod error;
pub mod simd;

/// Hardware vector register width in bytes.
pub const GEN_SIMD_WIDTH: usize = 64;

/// Number of scalars each rayon task handles in the bulk slice kernels.
/// Always a multiple of every lane count.
pub const PARALLEL_CHUNK_SIZE: usize = 16 * 1024;
