//! Small fixed-size linear algebra with compile-time SIMD selection, plus table-driven checksums.
//!
//! # Overview
//!
//! - [`Vector`] stores `N` lanes of a primitive element type. [`Vec4`] is the main workhorse and
//!   supports arithmetic between different element types, dot and cross products, and
//!   normalization. [`Vec2`] exists for sizes and positions.
//! - [`Matrix`] is a row-major 4x4 matrix with the usual transformation builders (rotation,
//!   translation, scaling, perspective projection, look-at), and products with row vectors and
//!   other matrices.
//! - [`Checksum`] is implemented by [`Crc`] (any width and polynomial) and [`Adler32`].
//!
//! # Hardware acceleration
//!
//! Whether a vector operation runs in a hardware register is decided per element type when the
//! crate is compiled, based on the target features that are enabled (see [`Element`] and
//! [`is_accelerated`]). Operations on two vectors with different element types, or with a type
//! that has no register on the target, process one lane at a time. Both paths produce the same
//! results, except for rounding differences in floating-point dot products.
//!
//! The `simd` cargo feature (enabled by default) can be turned off to force the scalar path for
//! every type.
//!
//! A default x86_64 build only enables SSE2, so only `f32` gets a register. The integer and `f64`
//! kernels are compiled (and tested) when their target features are enabled:
//!
//! ```text
//! RUSTFLAGS="-C target-feature=+ssse3,+sse4.1,+avx" cargo test
//! RUSTFLAGS="-C target-cpu=native" cargo test
//! cargo test --no-default-features
//! ```
//!
//! Integer addition, subtraction and multiplication wrap on overflow on every path.
//!
//! # Goals & Non-Goals
//!
//! - Only vectors with 2 and 4 lanes and 4x4 matrices are supported. There is no general
//!   inverse or linear system solver.
//! - Element types are the primitive integers and floats. Mixing them in one operation promotes
//!   the result to the "larger" type (see [`Promote`]).
//! - Degenerate inputs (normalizing a zero vector, `look_at` with coincident points) produce
//!   infinities or NaNs instead of errors.
//!
//! # Examples
//!
//! ```
//! # use inopine::*;
//! let p = vec4(1.0f32, 0.0, 0.0, 1.0);
//! let m = Mat4f::rotation_z(std::f32::consts::FRAC_PI_2) * Mat4f::translation(1.0, 2.0, 3.0);
//! let q = p * m;
//! approx::assert_abs_diff_eq!(q, vec4(-1.0f32, -3.0, -3.0, 1.0), epsilon = 1e-6);
//! ```

mod approx;
mod checksum;
mod matrix;
mod simd;
mod traits;
mod vector;

pub use checksum::*;
pub use matrix::*;
pub use simd::{is_accelerated, shares_register, Element, Kernel, Register};
pub use traits::*;
pub use vector::*;
