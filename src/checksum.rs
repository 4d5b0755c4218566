//! Checksums over byte slices.
//!
//! Every algorithm is a type implementing [`Checksum`]. Algorithms are stateless: each call to
//! [`Checksum::compute`] processes one complete message. State that can be shared between calls,
//! like the lookup table of a [`Crc`], is computed once per process and reused.
//!
//! # Examples
//!
//! ```
//! # use inopine::*;
//! assert_eq!(Adler32::compute(b"Wikipedia"), 0x11E6_0398);
//! assert_eq!(!Crc32::compute(b"123456789"), 0xCBF4_3926);
//! ```

mod adler;
mod crc;

pub use adler::Adler32;
pub use crc::{Crc, Crc16, Crc32, Crc32c, CrcWidth};

/// A checksum algorithm.
pub trait Checksum {
    /// The checksum value.
    type Output;

    /// Computes the checksum of `data`.
    fn compute(data: &[u8]) -> Self::Output;

    /// Computes the checksum of the in-memory bytes of a slice of plain-old-data values.
    ///
    /// The result depends on the byte order of the target.
    ///
    /// # Examples
    ///
    /// ```
    /// # use inopine::*;
    /// let points = [vec4(1.0f32, 2.0, 3.0, 1.0), vec4(-1.0f32, 0.5, 0.0, 1.0)];
    /// assert_eq!(
    ///     Crc32::compute_pod(&points),
    ///     Crc32::compute(bytemuck::cast_slice(&points)),
    /// );
    /// ```
    fn compute_pod<P: bytemuck::Pod>(values: &[P]) -> Self::Output {
        Self::compute(bytemuck::cast_slice(values))
    }
}
