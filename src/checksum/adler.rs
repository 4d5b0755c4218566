use super::Checksum;

const MODULUS: u32 = 65521;

/// The Adler-32 checksum (RFC 1950).
///
/// # Examples
///
/// ```
/// # use inopine::*;
/// assert_eq!(Adler32::compute(b""), 1);
/// assert_eq!(Adler32::compute(b"Wikipedia"), 0x11E6_0398);
/// ```
#[derive(Debug)]
pub struct Adler32;

impl Checksum for Adler32 {
    type Output = u32;

    fn compute(data: &[u8]) -> u32 {
        let (low, high) = data.iter().fold((1, 0), |(low, high), &byte| {
            let low = (low + u32::from(byte)) % MODULUS;
            (low, (high + low) % MODULUS)
        });
        (high << 16) | low
    }
}
