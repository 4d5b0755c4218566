use std::{
    array,
    collections::BTreeMap,
    fmt,
    marker::PhantomData,
    sync::{PoisonError, RwLock},
};

use super::Checksum;

/// CRC-32 (as used by zlib, PNG and Ethernet), without the final inversion.
pub type Crc32 = Crc<u32, 0xEDB8_8320>;
/// CRC-32C (Castagnoli), without the final inversion.
pub type Crc32c = Crc<u32, 0x82F6_3B78>;
/// CRC-16/MODBUS.
pub type Crc16 = Crc<u16, 0xA001>;

/// A reflected cyclic redundancy check with result type `T` and polynomial `POLY`.
///
/// `POLY` is given in reflected (LSB-first) form and truncated to the width of `T`. The running
/// value starts with all bits set and is returned as-is: no final XOR is applied. Checksums that
/// are specified with an inverted output (like the common CRC-32) are obtained with `!`.
///
/// The 256-entry lookup table is built on first use and shared by every call with the same `T` and
/// `POLY` for the rest of the process.
///
/// # Examples
///
/// ```
/// # use inopine::*;
/// assert_eq!(Crc32::compute(b"123456789"), 0x340B_C6D9);
/// assert_eq!(!Crc32::compute(b"123456789"), 0xCBF4_3926);
/// assert_eq!(Crc16::compute(b"123456789"), 0x4B37);
/// assert_eq!(Crc32::compute(b""), u32::MAX);
/// ```
pub struct Crc<T, const POLY: u64>(PhantomData<T>);

impl<T: CrcWidth, const POLY: u64> Crc<T, POLY> {
    /// Returns the lookup table for this width and polynomial.
    ///
    /// Every call returns the same instance.
    pub fn table() -> &'static [T; 256] {
        T::table(POLY)
    }
}

impl<T: CrcWidth, const POLY: u64> Checksum for Crc<T, POLY> {
    type Output = T;

    fn compute(data: &[u8]) -> T {
        let table = Self::table();
        data.iter()
            .fold(T::INIT, |acc, &byte| T::step(table, acc, byte))
    }
}

impl<T, const POLY: u64> fmt::Debug for Crc<T, POLY> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Crc<{}, {:#x}>", std::any::type_name::<T>(), POLY)
    }
}

/// Unsigned integer types usable as the result of a [`Crc`].
pub trait CrcWidth: Copy + Send + Sync + 'static {
    /// The initial running value (all bits set).
    const INIT: Self;

    /// Returns the shared lookup table for `poly`, building it if this is the first use.
    fn table(poly: u64) -> &'static [Self; 256];

    /// Folds one byte into the running value `acc`.
    fn step(table: &[Self; 256], acc: Self, byte: u8) -> Self;
}

macro_rules! widths {
    ($($t:ty),+) => {
        $(
            impl CrcWidth for $t {
                const INIT: Self = <$t>::MAX;

                fn table(poly: u64) -> &'static [Self; 256] {
                    static TABLES: RwLock<BTreeMap<u64, &'static [$t; 256]>> =
                        RwLock::new(BTreeMap::new());

                    // Only complete tables are inserted, so poisoning never leaves the map torn.
                    if let Some(&table) = TABLES
                        .read()
                        .unwrap_or_else(PoisonError::into_inner)
                        .get(&poly)
                    {
                        return table;
                    }

                    let mut tables = TABLES.write().unwrap_or_else(PoisonError::into_inner);
                    *tables.entry(poly).or_insert_with(|| {
                        log::debug!(
                            "building {}-bit CRC table for polynomial {:#x}",
                            <$t>::BITS,
                            poly,
                        );
                        let poly = poly as $t;
                        let table: [$t; 256] = array::from_fn(|dividend| {
                            (0..8).fold(dividend as $t, |rem, _| {
                                if rem & 1 == 1 {
                                    (rem >> 1) ^ poly
                                } else {
                                    rem >> 1
                                }
                            })
                        });
                        Box::leak(Box::new(table))
                    })
                }

                #[inline]
                fn step(table: &[Self; 256], acc: Self, byte: u8) -> Self {
                    // `checked_shr` clears 8-bit values instead of overflowing.
                    table[((acc ^ byte as $t) & 0xFF) as usize] ^ acc.checked_shr(8).unwrap_or(0)
                }
            }
        )+
    };
}

widths!(u8, u16, u32, u64);
