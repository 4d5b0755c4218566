//! Compile-time selection between hardware registers and scalar lane arithmetic.
//!
//! Every element type implements [`Element`], which records (in [`Element::REGISTER`]) whether
//! four lanes of that type map to a hardware register on the current target. The decision is made
//! with `#[cfg(target_feature = ...)]` when the crate is compiled, so there is no runtime CPU
//! detection and no dispatch cost: a vector operation either always uses the register, or never
//! does.
//!
//! Element types whose register exists additionally implement [`Kernel`], the set of primitive
//! register operations. Code that needs a register (eg. [`Vector::to_register`]) is bounded on
//! [`Kernel`] and thus cannot be instantiated with a scalar-only type.
//!
//! | Type  | x86_64                | aarch64 |
//! |-------|-----------------------|---------|
//! | `f32` | SSE2                  | NEON    |
//! | `i32` | SSE4.1 + SSSE3        | NEON    |
//! | `i16` | SSSE3                 | –       |
//! | `f64` | AVX                   | –       |
//!
//! All of them also require the `simd` cargo feature, which is enabled by default.
//!
//! [`Vector::to_register`]: crate::Vector::to_register

pub(crate) mod lanes;
#[cfg(all(feature = "simd", target_arch = "aarch64", target_feature = "neon"))]
mod neon;
#[cfg(all(feature = "simd", target_arch = "x86_64"))]
mod x86;

use std::fmt;

use crate::traits::{CastFrom, Number, Promote};

/// Hardware register layout used for four lanes of an element type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Register {
    /// No register; lanes are processed one at a time.
    None,
    /// Four `f32` lanes (`__m128`, `float32x4_t`).
    F32x4,
    /// Four `i32` lanes (`__m128i`, `int32x4_t`).
    I32x4,
    /// Four `i16` lanes in the lower half of an `__m128i`.
    I16x4,
    /// Four `f64` lanes (`__m256d`).
    F64x4,
}

/// Primitive arithmetic types that can be stored in a [`Vector`][crate::Vector] or
/// [`Matrix`][crate::Matrix].
///
/// The `*_lanes` methods operate on four lanes at once. They use the hardware register when
/// [`Element::REGISTER`] is not [`Register::None`], and plain lane-by-lane arithmetic otherwise.
/// Both produce the same results; only floating-point dot products may differ by rounding, since
/// the register sums products in a different order.
pub trait Element:
    Number
    + Promote<Self, Output = Self>
    + Default
    + fmt::Debug
    + fmt::Display
    + Send
    + Sync
    + 'static
    + CastFrom<i8>
    + CastFrom<i16>
    + CastFrom<i32>
    + CastFrom<i64>
    + CastFrom<u8>
    + CastFrom<u16>
    + CastFrom<u32>
    + CastFrom<u64>
    + CastFrom<f32>
    + CastFrom<f64>
{
    /// The register four lanes of this type are processed in.
    const REGISTER: Register;

    /// Whether this is a floating-point type.
    const FLOAT: bool;

    /// Converts `self` to another element type, like an `as` cast.
    fn cast<U: Element>(self) -> U;

    fn add_lanes(a: [Self; 4], b: [Self; 4]) -> [Self; 4] {
        lanes::add(a, b)
    }

    fn sub_lanes(a: [Self; 4], b: [Self; 4]) -> [Self; 4] {
        lanes::sub(a, b)
    }

    fn mul_lanes(a: [Self; 4], b: [Self; 4]) -> [Self; 4] {
        lanes::mul(a, b)
    }

    fn div_lanes(a: [Self; 4], b: [Self; 4]) -> [Self; 4] {
        lanes::div(a, b)
    }

    /// Sum of the products of all four lanes.
    fn dot_lanes(a: [Self; 4], b: [Self; 4]) -> Self {
        lanes::dot(a, b)
    }
}

/// Register operations for element types that have a hardware register on this target.
///
/// All operations work on exactly four lanes. Registers that are wider than four lanes (the
/// `i16` register) keep their upper lanes zeroed.
pub trait Kernel: Element {
    /// The packed hardware register type.
    type Register: Copy;

    /// Creates a register holding the lanes `x, y, z, w` (in that order, starting at lane 0).
    fn set(x: Self, y: Self, z: Self, w: Self) -> Self::Register;

    fn add(a: Self::Register, b: Self::Register) -> Self::Register;
    fn sub(a: Self::Register, b: Self::Register) -> Self::Register;
    fn mul(a: Self::Register, b: Self::Register) -> Self::Register;
    fn div(a: Self::Register, b: Self::Register) -> Self::Register;

    /// Loads four lanes from memory.
    fn load(src: &[Self; 4]) -> Self::Register;

    /// Stores the four lanes of `src` to memory.
    fn store(dst: &mut [Self; 4], src: Self::Register);

    /// Returns lane `LANE` (0 to 3) of `src`.
    fn extract<const LANE: i32>(src: Self::Register) -> Self;

    /// Computes the dot product of `a` and `b`, broadcast to every lane of the result.
    fn dot(a: Self::Register, b: Self::Register) -> Self::Register;
}

/// Returns whether four lanes of `T` are processed in a hardware register.
pub const fn is_accelerated<T: Element>() -> bool {
    !matches!(T::REGISTER, Register::None)
}

/// Returns whether an operation combining `A` and `B` lanes may use a hardware register.
///
/// This requires both types to use the *same* register layout. Mixed operations (eg. `f32` with
/// `f64`, or `i32` with `i16`) are always evaluated lane by lane.
pub const fn shares_register<A: Element, B: Element>() -> bool {
    is_accelerated::<A>() && A::REGISTER as u8 == B::REGISTER as u8
}

/// Runs a binary lane operation through `T`'s register.
#[allow(dead_code)]
#[inline]
fn via_register<T: Kernel>(
    a: [T; 4],
    b: [T; 4],
    op: fn(T::Register, T::Register) -> T::Register,
) -> [T; 4] {
    let mut out = [T::ZERO; 4];
    T::store(&mut out, op(T::load(&a), T::load(&b)));
    out
}

macro_rules! element {
    (@cast $t:ty) => {
        #[inline]
        fn cast<U: Element>(self) -> U {
            <U as CastFrom<$t>>::cast_from(self)
        }
    };
    ($t:ty, float: $float:literal) => {
        impl Element for $t {
            const REGISTER: Register = Register::None;
            const FLOAT: bool = $float;

            element!(@cast $t);
        }
    };
    ($t:ty, float: $float:literal, register: $register:ident) => {
        impl Element for $t {
            const REGISTER: Register = Register::$register;
            const FLOAT: bool = $float;

            element!(@cast $t);

            #[inline]
            fn add_lanes(a: [Self; 4], b: [Self; 4]) -> [Self; 4] {
                via_register(a, b, <$t as Kernel>::add)
            }

            #[inline]
            fn sub_lanes(a: [Self; 4], b: [Self; 4]) -> [Self; 4] {
                via_register(a, b, <$t as Kernel>::sub)
            }

            #[inline]
            fn mul_lanes(a: [Self; 4], b: [Self; 4]) -> [Self; 4] {
                via_register(a, b, <$t as Kernel>::mul)
            }

            #[inline]
            fn div_lanes(a: [Self; 4], b: [Self; 4]) -> [Self; 4] {
                via_register(a, b, <$t as Kernel>::div)
            }

            #[inline]
            fn dot_lanes(a: [Self; 4], b: [Self; 4]) -> Self {
                let (a, b) = (<$t as Kernel>::load(&a), <$t as Kernel>::load(&b));
                <$t as Kernel>::extract::<0>(<$t as Kernel>::dot(a, b))
            }
        }
    };
}

element!(i8, float: false);
element!(i64, float: false);
element!(u8, float: false);
element!(u16, float: false);
element!(u32, float: false);
element!(u64, float: false);

#[cfg(any(
    all(feature = "simd", target_arch = "x86_64"),
    all(feature = "simd", target_arch = "aarch64", target_feature = "neon"),
))]
element!(f32, float: true, register: F32x4);
#[cfg(not(any(
    all(feature = "simd", target_arch = "x86_64"),
    all(feature = "simd", target_arch = "aarch64", target_feature = "neon"),
)))]
element!(f32, float: true);

#[cfg(any(
    all(
        feature = "simd",
        target_arch = "x86_64",
        target_feature = "sse4.1",
        target_feature = "ssse3"
    ),
    all(feature = "simd", target_arch = "aarch64", target_feature = "neon"),
))]
element!(i32, float: false, register: I32x4);
#[cfg(not(any(
    all(
        feature = "simd",
        target_arch = "x86_64",
        target_feature = "sse4.1",
        target_feature = "ssse3"
    ),
    all(feature = "simd", target_arch = "aarch64", target_feature = "neon"),
)))]
element!(i32, float: false);

#[cfg(all(feature = "simd", target_arch = "x86_64", target_feature = "ssse3"))]
element!(i16, float: false, register: I16x4);
#[cfg(not(all(feature = "simd", target_arch = "x86_64", target_feature = "ssse3")))]
element!(i16, float: false);

#[cfg(all(feature = "simd", target_arch = "x86_64", target_feature = "avx"))]
element!(f64, float: true, register: F64x4);
#[cfg(not(all(feature = "simd", target_arch = "x86_64", target_feature = "avx")))]
element!(f64, float: true);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scalar_only_types() {
        assert!(!is_accelerated::<i8>());
        assert!(!is_accelerated::<u8>());
        assert!(!is_accelerated::<u16>());
        assert!(!is_accelerated::<u32>());
        assert!(!is_accelerated::<i64>());
        assert!(!is_accelerated::<u64>());
    }

    #[test]
    fn mixed_types_never_share() {
        assert!(!shares_register::<f32, f64>());
        assert!(!shares_register::<f64, f32>());
        assert!(!shares_register::<f32, i32>());
        assert!(!shares_register::<i32, i16>());
        assert!(!shares_register::<i16, i32>());
        assert!(!shares_register::<u8, u8>());
    }

    #[test]
    fn same_type_shares_iff_accelerated() {
        assert_eq!(shares_register::<f32, f32>(), is_accelerated::<f32>());
        assert_eq!(shares_register::<f64, f64>(), is_accelerated::<f64>());
        assert_eq!(shares_register::<i32, i32>(), is_accelerated::<i32>());
        assert_eq!(shares_register::<i16, i16>(), is_accelerated::<i16>());
    }

    #[test]
    #[cfg(all(feature = "simd", target_arch = "x86_64"))]
    fn sse2_baseline() {
        assert!(is_accelerated::<f32>());
        assert_eq!(f32::REGISTER, Register::F32x4);
    }

    #[test]
    #[cfg(not(feature = "simd"))]
    fn disabled() {
        assert!(!is_accelerated::<f32>());
        assert!(!is_accelerated::<f64>());
        assert!(!is_accelerated::<i32>());
        assert!(!is_accelerated::<i16>());
    }

    /// Compares the `*_lanes` operations of `T`, whichever path they take, with the fallback.
    fn agrees_with_fallback<T: Element>(a: [T; 4], b: [T; 4]) {
        assert_eq!(T::add_lanes(a, b), lanes::add(a, b));
        assert_eq!(T::sub_lanes(a, b), lanes::sub(a, b));
        assert_eq!(T::mul_lanes(a, b), lanes::mul(a, b));
        assert_eq!(T::div_lanes(a, b), lanes::div(a, b));
        if !T::FLOAT {
            assert_eq!(T::dot_lanes(a, b), lanes::dot(a, b));
        }
    }

    #[test]
    fn overflow_and_division_edge_cases() {
        agrees_with_fallback([i32::MAX, i32::MIN, 1 << 20, -7], [1, 1, 1 << 20, 2]);
        agrees_with_fallback([i16::MAX, i16::MIN, 300, -7], [1, 1, 300, 2]);
        agrees_with_fallback([i8::MAX, i8::MIN, 100, -7], [1, 1, 100, 2]);
        agrees_with_fallback([i64::MAX, i64::MIN, 1 << 40, -7], [1, 1, 1 << 40, 2]);
        agrees_with_fallback([u8::MAX, 0, 200, 7], [1, 1, 2, 2]);
        agrees_with_fallback([u16::MAX, 0, 1000, 7], [1, 1, 1000, 2]);
        agrees_with_fallback([u32::MAX, 0, 1 << 20, 7], [1, 1, 1 << 20, 2]);
        agrees_with_fallback([u64::MAX, 0, 1 << 40, 7], [1, 1, 1 << 40, 2]);
        agrees_with_fallback([f32::MAX, -1.0, 0.0, 1.0], [f32::MAX, 0.0, 3.0, -0.0]);
        agrees_with_fallback([f64::MAX, -1.0, 0.0, 1.0], [f64::MAX, 0.0, 3.0, -0.0]);

        assert_eq!(i32::add_lanes([i32::MAX; 4], [1; 4]), [i32::MIN; 4]);
        assert_eq!(i16::mul_lanes([i16::MAX; 4], [2; 4]), [-2; 4]);
        assert_eq!(i32::dot_lanes([i32::MAX, 1, 0, 0], [1, 1, 0, 0]), i32::MIN);
        assert_eq!(i32::div_lanes([-7, 7, -8, 0], [2, -2, 3, 5]), [-3, -3, -2, 0]);
    }

    #[test]
    #[should_panic]
    fn i32_division_by_zero() {
        i32::div_lanes([1; 4], [1, 1, 0, 1]);
    }

    #[test]
    #[should_panic]
    fn i16_division_by_zero() {
        i16::div_lanes([1; 4], [0; 4]);
    }

    #[test]
    fn lane_ops_match_scalar() {
        let a = [1.5f32, -2.0, 8.0, 0.25];
        let b = [0.5f32, 4.0, -2.0, 2.0];
        assert_eq!(f32::add_lanes(a, b), lanes::add(a, b));
        assert_eq!(f32::sub_lanes(a, b), lanes::sub(a, b));
        assert_eq!(f32::mul_lanes(a, b), lanes::mul(a, b));
        assert_eq!(f32::div_lanes(a, b), lanes::div(a, b));
        assert_eq!(f32::dot_lanes(a, b), lanes::dot(a, b));

        let a = [7i32, -3, 12, 1];
        let b = [2i32, 5, -4, 9];
        assert_eq!(i32::add_lanes(a, b), [9, 2, 8, 10]);
        assert_eq!(i32::mul_lanes(a, b), [14, -15, -48, 9]);
        assert_eq!(i32::div_lanes(a, b), [3, 0, -3, 0]);
        assert_eq!(i32::dot_lanes(a, b), 14 - 15 - 48 + 9);

        let a = [7i16, -3, 12, 1];
        let b = [2i16, 5, -4, 9];
        assert_eq!(i16::sub_lanes(a, b), [5, -8, 16, -8]);
        assert_eq!(i16::dot_lanes(a, b), 14 - 15 - 48 + 9);

        let a = [0.1f64, 0.2, 0.3, 0.4];
        let b = [4.0f64, 3.0, 2.0, 1.0];
        assert_eq!(f64::add_lanes(a, b), lanes::add(a, b));
        assert_eq!(f64::div_lanes(a, b), lanes::div(a, b));
    }
}
