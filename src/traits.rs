use std::ops;

use crate::simd::Element;

/// Types that support the trigonometric functions needed to build rotation matrices.
pub trait Trig {
    /// Computes the sine of the angle `self` (in radians).
    fn sin(self) -> Self;
    /// Computes the cosine of the angle `self` (in radians).
    fn cos(self) -> Self;
    /// Computes the tangent of the angle `self` (in radians).
    fn tan(self) -> Self;
}

/// Types that support computing their square root.
///
/// Integer square roots are computed in `f64` and truncated toward zero. The square root of a
/// negative integer is 0.
pub trait Sqrt {
    fn sqrt(self) -> Self;
}

/// Addition, subtraction and multiplication that wrap around on integer overflow.
///
/// Floating-point types implement these as the plain operators. All lane arithmetic goes through
/// this trait, which matches the wrapping behavior of the integer hardware registers.
pub trait WrappingOps {
    fn wrapping_add(self, rhs: Self) -> Self;
    fn wrapping_sub(self, rhs: Self) -> Self;
    fn wrapping_mul(self, rhs: Self) -> Self;
}

/// Types that have a "zero" value (an additive identity).
pub trait Zero {
    /// The *0* value of this type.
    const ZERO: Self;
}

/// Types that have a "one" value (a multiplicative identity).
pub trait One {
    /// The *1* value of this type.
    const ONE: Self;
}

/// A trait for numeric types that support basic arithmetic operations.
///
/// Unlike a full field, this does not require negation, so unsigned integers qualify. Operations
/// that need negation (eg. [`Matrix::translation`][crate::Matrix::translation]) ask for
/// [`ops::Neg`] separately.
pub trait Number:
    Zero
    + One
    + WrappingOps
    + ops::Add<Output = Self>
    + ops::Sub<Output = Self>
    + ops::Mul<Output = Self>
    + ops::Div<Output = Self>
    + PartialEq
    + PartialOrd
    + Copy
{
}
impl<T> Number for T where
    T: Zero
        + One
        + WrappingOps
        + ops::Add<Output = Self>
        + ops::Sub<Output = Self>
        + ops::Mul<Output = Self>
        + ops::Div<Output = Self>
        + PartialEq
        + PartialOrd
        + Copy
{
}

/// Lossy numeric conversion from `T`, with the semantics of an `as` cast.
///
/// Implemented between every pair of [`Element`] types.
pub trait CastFrom<T> {
    fn cast_from(value: T) -> Self;
}

/// Arithmetic promotion of a pair of element types.
///
/// When two vectors (or matrices) with different element types are combined, both operands are
/// converted to `Output` first. The higher-ranked of the two types wins, using the ranking
///
/// `i8 < u8 < i16 < u16 < i32 < u32 < i64 < u64 < f32 < f64`
///
/// Combining a type with itself yields the same type.
///
/// # Examples
///
/// ```
/// # use inopine::*;
/// let a = vec4(1.0f32, 2.0, 3.0, 4.0);
/// let b = vec4(0.5f64, 0.5, 0.5, 0.5);
/// let sum: Vec4<f64> = a + b;
/// assert_eq!(sum, vec4(1.5f64, 2.5, 3.5, 4.5));
/// ```
pub trait Promote<Rhs> {
    type Output: Element;
}

/// The element type produced by combining `T` and `U`.
pub type Promoted<T, U> = <T as Promote<U>>::Output;

macro_rules! constants {
    ($($t:ty => $zero:literal, $one:literal;)+) => {
        $(
            impl Zero for $t {
                const ZERO: Self = $zero;
            }
            impl One for $t {
                const ONE: Self = $one;
            }
        )+
    };
}
constants! {
    i8 => 0, 1;
    i16 => 0, 1;
    i32 => 0, 1;
    i64 => 0, 1;
    u8 => 0, 1;
    u16 => 0, 1;
    u32 => 0, 1;
    u64 => 0, 1;
    f32 => 0.0, 1.0;
    f64 => 0.0, 1.0;
}

macro_rules! float_fns {
    ($($t:ty),+) => {
        $(
            impl Trig for $t {
                fn sin(self) -> Self {
                    self.sin()
                }

                fn cos(self) -> Self {
                    self.cos()
                }

                fn tan(self) -> Self {
                    self.tan()
                }
            }

            impl Sqrt for $t {
                fn sqrt(self) -> Self {
                    self.sqrt()
                }
            }

            impl WrappingOps for $t {
                #[inline]
                fn wrapping_add(self, rhs: Self) -> Self {
                    self + rhs
                }

                #[inline]
                fn wrapping_sub(self, rhs: Self) -> Self {
                    self - rhs
                }

                #[inline]
                fn wrapping_mul(self, rhs: Self) -> Self {
                    self * rhs
                }
            }
        )+
    };
}
float_fns!(f32, f64);

macro_rules! int_fns {
    ($($t:ty),+) => {
        $(
            impl Sqrt for $t {
                fn sqrt(self) -> Self {
                    (self as f64).sqrt() as $t
                }
            }

            impl WrappingOps for $t {
                #[inline]
                fn wrapping_add(self, rhs: Self) -> Self {
                    <$t>::wrapping_add(self, rhs)
                }

                #[inline]
                fn wrapping_sub(self, rhs: Self) -> Self {
                    <$t>::wrapping_sub(self, rhs)
                }

                #[inline]
                fn wrapping_mul(self, rhs: Self) -> Self {
                    <$t>::wrapping_mul(self, rhs)
                }
            }
        )+
    };
}
int_fns!(i8, i16, i32, i64, u8, u16, u32, u64);

// Generates `CastFrom<Src> for Dst` for every (Dst, Src) pair of the listed types.
macro_rules! casts {
    ($($t:ty),+) => {
        casts!(@each [$($t),+] $($t),+);
    };
    (@each $all:tt $($dst:ty),+) => {
        $( casts!(@from $dst $all); )+
    };
    (@from $dst:ty [$($src:ty),+]) => {
        $(
            impl CastFrom<$src> for $dst {
                #[inline]
                fn cast_from(value: $src) -> Self {
                    value as $dst
                }
            }
        )+
    };
}
casts!(i8, i16, i32, i64, u8, u16, u32, u64, f32, f64);

// Types must be listed from lowest to highest rank.
macro_rules! promotions {
    () => {};
    ($low:ty $(, $high:ty)*) => {
        impl Promote<$low> for $low {
            type Output = $low;
        }
        $(
            impl Promote<$high> for $low {
                type Output = $high;
            }
            impl Promote<$low> for $high {
                type Output = $high;
            }
        )*
        promotions!($($high),*);
    };
}
promotions!(i8, u8, i16, u16, i32, u32, i64, u64, f32, f64);
