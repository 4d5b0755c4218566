//! Approximate comparisons of vectors and matrices.
//!
//! [`Vector`] and [`Matrix`] implement the comparison traits of the [`approx`][::approx] crate
//! element by element, so the `assert_abs_diff_eq!`, `assert_relative_eq!` and `assert_ulps_eq!`
//! macros work on them directly. Two values compare equal if every pair of elements does.
//!
//! ```
//! # use inopine::*;
//! use approx::assert_relative_eq;
//!
//! let v = vec4(0.1f64, 1.0, 2.0, 3.0) + vec4(0.2f64, 0.0, 0.0, 0.0);
//! assert_ne!(v, vec4(0.3f64, 1.0, 2.0, 3.0));
//! assert_relative_eq!(v, vec4(0.3f64, 1.0, 2.0, 3.0));
//! ```

use ::approx::{AbsDiffEq, RelativeEq, UlpsEq};

use crate::{simd::Element, Matrix, Vector};

macro_rules! approx_impls {
    ($([$($generics:tt)*] $ty:ty;)+) => {
        $(
            impl<T: Element + AbsDiffEq, $($generics)*> AbsDiffEq for $ty
            where
                T::Epsilon: Copy,
            {
                type Epsilon = T::Epsilon;

                fn default_epsilon() -> Self::Epsilon {
                    T::default_epsilon()
                }

                fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
                    self.as_array()
                        .iter()
                        .zip(other.as_array())
                        .all(|(a, b)| a.abs_diff_eq(b, epsilon))
                }
            }

            impl<T: Element + RelativeEq, $($generics)*> RelativeEq for $ty
            where
                T::Epsilon: Copy,
            {
                fn default_max_relative() -> Self::Epsilon {
                    T::default_max_relative()
                }

                fn relative_eq(
                    &self,
                    other: &Self,
                    epsilon: Self::Epsilon,
                    max_relative: Self::Epsilon,
                ) -> bool {
                    self.as_array()
                        .iter()
                        .zip(other.as_array())
                        .all(|(a, b)| a.relative_eq(b, epsilon, max_relative))
                }
            }

            impl<T: Element + UlpsEq, $($generics)*> UlpsEq for $ty
            where
                T::Epsilon: Copy,
            {
                fn default_max_ulps() -> u32 {
                    T::default_max_ulps()
                }

                fn ulps_eq(&self, other: &Self, epsilon: Self::Epsilon, max_ulps: u32) -> bool {
                    self.as_array()
                        .iter()
                        .zip(other.as_array())
                        .all(|(a, b)| a.ulps_eq(b, epsilon, max_ulps))
                }
            }
        )+
    };
}

approx_impls! {
    [const N: usize] Vector<T, N>;
    [] Matrix<T>;
}
