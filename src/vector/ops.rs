//! Implementations of `std::ops`.

use std::ops::{
    Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign,
};

use crate::{
    simd::{lanes, Element},
    traits::{Promote, Promoted},
    Vec4,
};

use super::{lane_op, Vector};

impl<T, const N: usize> Index<usize> for Vector<T, N> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl<T, const N: usize> IndexMut<usize> for Vector<T, N> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.0[index]
    }
}

/// Lane-wise equality after promoting both sides to a common element type.
fn lanes_eq<T, U, const N: usize>(a: &[T; N], b: &[U; N]) -> bool
where
    T: Element + Promote<U>,
    U: Element,
{
    a.iter()
        .zip(b)
        .all(|(l, r)| l.cast::<Promoted<T, U>>() == r.cast::<Promoted<T, U>>())
}

// More general impl than what the derive generates.
impl<T, U, const N: usize> PartialEq<Vector<U, N>> for Vector<T, N>
where
    T: Element + Promote<U>,
    U: Element,
{
    fn eq(&self, other: &Vector<U, N>) -> bool {
        lanes_eq(&self.0, &other.0)
    }
}

impl<T, const N: usize> Eq for Vector<T, N> where T: Element + Eq {}

impl<T, U, const N: usize> PartialEq<[U; N]> for Vector<T, N>
where
    T: Element + Promote<U>,
    U: Element,
{
    fn eq(&self, other: &[U; N]) -> bool {
        lanes_eq(&self.0, other)
    }
}

/// Element-wise negation.
impl<T, const N: usize> Neg for Vector<T, N>
where
    T: Neg,
{
    type Output = Vector<T::Output, N>;

    fn neg(self) -> Self::Output {
        self.map(T::neg)
    }
}

macro_rules! binary_ops {
    ($(
        $doc:literal
        $op:ident :: $method:ident,
        $assign:ident :: $assign_method:ident,
        $lanes:ident => $scalar:ident;
    )+) => {
        $(
            #[doc = $doc]
            impl<T, U> $op<Vec4<U>> for Vec4<T>
            where
                T: Element + Promote<U>,
                U: Element,
            {
                type Output = Vec4<Promoted<T, U>>;

                #[inline]
                fn $method(self, rhs: Vec4<U>) -> Self::Output {
                    Vector(lane_op(
                        self,
                        rhs,
                        <Promoted<T, U> as Element>::$lanes,
                        lanes::$scalar,
                    ))
                }
            }

            #[doc = $doc]
            ///
            /// The result is converted back to the element type of the left-hand side.
            impl<T, U> $assign<Vec4<U>> for Vec4<T>
            where
                T: Element + Promote<U>,
                U: Element,
            {
                #[inline]
                fn $assign_method(&mut self, rhs: Vec4<U>) {
                    *self = $op::$method(*self, rhs).cast();
                }
            }
        )+
    };
}

binary_ops! {
    "Element-wise addition."
    Add::add, AddAssign::add_assign, add_lanes => add;
    "Element-wise subtraction."
    Sub::sub, SubAssign::sub_assign, sub_lanes => sub;
    "Element-wise multiplication."
    Mul::mul, MulAssign::mul_assign, mul_lanes => mul;
    "Element-wise division."
    Div::div, DivAssign::div_assign, div_lanes => div;
}

// Vector-scalar operations are implemented per element type, since a blanket `Mul<T>` impl would
// overlap with the vector-vector impls above.
macro_rules! scalar_ops {
    ($($t:ty),+) => {
        $(
            /// Vector-Scalar multiplication (scaling).
            impl Mul<$t> for Vec4<$t> {
                type Output = Self;

                #[inline]
                fn mul(self, rhs: $t) -> Self {
                    self.scale(rhs)
                }
            }

            /// Vector-Scalar multiplication (scaling).
            impl MulAssign<$t> for Vec4<$t> {
                #[inline]
                fn mul_assign(&mut self, rhs: $t) {
                    *self = self.scale(rhs);
                }
            }

            /// Vector-Scalar division.
            impl Div<$t> for Vec4<$t> {
                type Output = Self;

                #[inline]
                fn div(self, rhs: $t) -> Self {
                    Vector(<$t as Element>::div_lanes(self.0, [rhs; 4]))
                }
            }

            /// Vector-Scalar division.
            impl DivAssign<$t> for Vec4<$t> {
                #[inline]
                fn div_assign(&mut self, rhs: $t) {
                    *self = *self / rhs;
                }
            }
        )+
    };
}

scalar_ops!(i8, i16, i32, i64, u8, u16, u32, u64, f32, f64);
