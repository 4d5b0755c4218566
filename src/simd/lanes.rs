//! Lane-by-lane fallback for element types without a register.
//!
//! Integer addition, subtraction and multiplication wrap on overflow, like the integer registers
//! do. Division by zero panics.

use crate::traits::Number;

#[inline]
fn zip_with<T: Number>(a: [T; 4], b: [T; 4], f: impl Fn(T, T) -> T) -> [T; 4] {
    [f(a[0], b[0]), f(a[1], b[1]), f(a[2], b[2]), f(a[3], b[3])]
}

#[inline]
pub fn add<T: Number>(a: [T; 4], b: [T; 4]) -> [T; 4] {
    zip_with(a, b, T::wrapping_add)
}

#[inline]
pub fn sub<T: Number>(a: [T; 4], b: [T; 4]) -> [T; 4] {
    zip_with(a, b, T::wrapping_sub)
}

#[inline]
pub fn mul<T: Number>(a: [T; 4], b: [T; 4]) -> [T; 4] {
    zip_with(a, b, T::wrapping_mul)
}

#[inline]
pub fn div<T: Number>(a: [T; 4], b: [T; 4]) -> [T; 4] {
    zip_with(a, b, |l, r| l / r)
}

/// `a.x * b.x + a.y * b.y + a.z * b.z + a.w * b.w`, summed left to right.
#[inline]
pub fn dot<T: Number>(a: [T; 4], b: [T; 4]) -> T {
    let [p0, p1, p2, p3] = mul(a, b);
    p0.wrapping_add(p1).wrapping_add(p2).wrapping_add(p3)
}
