use std::{array, fmt};

use crate::{
    simd::{lanes, shares_register, Element, Kernel},
    traits::{Promote, Promoted, Sqrt},
    One, Zero,
};

mod ops;
mod view;

pub use view::{RGBA, WH, XY, XYZW};

/// A 2-dimensional vector.
pub type Vec2<T> = Vector<T, 2>;
/// A 2-dimensional vector with [`f32`] elements.
pub type Vec2f = Vec2<f32>;
/// A 2-dimensional vector with [`u32`] elements, used for window and surface sizes.
pub type Vec2u = Vec2<u32>;
/// A 4-dimensional vector.
pub type Vec4<T> = Vector<T, 4>;
/// A 4-dimensional vector with [`f32`] elements.
pub type Vec4f = Vec4<f32>;
/// A 4-dimensional vector with [`f64`] elements.
pub type Vec4d = Vec4<f64>;
/// A 4-dimensional vector with [`i32`] elements.
pub type Vec4i = Vec4<i32>;
/// A 4-dimensional vector with [`u32`] elements.
pub type Vec4u = Vec4<u32>;
/// A 4-dimensional vector with [`u8`] elements.
pub type Vec4b = Vec4<u8>;

/// An RGBA color with [`f32`] channels, nominally in `0.0..=1.0`. Channels are accessible as
/// `r`, `g`, `b` and `a`.
pub type Colorf = Vec4f;
/// An RGBA color with 8-bit channels.
pub type Colorb = Vec4b;

/// An `N`-element vector storing elements of type `T`.
///
/// [`Vec4`] is the workhorse of this crate: it supports arithmetic with any other [`Vec4`] (the
/// result uses the [promoted][Promote] element type), dot and cross products, and multiplication
/// with a [`Matrix`][crate::Matrix]. If both operands have the same element type and that type is
/// [accelerated][crate::is_accelerated] on the target, lane arithmetic runs in a hardware register.
///
/// # Construction
///
/// - The freestanding [`vec2`] and [`vec4`] functions directly create vectors from provided values.
/// - [`Vec4::from_xy`] and [`Vec4::from_xyz`] fill the omitted trailing lanes with 0.
/// - [`Vector::splat`] creates a vector by copying the given value into each element.
/// - [`Vector::from_fn`] creates a vector by invoking a closure with the index of each element.
/// - [`Vector::cast`] converts each element to another element type.
/// - Vectors can be created from arrays using their [`From`] implementation.
/// - The [`Default`] implementation of [`Vector`] initializes each element with its default value.
/// - [`Vector::ZERO`] is a vector containing all-zeroes.
/// - `Vector::X`, `Vector::Y`, `Vector::Z` and `Vector::W` are unit vectors pointing in the given
///   direction.
///
/// # Element Access
///
/// - Elements can be accessed as fields `x`, `y`, `z`, or `w`.
///   - Aliases `r`, `g`, `b`, and `a` are provided for 4-dimensional vectors, and aliases `w` and
///     `h` for 2-dimensional vectors.
/// - The [`Index`] and [`IndexMut`] impls can be used just like on arrays.
/// - [`Vector::as_array`], [`Vector::as_slice`], and [`Vector::into_array`] expose the elements.
/// - [`Vec4::to_register`] and [`Vec4::from_register`] convert to and from the hardware register
///   of accelerated element types.
/// - [`bytemuck::Zeroable`] and [`bytemuck::Pod`] are implemented to allow safe transmutation when
///   the element type `T` also allows this.
///
/// [`Index`]: std::ops::Index
/// [`IndexMut`]: std::ops::IndexMut
#[derive(Clone, Copy, Hash)]
#[repr(transparent)]
pub struct Vector<T, const N: usize>([T; N]);

unsafe impl<T: bytemuck::Zeroable, const N: usize> bytemuck::Zeroable for Vector<T, N> {}
unsafe impl<T: bytemuck::Pod, const N: usize> bytemuck::Pod for Vector<T, N> {}

impl<T: Zero, const N: usize> Vector<T, N> {
    /// A vector with each element initialized to 0.
    pub const ZERO: Self = Self([T::ZERO; N]);
}

impl<T: Zero + One> Vector<T, 2> {
    /// A unit vector pointing in the X direction.
    pub const X: Self = Self([T::ONE, T::ZERO]);
    /// A unit vector pointing in the Y direction.
    pub const Y: Self = Self([T::ZERO, T::ONE]);
}

impl<T: Zero + One> Vector<T, 4> {
    /// A unit vector pointing in the X direction.
    pub const X: Self = Self([T::ONE, T::ZERO, T::ZERO, T::ZERO]);
    /// A unit vector pointing in the Y direction.
    pub const Y: Self = Self([T::ZERO, T::ONE, T::ZERO, T::ZERO]);
    /// A unit vector pointing in the Z direction.
    pub const Z: Self = Self([T::ZERO, T::ZERO, T::ONE, T::ZERO]);
    /// A unit vector pointing in the W direction.
    pub const W: Self = Self([T::ZERO, T::ZERO, T::ZERO, T::ONE]);
}

impl<T, const N: usize> Vector<T, N> {
    /// Creates a vector with each element initialized to `elem`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use inopine::*;
    /// let v = Vector::splat(2i32);
    /// assert_eq!(v, vec4(2i32, 2, 2, 2));
    /// ```
    #[inline]
    pub fn splat(elem: T) -> Self
    where
        T: Copy,
    {
        Self([elem; N])
    }

    /// Creates a vector where each element is initialized by invoking a closure with its index.
    ///
    /// Analogous to [`array::from_fn`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use inopine::*;
    /// let v = Vector::from_fn(|i| i as u32 + 100);
    /// assert_eq!(v, vec2(100u32, 101));
    /// ```
    pub fn from_fn<F>(cb: F) -> Self
    where
        F: FnMut(usize) -> T,
    {
        Self(array::from_fn(cb))
    }

    /// Applies a closure to each element, returning a new vector.
    ///
    /// # Examples
    ///
    /// ```
    /// # use inopine::*;
    /// let v = vec4(1i32, 2, 3, 4).map(|i| i * 10);
    /// assert_eq!(v, vec4(10i32, 20, 30, 40));
    /// ```
    pub fn map<F, U>(self, f: F) -> Vector<U, N>
    where
        F: FnMut(T) -> U,
    {
        Vector(self.0.map(f))
    }

    /// Merges two [`Vector`]s into one that contains tuples of the original elements.
    pub fn zip<U>(self, other: Vector<U, N>) -> Vector<(T, U), N> {
        let mut other = other.0.into_iter();
        Vector(self.0.map(|elem| match other.next() {
            Some(o) => (elem, o),
            None => unreachable!(),
        }))
    }

    /// Converts each element to the element type `U`, like an `as` cast.
    ///
    /// This is a numeric conversion of every lane, never a reinterpretation of the bytes.
    ///
    /// # Examples
    ///
    /// ```
    /// # use inopine::*;
    /// let v = vec4(1.5f32, -2.0, 0.25, 8.0).cast::<f64>();
    /// assert_eq!(v, vec4(1.5f64, -2.0, 0.25, 8.0));
    ///
    /// let i = vec4(1.9f32, -2.9, 0.0, 255.0).cast::<i32>();
    /// assert_eq!(i, vec4(1i32, -2, 0, 255));
    /// ```
    #[inline]
    pub fn cast<U: Element>(self) -> Vector<U, N>
    where
        T: Element,
    {
        self.map(|elem| elem.cast())
    }

    /// Returns a reference to the underlying elements as an array of length `N`.
    #[inline]
    pub const fn as_array(&self) -> &[T; N] {
        &self.0
    }

    /// Returns a mutable reference to the underlying elements as an array of length `N`.
    #[inline]
    pub fn as_mut_array(&mut self) -> &mut [T; N] {
        &mut self.0
    }

    /// Returns a reference to the underlying elements as a slice.
    #[inline]
    pub const fn as_slice(&self) -> &[T] {
        &self.0
    }

    /// Converts this [`Vector`] into an `N`-element array.
    ///
    /// # Examples
    ///
    /// ```
    /// # use inopine::*;
    /// assert_eq!(vec4(1i32, 2, 3, 4).into_array(), [1, 2, 3, 4]);
    /// ```
    #[inline]
    pub fn into_array(self) -> [T; N] {
        self.0
    }
}

/// Promotes both operands to a common element type and applies a lane operation.
///
/// The register implementation (`accelerated`) is only used if both operands share a register
/// layout. Any other pairing, including ones whose promoted type has a register, is evaluated lane
/// by lane.
#[inline]
pub(crate) fn lane_op<T, U, R>(
    a: Vec4<T>,
    b: Vec4<U>,
    accelerated: fn([Promoted<T, U>; 4], [Promoted<T, U>; 4]) -> R,
    scalar: fn([Promoted<T, U>; 4], [Promoted<T, U>; 4]) -> R,
) -> R
where
    T: Element + Promote<U>,
    U: Element,
{
    let (a, b) = (a.cast::<Promoted<T, U>>().0, b.cast::<Promoted<T, U>>().0);
    if shares_register::<T, U>() {
        accelerated(a, b)
    } else {
        scalar(a, b)
    }
}

impl<T: Element> Vector<T, 4> {
    /// Creates a vector from its `x` and `y` lanes. `z` and `w` are 0.
    ///
    /// # Examples
    ///
    /// ```
    /// # use inopine::*;
    /// assert_eq!(Vec4::from_xy(1i32, 2), vec4(1i32, 2, 0, 0));
    /// ```
    #[inline]
    pub fn from_xy(x: T, y: T) -> Self {
        Self([x, y, T::ZERO, T::ZERO])
    }

    /// Creates a vector from its `x`, `y` and `z` lanes. `w` is 0.
    #[inline]
    pub fn from_xyz(x: T, y: T, z: T) -> Self {
        Self([x, y, z, T::ZERO])
    }

    /// Multiplies every lane by `factor`.
    ///
    /// This is what the vector-scalar `*` operator does.
    #[inline]
    pub fn scale(self, factor: T) -> Self {
        Self(T::mul_lanes(self.0, [factor; 4]))
    }

    /// Computes the dot product of `self` and `other`, using all 4 lanes (including `w`).
    ///
    /// # Examples
    ///
    /// ```
    /// # use inopine::*;
    /// let a = vec4(1i32, 3, -5, 2);
    /// let b = vec4(4i32, -2, -1, 10);
    /// assert_eq!(a.dot(b), 23);
    ///
    /// // Mixed element types are promoted.
    /// assert_eq!(vec4(1i16, 2, 3, 4).dot(vec4(0.5f32, 0.5, 0.5, 0.5)), 5.0f32);
    /// ```
    pub fn dot<U: Element>(self, other: Vec4<U>) -> Promoted<T, U>
    where
        T: Promote<U>,
    {
        lane_op(
            self,
            other,
            <Promoted<T, U> as Element>::dot_lanes,
            lanes::dot,
        )
    }

    /// Computes the cross product of the `x`, `y` and `z` lanes of `self` and `other`.
    ///
    /// The `w` lanes of the inputs are ignored, and the `w` lane of the result is always 0.
    ///
    /// # Examples
    ///
    /// ```
    /// # use inopine::*;
    /// let x = Vec4f::X;
    /// let y = Vec4f::Y;
    /// assert_eq!(x.cross(y), Vec4f::Z);
    /// assert_eq!(y.cross(x), -Vec4f::Z);
    /// assert_eq!(vec4(1.0f32, 0.0, 0.0, 7.0).cross(y).w, 0.0);
    /// ```
    pub fn cross<U: Element>(self, other: Vec4<U>) -> Vec4<Promoted<T, U>>
    where
        T: Promote<U>,
    {
        fn yzx<P: Element>(v: [P; 4]) -> [P; 4] {
            [v[1], v[2], v[0], P::ZERO]
        }
        fn zxy<P: Element>(v: [P; 4]) -> [P; 4] {
            [v[2], v[0], v[1], P::ZERO]
        }
        fn accelerated<P: Element>(a: [P; 4], b: [P; 4]) -> [P; 4] {
            P::sub_lanes(P::mul_lanes(yzx(a), zxy(b)), P::mul_lanes(zxy(a), yzx(b)))
        }
        fn scalar<P: Element>(a: [P; 4], b: [P; 4]) -> [P; 4] {
            lanes::sub(lanes::mul(yzx(a), zxy(b)), lanes::mul(zxy(a), yzx(b)))
        }

        Vector(lane_op(self, other, accelerated, scalar))
    }

    /// Returns the length of this [`Vector`], computed over all 4 lanes.
    ///
    /// Integer lengths are truncated toward zero.
    ///
    /// # Examples
    ///
    /// ```
    /// # use inopine::*;
    /// assert_eq!(vec4(3.0f32, 0.0, 4.0, 0.0).length(), 5.0);
    /// ```
    pub fn length(&self) -> T
    where
        T: Sqrt,
    {
        self.dot(*self).sqrt()
    }

    /// Divides every lane of this vector by its length, in place.
    ///
    /// A zero vector becomes all-NaN. For integer element types, the length is truncated (see
    /// [`Sqrt`]) and normalizing a zero vector panics with a division by zero.
    ///
    /// # Examples
    ///
    /// ```
    /// # use inopine::*;
    /// let mut v = vec4(0.0f32, 0.0, 4.0, 0.0);
    /// v.normalize();
    /// assert_eq!(v, Vec4f::Z);
    /// ```
    pub fn normalize(&mut self)
    where
        T: Sqrt,
    {
        let len = self.length();
        self.0 = T::div_lanes(self.0, [len; 4]);
    }

    /// Returns a copy of this vector divided by its length.
    pub fn normalized(mut self) -> Self
    where
        T: Sqrt,
    {
        self.normalize();
        self
    }

    /// Reflects `self` about the plane with the given normal.
    ///
    /// Computes `self - normal * 2 * dot(self, normal)`. `normal` is used as-is; it is expected to
    /// have unit length. Mixed element types are promoted like in the arithmetic operators.
    ///
    /// # Examples
    ///
    /// ```
    /// # use inopine::*;
    /// let v = vec4(1.0f32, -1.0, 0.0, 0.0);
    /// assert_eq!(v.reflect(Vec4f::Y), vec4(1.0f32, 1.0, 0.0, 0.0));
    /// assert_eq!(v.reflect(Vec4d::Y), vec4(1.0f64, 1.0, 0.0, 0.0));
    /// ```
    pub fn reflect<U: Element>(self, normal: Vec4<U>) -> Vec4<Promoted<T, U>>
    where
        T: Promote<U>,
    {
        fn accelerated<P: Element>(incident: [P; 4], normal: [P; 4]) -> [P; 4] {
            let factor = (P::ONE + P::ONE).wrapping_mul(P::dot_lanes(incident, normal));
            P::sub_lanes(incident, P::mul_lanes(normal, [factor; 4]))
        }
        fn scalar<P: Element>(incident: [P; 4], normal: [P; 4]) -> [P; 4] {
            let factor = (P::ONE + P::ONE).wrapping_mul(lanes::dot(incident, normal));
            lanes::sub(incident, lanes::mul(normal, [factor; 4]))
        }

        Vector(lane_op(self, normal, accelerated, scalar))
    }

    /// Creates a vector from a register of another element type, converting each lane.
    ///
    /// Only the source type needs a register; the lanes can be converted to any element type.
    ///
    /// # Examples
    ///
    /// ```
    /// # use inopine::*;
    /// # #[cfg(all(feature = "simd", any(target_arch = "x86_64", target_arch = "aarch64")))]
    /// # {
    /// let reg = vec4(1.5f32, -2.5, 3.0, 300.0).to_register();
    /// assert_eq!(Vec4::<i64>::from_register_of::<f32>(reg), vec4(1i64, -2, 3, 300));
    /// # }
    /// ```
    #[inline]
    pub fn from_register_of<U: Kernel>(register: U::Register) -> Self {
        Self([
            U::extract::<0>(register).cast(),
            U::extract::<1>(register).cast(),
            U::extract::<2>(register).cast(),
            U::extract::<3>(register).cast(),
        ])
    }
}

/// Conversion between the named-lane view and the packed register view.
impl<T: Kernel> Vector<T, 4> {
    /// Loads the lanes of this vector into a hardware register.
    ///
    /// # Examples
    ///
    /// ```
    /// # use inopine::*;
    /// # #[cfg(all(feature = "simd", any(target_arch = "x86_64", target_arch = "aarch64")))]
    /// # {
    /// let v = vec4(1.0f32, 2.0, 3.0, 4.0);
    /// let reg = v.to_register();
    /// assert_eq!(Vec4f::from_register(reg), v);
    /// # }
    /// ```
    #[inline]
    pub fn to_register(self) -> T::Register {
        T::load(&self.0)
    }

    /// Creates a vector from the lanes of a hardware register.
    #[inline]
    pub fn from_register(register: T::Register) -> Self {
        let mut v = Self::ZERO;
        T::store(&mut v.0, register);
        v
    }
}

impl<T, const N: usize> Default for Vector<T, N>
where
    T: Default,
{
    #[inline]
    fn default() -> Self {
        Self::from_fn(|_| T::default())
    }
}

impl<T, const N: usize> From<[T; N]> for Vector<T, N> {
    #[inline]
    fn from(value: [T; N]) -> Self {
        Self(value)
    }
}

impl<T, const N: usize> From<Vector<T, N>> for [T; N] {
    #[inline]
    fn from(value: Vector<T, N>) -> Self {
        value.0
    }
}

impl<T, const N: usize> fmt::Debug for Vector<T, N>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut tup = f.debug_tuple("");
        for elem in &self.0 {
            tup.field(elem);
        }
        tup.finish()
    }
}

impl<T, const N: usize> fmt::Display for Vector<T, N>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("(")?;
        for (i, elem) in self.0.iter().enumerate() {
            if i != 0 {
                f.write_str(", ")?;
            }
            elem.fmt(f)?;
        }
        f.write_str(")")
    }
}

impl<T, const N: usize> AsRef<[T]> for Vector<T, N> {
    #[inline]
    fn as_ref(&self) -> &[T] {
        &self.0
    }
}

impl<T, const N: usize> AsMut<[T]> for Vector<T, N> {
    #[inline]
    fn as_mut(&mut self) -> &mut [T] {
        &mut self.0
    }
}

/// Constructs a [`Vec2`] from its two elements.
#[inline]
pub const fn vec2<T>(x: T, y: T) -> Vec2<T> {
    Vector([x, y])
}

/// Constructs a [`Vec4`] from its four elements.
#[inline]
pub const fn vec4<T>(x: T, y: T, z: T, w: T) -> Vec4<T> {
    Vector([x, y, z, w])
}

#[cfg(test)]
mod tests {
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    use super::*;

    #[test]
    fn access() {
        assert_eq!(Vec4f::X.x, 1.0);
        assert_eq!(Vec4f::X[0], 1.0);
        assert_eq!(Vec4f::X[1], 0.0);
        assert_eq!(Vec4f::Y.y, 1.0);
        assert_eq!(Vec4f::Z.b, 1.0);
        assert_eq!(Vec4f::W.w, 1.0);
        assert_eq!(Vec4f::W.a, 1.0);

        let mut v = vec4(0i32, 1, 2, 3);
        v.g = 10;
        assert_eq!(v.y, 10);
        v[3] = 30;
        assert_eq!(v.a, 30);
        v.z += 5;
        assert_eq!(v, [0i32, 10, 7, 30]);

        let mut color: Colorb = vec4(255, 128, 0, 255);
        assert_eq!((color.r, color.g, color.b, color.a), (255, 128, 0, 255));
        color.a = 0;
        assert_eq!(color.cast::<f32>() / 255.0, vec4(1.0f32, 128.0 / 255.0, 0.0, 0.0));

        let mut size: Vec2u = vec2(640, 480);
        assert_eq!((size.w, size.h), (640, 480));
        size.h = 720;
        assert_eq!(size.y, 720);
        assert_eq!(size, vec2(640u32, 720));
        assert_ne!(size, vec2(640u32, 480));
    }

    #[test]
    fn construction() {
        assert_eq!(Vec4::<i32>::default(), Vec4i::ZERO);
        assert_eq!(Vec4::from_xyz(1.0f32, 2.0, 3.0), vec4(1.0f32, 2.0, 3.0, 0.0));
        assert_eq!(Vec4::from([9u8, 8, 7, 6]), vec4(9u8, 8, 7, 6));
        assert_eq!(Vec4::from_fn(|i| i as i64 * 2), vec4(0i64, 2, 4, 6));
        assert_eq!(vec4(0.1f32, 0.2, 0.3, 0.4).cast::<f64>()[0], 0.1f32 as f64);
    }

    #[test]
    fn fmt() {
        assert_eq!(format!("{}", Vec4f::W), "(0, 0, 0, 1)");
        assert_eq!(format!("{}", vec4(1.5f32, -2.0, 0.0, 3.25)), "(1.5, -2, 0, 3.25)");
        assert_eq!(format!("{:?}", Vec4f::W), "(0.0, 0.0, 0.0, 1.0)");
        assert_eq!(format!("{}", vec2(640u32, 480)), "(640, 480)");
    }

    #[test]
    fn dot() {
        assert_eq!(vec4(1i32, 3, -5, 0).dot(vec4(4i32, -2, -1, 0)), 3);
        assert_eq!(vec4(1i32, 3, -5, 2).dot(vec4(1i32, 3, -5, 2)), 39);
        assert_eq!(Vec4f::X.dot(Vec4f::Y), 0.0);
        assert_eq!(Vec4f::W.dot(Vec4f::W), 1.0);
        assert_eq!(vec4(1u8, 2, 3, 4).dot(vec4(1u8, 1, 1, 1)), 10u8);
        assert_relative_eq!(
            vec4(0.1f64, 0.2, 0.3, 0.4).dot(vec4(0.4f64, 0.3, 0.2, 0.1)),
            0.2
        );
    }

    #[test]
    fn cross() {
        assert_eq!(Vec4f::Y.cross(Vec4f::Z), Vec4f::X);
        assert_eq!(Vec4f::Z.cross(Vec4f::X), Vec4f::Y);
        assert_eq!(Vec4i::X.cross(Vec4i::Y), Vec4i::Z);

        let a = vec4(1i32, 2, 3, 99);
        let b = vec4(-4i32, 5, 6, -99);
        assert_eq!(a.cross(b), vec4(-3i32, -18, 13, 0));

        // Mixed element types take the scalar path and promote.
        let c: Vec4<f64> = vec4(1.0f32, 2.0, 3.0, 1.0).cross(vec4(-4.0f64, 5.0, 6.0, 1.0));
        assert_eq!(c, vec4(-3.0f64, -18.0, 13.0, 0.0));
    }

    #[test]
    fn length() {
        assert_eq!(vec4(1.0f64, 2.0, 2.0, 4.0).length(), 5.0);

        let mut v = vec4(1.0f32, -3.0, 2.5, 0.5);
        v.normalize();
        assert_relative_eq!(v.length(), 1.0, max_relative = 1e-6);
        assert_relative_eq!(
            vec4(7.0f64, 0.0, -7.0, 1.0).normalized().length(),
            1.0,
            max_relative = 1e-12
        );
    }

    #[test]
    fn integer_length() {
        assert_eq!(vec4(3i32, 0, 4, 0).length(), 5);
        assert_eq!(vec4(1u8, 1, 1, 1).length(), 2);
        assert_eq!(vec4(1i64, 1, 1, 0).length(), 1);

        assert_eq!(vec4(0i32, -6, 0, 0).normalized(), vec4(0i32, -1, 0, 0));
        // Lanes shorter than the length truncate to 0.
        assert_eq!(vec4(3i32, 4, 0, 0).normalized(), Vec4i::ZERO);
    }

    #[test]
    #[should_panic]
    fn integer_normalize_zero() {
        let mut v = Vec4i::ZERO;
        v.normalize();
    }

    #[test]
    fn normalize_zero() {
        let v = Vec4f::ZERO.normalized();
        assert!(v.as_array().iter().all(|l| l.is_nan()), "{v:?}");
        // NaN lanes never compare equal.
        assert_ne!(v, v);
    }

    #[test]
    fn reflect() {
        let incident = vec4(1.0f32, -1.0, 0.5, 0.0);
        let reflected = incident.reflect(Vec4f::Y);
        assert_eq!(reflected, vec4(1.0f32, 1.0, 0.5, 0.0));

        // The normal is not normalized.
        let reflected = vec4(0i32, -1, 0, 0).reflect(vec4(0i32, 2, 0, 0));
        assert_eq!(reflected, vec4(0i32, 7, 0, 0));

        // Mixed element types are promoted.
        let reflected: Vec4<f64> = vec4(1i16, -1, 0, 0).reflect(Vec4d::Y);
        assert_eq!(reflected, vec4(1.0f64, 1.0, 0.0, 0.0));
        let reflected: Vec4<f32> = incident.reflect(vec4(0i32, 1, 0, 0));
        assert_eq!(reflected, vec4(1.0f32, 1.0, 0.5, 0.0));
    }

    #[test]
    fn mixed_equality() {
        assert_eq!(vec4(1i32, 2, 3, 4), vec4(1.0f64, 2.0, 3.0, 4.0));
        assert_eq!(vec4(1u8, 2, 3, 4), [1i16, 2, 3, 4]);
        assert_ne!(vec4(0.1f32, 0.0, 0.0, 0.0), vec4(0.1f64, 0.0, 0.0, 0.0));
        assert_ne!(vec4(1i32, 2, 3, 4), vec4(1i32, 2, 3, 5));
    }

    #[test]
    fn register_round_trip() {
        #[allow(dead_code)]
        fn round_trip<T: Kernel>(v: Vec4<T>) {
            assert_eq!(Vec4::<T>::from_register(v.to_register()), v);
            let reg = T::set(v.x, v.y, v.z, v.w);
            assert_eq!(Vec4::<T>::from_register(reg), v);
        }

        #[cfg(any(
            all(feature = "simd", target_arch = "x86_64"),
            all(feature = "simd", target_arch = "aarch64", target_feature = "neon"),
        ))]
        {
            round_trip(vec4(1.0f32, -2.0, 3.5, 1e9));
            let reg = vec4(1.5f32, -2.5, 3.0, 4.0).to_register();
            assert_eq!(Vec4::<f64>::from_register_of::<f32>(reg), [1.5f64, -2.5, 3.0, 4.0]);
            assert_eq!(Vec4::<u8>::from_register_of::<f32>(reg), [1u8, 0, 3, 4]);
            assert_eq!(Vec4::<i64>::from_register_of::<f32>(reg), [1i64, -2, 3, 4]);
        }
        #[cfg(any(
            all(
                feature = "simd",
                target_arch = "x86_64",
                target_feature = "sse4.1",
                target_feature = "ssse3"
            ),
            all(feature = "simd", target_arch = "aarch64", target_feature = "neon"),
        ))]
        round_trip(vec4(i32::MIN, -1, 0, i32::MAX));
        #[cfg(all(feature = "simd", target_arch = "x86_64", target_feature = "ssse3"))]
        round_trip(vec4(i16::MIN, -1, 0, i16::MAX));
        #[cfg(all(feature = "simd", target_arch = "x86_64", target_feature = "avx"))]
        round_trip(vec4(0.1f64, -0.2, 1e300, -1e-300));
    }

    #[test]
    fn integer_overflow_wraps() {
        // Same result whether or not the element type has a register.
        let max = vec4(i32::MAX, 0, i32::MIN, 1 << 20);
        let wrapped = vec4(i32::MIN, 0, i32::MAX, 0);
        assert_eq!(max + vec4(1i32, 0, -1, 0) - vec4(0i32, 0, 0, 1 << 20), wrapped);
        assert_eq!(max + vec4(1i16, 0, -1, 0) - vec4(0i32, 0, 0, 1 << 20), wrapped);
        assert_eq!(vec4(1i32 << 20, 0, 0, 0) * vec4(1i32 << 12, 0, 0, 0), Vec4i::ZERO);
        assert_eq!(vec4(i32::MAX, 1, 0, 0).dot(vec4(1i32, 1, 0, 0)), i32::MIN);
        assert_eq!(vec4(200u8, 0, 0, 0) + vec4(100u8, 0, 0, 0), vec4(44u8, 0, 0, 0));
        assert_eq!(vec4(i16::MAX, 0, 0, 0) * 2, vec4(-2i16, 0, 0, 0));
    }

    #[test]
    fn approx_eq() {
        let a = vec4(0.1f32 + 0.2, 1.0, 2.0, 3.0);
        assert_abs_diff_eq!(a, vec4(0.3f32, 1.0, 2.0, 3.0), epsilon = 1e-6);
        assert_relative_eq!(a, vec4(0.3f32, 1.0, 2.0, 3.0));
    }
}
