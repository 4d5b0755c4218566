use std::{array, fmt, ops::Neg};

use crate::{
    simd::Element,
    traits::{Sqrt, Trig},
    vec4, One, Vec4, Vector, Zero,
};

mod ops;

/// A 4x4 matrix with [`f32`] elements.
pub type Mat4f = Matrix<f32>;
/// A 4x4 matrix with [`f64`] elements.
pub type Mat4d = Matrix<f64>;

/// A row-major 4x4 matrix with element type `T`.
///
/// Vectors are treated as *row vectors* and multiplied from the left (`v * m`), so transforms
/// compose left to right: `v * a * b` applies `a` first.
///
/// # Construction
///
/// - [`Matrix::from_rows`] fills a matrix from an array of rows.
/// - [`Matrix::from_fn`] will create each element by invoking a closure with its row and column.
/// - [`From<[T; 16]>`][From] and [`TryFrom<&[T]>`][TryFrom] take the 16 elements in row-major
///   order.
/// - The builders [`Matrix::rotation`], [`Matrix::translation`], [`Matrix::scaling`],
///   [`Matrix::perspective`] and [`Matrix::look_at`] create transformation matrices.
/// - [`Matrix::ZERO`] and [`Matrix::IDENTITY`] are the all-zero and the identity matrix.
///
/// # Element Access
///
/// [`Matrix`] can be indexed with a flat index in `0..16`, or with a `(row, column)` tuple. Both
/// address the same storage: `m[(r, c)]` is `m[r * 4 + c]`.
///
/// ```
/// # use inopine::*;
/// let mut mat = Mat4f::IDENTITY;
/// mat[(1, 2)] = 4.0;
/// assert_eq!(mat[6], 4.0);
/// assert_eq!(mat.get(1, 2), Some(&4.0));
/// assert_eq!(mat.get(1, 4), None);
/// ```
///
/// Indexing out of bounds will result in a panic, just like it does for slices.
#[derive(Clone, Copy, Hash)]
#[repr(transparent)]
pub struct Matrix<T>([T; 16]);

unsafe impl<T: bytemuck::Zeroable> bytemuck::Zeroable for Matrix<T> {}
unsafe impl<T: bytemuck::Pod> bytemuck::Pod for Matrix<T> {}

impl<T: Zero> Matrix<T> {
    /// A matrix with every element set to 0.
    pub const ZERO: Self = Self([T::ZERO; 16]);
}

impl<T: Zero + One> Matrix<T> {
    /// The identity matrix.
    ///
    /// The matrix has the value 1 on its diagonal and 0 everywhere else.
    ///
    /// Multiplying any vector or matrix with this matrix returns it unchanged.
    #[rustfmt::skip]
    pub const IDENTITY: Self = Self([
        T::ONE,  T::ZERO, T::ZERO, T::ZERO,
        T::ZERO, T::ONE,  T::ZERO, T::ZERO,
        T::ZERO, T::ZERO, T::ONE,  T::ZERO,
        T::ZERO, T::ZERO, T::ZERO, T::ONE,
    ]);
}

impl<T> Matrix<T> {
    /// Creates a [`Matrix`] from an array of row vectors.
    ///
    /// # Examples
    ///
    /// ```
    /// # use inopine::*;
    /// let mat = Matrix::from_rows([
    ///     [0i32, 1, 2, 3],
    ///     [4, 5, 6, 7],
    ///     [8, 9, 10, 11],
    ///     [12, 13, 14, 15],
    /// ]);
    /// assert_eq!(mat, Matrix::from_fn(|row, col| (row * 4 + col) as i32));
    /// ```
    pub fn from_rows<U: Into<Vec4<T>>>(rows: [U; 4]) -> Self {
        let mut rows = rows.map(|row| row.into().into_array().map(Some));
        Self::from_fn(|row, col| match rows[row][col].take() {
            Some(elem) => elem,
            None => unreachable!(),
        })
    }

    /// Creates a [`Matrix`] by invoking a closure with the position (row and column) of each element.
    ///
    /// Elements are visited in row-major order.
    pub fn from_fn<F>(mut cb: F) -> Self
    where
        F: FnMut(usize, usize) -> T,
    {
        Self(array::from_fn(|i| cb(i / 4, i % 4)))
    }

    /// Applies a closure to each element, returning a new matrix.
    pub fn map<F, U>(self, f: F) -> Matrix<U>
    where
        F: FnMut(T) -> U,
    {
        Matrix(self.0.map(f))
    }

    /// Converts each element to the element type `U`, like an `as` cast.
    pub fn cast<U: Element>(self) -> Matrix<U>
    where
        T: Element,
    {
        self.map(|elem| elem.cast())
    }

    /// Returns a reference to the element at `(row, col)`, or [`None`] if out of bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        if row < 4 && col < 4 {
            self.0.get(row * 4 + col)
        } else {
            None
        }
    }

    /// Returns a mutable reference to the element at `(row, col)`, or [`None`] if out of bounds.
    pub fn get_mut(&mut self, row: usize, col: usize) -> Option<&mut T> {
        if row < 4 && col < 4 {
            self.0.get_mut(row * 4 + col)
        } else {
            None
        }
    }

    /// Returns row `row` as a vector.
    ///
    /// # Panics
    ///
    /// Panics if `row` is 4 or greater.
    pub fn row(&self, row: usize) -> Vec4<T>
    where
        T: Copy,
    {
        Vector::from_fn(|col| self[(row, col)])
    }

    /// Returns column `col` as a vector.
    ///
    /// # Panics
    ///
    /// Panics if `col` is 4 or greater.
    pub fn column(&self, col: usize) -> Vec4<T>
    where
        T: Copy,
    {
        Vector::from_fn(|row| self[(row, col)])
    }

    /// Returns a reference to the 16 elements, in row-major order.
    #[inline]
    pub const fn as_array(&self) -> &[T; 16] {
        &self.0
    }

    /// Converts this matrix into its 16 elements, in row-major order.
    #[inline]
    pub fn into_array(self) -> [T; 16] {
        self.0
    }

    /// Swaps the rows and columns of this matrix.
    ///
    /// # Examples
    ///
    /// ```
    /// # use inopine::*;
    /// let mat = Matrix::from_fn(|row, col| (row * 10 + col) as i32);
    /// let t = mat.transpose();
    /// assert_eq!(t[(1, 3)], 31);
    /// assert_eq!(t.transpose(), mat);
    /// ```
    pub fn transpose(self) -> Self
    where
        T: Copy,
    {
        Self::from_fn(|row, col| self[(col, row)])
    }
}

impl<T: Element> Matrix<T> {
    /// Creates a rotation matrix around the X axis.
    ///
    /// The angle has its own floating-point type `A`; the sines and cosines are computed in `A`
    /// and converted to `T`, so integer matrices can be built too.
    ///
    /// # Examples
    ///
    /// ```
    /// # use inopine::*;
    /// let r = Mat4f::rotation_x(std::f32::consts::FRAC_PI_2);
    /// approx::assert_abs_diff_eq!(Vec4f::Z * r, Vec4f::Y, epsilon = 1e-6);
    ///
    /// let quarter = Matrix::<i32>::rotation_x(std::f64::consts::FRAC_PI_2);
    /// assert_eq!(vec4(0i32, 0, 1, 0) * quarter, vec4(0i32, 1, 0, 0));
    /// ```
    #[rustfmt::skip]
    pub fn rotation_x<A>(radians: A) -> Self
    where
        A: Element + Trig + Neg<Output = A>,
    {
        let (sin, cos) = (radians.sin(), radians.cos());
        let (o, l) = (A::ZERO, A::ONE);
        Matrix::<A>([
            l, o,   o,    o,
            o, cos, -sin, o,
            o, sin, cos,  o,
            o, o,   o,    l,
        ])
        .cast()
    }

    /// Creates a rotation matrix around the Y axis.
    #[rustfmt::skip]
    pub fn rotation_y<A>(radians: A) -> Self
    where
        A: Element + Trig + Neg<Output = A>,
    {
        let (sin, cos) = (radians.sin(), radians.cos());
        let (o, l) = (A::ZERO, A::ONE);
        Matrix::<A>([
            cos,  o, sin, o,
            o,    l, o,   o,
            -sin, o, cos, o,
            o,    o, o,   l,
        ])
        .cast()
    }

    /// Creates a rotation matrix around the Z axis.
    #[rustfmt::skip]
    pub fn rotation_z<A>(radians: A) -> Self
    where
        A: Element + Trig + Neg<Output = A>,
    {
        let (sin, cos) = (radians.sin(), radians.cos());
        let (o, l) = (A::ZERO, A::ONE);
        Matrix::<A>([
            cos, -sin, o, o,
            sin, cos,  o, o,
            o,   o,    l, o,
            o,   o,    o, l,
        ])
        .cast()
    }

    /// Creates a rotation matrix from rotation angles around the X, Y and Z axes.
    ///
    /// The result is `rotation_x(x) * rotation_y(y) * rotation_z(z)`, in exactly that order. The
    /// product is computed in `T`.
    pub fn rotation<A>(x: A, y: A, z: A) -> Self
    where
        A: Element + Trig + Neg<Output = A>,
    {
        Self::rotation_x(x) * Self::rotation_y(y) * Self::rotation_z(z)
    }

    /// Creates a rotation matrix from the `x`, `y` and `z` lanes of `radians`.
    pub fn rotation_from<A>(radians: Vec4<A>) -> Self
    where
        A: Element + Trig + Neg<Output = A>,
    {
        Self::rotation(radians.x, radians.y, radians.z)
    }

    /// Creates a translation matrix.
    ///
    /// The negated offsets are stored in row 3, so that a point multiplied from the left is moved
    /// by `(-x, -y, -z)`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use inopine::*;
    /// let t = Mat4f::translation(1.0, 2.0, 3.0);
    /// assert_eq!(t.row(3), vec4(-1.0f32, -2.0, -3.0, 1.0));
    /// assert_eq!(vec4(1.0f32, 2.0, 3.0, 1.0) * t, Vec4f::W);
    /// ```
    #[rustfmt::skip]
    pub fn translation(x: T, y: T, z: T) -> Self
    where
        T: Neg<Output = T>,
    {
        let (o, l) = (T::ZERO, T::ONE);
        Self([
            l,  o,  o,  o,
            o,  l,  o,  o,
            o,  o,  l,  o,
            -x, -y, -z, l,
        ])
    }

    /// Creates a translation matrix from the `x`, `y` and `z` lanes of `offset`.
    pub fn translation_from(offset: Vec4<T>) -> Self
    where
        T: Neg<Output = T>,
    {
        Self::translation(offset.x, offset.y, offset.z)
    }

    /// Creates a scaling matrix with the given factors on its diagonal.
    #[rustfmt::skip]
    pub fn scaling(sx: T, sy: T, sz: T, sw: T) -> Self {
        let o = T::ZERO;
        Self([
            sx, o,  o,  o,
            o,  sy, o,  o,
            o,  o,  sz, o,
            o,  o,  o,  sw,
        ])
    }

    /// Creates a scaling matrix from the 4 lanes of `factors`.
    pub fn scaling_from(factors: Vec4<T>) -> Self {
        Self::scaling(factors.x, factors.y, factors.z, factors.w)
    }

    /// Creates a perspective projection matrix.
    ///
    /// `fov` is the field of view term used to scale the Y axis (typically `1 / tan(angle / 2)`);
    /// the X axis is scaled by `aspect * fov`. `z_near` and `z_far` must not be equal.
    ///
    /// ```text
    /// | aspect*fov  0    0                        0 |
    /// | 0           fov  0                        0 |
    /// | 0           0    zf/(zf-zn)               1 |
    /// | 0           0    -zf*zn/(zf-zn)           1 |
    /// ```
    #[rustfmt::skip]
    pub fn perspective(z_near: T, z_far: T, fov: T, aspect: T) -> Self
    where
        T: Neg<Output = T>,
    {
        let (o, l) = (T::ZERO, T::ONE);
        let depth = z_far - z_near;
        Self([
            aspect * fov, o,   o,                        o,
            o,            fov, o,                        o,
            o,            o,   z_far / depth,            l,
            o,            o,   -z_far * z_near / depth,  l,
        ])
    }

    /// Creates a view matrix for a camera at `eye` looking at `target`.
    ///
    /// The camera axes are computed as
    ///
    /// - forward = normalize(target - eye)
    /// - right = normalize(cross(up, forward))
    /// - up' = cross(forward, right)
    ///
    /// and stored as the first three columns, with row 3 holding the negated dot products of each
    /// axis with `eye`. If `up` is parallel to the viewing direction, the result contains NaN.
    ///
    /// # Examples
    ///
    /// ```
    /// # use inopine::*;
    /// let eye = vec4(1.0f32, 2.0, 3.0, 1.0);
    /// let view = Mat4f::look_at(eye, eye + Vec4f::Z, Vec4f::Y);
    /// assert_eq!(view, Mat4f::translation(1.0, 2.0, 3.0));
    /// ```
    pub fn look_at(eye: Vec4<T>, target: Vec4<T>, up: Vec4<T>) -> Self
    where
        T: Sqrt + Neg<Output = T>,
    {
        let forward = (target - eye).normalized();
        let right = up.cross(forward).normalized();
        let up = forward.cross(right);

        let (o, l) = (T::ZERO, T::ONE);
        Self::from_rows([
            vec4(right.x, up.x, forward.x, o),
            vec4(right.y, up.y, forward.y, o),
            vec4(right.z, up.z, forward.z, o),
            vec4(-right.dot(eye), -up.dot(eye), -forward.dot(eye), l),
        ])
    }
}

impl<T> Default for Matrix<T>
where
    T: Default,
{
    fn default() -> Self {
        Self::from_fn(|_, _| T::default())
    }
}

impl<T> From<[T; 16]> for Matrix<T> {
    #[inline]
    fn from(value: [T; 16]) -> Self {
        Self(value)
    }
}

impl<T> From<Matrix<T>> for [T; 16] {
    #[inline]
    fn from(value: Matrix<T>) -> Self {
        value.0
    }
}

/// Copies 16 elements, in row-major order, out of a slice.
///
/// Fails unless the slice has exactly 16 elements.
impl<T: Copy> TryFrom<&[T]> for Matrix<T> {
    type Error = array::TryFromSliceError;

    fn try_from(value: &[T]) -> Result<Self, Self::Error> {
        <[T; 16]>::try_from(value).map(Self)
    }
}

impl<T: fmt::Debug> fmt::Debug for Matrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        struct FormatRow<'a, T>(&'a [T]);
        impl<'a, T: fmt::Debug> fmt::Debug for FormatRow<'a, T> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "[")?;
                for (col, elem) in self.0.iter().enumerate() {
                    if col != 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{:?}", elem)?;
                }
                write!(f, "]")?;
                Ok(())
            }
        }

        let mut list = f.debug_list();
        for row in self.0.chunks_exact(4) {
            list.entry(&FormatRow(row));
        }
        list.finish()
    }
}

/// Significant digits of floating-point cells in the [`Display`][fmt::Display] grid.
const DIGITS: usize = 5;

/// Formats `value` like C's `%g` with `precision` significant digits.
fn general(value: f64, precision: usize) -> String {
    fn trim(s: &str) -> &str {
        if s.contains('.') {
            s.trim_end_matches('0').trim_end_matches('.')
        } else {
            s
        }
    }

    if !value.is_finite() {
        return value.to_string();
    }

    let sci = format!("{:.*e}", precision - 1, value);
    let Some((mantissa, exp)) = sci.split_once('e') else {
        return sci;
    };
    let Ok(exp) = exp.parse::<i32>() else {
        return sci;
    };

    if exp < -4 || exp >= precision as i32 {
        let sign = if exp < 0 { '-' } else { '+' };
        format!("{}e{}{:02}", trim(mantissa), sign, exp.abs())
    } else {
        let decimals = (precision as i32 - 1 - exp) as usize;
        trim(&format!("{:.*}", decimals, value)).to_string()
    }
}

/// Renders a bordered grid with one row per line.
///
/// Cells are right-aligned in a 6-character column. Floating-point elements are printed with 5
/// significant digits.
///
/// ```
/// # use inopine::*;
/// let text = Mat4f::scaling(0.5, 1.0, 12345.678, -1.0).to_string();
/// let mut lines = text.lines();
/// assert_eq!(lines.next(), Some("|-----------------------------|"));
/// assert_eq!(lines.next(), Some("|    0.5      0      0      0 |"));
/// assert_eq!(lines.next(), Some("|      0      1      0      0 |"));
/// assert_eq!(lines.next(), Some("|      0      0  12346      0 |"));
/// assert_eq!(lines.next(), Some("|      0      0      0     -1 |"));
/// assert_eq!(lines.next(), Some("|-----------------------------|"));
/// ```
impl<T: Element> fmt::Display for Matrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let border = "-".repeat(4 * (DIGITS + 2) + 1);
        writeln!(f, "|{border}|")?;
        for row in self.0.chunks_exact(4) {
            write!(f, "| ")?;
            for elem in row {
                let cell = if T::FLOAT {
                    general(elem.cast::<f64>(), DIGITS)
                } else {
                    elem.to_string()
                };
                write!(f, "{:>width$} ", cell, width = DIGITS + 1)?;
            }
            writeln!(f, "|")?;
        }
        writeln!(f, "|{border}|")
    }
}
