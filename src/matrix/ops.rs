use std::ops::{Index, IndexMut, Mul};

use crate::{
    simd::Element,
    traits::{Promote, Promoted},
    Matrix, Vec4, Vector,
};

/// Flat, row-major indexing.
impl<T> Index<usize> for Matrix<T> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl<T> IndexMut<usize> for Matrix<T> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.0[index]
    }
}

#[inline]
#[track_caller]
fn flat_index(row: usize, col: usize) -> usize {
    assert!(
        row < 4 && col < 4,
        "matrix index ({row}, {col}) out of bounds for a 4x4 matrix"
    );
    row * 4 + col
}

/// `(row, column)` indexing.
impl<T> Index<(usize, usize)> for Matrix<T> {
    type Output = T;

    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        &self.0[flat_index(row, col)]
    }
}

impl<T> IndexMut<(usize, usize)> for Matrix<T> {
    #[inline]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut Self::Output {
        &mut self.0[flat_index(row, col)]
    }
}

// More general `PartialEq` impl than what the derive generates.
impl<T, U> PartialEq<Matrix<U>> for Matrix<T>
where
    T: Element + Promote<U>,
    U: Element,
{
    fn eq(&self, other: &Matrix<U>) -> bool {
        self.0
            .iter()
            .zip(&other.0)
            .all(|(l, r)| l.cast::<Promoted<T, U>>() == r.cast::<Promoted<T, U>>())
    }
}

impl<T> Eq for Matrix<T> where T: Element + Eq {}

/// Matrix * Matrix.
///
/// Element `(r, c)` of the result is the dot product of row `r` of `self` and column `c` of `rhs`.
impl<T, U> Mul<Matrix<U>> for Matrix<T>
where
    T: Element + Promote<U>,
    U: Element,
{
    type Output = Matrix<Promoted<T, U>>;

    fn mul(self, rhs: Matrix<U>) -> Self::Output {
        let rows = [self.row(0), self.row(1), self.row(2), self.row(3)];
        let columns = [rhs.column(0), rhs.column(1), rhs.column(2), rhs.column(3)];
        Matrix::from_fn(|r, c| rows[r].dot(columns[c]))
    }
}

/// Row Vector * Matrix.
///
/// Lane `i` of the result is the dot product of `self` and column `i` of `rhs`.
impl<T, U> Mul<Matrix<U>> for Vec4<T>
where
    T: Element + Promote<U>,
    U: Element,
{
    type Output = Vec4<Promoted<T, U>>;

    fn mul(self, rhs: Matrix<U>) -> Self::Output {
        Vector::from_fn(|i| self.dot(rhs.column(i)))
    }
}
