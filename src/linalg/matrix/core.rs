//! Matrix representation and structural operations

use num_traits::{One, Zero};
use std::ops::{Index, IndexMut, Mul};

/// A fixed-size `R × C` matrix stored row-major.
///
/// Dimensions are part of the type, so shape mismatches in sums and
/// products are compile errors rather than runtime failures.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Matrix<T, const R: usize, const C: usize> {
    pub(crate) rows: [[T; C]; R],
}

impl<T, const R: usize, const C: usize> Matrix<T, R, C> {
    /// Number of rows.
    pub const ROWS: usize = R;

    /// Number of columns.
    pub const COLS: usize = C;

    /// Builds a matrix from its rows.
    pub const fn new(rows: [[T; C]; R]) -> Self {
        Self { rows }
    }

    /// Builds a matrix by calling `f(row, col)` for every entry.
    pub fn from_fn(mut f: impl FnMut(usize, usize) -> T) -> Self {
        Self {
            rows: std::array::from_fn(|i| std::array::from_fn(|j| f(i, j))),
        }
    }

    /// Iterates over the rows, top to bottom.
    pub fn rows(&self) -> std::slice::Iter<'_, [T; C]> {
        self.rows.iter()
    }

    pub fn as_rows(&self) -> &[[T; C]; R] {
        &self.rows
    }

    pub fn into_rows(self) -> [[T; C]; R] {
        self.rows
    }

    /// Applies `f` to every entry.
    pub fn map<U>(self, mut f: impl FnMut(T) -> U) -> Matrix<U, R, C> {
        Matrix {
            rows: self.rows.map(|row| row.map(&mut f)),
        }
    }
}

impl<T: Copy, const R: usize, const C: usize> Matrix<T, R, C> {
    pub fn transpose(&self) -> Matrix<T, C, R> {
        Matrix::from_fn(|i, j| self.rows[j][i])
    }

    pub fn row(&self, i: usize) -> [T; C] {
        self.rows[i]
    }

    pub fn column(&self, j: usize) -> [T; R] {
        std::array::from_fn(|i| self.rows[i][j])
    }
}

impl<T: Copy + Zero, const R: usize, const C: usize> Matrix<T, R, C> {
    pub fn zeros() -> Self {
        Self {
            rows: [[T::zero(); C]; R],
        }
    }
}

impl<T: Copy + Mul<Output = T>, const R: usize, const C: usize> Matrix<T, R, C> {
    /// Multiplies entry by entry with `other`, in place.
    pub fn mask(&mut self, other: &Self) -> &mut Self {
        for (row, mask) in self.rows.iter_mut().zip(other.rows.iter()) {
            for (value, &m) in row.iter_mut().zip(mask.iter()) {
                *value = *value * m;
            }
        }

        self
    }

    /// Entry-by-entry (Hadamard) product.
    pub fn masked(&self, other: &Self) -> Self {
        let mut out = *self;
        out.mask(other);
        out
    }
}

impl<T: Copy + Zero + One, const N: usize> Matrix<T, N, N> {
    /// The `N × N` identity matrix.
    pub fn identity() -> Self {
        Self::from_fn(|i, j| if i == j { T::one() } else { T::zero() })
    }

    /// Sum of the diagonal.
    pub fn trace(&self) -> T {
        (0..N).fold(T::zero(), |acc, i| acc + self.rows[i][i])
    }
}

impl<T: Copy + Zero, const R: usize, const C: usize> Default for Matrix<T, R, C> {
    fn default() -> Self {
        Self::zeros()
    }
}

impl<T, const R: usize, const C: usize> From<[[T; C]; R]> for Matrix<T, R, C> {
    fn from(rows: [[T; C]; R]) -> Self {
        Self::new(rows)
    }
}

impl<T, const R: usize, const C: usize> Index<usize> for Matrix<T, R, C> {
    type Output = [T; C];

    fn index(&self, i: usize) -> &Self::Output {
        &self.rows[i]
    }
}

impl<T, const R: usize, const C: usize> IndexMut<usize> for Matrix<T, R, C> {
    fn index_mut(&mut self, i: usize) -> &mut Self::Output {
        &mut self.rows[i]
    }
}

impl<T, const R: usize, const C: usize> Index<(usize, usize)> for Matrix<T, R, C> {
    type Output = T;

    fn index(&self, (i, j): (usize, usize)) -> &Self::Output {
        &self.rows[i][j]
    }
}

impl<T, const R: usize, const C: usize> IndexMut<(usize, usize)> for Matrix<T, R, C> {
    fn index_mut(&mut self, (i, j): (usize, usize)) -> &mut Self::Output {
        &mut self.rows[i][j]
    }
}
