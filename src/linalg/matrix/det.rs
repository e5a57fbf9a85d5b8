//! Determinants and inversion of square matrices
//!
//! Two determinant algorithms are provided because the element types have
//! different needs:
//! - [`Matrix::det`] expands by cofactors and uses only ring operations
//!   (`+`, `-`, `*`). It is exact for integers, including wrapping `Uint`
//!   values, where it yields the determinant modulo 2^BITS. Its cost grows
//!   factorially, which is acceptable for the small fixed sizes in use.
//! - [`Matrix::det_pivoted`] runs Gaussian elimination with partial
//!   pivoting in `O(N³)`. It divides, so it is only meaningful for field
//!   scalars such as floats.

use crate::{error::AlgebraError, linalg::Matrix, scalar::Scalar};
use num_traits::Float;

impl<T: Scalar, const N: usize> Matrix<T, N, N> {
    /// Determinant by cofactor expansion along the first row.
    ///
    /// The empty `0 × 0` matrix has determinant one.
    pub fn det(&self) -> T {
        if N == 0 {
            return T::one();
        }

        let columns: Vec<usize> = (0..N).collect();
        self.minor(0, &columns)
    }

    // Determinant of the submatrix made of rows `row..N` and `columns`.
    // Even and odd cofactor terms are summed apart, so `T` needs no `Neg`.
    fn minor(&self, row: usize, columns: &[usize]) -> T {
        if let [column] = *columns {
            return self.rows[row][column];
        }

        let mut even = T::zero();
        let mut odd = T::zero();

        for (k, &column) in columns.iter().enumerate() {
            let rest: Vec<usize> = columns.iter().copied().filter(|&c| c != column).collect();
            let term = self.rows[row][column] * self.minor(row + 1, &rest);

            if k % 2 == 0 {
                even = even + term;
            } else {
                odd = odd + term;
            }
        }

        even - odd
    }

    /// Determinant by Gaussian elimination with partial pivoting.
    ///
    /// At each step the row whose entry in the pivot column has the largest
    /// [`Scalar::abs`] is swapped into place. A zero pivot column means the
    /// matrix is singular and the result is zero.
    pub fn det_pivoted(&self) -> T {
        let mut rows = self.rows;
        let mut negate = false;
        let mut result = T::one();

        for i in 0..N {
            let mut pivot = i;
            for r in i + 1..N {
                if rows[r][i].abs() > rows[pivot][i].abs() {
                    pivot = r;
                }
            }

            if rows[pivot][i].is_zero() {
                return T::zero();
            }

            if pivot != i {
                rows.swap(pivot, i);
                negate = !negate;
            }

            for r in i + 1..N {
                let factor = rows[r][i] / rows[i][i];
                for c in i..N {
                    rows[r][c] = rows[r][c] - rows[i][c] * factor;
                }
            }

            result = result * rows[i][i];
        }

        if negate { T::zero() - result } else { result }
    }
}

impl<T: Float, const N: usize> Matrix<T, N, N> {
    /// Inverse by Gauss–Jordan elimination with partial pivoting.
    ///
    /// # Errors
    ///
    /// [`AlgebraError::SingularMatrix`] if a pivot column is entirely zero.
    pub fn inverse(&self) -> Result<Self, AlgebraError> {
        let mut work = self.rows;
        let mut inv = Self::identity().rows;

        for i in 0..N {
            let mut pivot = i;
            for r in i + 1..N {
                if work[r][i].abs() > work[pivot][i].abs() {
                    pivot = r;
                }
            }

            if work[pivot][i].is_zero() {
                return Err(AlgebraError::SingularMatrix);
            }

            work.swap(pivot, i);
            inv.swap(pivot, i);

            let scale = work[i][i].recip();
            for c in 0..N {
                work[i][c] = work[i][c] * scale;
                inv[i][c] = inv[i][c] * scale;
            }

            for r in (0..N).filter(|&r| r != i) {
                let factor = work[r][i];
                if factor.is_zero() {
                    continue;
                }

                for c in 0..N {
                    work[r][c] = work[r][c] - work[i][c] * factor;
                    inv[r][c] = inv[r][c] - inv[i][c] * factor;
                }
            }
        }

        Ok(Self::new(inv))
    }
}
