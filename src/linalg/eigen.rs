//! Eigen decomposition of 2×2 matrices
//!
//! For `A = [[a, b], [c, d]]` the eigenvalues are the roots of
//! `λ² − (a + d)λ + (ad − bc)`, with discriminant
//! `Δ = (a + d)² − 4(ad − bc)`. A negative discriminant yields a complex
//! conjugate pair, so results are returned as [`Complex`] values.
//!
//! Eigenvectors are normalized so that their second component is one,
//! except for the `(1, 0)` vectors of upper-triangular matrices.

use crate::{
    complex::Complex,
    error::AlgebraError,
    linalg::{Matrix2, Vec2},
};
use log::debug;
use num_traits::Float;

fn discriminant<T: Float>(a: T, b: T, c: T, d: T) -> T {
    let two = T::one() + T::one();
    let trace = a + d;

    trace * trace - two * two * (a * d - b * c)
}

/// Eigenvalues of a 2×2 matrix.
///
/// Returns a single value when the discriminant is zero. When the lower
/// left entry is zero the matrix is triangular and the diagonal entries
/// are returned as they are.
pub fn eigenvalues<T: Float>(m: &Matrix2<T>) -> Vec<Complex<T>> {
    let [[a, b], [c, d]] = *m.as_rows();
    let two = T::one() + T::one();
    let dis = discriminant(a, b, c, d);

    if dis.is_zero() {
        return vec![Complex::from((a + d) / two)];
    }

    if c.is_zero() {
        return vec![Complex::from(a), Complex::from(d)];
    }

    let root = Complex::from(dis).sqrt();
    vec![(root + (a + d)) / two, (Complex::from(a + d) - root) / two]
}

/// Eigenvectors of a 2×2 matrix, in the order of [`eigenvalues`].
///
/// A scalar multiple of the identity has every vector as an eigenvector
/// and yields an empty list.
pub fn eigenvectors<T: Float>(m: &Matrix2<T>) -> Vec<Vec2<Complex<T>>> {
    let [[a, b], [c, d]] = *m.as_rows();
    let one = Complex::from(T::one());
    let zero = Complex::from(T::zero());
    let two = T::one() + T::one();

    if b.is_zero() && c.is_zero() && a == d {
        return Vec::new();
    }

    let dis = discriminant(a, b, c, d);

    if dis.is_zero() {
        if c.is_zero() {
            return vec![Vec2::new(one, zero)];
        }
        return vec![Vec2::new(Complex::from((a - d) / (two * c)), one)];
    }

    if c.is_zero() {
        return vec![
            Vec2::new(one, zero),
            Vec2::new(Complex::from(b / (d - a)), one),
        ];
    }

    let root = Complex::from(dis).sqrt();
    vec![
        Vec2::new((root + (a - d)) / (two * c), one),
        Vec2::new((root - (a - d)) / (-two * c), one),
    ]
}

/// Rebuilds the matrix with the given eigenvalues and eigenvectors as
/// `P · D · P⁻¹`, where the columns of `P` are the eigenvectors and `D` is
/// the diagonal of eigenvalues.
///
/// With no eigenvectors every vector is an eigenvector, so the result is
/// `λ·I` for the first eigenvalue. A repeated eigenvalue may be given once
/// alongside two vectors.
///
/// # Errors
///
/// - [`AlgebraError::VagueEigenData`] if no eigenvalue is given, if only
///   one eigenvector is given, or if the two eigenvectors are parallel.
/// - [`AlgebraError::TooManyComponents`] for more than two values or
///   vectors.
pub fn from_eigen<T: Float>(
    values: &[T],
    vectors: &[Vec2<T>],
) -> Result<Matrix2<T>, AlgebraError> {
    let found = values.len().max(vectors.len());
    if found > 2 {
        return Err(AlgebraError::TooManyComponents { expected: 2, found });
    }

    let Some(&first) = values.first() else {
        debug!("eigen reconstruction rejected: no eigenvalues");
        return Err(AlgebraError::VagueEigenData);
    };
    let second = values.get(1).copied().unwrap_or(first);

    match vectors {
        [] => Ok(Matrix2::<T>::identity() * first),
        [u, v] => {
            let p = Matrix2::new([[u.x, v.x], [u.y, v.y]]);
            let p_inv = p.inverse().map_err(|_| {
                debug!("eigen reconstruction rejected: eigenvectors are parallel");
                AlgebraError::VagueEigenData
            })?;
            let d = Matrix2::new([[first, T::zero()], [T::zero(), second]]);

            Ok(p * d * p_inv)
        }
        _ => {
            debug!("eigen reconstruction rejected: a single eigenvector");
            Err(AlgebraError::VagueEigenData)
        }
    }
}
