mod core;
mod det;
mod ops;

pub use self::core::Matrix;

/// A 2×2 matrix.
pub type Matrix2<T> = Matrix<T, 2, 2>;

/// A 3×3 matrix.
pub type Matrix3<T> = Matrix<T, 3, 3>;
