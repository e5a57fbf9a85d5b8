//! Linear algebra over fixed dimensions
//!
//! - [`Matrix`]: an `R × C` matrix with const-generic shape, determinants
//!   and inversion for square matrices.
//! - [`Vec2`] / [`Vec3`]: plane and space vectors with dot and cross
//!   products, normalization and projection. Both convert to and from
//!   column matrices.
//! - [`eigen`]: eigenvalues and eigenvectors of 2×2 matrices, and the
//!   reverse reconstruction of a matrix from them.

/// Shared arithmetic and algebra for the named-field vector types.
macro_rules! impl_vector {
    ($name:ident, $dim:literal, { $($field:ident),+ }) => {
        impl<T> $name<T> {
            pub const fn new($($field: T),+) -> Self {
                Self { $($field),+ }
            }
        }

        impl<T: num_traits::Float> $name<T> {
            /// Euclidean length.
            pub fn length(&self) -> T {
                num_traits::Float::sqrt(self.dot(self))
            }

            /// Returns the unit vector in the same direction.
            ///
            /// # Errors
            ///
            /// [`AlgebraError::NullVector`](crate::error::AlgebraError::NullVector)
            /// for the zero vector.
            pub fn normalized(&self) -> Result<Self, crate::error::AlgebraError> {
                let length = self.length();
                if num_traits::Zero::is_zero(&length) {
                    return Err(crate::error::AlgebraError::NullVector);
                }

                Ok(*self / length)
            }

            /// Normalizes in place. Leaves `self` untouched on error.
            pub fn normalize(&mut self) -> Result<&mut Self, crate::error::AlgebraError> {
                *self = self.normalized()?;
                Ok(self)
            }
        }

        impl<T> $name<T>
        where
            T: Copy
                + num_traits::Zero
                + std::ops::Mul<Output = T>
                + std::ops::Div<Output = T>,
        {
            /// Component of `self` along `onto`: `(self·onto / onto·onto) · onto`.
            ///
            /// # Errors
            ///
            /// [`AlgebraError::NullVector`](crate::error::AlgebraError::NullVector)
            /// if `onto` is the zero vector.
            pub fn projection(&self, onto: &Self) -> Result<Self, crate::error::AlgebraError> {
                if $(num_traits::Zero::is_zero(&onto.$field))&&+ {
                    return Err(crate::error::AlgebraError::NullVector);
                }

                Ok(*onto * (self.dot(onto) / onto.dot(onto)))
            }

            /// Replaces `self` with its projection onto `onto`.
            pub fn project(&mut self, onto: &Self) -> Result<&mut Self, crate::error::AlgebraError> {
                *self = self.projection(onto)?;
                Ok(self)
            }
        }

        impl<T: Copy + std::ops::Add<Output = T>> std::ops::Add for $name<T> {
            type Output = Self;

            fn add(self, rhs: Self) -> Self::Output {
                Self { $($field: self.$field + rhs.$field),+ }
            }
        }

        impl<T: Copy + std::ops::Sub<Output = T>> std::ops::Sub for $name<T> {
            type Output = Self;

            fn sub(self, rhs: Self) -> Self::Output {
                Self { $($field: self.$field - rhs.$field),+ }
            }
        }

        impl<T: Copy + std::ops::Mul<Output = T>> std::ops::Mul<T> for $name<T> {
            type Output = Self;

            fn mul(self, rhs: T) -> Self::Output {
                Self { $($field: self.$field * rhs),+ }
            }
        }

        impl<T: Copy + std::ops::Div<Output = T>> std::ops::Div<T> for $name<T> {
            type Output = Self;

            fn div(self, rhs: T) -> Self::Output {
                Self { $($field: self.$field / rhs),+ }
            }
        }

        impl<T: std::ops::Neg<Output = T>> std::ops::Neg for $name<T> {
            type Output = Self;

            fn neg(self) -> Self::Output {
                Self { $($field: -self.$field),+ }
            }
        }

        impl<T: Copy + std::ops::Add<Output = T>> std::ops::AddAssign for $name<T> {
            fn add_assign(&mut self, rhs: Self) {
                *self = *self + rhs;
            }
        }

        impl<T: Copy + std::ops::Sub<Output = T>> std::ops::SubAssign for $name<T> {
            fn sub_assign(&mut self, rhs: Self) {
                *self = *self - rhs;
            }
        }

        impl<T: Copy + std::ops::Mul<Output = T>> std::ops::MulAssign<T> for $name<T> {
            fn mul_assign(&mut self, rhs: T) {
                *self = *self * rhs;
            }
        }

        impl<T: Copy + std::ops::Div<Output = T>> std::ops::DivAssign<T> for $name<T> {
            fn div_assign(&mut self, rhs: T) {
                *self = *self / rhs;
            }
        }

        impl<T> From<[T; $dim]> for $name<T> {
            fn from([$($field),+]: [T; $dim]) -> Self {
                Self { $($field),+ }
            }
        }

        impl<T> From<$name<T>> for [T; $dim] {
            fn from(v: $name<T>) -> Self {
                [$(v.$field),+]
            }
        }

        /// Missing trailing components are zero.
        impl<T: Copy + num_traits::Zero> TryFrom<&[T]> for $name<T> {
            type Error = crate::error::AlgebraError;

            fn try_from(parts: &[T]) -> Result<Self, Self::Error> {
                if parts.len() > $dim {
                    return Err(crate::error::AlgebraError::TooManyComponents {
                        expected: $dim,
                        found: parts.len(),
                    });
                }

                let mut padded = [T::zero(); $dim];
                padded[..parts.len()].copy_from_slice(parts);
                Ok(Self::from(padded))
            }
        }

        impl<T> From<$name<T>> for crate::linalg::Matrix<T, $dim, 1> {
            fn from(v: $name<T>) -> Self {
                Self::new([$([v.$field]),+])
            }
        }

        impl<T> From<crate::linalg::Matrix<T, $dim, 1>> for $name<T> {
            fn from(m: crate::linalg::Matrix<T, $dim, 1>) -> Self {
                let [$([$field]),+] = m.into_rows();
                Self { $($field),+ }
            }
        }

        impl<T: std::fmt::Display> std::fmt::Display for $name<T> {
            /// Formats as `{ x, y }`.
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                let parts = [$(self.$field.to_string()),+];
                write!(f, "{{ {} }}", parts.join(", "))
            }
        }
    };
}

pub mod eigen;
mod matrix;
mod vec2;
mod vec3;

pub use matrix::{Matrix, Matrix2, Matrix3};
pub use vec2::Vec2;
pub use vec3::Vec3;
