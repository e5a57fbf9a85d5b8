//! Matrix arithmetic
//!
//! Sums and differences are entry-wise and require equal shapes. The
//! product `R×C · C×K` yields `R×K`; in-place `*=` is only offered for a
//! square right-hand side so the shape is preserved.

use crate::linalg::Matrix;
use num_traits::Zero;
use std::ops::{
    Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign,
};

macro_rules! impl_entrywise {
    ($op_trait:ident, $op_method:ident, $assign_trait:ident, $assign_method:ident, $op:tt) => {
        impl<T, const R: usize, const C: usize> $op_trait for Matrix<T, R, C>
        where
            T: Copy + $op_trait<Output = T>,
        {
            type Output = Self;

            fn $op_method(self, rhs: Self) -> Self::Output {
                Matrix::from_fn(|i, j| self.rows[i][j] $op rhs.rows[i][j])
            }
        }

        impl<T, const R: usize, const C: usize> $assign_trait for Matrix<T, R, C>
        where
            T: Copy + $op_trait<Output = T>,
        {
            fn $assign_method(&mut self, rhs: Self) {
                *self = *self $op rhs;
            }
        }
    };
}

impl_entrywise!(Add, add, AddAssign, add_assign, +);
impl_entrywise!(Sub, sub, SubAssign, sub_assign, -);

macro_rules! impl_scalar {
    ($op_trait:ident, $op_method:ident, $assign_trait:ident, $assign_method:ident, $op:tt) => {
        impl<T, const R: usize, const C: usize> $op_trait<T> for Matrix<T, R, C>
        where
            T: Copy + $op_trait<Output = T>,
        {
            type Output = Self;

            fn $op_method(self, rhs: T) -> Self::Output {
                self.map(|value| value $op rhs)
            }
        }

        impl<T, const R: usize, const C: usize> $assign_trait<T> for Matrix<T, R, C>
        where
            T: Copy + $op_trait<Output = T>,
        {
            fn $assign_method(&mut self, rhs: T) {
                *self = *self $op rhs;
            }
        }
    };
}

impl_scalar!(Mul, mul, MulAssign, mul_assign, *);
impl_scalar!(Div, div, DivAssign, div_assign, /);

impl<T, const R: usize, const C: usize> Neg for Matrix<T, R, C>
where
    T: Neg<Output = T>,
{
    type Output = Self;

    fn neg(self) -> Self::Output {
        self.map(|value| -value)
    }
}

impl<T, const R: usize, const C: usize, const K: usize> Mul<Matrix<T, C, K>>
    for Matrix<T, R, C>
where
    T: Copy + Zero + Mul<Output = T>,
{
    type Output = Matrix<T, R, K>;

    fn mul(self, rhs: Matrix<T, C, K>) -> Self::Output {
        Matrix::from_fn(|i, j| {
            (0..C).fold(T::zero(), |acc, k| acc + self.rows[i][k] * rhs.rows[k][j])
        })
    }
}

impl<T, const R: usize, const C: usize> MulAssign<Matrix<T, C, C>> for Matrix<T, R, C>
where
    T: Copy + Zero + Mul<Output = T>,
{
    fn mul_assign(&mut self, rhs: Matrix<T, C, C>) {
        *self = *self * rhs;
    }
}

macro_rules! impl_scalar_lhs {
    ($($t:ty),+) => {
        $(
            impl<const R: usize, const C: usize> Mul<Matrix<$t, R, C>> for $t {
                type Output = Matrix<$t, R, C>;

                fn mul(self, rhs: Matrix<$t, R, C>) -> Self::Output {
                    rhs * self
                }
            }
        )+
    };
}

impl_scalar_lhs!(f32, f64, i32, i64);
