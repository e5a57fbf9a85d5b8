//! Arithmetic for `Complex`
//!
//! Every operator is available between two complex numbers and between a
//! complex number and a real scalar of the same type. Real scalars on the
//! left-hand side are supported for the native numeric types.

use crate::complex::Complex;
use std::ops::{
    Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign,
};

impl<T: Copy + Add<Output = T>> Add for Complex<T> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self::new(self.re + rhs.re, self.im + rhs.im)
    }
}

impl<T: Copy + Add<Output = T>> Add<T> for Complex<T> {
    type Output = Self;

    fn add(self, rhs: T) -> Self::Output {
        Self::new(self.re + rhs, self.im)
    }
}

impl<T: Copy + Sub<Output = T>> Sub for Complex<T> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self::new(self.re - rhs.re, self.im - rhs.im)
    }
}

impl<T: Copy + Sub<Output = T>> Sub<T> for Complex<T> {
    type Output = Self;

    fn sub(self, rhs: T) -> Self::Output {
        Self::new(self.re - rhs, self.im)
    }
}

/// `(a + bi)(c + di) = (ac − bd) + (ad + bc)i`
impl<T> Mul for Complex<T>
where
    T: Copy + Add<Output = T> + Sub<Output = T> + Mul<Output = T>,
{
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Self::new(
            self.re * rhs.re - self.im * rhs.im,
            self.re * rhs.im + self.im * rhs.re,
        )
    }
}

impl<T: Copy + Mul<Output = T>> Mul<T> for Complex<T> {
    type Output = Self;

    fn mul(self, rhs: T) -> Self::Output {
        Self::new(self.re * rhs, self.im * rhs)
    }
}

/// `(a + bi) / (c + di) = ((ac + bd) + (bc − ad)i) / (c² + d²)`
impl<T> Div for Complex<T>
where
    T: Copy + Add<Output = T> + Sub<Output = T> + Mul<Output = T> + Div<Output = T>,
{
    type Output = Self;

    fn div(self, rhs: Self) -> Self::Output {
        let den = rhs.norm_sqr();

        Self::new(
            (self.re * rhs.re + self.im * rhs.im) / den,
            (self.im * rhs.re - self.re * rhs.im) / den,
        )
    }
}

impl<T: Copy + Div<Output = T>> Div<T> for Complex<T> {
    type Output = Self;

    fn div(self, rhs: T) -> Self::Output {
        Self::new(self.re / rhs, self.im / rhs)
    }
}

impl<T: Copy + Neg<Output = T>> Neg for Complex<T> {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self::new(-self.re, -self.im)
    }
}

macro_rules! impl_assign {
    ($assign_trait:ident, $assign_method:ident, $op_trait:ident, $op:tt, [$($bound:ident),+]) => {
        impl<T> $assign_trait for Complex<T>
        where
            T: Copy $(+ $bound<Output = T>)+,
        {
            fn $assign_method(&mut self, rhs: Self) {
                *self = *self $op rhs;
            }
        }

        impl<T> $assign_trait<T> for Complex<T>
        where
            T: Copy $(+ $bound<Output = T>)+,
        {
            fn $assign_method(&mut self, rhs: T) {
                *self = *self $op rhs;
            }
        }
    };
}

impl_assign!(AddAssign, add_assign, Add, +, [Add]);
impl_assign!(SubAssign, sub_assign, Sub, -, [Sub]);
impl_assign!(MulAssign, mul_assign, Mul, *, [Add, Sub, Mul]);
impl_assign!(DivAssign, div_assign, Div, /, [Add, Sub, Mul, Div]);

macro_rules! impl_real_lhs {
    ($($t:ty),+) => {
        $(
            impl Add<Complex<$t>> for $t {
                type Output = Complex<$t>;

                fn add(self, rhs: Complex<$t>) -> Self::Output {
                    Complex::new(self + rhs.re, rhs.im)
                }
            }

            impl Sub<Complex<$t>> for $t {
                type Output = Complex<$t>;

                fn sub(self, rhs: Complex<$t>) -> Self::Output {
                    Complex::new(self - rhs.re, -rhs.im)
                }
            }

            impl Mul<Complex<$t>> for $t {
                type Output = Complex<$t>;

                fn mul(self, rhs: Complex<$t>) -> Self::Output {
                    Complex::new(self * rhs.re, self * rhs.im)
                }
            }

            impl Div<Complex<$t>> for $t {
                type Output = Complex<$t>;

                fn div(self, rhs: Complex<$t>) -> Self::Output {
                    Complex::from(self) / rhs
                }
            }
        )+
    };
}

impl_real_lhs!(f32, f64, i32, i64);
