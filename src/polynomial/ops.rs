//! Polynomial arithmetic
//!
//! Every result is trimmed, so cancellation of leading terms lowers the
//! degree. Division comes in two forms: [`Polynomial::div_rem`] reports a
//! zero divisor as an error, while the `/` and `%` operators panic on it,
//! as native integer division does.

use crate::{error::ArithmeticError, polynomial::Polynomial};
use num_traits::Zero;
use std::ops::{
    Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Rem, RemAssign, Sub, SubAssign,
};

impl<T: Copy + Zero> Add for Polynomial<T> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        let len = self.coeffs.len().max(rhs.coeffs.len());
        Polynomial::new(
            (0..len)
                .map(|k| self.coeff(k) + rhs.coeff(k))
                .collect::<Vec<_>>(),
        )
    }
}

impl<T: Copy + Zero + Sub<Output = T>> Sub for Polynomial<T> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        let len = self.coeffs.len().max(rhs.coeffs.len());
        Polynomial::new(
            (0..len)
                .map(|k| self.coeff(k) - rhs.coeff(k))
                .collect::<Vec<_>>(),
        )
    }
}

impl<T: Copy + Zero + Mul<Output = T>> Mul for Polynomial<T> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        let mut out = vec![T::zero(); self.coeffs.len() + rhs.coeffs.len() - 1];

        for (i, &a) in self.coeffs.iter().enumerate() {
            for (j, &b) in rhs.coeffs.iter().enumerate() {
                out[i + j] = out[i + j] + a * b;
            }
        }

        Polynomial::new(out)
    }
}

impl<T: Copy + Zero> Add<T> for Polynomial<T> {
    type Output = Self;

    fn add(mut self, rhs: T) -> Self::Output {
        self.coeffs[0] = self.coeffs[0] + rhs;
        self.trim();
        self
    }
}

impl<T: Copy + Zero + Sub<Output = T>> Sub<T> for Polynomial<T> {
    type Output = Self;

    fn sub(mut self, rhs: T) -> Self::Output {
        self.coeffs[0] = self.coeffs[0] - rhs;
        self.trim();
        self
    }
}

impl<T: Copy + Zero + Mul<Output = T>> Mul<T> for Polynomial<T> {
    type Output = Self;

    fn mul(self, rhs: T) -> Self::Output {
        Polynomial::new(self.coeffs.into_iter().map(|c| c * rhs).collect::<Vec<_>>())
    }
}

/// Divides every coefficient by `rhs`.
impl<T: Copy + Zero + Div<Output = T>> Div<T> for Polynomial<T> {
    type Output = Self;

    fn div(self, rhs: T) -> Self::Output {
        Polynomial::new(self.coeffs.into_iter().map(|c| c / rhs).collect::<Vec<_>>())
    }
}

impl<T: Copy + Zero + Neg<Output = T>> Neg for Polynomial<T> {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Polynomial::new(self.coeffs.into_iter().map(|c| -c).collect::<Vec<_>>())
    }
}

impl<T> Polynomial<T>
where
    T: Copy + Zero + Sub<Output = T> + Mul<Output = T> + Div<Output = T>,
{
    /// Long division, returning `(quotient, remainder)` with
    /// `self = quotient · divisor + remainder` and
    /// `deg(remainder) < deg(divisor)`.
    ///
    /// Over integer coefficients each quotient coefficient is a truncated
    /// division, so the identity only holds when the leading coefficient of
    /// the divisor divides evenly.
    ///
    /// # Errors
    ///
    /// [`ArithmeticError::DivisionByZero`] if `divisor` is the zero
    /// polynomial.
    pub fn div_rem(&self, divisor: &Self) -> Result<(Self, Self), ArithmeticError> {
        if divisor.is_zero() {
            return Err(ArithmeticError::DivisionByZero);
        }

        let n = self.degree();
        let m = divisor.degree();

        if n < m {
            return Ok((Self::zero(), self.clone()));
        }

        let lead = divisor.leading();
        let mut rem = self.coeffs.clone();
        let mut quot = vec![T::zero(); n - m + 1];

        for i in (0..=n - m).rev() {
            let q = rem[i + m] / lead;
            quot[i] = q;

            for (j, &d) in divisor.coeffs.iter().enumerate() {
                rem[i + j] = rem[i + j] - q * d;
            }
        }

        // Everything from degree m up has been eliminated.
        rem.truncate(m.max(1));
        if m == 0 {
            rem[0] = T::zero();
        }

        Ok((Polynomial::new(quot), Polynomial::new(rem)))
    }
}

impl<T> Div for Polynomial<T>
where
    T: Copy + Zero + Sub<Output = T> + Mul<Output = T> + Div<Output = T>,
{
    type Output = Self;

    /// # Panics
    ///
    /// Panics if `rhs` is the zero polynomial.
    fn div(self, rhs: Self) -> Self::Output {
        match self.div_rem(&rhs) {
            Ok((quotient, _)) => quotient,
            Err(e) => panic!("{e}"),
        }
    }
}

impl<T> Rem for Polynomial<T>
where
    T: Copy + Zero + Sub<Output = T> + Mul<Output = T> + Div<Output = T>,
{
    type Output = Self;

    /// # Panics
    ///
    /// Panics if `rhs` is the zero polynomial.
    fn rem(self, rhs: Self) -> Self::Output {
        match self.div_rem(&rhs) {
            Ok((_, remainder)) => remainder,
            Err(e) => panic!("{e}"),
        }
    }
}

macro_rules! impl_assign {
    ($assign_trait:ident, $assign_method:ident, $op:tt, $rhs:ty, [$($bound:ident),*]) => {
        impl<T> $assign_trait<$rhs> for Polynomial<T>
        where
            T: Copy + Zero $(+ $bound<Output = T>)*,
        {
            fn $assign_method(&mut self, rhs: $rhs) {
                let lhs = std::mem::replace(self, Polynomial::default());
                *self = lhs $op rhs;
            }
        }
    };
}

impl_assign!(AddAssign, add_assign, +, Polynomial<T>, []);
impl_assign!(SubAssign, sub_assign, -, Polynomial<T>, [Sub]);
impl_assign!(MulAssign, mul_assign, *, Polynomial<T>, [Mul]);
impl_assign!(DivAssign, div_assign, /, Polynomial<T>, [Sub, Mul, Div]);
impl_assign!(RemAssign, rem_assign, %, Polynomial<T>, [Sub, Mul, Div]);
impl_assign!(AddAssign, add_assign, +, T, []);
impl_assign!(SubAssign, sub_assign, -, T, [Sub]);
impl_assign!(MulAssign, mul_assign, *, T, [Mul]);
impl_assign!(DivAssign, div_assign, /, T, [Div]);
