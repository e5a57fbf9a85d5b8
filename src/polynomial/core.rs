//! Polynomial representation

use num_traits::{One, Zero};
use std::ops::{Index, Mul};

/// A polynomial in one variable with coefficients of type `T`.
///
/// Coefficients are stored in ascending degree: index `k` holds the
/// coefficient of `x^k`. The list is never empty and never ends in a zero,
/// except for the zero polynomial itself, which is `[0]`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Polynomial<T> {
    pub(crate) coeffs: Vec<T>,
}

impl<T: Copy + Zero> Polynomial<T> {
    /// Builds a polynomial from coefficients in ascending degree.
    ///
    /// Trailing zeros are dropped; an empty list is the zero polynomial.
    pub fn new(coeffs: impl Into<Vec<T>>) -> Self {
        let mut p = Self {
            coeffs: coeffs.into(),
        };

        if p.coeffs.is_empty() {
            p.coeffs.push(T::zero());
        }

        p.trim();
        p
    }

    /// The constant polynomial `c`.
    pub fn constant(c: T) -> Self {
        Self::new(vec![c])
    }

    /// Drops trailing zero coefficients, keeping at least one.
    pub fn trim(&mut self) {
        while self.coeffs.len() > 1 && self.coeffs.last().is_some_and(|c| c.is_zero()) {
            self.coeffs.pop();
        }
    }

    pub fn coefficients(&self) -> &[T] {
        &self.coeffs
    }

    /// Highest power with a non-zero coefficient. Zero for constants,
    /// including the zero polynomial.
    pub fn degree(&self) -> usize {
        self.coeffs.len() - 1
    }

    pub fn is_zero(&self) -> bool {
        self.coeffs.len() == 1 && self.coeffs[0].is_zero()
    }

    /// Coefficient of the highest power.
    pub fn leading(&self) -> T {
        self.coeffs[self.coeffs.len() - 1]
    }

    /// Coefficient of `x^k`, zero above the degree.
    pub fn coeff(&self, k: usize) -> T {
        self.coeffs.get(k).copied().unwrap_or_else(T::zero)
    }

    /// Evaluates at `x` by Horner's rule.
    ///
    /// `x` may be of any type the coefficients convert into, so a real
    /// polynomial can be evaluated at a complex point.
    pub fn eval<U>(&self, x: U) -> U
    where
        U: Copy + Zero + Mul<Output = U> + From<T>,
    {
        self.coeffs
            .iter()
            .rev()
            .fold(U::zero(), |acc, &c| acc * x + U::from(c))
    }
}

impl<T: Copy + Zero> Default for Polynomial<T> {
    fn default() -> Self {
        Self::constant(T::zero())
    }
}

impl<T: Copy + Zero> From<Vec<T>> for Polynomial<T> {
    fn from(coeffs: Vec<T>) -> Self {
        Self::new(coeffs)
    }
}

impl<T: Copy + Zero, const N: usize> From<[T; N]> for Polynomial<T> {
    fn from(coeffs: [T; N]) -> Self {
        Self::new(coeffs.to_vec())
    }
}

/// Coefficient of `x^k`. Panics above the degree; see [`Polynomial::coeff`].
impl<T> Index<usize> for Polynomial<T> {
    type Output = T;

    fn index(&self, k: usize) -> &Self::Output {
        &self.coeffs[k]
    }
}

impl<T: Copy + Zero> Zero for Polynomial<T> {
    fn zero() -> Self {
        Self::default()
    }

    fn is_zero(&self) -> bool {
        Polynomial::is_zero(self)
    }
}

impl<T: Copy + Zero + One> One for Polynomial<T> {
    fn one() -> Self {
        Self::constant(T::one())
    }
}
