//! Complex number representation

use crate::error::AlgebraError;
use num_traits::{Float, One, Zero};
use std::ops::{Add, Mul, Neg, Sub};

/// A complex number `re + im·i`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Complex<T> {
    /// Real part.
    pub re: T,
    /// Imaginary part.
    pub im: T,
}

impl<T> Complex<T> {
    pub const fn new(re: T, im: T) -> Self {
        Self { re, im }
    }
}

impl<T: Zero + One> Complex<T> {
    /// The imaginary unit.
    pub fn i() -> Self {
        Self::new(T::zero(), T::one())
    }
}

impl<T: Copy + Neg<Output = T>> Complex<T> {
    /// Complex conjugate.
    pub fn conj(&self) -> Self {
        Self::new(self.re, -self.im)
    }
}

impl<T: Copy + Add<Output = T> + Mul<Output = T>> Complex<T> {
    /// Squared modulus `re² + im²`.
    pub fn norm_sqr(&self) -> T {
        self.re * self.re + self.im * self.im
    }
}

impl<T: Float> Complex<T> {
    /// Builds `r·(cos θ + i·sin θ)`.
    pub fn from_polar(r: T, theta: T) -> Self {
        Self::new(r * theta.cos(), r * theta.sin())
    }

    /// Modulus `|z|`.
    pub fn norm(&self) -> T {
        self.re.hypot(self.im)
    }

    /// Principal argument in `(-π, π]`; zero for the origin.
    pub fn arg(&self) -> T {
        self.im.atan2(self.re)
    }

    /// Returns `(|z|, arg z)`.
    pub fn to_polar(&self) -> (T, T) {
        (self.norm(), self.arg())
    }

    pub fn is_nan(&self) -> bool {
        self.re.is_nan() || self.im.is_nan()
    }
}

/// Embeds a real value with a zero imaginary part.
impl<T: Zero> From<T> for Complex<T> {
    fn from(re: T) -> Self {
        Self::new(re, T::zero())
    }
}

/// Builds a complex number from up to two components.
///
/// Missing components are zero; more than two is an error.
impl<T: Copy + Zero> TryFrom<&[T]> for Complex<T> {
    type Error = AlgebraError;

    fn try_from(parts: &[T]) -> Result<Self, Self::Error> {
        match *parts {
            [] => Ok(Self::zero_pair()),
            [re] => Ok(Self::new(re, T::zero())),
            [re, im] => Ok(Self::new(re, im)),
            _ => Err(AlgebraError::TooManyComponents {
                expected: 2,
                found: parts.len(),
            }),
        }
    }
}

impl<T: Zero> Complex<T> {
    fn zero_pair() -> Self {
        Self::new(T::zero(), T::zero())
    }
}

impl<T> Zero for Complex<T>
where
    T: Copy + Zero,
{
    fn zero() -> Self {
        Self::zero_pair()
    }

    fn is_zero(&self) -> bool {
        self.re.is_zero() && self.im.is_zero()
    }
}

impl<T> One for Complex<T>
where
    T: Copy + Zero + One + Sub<Output = T>,
{
    fn one() -> Self {
        Self::new(T::one(), T::zero())
    }
}
