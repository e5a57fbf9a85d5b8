//! Elementary functions on `Complex<T>`
//!
//! All multivalued functions return their principal branch, with branch
//! cuts placed where the principal argument jumps (the negative real axis
//! for `ln`, `sqrt` and powers).

use crate::complex::Complex;
use num_traits::{Float, FloatConst};

impl<T: Float> Complex<T> {
    /// Modulus as a complex value with zero imaginary part.
    pub fn abs(&self) -> Self {
        Self::new(self.norm(), T::zero())
    }

    /// Multiplicative inverse `1 / z`.
    pub fn recip(&self) -> Self {
        Self::from(T::one()) / *self
    }

    /// Principal square root.
    pub fn sqrt(&self) -> Self {
        if self.im.is_zero() {
            return if self.re >= T::zero() {
                Self::new(self.re.sqrt(), T::zero())
            } else {
                Self::new(T::zero(), (-self.re).sqrt())
            };
        }

        let (r, theta) = self.to_polar();
        Self::from_polar(r.sqrt(), theta / (T::one() + T::one()))
    }

    /// Principal cube root.
    pub fn cbrt(&self) -> Self {
        let (r, theta) = self.to_polar();
        let three = T::one() + T::one() + T::one();

        Self::from_polar(r.cbrt(), theta / three)
    }

    pub fn exp(&self) -> Self {
        Self::from_polar(self.re.exp(), self.im)
    }

    /// Principal natural logarithm.
    pub fn ln(&self) -> Self {
        Self::new(self.norm().ln(), self.arg())
    }

    /// Raises to a real power.
    pub fn powf(&self, exp: T) -> Self {
        if self.re.is_zero() && self.im.is_zero() {
            return Self::new(T::zero(), T::zero());
        }

        let (r, theta) = self.to_polar();
        Self::from_polar(r.powf(exp), theta * exp)
    }

    /// Raises to a complex power, `exp(w · ln z)`.
    ///
    /// A zero base yields zero.
    pub fn powc(&self, exp: Self) -> Self {
        if self.re.is_zero() && self.im.is_zero() {
            return Self::new(T::zero(), T::zero());
        }

        (exp * self.ln()).exp()
    }

    pub fn sin(&self) -> Self {
        Self::new(
            self.re.sin() * self.im.cosh(),
            self.re.cos() * self.im.sinh(),
        )
    }

    pub fn cos(&self) -> Self {
        Self::new(
            self.re.cos() * self.im.cosh(),
            -self.re.sin() * self.im.sinh(),
        )
    }

    pub fn tan(&self) -> Self {
        self.sin() / self.cos()
    }

    pub fn sinh(&self) -> Self {
        Self::new(
            self.re.sinh() * self.im.cos(),
            self.re.cosh() * self.im.sin(),
        )
    }

    pub fn cosh(&self) -> Self {
        Self::new(
            self.re.cosh() * self.im.cos(),
            self.re.sinh() * self.im.sin(),
        )
    }

    pub fn tanh(&self) -> Self {
        self.sinh() / self.cosh()
    }

    /// `asin z = −i · ln(iz + √(1 − z²))`
    pub fn asin(&self) -> Self {
        let i = Self::i();
        let one = Self::from(T::one());
        let z = *self;

        -i * (i * z + (one - z * z).sqrt()).ln()
    }

    /// `acos z = −i · ln(z + i√(1 − z²))`
    pub fn acos(&self) -> Self {
        let i = Self::i();
        let one = Self::from(T::one());
        let z = *self;

        -i * (z + i * (one - z * z).sqrt()).ln()
    }

    /// `atan z = (i/2) · (ln(1 − iz) − ln(1 + iz))`
    pub fn atan(&self) -> Self {
        let i = Self::i();
        let one = Self::from(T::one());
        let two = T::one() + T::one();
        let iz = i * *self;

        i / two * ((one - iz).ln() - (one + iz).ln())
    }

    /// `asinh z = ln(z + √(z² + 1))`
    pub fn asinh(&self) -> Self {
        let z = *self;

        (z + (z * z + T::one()).sqrt()).ln()
    }

    /// `acosh z = ln(z + √(z + 1)·√(z − 1))`
    pub fn acosh(&self) -> Self {
        let z = *self;

        (z + (z + T::one()).sqrt() * (z - T::one()).sqrt()).ln()
    }

    /// `atanh z = ½ · (ln(1 + z) − ln(1 − z))`
    pub fn atanh(&self) -> Self {
        let one = Self::from(T::one());
        let two = T::one() + T::one();
        let z = *self;

        ((one + z).ln() - (one - z).ln()) / two
    }
}

impl<T: Float + FloatConst> Complex<T> {
    pub fn log2(&self) -> Self {
        self.ln() / T::LN_2()
    }

    pub fn log10(&self) -> Self {
        self.ln() / T::LN_10()
    }
}
