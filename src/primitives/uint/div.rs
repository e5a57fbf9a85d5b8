//! Division and remainder for `Uint`
//!
//! The quotient is located by a binary search over its bits rather than by
//! repeated subtraction. For a dividend `n` and divisor `d` the quotient
//! `q` is the unique value with
//!
//! ```text
//! q · d <= n < (q + 1) · d
//! ```
//!
//! Since `q < 2^(bits(n) - bits(d) + 1)`, the search starts at that bit and
//! walks down: a candidate `q | 1 << bit` is kept when `candidate · d` still
//! fits under `n`, and the search stops early on an exact hit. The
//! remainder is then `n - q · d`.
//!
//! A zero divisor is rejected before the search starts. The fallible forms
//! ([`Uint::div_rem`], [`Uint::checked_div`], [`Uint::checked_rem`]) report
//! it; the `/` and `%` operators panic with the same message, like native
//! integer division.

use crate::{error::ArithmeticError, primitives::uint::Uint};
use std::ops::{Div, DivAssign, Rem, RemAssign};

impl<const LIMBS: usize> Uint<LIMBS> {
    /// Divides by `divisor`, returning `(quotient, remainder)`.
    ///
    /// # Errors
    ///
    /// Returns [`ArithmeticError::DivisionByZero`] if `divisor` is zero.
    pub fn div_rem(self, divisor: Self) -> Result<(Self, Self), ArithmeticError> {
        if divisor.is_zero() {
            return Err(ArithmeticError::DivisionByZero);
        }

        Ok(self.div_rem_nonzero(&divisor))
    }

    /// Checked division. Returns `None` if `divisor` is zero.
    pub fn checked_div(self, divisor: Self) -> Option<Self> {
        self.div_rem(divisor).ok().map(|(q, _)| q)
    }

    /// Checked remainder. Returns `None` if `divisor` is zero.
    pub fn checked_rem(self, divisor: Self) -> Option<Self> {
        self.div_rem(divisor).ok().map(|(_, r)| r)
    }

    /// Division for a divisor already known to be non-zero.
    pub(crate) fn div_rem_nonzero(&self, divisor: &Self) -> (Self, Self) {
        if self < divisor {
            return (Self::ZERO, *self);
        }

        let quotient = self.search_quotient(divisor);
        let remainder = *self - quotient * *divisor;

        (quotient, remainder)
    }

    fn search_quotient(&self, divisor: &Self) -> Self {
        let mut quotient = Self::ZERO;

        for bit in (0..=self.bits() - divisor.bits()).rev() {
            let candidate = quotient | (Self::ONE << bit);

            match candidate.overflowing_mul(*divisor) {
                (product, false) if product <= *self => {
                    quotient = candidate;

                    if product == *self {
                        break;
                    }
                }
                _ => {}
            }
        }

        quotient
    }
}

impl<const LIMBS: usize> Div for Uint<LIMBS> {
    type Output = Self;

    /// Integer division producing the quotient.
    ///
    /// # Panics
    ///
    /// Panics with `"division by zero"` if `rhs` is zero.
    fn div(self, rhs: Self) -> Self::Output {
        match self.div_rem(rhs) {
            Ok((quotient, _)) => quotient,
            Err(e) => panic!("{e}"),
        }
    }
}

impl<const LIMBS: usize> Rem for Uint<LIMBS> {
    type Output = Self;

    /// Remainder of integer division.
    ///
    /// # Panics
    ///
    /// Panics with `"division by zero"` if `rhs` is zero.
    fn rem(self, rhs: Self) -> Self::Output {
        match self.div_rem(rhs) {
            Ok((_, remainder)) => remainder,
            Err(e) => panic!("{e}"),
        }
    }
}

impl<const LIMBS: usize> DivAssign for Uint<LIMBS> {
    fn div_assign(&mut self, rhs: Self) {
        *self = *self / rhs;
    }
}

impl<const LIMBS: usize> RemAssign for Uint<LIMBS> {
    fn rem_assign(&mut self, rhs: Self) {
        *self = *self % rhs;
    }
}
