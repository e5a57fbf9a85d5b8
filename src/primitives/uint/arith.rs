//! Addition, subtraction and multiplication for `Uint`
//!
//! All three operators wrap modulo 2^BITS, matching fixed-width hardware
//! arithmetic. Overflow is not an error; callers that need to detect it
//! use the `overflowing_*` and `checked_*` forms.
//!
//! - Addition and subtraction ripple a carry from the least significant
//!   limb upwards through a 64-bit accumulator.
//! - Multiplication is schoolbook product scanning: each result limb is the
//!   sum of the limb products whose positions add up to it, plus the carry
//!   from the column below.

use crate::primitives::uint::Uint;
use std::ops::{Add, AddAssign, Mul, MulAssign, Sub, SubAssign};

impl<const LIMBS: usize> Uint<LIMBS> {
    /// Adds `rhs`, returning the wrapped sum and whether a carry left the
    /// top limb.
    pub fn overflowing_add(self, rhs: Self) -> (Self, bool) {
        let mut out = [0u32; LIMBS];
        let mut carry = 0u64;

        for ((&a, &b), o) in self
            .limbs
            .iter()
            .zip(rhs.limbs.iter())
            .zip(out.iter_mut())
            .rev()
        {
            let sum = u64::from(a) + u64::from(b) + carry;
            *o = sum as u32;
            carry = sum >> 32;
        }

        (Self { limbs: out }, carry != 0)
    }

    /// Subtracts `rhs`, returning the wrapped difference and whether a
    /// borrow left the top limb.
    ///
    /// Each limb computes `a + (0xFFFF_FFFF - b) + carry` with the carry
    /// seeded to one, which is `a - b` in two's complement; a carry of zero
    /// out of a limb is a borrow into the next.
    pub fn overflowing_sub(self, rhs: Self) -> (Self, bool) {
        let mut out = [0u32; LIMBS];
        let mut carry = 1u64;

        for ((&a, &b), o) in self
            .limbs
            .iter()
            .zip(rhs.limbs.iter())
            .zip(out.iter_mut())
            .rev()
        {
            let acc = u64::from(a) + u64::from(!b) + carry;
            *o = acc as u32;
            carry = acc >> 32;
        }

        (Self { limbs: out }, carry == 0)
    }

    /// Multiplies by `rhs`, returning the low `BITS` of the product and
    /// whether any of the high half was non-zero.
    pub fn overflowing_mul(self, rhs: Self) -> (Self, bool) {
        self.product_columns(&rhs, true)
    }

    /// Checked addition. Returns `None` on overflow.
    pub fn checked_add(self, rhs: Self) -> Option<Self> {
        match self.overflowing_add(rhs) {
            (sum, false) => Some(sum),
            _ => None,
        }
    }

    /// Checked subtraction. Returns `None` if `rhs > self`.
    pub fn checked_sub(self, rhs: Self) -> Option<Self> {
        match self.overflowing_sub(rhs) {
            (diff, false) => Some(diff),
            _ => None,
        }
    }

    /// Checked multiplication. Returns `None` on overflow.
    pub fn checked_mul(self, rhs: Self) -> Option<Self> {
        match self.overflowing_mul(rhs) {
            (product, false) => Some(product),
            _ => None,
        }
    }

    /// Product scanning over the little-endian result columns.
    ///
    /// Column `k` sums `a[i] * b[k - i]` for every `i` with both factors in
    /// range, where `a[0]` is the least significant limb. A `u128`
    /// accumulator holds up to `LIMBS` full 64-bit products plus the carry,
    /// so nothing is lost before the low 32 bits are stored.
    ///
    /// Only the low `LIMBS` columns are stored. With `full` set the high
    /// columns are scanned too and the flag reports whether any of them, or
    /// the final carry, was non-zero.
    fn product_columns(&self, rhs: &Self, full: bool) -> (Self, bool) {
        let mut out = [0u32; LIMBS];
        let mut acc = 0u128;
        let mut spill = false;

        let lhs_at = |i: usize| u128::from(self.limbs[LIMBS - 1 - i]);
        let rhs_at = |i: usize| u128::from(rhs.limbs[LIMBS - 1 - i]);

        let columns = if full { (2 * LIMBS).saturating_sub(1) } else { LIMBS };

        for k in 0..columns {
            let lo = k.saturating_sub(LIMBS - 1);
            let hi = k.min(LIMBS - 1);

            for i in lo..=hi {
                acc += lhs_at(i) * rhs_at(k - i);
            }

            if k < LIMBS {
                out[LIMBS - 1 - k] = acc as u32;
            } else if acc as u32 != 0 {
                spill = true;
            }

            acc >>= 32;
        }

        if full && acc != 0 {
            spill = true;
        }

        (Self { limbs: out }, spill)
    }
}

impl<const LIMBS: usize> Add for Uint<LIMBS> {
    type Output = Self;

    /// Addition modulo 2^BITS.
    fn add(self, rhs: Self) -> Self::Output {
        self.overflowing_add(rhs).0
    }
}

impl<const LIMBS: usize> Sub for Uint<LIMBS> {
    type Output = Self;

    /// Subtraction modulo 2^BITS.
    fn sub(self, rhs: Self) -> Self::Output {
        self.overflowing_sub(rhs).0
    }
}

impl<const LIMBS: usize> Mul for Uint<LIMBS> {
    type Output = Self;

    /// Multiplication modulo 2^BITS. The product is truncated to the low
    /// `LIMBS` limbs; higher columns are never computed.
    fn mul(self, rhs: Self) -> Self::Output {
        self.product_columns(&rhs, false).0
    }
}

impl<const LIMBS: usize> AddAssign for Uint<LIMBS> {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<const LIMBS: usize> SubAssign for Uint<LIMBS> {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl<const LIMBS: usize> MulAssign for Uint<LIMBS> {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}
