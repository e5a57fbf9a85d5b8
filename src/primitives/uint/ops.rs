//! Bitwise operations for `Uint`
//!
//! `&`, `|`, `^` and `!` act limb by limb. Shifts treat the limb array as
//! one big-endian bit string: a shift by `n` moves whole limbs by `n / 32`
//! and then stitches the residual `n % 32` bits across neighbouring limbs.
//! Shifting by `BITS` or more yields zero.

use crate::primitives::uint::Uint;
use std::ops::{
    BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Not, Shl, ShlAssign, Shr,
    ShrAssign,
};

macro_rules! impl_limbwise {
    ($trait:ident, $method:ident, $assign_trait:ident, $assign_method:ident, $op:tt) => {
        impl<const LIMBS: usize> $trait for Uint<LIMBS> {
            type Output = Self;

            fn $method(mut self, rhs: Self) -> Self::Output {
                self.$assign_method(rhs);
                self
            }
        }

        impl<const LIMBS: usize> $assign_trait for Uint<LIMBS> {
            fn $assign_method(&mut self, rhs: Self) {
                self.limbs
                    .iter_mut()
                    .zip(rhs.limbs.iter())
                    .for_each(|(l, r)| *l = *l $op r);
            }
        }
    };
}

impl_limbwise!(BitAnd, bitand, BitAndAssign, bitand_assign, &);
impl_limbwise!(BitOr, bitor, BitOrAssign, bitor_assign, |);
impl_limbwise!(BitXor, bitxor, BitXorAssign, bitxor_assign, ^);

impl<const LIMBS: usize> Not for Uint<LIMBS> {
    type Output = Self;

    fn not(mut self) -> Self::Output {
        self.limbs.iter_mut().for_each(|l| *l = !*l);
        self
    }
}

impl<const LIMBS: usize> Uint<LIMBS> {
    /// Logical shift towards the most significant end.
    ///
    /// ```text
    /// out[i] = limb(i + n/32) << (n%32) | limb(i + n/32 + 1) >> (32 - n%32)
    /// ```
    fn shift_left(&self, n: u32) -> Self {
        if n >= Self::BITS {
            return Self::ZERO;
        }

        let offset = (n / 32) as usize;
        let bits = n % 32;
        let mut out = [0u32; LIMBS];

        for (i, o) in out.iter_mut().enumerate() {
            let hi = self.limb(i + offset);

            // A 32-bit shift of a u32 is undefined, so the aligned case
            // takes whole limbs only.
            *o = if bits == 0 {
                hi
            } else {
                (hi << bits) | (self.limb(i + offset + 1) >> (32 - bits))
            };
        }

        Self { limbs: out }
    }

    /// Logical shift towards the least significant end.
    ///
    /// ```text
    /// out[i] = limb(i - n/32) >> (n%32) | limb(i - n/32 - 1) << (32 - n%32)
    /// ```
    fn shift_right(&self, n: u32) -> Self {
        if n >= Self::BITS {
            return Self::ZERO;
        }

        let offset = (n / 32) as usize;
        let bits = n % 32;
        let mut out = [0u32; LIMBS];

        for (i, o) in out.iter_mut().enumerate() {
            let lo = self.limb_before(i, offset);

            *o = if bits == 0 {
                lo
            } else {
                (lo >> bits) | (self.limb_before(i, offset + 1) << (32 - bits))
            };
        }

        Self { limbs: out }
    }
}

macro_rules! impl_shift {
    ($($amount:ty),+) => {
        $(
            impl<const LIMBS: usize> Shl<$amount> for Uint<LIMBS> {
                type Output = Self;

                fn shl(self, rhs: $amount) -> Self::Output {
                    self.shift_left(u32::try_from(rhs).unwrap_or(u32::MAX))
                }
            }

            impl<const LIMBS: usize> Shr<$amount> for Uint<LIMBS> {
                type Output = Self;

                fn shr(self, rhs: $amount) -> Self::Output {
                    self.shift_right(u32::try_from(rhs).unwrap_or(u32::MAX))
                }
            }

            impl<const LIMBS: usize> ShlAssign<$amount> for Uint<LIMBS> {
                fn shl_assign(&mut self, rhs: $amount) {
                    *self = *self << rhs;
                }
            }

            impl<const LIMBS: usize> ShrAssign<$amount> for Uint<LIMBS> {
                fn shr_assign(&mut self, rhs: $amount) {
                    *self = *self >> rhs;
                }
            }
        )+
    };
}

impl_shift!(u32, usize);
