//! Text output for `Uint`
//!
//! Decimal output has no native primitive at these widths, so digits are
//! peeled front to back. The powers of ten up to the value are collected
//! on the way up and then divided out from the largest down. Each quotient
//! is a single digit, so every division searches only four quotient bits.
//!
//! Hexadecimal output maps limbs directly and skips leading zeros.
//!
//! There is no parser; text conversion is one-directional.

use crate::primitives::uint::Uint;
use std::fmt::{Display, Formatter, LowerHex, Result, UpperHex};

impl<const LIMBS: usize> Uint<LIMBS> {
    fn decimal_digits(&self) -> String {
        if self.is_zero() {
            return "0".to_owned();
        }

        let ten = Self::from(10u64);
        let mut place = Self::ONE;
        let mut powers = Vec::new();

        while let Some(next) = place.checked_mul(ten) {
            if next > *self {
                break;
            }
            powers.push(place);
            place = next;
        }
        powers.push(place);

        let mut digits = String::with_capacity(powers.len());
        let mut rest = *self;

        for place in powers.iter().rev() {
            let (digit, remainder) = rest.div_rem_nonzero(place);
            digits.push(char::from(b'0' + digit.low_u32() as u8));
            rest = remainder;
        }

        digits
    }

    fn hex_digits(&self, upper: bool) -> String {
        let mut out = String::new();

        for &limb in self.limbs.iter().skip_while(|&&l| l == 0) {
            // Only the leading limb may be printed without padding.
            let part = match (out.is_empty(), upper) {
                (true, false) => format!("{limb:x}"),
                (true, true) => format!("{limb:X}"),
                (false, false) => format!("{limb:08x}"),
                (false, true) => format!("{limb:08X}"),
            };
            out.push_str(&part);
        }

        if out.is_empty() {
            out.push('0');
        }

        out
    }
}

impl<const LIMBS: usize> Display for Uint<LIMBS> {
    /// Formats the value in decimal.
    ///
    /// Width, fill and `0` padding flags are honoured.
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        f.pad_integral(true, "", &self.decimal_digits())
    }
}

impl<const LIMBS: usize> LowerHex for Uint<LIMBS> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        f.pad_integral(true, "0x", &self.hex_digits(false))
    }
}

impl<const LIMBS: usize> UpperHex for Uint<LIMBS> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        f.pad_integral(true, "0x", &self.hex_digits(true))
    }
}
