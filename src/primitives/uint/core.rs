//! Fixed-width unsigned integer storage
//!
//! This module defines [`Uint`], a fixed-size unsigned integer made of
//! `LIMBS` 32-bit limbs.
//!
//! The internal representation is big-endian at limb granularity: limb `0`
//! is the most significant, limb `LIMBS - 1` the least significant. The
//! value represented is
//!
//! ```text
//! Σ limbs[i] · 2^(32 · (LIMBS - 1 - i))
//! ```
//!
//! Because the limbs are ordered most-significant first, the derived
//! lexicographic comparison of the limb array is exactly numeric ordering.

/// Fixed-size unsigned integer of `32 * LIMBS` bits.
///
/// All arithmetic wraps modulo 2^(32·LIMBS), like native unsigned integers
/// in release builds. Values are plain `Copy` data with no heap storage.
///
/// Narrowing to a smaller width truncates to the low-order limbs through
/// [`Uint::resize`], [`Uint::low_u64`] and [`Uint::low_u32`]. The `TryFrom`
/// impls are the checked alternative and fail with
/// [`ArithmeticError::Overflow`](crate::error::ArithmeticError::Overflow)
/// instead of dropping bits.
#[derive(Copy, Clone, Debug, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Uint<const LIMBS: usize> {
    pub(crate) limbs: [u32; LIMBS],
}

impl<const LIMBS: usize> Uint<LIMBS> {
    /// Number of 32-bit limbs.
    pub const LIMBS: usize = LIMBS;

    /// Width in bits.
    pub const BITS: u32 = 32 * LIMBS as u32;

    /// The value zero.
    pub const ZERO: Self = Self { limbs: [0; LIMBS] };

    /// The value one.
    pub const ONE: Self = Self::from_u64(1);

    /// The maximum representable value (2^BITS − 1).
    pub const MAX: Self = Self {
        limbs: [u32::MAX; LIMBS],
    };

    /// Builds a value from limbs given most significant first.
    pub const fn from_limbs(limbs: [u32; LIMBS]) -> Self {
        Self { limbs }
    }

    /// Zero-extends a `u64` into the two least significant limbs.
    ///
    /// This is a `const` constructor suitable for use in constant contexts.
    pub const fn from_u64(value: u64) -> Self {
        let mut limbs = [0u32; LIMBS];

        if LIMBS >= 1 {
            limbs[LIMBS - 1] = value as u32;
        }
        if LIMBS >= 2 {
            limbs[LIMBS - 2] = (value >> 32) as u32;
        }

        Self { limbs }
    }

    /// Returns the limbs, most significant first.
    pub const fn limbs(&self) -> &[u32; LIMBS] {
        &self.limbs
    }

    /// Returns limb `index`, or `0` when `index` is past the last limb.
    ///
    /// Index `0` is the most significant limb. Reading out of range is not
    /// an error so that carry and shift loops can address neighbours
    /// without boundary checks.
    #[inline]
    pub const fn limb(&self, index: usize) -> u32 {
        if index < LIMBS { self.limbs[index] } else { 0 }
    }

    /// Returns limb `index - back`, or `0` when that position lies before
    /// the first limb.
    #[inline]
    pub(crate) const fn limb_before(&self, index: usize, back: usize) -> u32 {
        if index >= back { self.limb(index - back) } else { 0 }
    }

    /// Returns `true` if every limb is zero.
    pub const fn is_zero(&self) -> bool {
        let mut i = 0;
        while i < LIMBS {
            if self.limbs[i] != 0 {
                return false;
            }
            i += 1;
        }
        true
    }

    /// Counts the number of leading zero bits.
    ///
    /// Returns a value in the range `0..=BITS`.
    pub fn leading_zeros(&self) -> u32 {
        let mut count = 0u32;

        for &limb in self.limbs.iter() {
            if limb == 0 {
                count += 32;
            } else {
                count += limb.leading_zeros();
                return count;
            }
        }

        count
    }

    /// Number of significant bits; `0` for the value zero.
    pub fn bits(&self) -> u32 {
        Self::BITS - self.leading_zeros()
    }

    /// Returns bit `n` counted from the least significant end.
    pub fn bit(&self, n: u32) -> bool {
        if n >= Self::BITS {
            return false;
        }

        let limb = self.limb(LIMBS - 1 - (n / 32) as usize);
        (limb >> (n % 32)) & 1 == 1
    }

    /// Converts to another width.
    ///
    /// Widening zero-extends into the high-order limbs. Narrowing keeps
    /// only the low-order limbs and silently drops the rest, the same way
    /// `as` narrows native integers.
    pub fn resize<const M: usize>(self) -> Uint<M> {
        let mut out = [0u32; M];

        for (o, &l) in out.iter_mut().rev().zip(self.limbs.iter().rev()) {
            *o = l;
        }

        Uint { limbs: out }
    }

    /// The low 64 bits, truncating everything above.
    pub fn low_u64(&self) -> u64 {
        (u64::from(self.limb_before(LIMBS, 2)) << 32) | u64::from(self.limb_before(LIMBS, 1))
    }

    /// The low 32 bits, truncating everything above.
    pub fn low_u32(&self) -> u32 {
        self.limb_before(LIMBS, 1)
    }
}

/// The default value is zero.
///
/// `Default` cannot be derived because arrays of arbitrary const length do
/// not implement it.
impl<const LIMBS: usize> Default for Uint<LIMBS> {
    fn default() -> Self {
        Self::ZERO
    }
}
