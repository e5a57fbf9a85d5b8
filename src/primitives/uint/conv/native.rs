//! Conversions between `Uint` and native integer types
//!
//! Native values are placed in the least significant limbs with the upper
//! limbs set to zero. Going back is checked: `TryFrom` succeeds only if
//! the value fits the native type.

use crate::{error::ArithmeticError, primitives::uint::Uint};

macro_rules! impl_from_small {
    ($($t:ty),+) => {
        $(
            impl<const LIMBS: usize> From<$t> for Uint<LIMBS> {
                fn from(value: $t) -> Self {
                    Self::from_u64(value as u64)
                }
            }
        )+
    };
}

impl_from_small!(u8, u16, u32, u64, usize);

/// Converts a `u128` into a `Uint`, filling the four low limbs.
impl<const LIMBS: usize> From<u128> for Uint<LIMBS> {
    fn from(value: u128) -> Self {
        let mut limbs = [0u32; LIMBS];

        for (k, l) in limbs.iter_mut().rev().take(4).enumerate() {
            *l = (value >> (32 * k)) as u32;
        }

        Self { limbs }
    }
}

impl<const LIMBS: usize> Uint<LIMBS> {
    /// The low 128 bits, truncating everything above.
    pub fn low_u128(&self) -> u128 {
        self.limbs
            .iter()
            .rev()
            .take(4)
            .enumerate()
            .fold(0u128, |acc, (k, &l)| acc | (u128::from(l) << (32 * k)))
    }
}

macro_rules! impl_try_into_native {
    ($($t:ty),+) => {
        $(
            /// Attempts to convert a `Uint` into a native integer.
            ///
            /// Fails with [`ArithmeticError::Overflow`] if any bit above the
            /// native width is set.
            impl<const LIMBS: usize> TryFrom<Uint<LIMBS>> for $t {
                type Error = ArithmeticError;

                fn try_from(value: Uint<LIMBS>) -> Result<Self, Self::Error> {
                    if value.bits() > <$t>::BITS {
                        return Err(ArithmeticError::Overflow);
                    }

                    Ok(value.low_u128() as $t)
                }
            }
        )+
    };
}

impl_try_into_native!(u8, u16, u32, u64, u128, usize);

/// Converts limbs given most significant first.
impl<const LIMBS: usize> From<[u32; LIMBS]> for Uint<LIMBS> {
    fn from(limbs: [u32; LIMBS]) -> Self {
        Self { limbs }
    }
}

/// Splits a `Uint` into its limbs, most significant first.
impl<const LIMBS: usize> From<Uint<LIMBS>> for [u32; LIMBS] {
    fn from(value: Uint<LIMBS>) -> Self {
        value.limbs
    }
}

impl<const LIMBS: usize> AsRef<[u32]> for Uint<LIMBS> {
    fn as_ref(&self) -> &[u32] {
        &self.limbs
    }
}
