//! Fixed-width unsigned integer primitive
//!
//! This module defines [`Uint`], a fixed-size unsigned integer generic over
//! its number of 32-bit limbs, and the four concrete widths used across the
//! crate:
//! - [`U128`]: 4 limbs
//! - [`U256`]: 8 limbs
//! - [`U512`]: 16 limbs
//! - [`U1024`]: 32 limbs
//!
//! `Uint` is a low-level value type, not an arbitrary-precision integer.
//! Its semantics follow native unsigned integers:
//! - arithmetic wraps modulo 2^BITS
//! - narrowing truncates unless the checked `TryFrom` form is used
//! - division by zero is the only failure
//!
//! The internal representation is big-endian at limb granularity and
//! remains stable across all operations and conversions.

mod arith;
mod conv;
mod core;
mod div;
mod fmt;
mod ops;

use num_traits::{One, Zero};

pub use self::core::Uint;

/// Unsigned integer with 128 bits.
pub type U128 = Uint<4>;

/// Unsigned integer with 256 bits.
pub type U256 = Uint<8>;

/// Unsigned integer with 512 bits.
pub type U512 = Uint<16>;

/// Unsigned integer with 1024 bits.
pub type U1024 = Uint<32>;

impl<const LIMBS: usize> Zero for Uint<LIMBS> {
    fn zero() -> Self {
        Self::ZERO
    }

    fn is_zero(&self) -> bool {
        Uint::is_zero(self)
    }
}

impl<const LIMBS: usize> One for Uint<LIMBS> {
    fn one() -> Self {
        Self::ONE
    }
}
