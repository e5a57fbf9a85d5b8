//! Scalar element types
//!
//! Generic containers in this crate (matrices, polynomials) are written
//! against [`Scalar`]: the operator set of a ring with ordering, additive
//! and multiplicative identities, and an absolute value.
//!
//! Native unsigned integers are not scalars: their subtraction
//! panics on underflow in debug builds, while algorithms like cofactor
//! determinants rely on intermediate differences wrapping or going
//! negative. `Uint` wraps, so it qualifies.

use crate::primitives::Uint;
use num_traits::{One, Zero};
use std::ops::{Div, Sub};

/// A numeric element usable by the generic containers.
pub trait Scalar:
    Copy + PartialEq + PartialOrd + Zero + One + Sub<Output = Self> + Div<Output = Self>
{
    /// Absolute value. The identity for unsigned types.
    fn abs(self) -> Self;
}

macro_rules! impl_scalar_signed {
    ($($t:ty),+) => {
        $(
            impl Scalar for $t {
                #[inline]
                fn abs(self) -> Self {
                    <$t>::abs(self)
                }
            }
        )+
    };
}

impl_scalar_signed!(i8, i16, i32, i64, i128, isize, f32, f64);

impl<const LIMBS: usize> Scalar for Uint<LIMBS> {
    #[inline]
    fn abs(self) -> Self {
        self
    }
}
