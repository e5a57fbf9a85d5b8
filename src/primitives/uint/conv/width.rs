//! Conversions between `Uint` widths
//!
//! Widths are strictly nested: a narrower value embeds losslessly into
//! every wider one, zero-extended into the high-order limbs. The reverse
//! direction is checked here; the unchecked truncating form is
//! [`Uint::resize`].

use crate::{error::ArithmeticError, primitives::uint::Uint};

macro_rules! impl_width_pair {
    ($narrow:literal => $($wide:literal),+) => {
        $(
            impl From<Uint<$narrow>> for Uint<$wide> {
                fn from(value: Uint<$narrow>) -> Self {
                    value.resize()
                }
            }

            /// Succeeds only if every limb above the narrow width is zero.
            impl TryFrom<Uint<$wide>> for Uint<$narrow> {
                type Error = ArithmeticError;

                fn try_from(value: Uint<$wide>) -> Result<Self, Self::Error> {
                    if value.limbs[..$wide - $narrow].iter().any(|&l| l != 0) {
                        return Err(ArithmeticError::Overflow);
                    }

                    Ok(value.resize())
                }
            }
        )+
    };
}

impl_width_pair!(4 => 8, 16, 32);
impl_width_pair!(8 => 16, 32);
impl_width_pair!(16 => 32);
