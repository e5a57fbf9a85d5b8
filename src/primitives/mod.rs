//! Primitive types
//!
//! Wide unsigned integers whose width is fixed at compile time. A value is
//! a plain array of 32-bit limbs on the stack, so every width is `Copy`
//! and no operation allocates.
//!
//! Arithmetic follows the native unsigned types: `+`, `-` and `*` wrap
//! modulo 2^BITS, `/` and `%` panic on a zero divisor, and the `checked_*`
//! and `overflowing_*` forms expose the carry when it matters.
//!
//! - `Uint<LIMBS>`: the generic integer over `LIMBS` limbs
//! - `U128`, `U256`, `U512`, `U1024`: its standard widths

mod uint;

pub use uint::{U128, U256, U512, U1024, Uint};
