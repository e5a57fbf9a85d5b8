//! Complex numbers
//!
//! [`Complex<T>`] is a plain pair of real and imaginary parts over any
//! scalar `T`. Arithmetic needs only the ring operators of `T`, so it works
//! for floats, signed integers and the crate's `Uint` widths alike. The
//! elementary functions (roots, exponentials, logarithms, trigonometric and
//! hyperbolic functions and their inverses) require `T: Float` and return
//! principal values.

mod core;
mod fmt;
mod funcs;
mod ops;

pub use self::core::Complex;
