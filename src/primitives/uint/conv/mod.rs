//! Integer conversion utilities
//!
//! This module groups explicit conversions for the fixed-size `Uint`
//! primitive, following these principles:
//! - widening is lossless and implemented as `From`
//! - checked narrowing is `TryFrom` and fails when bits would be lost
//! - unchecked narrowing is explicit (`resize`, `low_u64`, `low_u32`) and
//!   truncates to the low-order limbs
//!
//! Conversions are split between native integers and the other `Uint`
//! widths.

mod native;
mod width;
