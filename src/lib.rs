//! Fixed-size numeric building blocks
//!
//! This crate provides value types for exact and approximate arithmetic
//! that do not need heap-backed precision: wide unsigned integers of a
//! width chosen at compile time, complex numbers, small matrices and
//! vectors, and polynomials.
//!
//! The focus is on **predictable, native-like semantics**. Integer
//! arithmetic wraps exactly like the built-in unsigned types, shapes are
//! checked by the type system, and the few operations that can fail return
//! a `Result` instead of panicking.
//!
//! # Module overview
//!
//! - `primitives`
//!   Fixed-width unsigned integers (`U128`, `U256`, `U512`, `U1024`),
//!   all instances of the const-generic `Uint<LIMBS>`. They support
//!   comparison, bitwise operators, shifts, wrapping arithmetic, division
//!   with remainder, width conversions and decimal/hex formatting.
//!
//! - `scalar`
//!   The `Scalar` trait: the minimal numeric contract (ring operators,
//!   ordering, absolute value) required by generic containers. Implemented
//!   for the signed native integers, floats and every `Uint` width.
//!
//! - `complex`
//!   `Complex<T>` with field arithmetic against complex and real operands,
//!   polar form and the principal-branch elementary functions.
//!
//! - `linalg`
//!   `Matrix<T, R, C>` with compile-time shape, determinants and inversion;
//!   `Vec2` / `Vec3` vectors; eigenvalues and eigenvectors of 2×2
//!   matrices.
//!
//! - `polynomial`
//!   `Polynomial<T>` with arithmetic, long division, evaluation at real or
//!   complex points, and a Durand–Kerner solver for all complex roots.
//!
//! - `trig`
//!   Reciprocal trigonometric and hyperbolic functions for floats and
//!   complex numbers.
//!
//! - `error`
//!   The crate's error types.
//!
//! # Logging
//!
//! Iterative algorithms report progress through the [`log`] facade. The
//! crate never installs a logger; integer arithmetic does not log.

pub mod complex;
pub mod error;
pub mod linalg;
pub mod polynomial;
pub mod primitives;
pub mod scalar;
pub mod trig;

pub use complex::Complex;
pub use error::{AlgebraError, ArithmeticError};
pub use linalg::{Matrix, Vec2, Vec3};
pub use polynomial::{Polynomial, SolverConfig};
pub use primitives::{U128, U256, U512, U1024, Uint};
pub use scalar::Scalar;
pub use trig::ReciprocalTrig;
