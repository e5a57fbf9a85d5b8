//! Polynomials in one variable
//!
//! [`Polynomial<T>`] stores its coefficients in ascending degree and keeps
//! them trimmed, so the degree is always the index of the last entry.
//! Arithmetic with other polynomials and with scalars, long division and
//! evaluation at any point type the coefficients convert into (notably
//! [`Complex`](crate::complex::Complex)) are generic. Root finding needs
//! floating point coefficients; see [`Polynomial::solve_with`].

mod config;
mod core;
mod fmt;
mod ops;
mod solve;

pub use self::config::SolverConfig;
pub use self::core::Polynomial;
