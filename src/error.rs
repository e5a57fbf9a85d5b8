//! Error types
//!
//! Failures in this crate are rare and of a fixed kind. Integer arithmetic
//! wraps modulo 2^N and unchecked narrowing truncates, so neither produces
//! an error; the only integer failure paths are division by zero and
//! checked narrowing of a value that does not fit.
//!
//! Linear algebra and root finding have their own failure modes, grouped
//! in [`AlgebraError`].

use thiserror::Error;

/// Errors raised by integer and polynomial arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ArithmeticError {
    /// The divisor of a division or remainder was zero.
    #[error("division by zero")]
    DivisionByZero,

    /// A checked narrowing conversion would have discarded non-zero bits.
    #[error("value does not fit in the target width")]
    Overflow,
}

/// Errors raised by vector, matrix, complex and polynomial algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AlgebraError {
    /// A zero vector cannot be normalized or projected onto.
    #[error("cannot normalize or project onto a null vector")]
    NullVector,

    /// The eigenvalues and eigenvectors given do not determine a matrix.
    #[error("eigen data is too vague to reconstruct a matrix")]
    VagueEigenData,

    /// The matrix has no inverse.
    #[error("matrix is singular")]
    SingularMatrix,

    /// More components were supplied than the target type holds.
    #[error("too many components: expected at most {expected}, got {found}")]
    TooManyComponents { expected: usize, found: usize },

    /// Root finder parameters are out of range.
    #[error("invalid solver configuration")]
    InvalidSolverConfig,

    /// The root finder ran out of iterations before the roots settled.
    #[error("root finding did not converge after {iterations} iterations")]
    NotConverged { iterations: usize },
}
