//! Root finder parameters.

use crate::error::AlgebraError;

/// Tuning for [`Polynomial::solve_with`](crate::polynomial::Polynomial::solve_with).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SolverConfig {
    /// Iteration stops once no root moves further than this in one step.
    pub tolerance: f64,
    /// Upper bound on iterations (minimum 1).
    pub max_iterations: usize,
}

impl SolverConfig {
    /// Checks that the tolerance is finite and positive and that at least
    /// one iteration is allowed.
    pub fn validate(&self) -> Result<(), AlgebraError> {
        if !self.tolerance.is_finite() || self.tolerance <= 0.0 {
            return Err(AlgebraError::InvalidSolverConfig);
        }

        if self.max_iterations < 1 {
            return Err(AlgebraError::InvalidSolverConfig);
        }

        Ok(())
    }
}

impl Default for SolverConfig {
    /// Default parameters: tolerance `1e-12`, 500 iterations.
    fn default() -> Self {
        Self {
            tolerance: 1e-12,
            max_iterations: 500,
        }
    }
}
