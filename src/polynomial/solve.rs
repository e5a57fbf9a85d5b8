//! Root finding
//!
//! All roots are found at once with the Durand–Kerner (Weierstrass)
//! iteration. For the monic polynomial `p` of degree `n`, each root estimate
//! is refined by
//!
//! ```text
//! z_i ← z_i − p(z_i) / ∏_{j≠i} (z_i − z_j)
//! ```
//!
//! Estimates are updated in place, so later roots in a sweep already see the
//! refined earlier ones. The initial estimates are the powers of
//! `0.4 + 0.9i`, which is neither real nor a root of unity, so the seeds
//! are distinct and off the real axis.

use crate::{
    complex::Complex,
    error::AlgebraError,
    polynomial::{Polynomial, SolverConfig},
};
use log::{debug, trace, warn};
use num_traits::{Float, NumCast};

fn horner<T: Float>(coeffs: &[Complex<T>], z: Complex<T>) -> Complex<T> {
    coeffs
        .iter()
        .rev()
        .fold(Complex::from(T::zero()), |acc, &c| acc * z + c)
}

/// `Σ |c_k| · r^k`, the magnitude scale of Horner's rounding error at `|z| = r`.
fn horner_scale<T: Float>(coeffs: &[Complex<T>], r: T) -> T {
    coeffs
        .iter()
        .rev()
        .fold(T::zero(), |acc, c| acc * r + c.norm())
}

impl<T: Float> Polynomial<T> {
    /// Finds all complex roots with the default [`SolverConfig`].
    pub fn solve(&self) -> Result<Vec<Complex<T>>, AlgebraError> {
        self.solve_with(&SolverConfig::default())
    }

    /// Finds all complex roots, repeated roots included.
    ///
    /// A polynomial of degree `n ≥ 1` yields `n` roots in no particular
    /// order. Constants, including the zero polynomial, have none.
    ///
    /// A root counts as settled once its step is within `config.tolerance`,
    /// or within the rounding noise of `T` at the root's magnitude,
    /// whichever is larger. It also counts as settled once `p(z)` is below
    /// the rounding error of evaluating `p` there. Near a root of high
    /// multiplicity the steps never shrink below that noise.
    ///
    /// # Errors
    ///
    /// - [`AlgebraError::InvalidSolverConfig`] if `config` fails
    ///   [`SolverConfig::validate`].
    /// - [`AlgebraError::NotConverged`] if some root is still moving after
    ///   `config.max_iterations` sweeps.
    pub fn solve_with(&self, config: &SolverConfig) -> Result<Vec<Complex<T>>, AlgebraError> {
        config.validate()?;

        let degree = self.degree();
        if degree == 0 {
            return Ok(Vec::new());
        }

        let tolerance: T = NumCast::from(config.tolerance).ok_or(AlgebraError::InvalidSolverConfig)?;
        let seed: Complex<T> = match (NumCast::from(0.4), NumCast::from(0.9)) {
            (Some(re), Some(im)) => Complex::new(re, im),
            _ => return Err(AlgebraError::InvalidSolverConfig),
        };
        let noise = T::epsilon() * (T::one() + T::one()).powi(4);

        let lead = self.leading();
        let monic: Vec<Complex<T>> = self.coeffs.iter().map(|&c| Complex::from(c / lead)).collect();

        let mut roots = Vec::with_capacity(degree);
        let mut power = Complex::from(T::one());
        for _ in 0..degree {
            roots.push(power);
            power = power * seed;
        }

        debug!("solving polynomial of degree {degree}");

        for iteration in 1..=config.max_iterations {
            let mut settled = true;
            let mut largest = T::zero();

            for i in 0..degree {
                let z = roots[i];
                let denominator = roots
                    .iter()
                    .enumerate()
                    .filter(|&(j, _)| j != i)
                    .fold(Complex::from(T::one()), |acc, (_, &w)| acc * (z - w));

                let value = horner(&monic, z);
                let step = value / denominator;
                roots[i] = z - step;

                let moved = step.norm();
                if moved.is_nan() {
                    warn!("durand-kerner diverged at iteration {iteration} for degree {degree}");
                    return Err(AlgebraError::NotConverged { iterations: iteration });
                }

                let moving = moved > tolerance.max(noise * (T::one() + z.norm()));
                let negligible = value.norm() <= noise * horner_scale(&monic, z.norm());
                if moving && !negligible {
                    settled = false;
                }
                largest = largest.max(moved);
            }

            trace!(
                "durand-kerner iteration {iteration}: largest step {:e}",
                largest.to_f64().unwrap_or(f64::NAN)
            );

            if settled {
                debug!("degree {degree} roots settled after {iteration} iterations");
                return Ok(roots);
            }
        }

        warn!(
            "durand-kerner did not converge for degree {degree} within {} iterations",
            config.max_iterations
        );

        Err(AlgebraError::NotConverged {
            iterations: config.max_iterations,
        })
    }
}
