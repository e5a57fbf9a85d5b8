use crate::{polynomial::Polynomial, scalar::Scalar};
use std::fmt::{Display, Formatter, Result};

impl<T: Scalar + Display> Display for Polynomial<T> {
    /// Formats from the highest power down, e.g. `3x^2 - x + 1`.
    ///
    /// Zero terms are skipped and unit coefficients are left implicit
    /// except on the constant term. The zero polynomial prints as `0`.
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        if self.is_zero() {
            return f.write_str("0");
        }

        let mut first = true;

        for (power, &c) in self.coeffs.iter().enumerate().rev() {
            if c.is_zero() {
                continue;
            }

            let negative = c < T::zero();
            let magnitude = c.abs();

            match (first, negative) {
                (true, true) => f.write_str("-")?,
                (true, false) => {}
                (false, true) => f.write_str(" - ")?,
                (false, false) => f.write_str(" + ")?,
            }
            first = false;

            if power == 0 || !magnitude.is_one() {
                write!(f, "{magnitude}")?;
            }

            match power {
                0 => {}
                1 => f.write_str("x")?,
                _ => write!(f, "x^{power}")?,
            }
        }

        Ok(())
    }
}
