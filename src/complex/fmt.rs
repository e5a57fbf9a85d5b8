use crate::complex::Complex;
use num_traits::{One, Zero};
use std::fmt::{Display, Formatter, Result};
use std::ops::Neg;

impl<T> Display for Complex<T>
where
    T: Copy + Display + PartialOrd + Zero + One + Neg<Output = T>,
{
    /// Formats as `a+bi`.
    ///
    /// The real part is omitted when it is zero and the imaginary part is
    /// not; a unit imaginary magnitude prints as a bare `i`.
    ///
    /// Examples: `3+4i`, `3-i`, `-2i`, `i`, `5`, `0`.
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        if self.im.is_zero() {
            return write!(f, "{}", self.re);
        }

        let negative = self.im < T::zero();
        let magnitude = if negative { -self.im } else { self.im };

        if !self.re.is_zero() {
            write!(f, "{}{}", self.re, if negative { '-' } else { '+' })?;
        } else if negative {
            f.write_str("-")?;
        }

        if !magnitude.is_one() {
            write!(f, "{magnitude}")?;
        }

        f.write_str("i")
    }
}
