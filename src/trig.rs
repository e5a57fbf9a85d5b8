//! Reciprocal trigonometric and hyperbolic functions
//!
//! The standard library and [`Float`] stop at `sin`, `cos`, `tan` and their
//! hyperbolic and inverse forms. [`ReciprocalTrig`] adds the reciprocal
//! family on top of them, for real floats and for [`Complex`] values alike.
//! Every function is the reciprocal identity of its standard counterpart,
//! e.g. `cot x = cos x / sin x` and `acot x = atan(1/x)`, so poles and
//! domain restrictions follow those of the underlying function.

use crate::complex::Complex;
use num_traits::Float;

pub trait ReciprocalTrig: Sized {
    /// Cotangent, `cos x / sin x`.
    fn cot(self) -> Self;
    /// Secant, `1 / cos x`.
    fn sec(self) -> Self;
    /// Cosecant, `1 / sin x`.
    fn csc(self) -> Self;
    /// Inverse cotangent, `atan(1/x)`.
    fn acot(self) -> Self;
    /// Inverse secant, `acos(1/x)`.
    fn asec(self) -> Self;
    /// Inverse cosecant, `asin(1/x)`.
    fn acsc(self) -> Self;
    /// Hyperbolic cotangent, `1 / tanh x`.
    fn coth(self) -> Self;
    /// Hyperbolic secant, `1 / cosh x`.
    fn sech(self) -> Self;
    /// Hyperbolic cosecant, `1 / sinh x`.
    fn csch(self) -> Self;
    /// Inverse hyperbolic cotangent, `atanh(1/x)`.
    fn acoth(self) -> Self;
    /// Inverse hyperbolic secant, `acosh(1/x)`.
    fn asech(self) -> Self;
    /// Inverse hyperbolic cosecant, `asinh(1/x)`.
    fn acsch(self) -> Self;
}

impl<T: Float> ReciprocalTrig for T {
    fn cot(self) -> Self {
        self.cos() / self.sin()
    }

    fn sec(self) -> Self {
        self.cos().recip()
    }

    fn csc(self) -> Self {
        self.sin().recip()
    }

    fn acot(self) -> Self {
        self.recip().atan()
    }

    fn asec(self) -> Self {
        self.recip().acos()
    }

    fn acsc(self) -> Self {
        self.recip().asin()
    }

    fn coth(self) -> Self {
        self.tanh().recip()
    }

    fn sech(self) -> Self {
        self.cosh().recip()
    }

    fn csch(self) -> Self {
        self.sinh().recip()
    }

    fn acoth(self) -> Self {
        self.recip().atanh()
    }

    fn asech(self) -> Self {
        self.recip().acosh()
    }

    fn acsch(self) -> Self {
        self.recip().asinh()
    }
}

impl<T: Float> ReciprocalTrig for Complex<T> {
    fn cot(self) -> Self {
        self.cos() / self.sin()
    }

    fn sec(self) -> Self {
        self.cos().recip()
    }

    fn csc(self) -> Self {
        self.sin().recip()
    }

    fn acot(self) -> Self {
        self.recip().atan()
    }

    fn asec(self) -> Self {
        self.recip().acos()
    }

    fn acsc(self) -> Self {
        self.recip().asin()
    }

    fn coth(self) -> Self {
        self.tanh().recip()
    }

    fn sech(self) -> Self {
        self.cosh().recip()
    }

    fn csch(self) -> Self {
        self.sinh().recip()
    }

    fn acoth(self) -> Self {
        self.recip().atanh()
    }

    fn asech(self) -> Self {
        self.recip().acosh()
    }

    fn acsch(self) -> Self {
        self.recip().asinh()
    }
}
