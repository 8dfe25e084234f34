use core::ops::{Mul, Neg};

use super::error::EvaluationError;

/// A single monomial c * x^e with integer coefficient and integer exponent.
///
/// A `Term` has no invariant of its own; the owning `Polynomial` guarantees
/// that stored terms have non-zero coefficients and unique exponents.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Term {
    coefficient: i32,
    exponent: i32,
}

impl Term {
    /// Create the term c * x^e.
    pub const fn new(coefficient: i32, exponent: i32) -> Self {
        Self {
            coefficient,
            exponent,
        }
    }

    pub const fn coefficient(&self) -> i32 {
        self.coefficient
    }

    pub const fn exponent(&self) -> i32 {
        self.exponent
    }

    /// Return true when the coefficient is zero.
    pub const fn is_zero(&self) -> bool {
        self.coefficient == 0
    }

    /// Return the product of two terms: coefficients multiply, exponents add.
    /// Overflow wraps.
    pub const fn multiply(&self, other: &Self) -> Self {
        Self {
            coefficient: self.coefficient.wrapping_mul(other.coefficient),
            exponent: self.exponent.wrapping_add(other.exponent),
        }
    }

    /// Return the term with the sign of the coefficient flipped.
    pub const fn negate(&self) -> Self {
        Self {
            coefficient: self.coefficient.wrapping_neg(),
            exponent: self.exponent,
        }
    }

    /// Return true iff coefficient and exponent both match.
    pub fn equals(&self, other: &Self) -> bool {
        self == other
    }

    /// Compute c * x^e.
    ///
    /// Fails whenever x is zero and e < 1, which includes the 0^0 case.
    pub fn evaluate(&self, x: f64) -> Result<f64, EvaluationError> {
        if x == 0.0 && self.exponent < 1 {
            return Err(EvaluationError::ZeroToNonPositivePower {
                exponent: self.exponent,
            });
        }
        Ok(f64::from(self.coefficient) * x.powi(self.exponent))
    }
}

impl Neg for Term {
    type Output = Term;

    #[inline(always)]
    fn neg(self) -> Term {
        self.negate()
    }
}

impl Neg for &Term {
    type Output = Term;

    #[inline(always)]
    fn neg(self) -> Term {
        self.negate()
    }
}

impl Mul for Term {
    type Output = Term;

    #[inline(always)]
    fn mul(self, other: Term) -> Term {
        self.multiply(&other)
    }
}

impl Mul<&Term> for &Term {
    type Output = Term;

    #[inline(always)]
    fn mul(self, other: &Term) -> Term {
        self.multiply(other)
    }
}

impl ::std::fmt::Display for Term {
    /// Positive coefficients carry an explicit `+`, negative ones their `-`.
    fn fmt(&self, f: &mut ::std::fmt::Formatter) -> ::std::fmt::Result {
        if self.coefficient > 0 {
            f.write_str("+")?;
        }
        write!(f, "{}x^{}", self.coefficient, self.exponent)
    }
}
