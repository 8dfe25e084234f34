use std::collections::{BTreeMap, btree_map::Entry};

use core::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};
use core::str::FromStr;
use tracing::{debug, trace};

use super::error::{EvaluationError, ParseError};
use super::parse;
use super::term::Term;

/// Accumulates terms into a map from exponent to running coefficient.
///
/// This is the only place where exponent collisions and cancellations are
/// resolved. Every constructor and arithmetic routine feeds its terms through
/// `insert_term` and then materialises the result with `into_polynomial`,
/// which emits the terms in strictly descending exponent order.
#[derive(Clone, Debug, Default)]
pub(crate) struct TermAccumulator {
    coeffs: BTreeMap<i32, i32>,
}

impl TermAccumulator {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Start from the terms of an already canonical polynomial.
    fn from_polynomial(p: &Polynomial) -> Self {
        Self {
            coeffs: p
                .terms
                .iter()
                .map(|t| (t.exponent(), t.coefficient()))
                .collect(),
        }
    }

    /// Insert-or-merge a single term. Zero terms are ignored, a term whose
    /// exponent is already present is added into it and the entry is dropped
    /// if the sum cancels.
    pub(crate) fn insert_term(&mut self, term: &Term) {
        if term.is_zero() {
            return;
        }
        match self.coeffs.entry(term.exponent()) {
            Entry::Occupied(mut entry) => {
                let c = entry.get().wrapping_add(term.coefficient());
                if c == 0 {
                    trace!(exponent = term.exponent(), "terms cancelled");
                    entry.remove();
                } else {
                    trace!(exponent = term.exponent(), coefficient = c, "terms merged");
                    *entry.get_mut() = c;
                }
            }
            Entry::Vacant(entry) => {
                entry.insert(term.coefficient());
            }
        }
    }

    /// Materialise the accumulated terms, highest exponent first.
    pub(crate) fn into_polynomial(self) -> Polynomial {
        let terms = self
            .coeffs
            .into_iter()
            .rev()
            .map(|(e, c)| Term::new(c, e))
            .collect();
        Polynomial { terms }
    }
}

/// A univariate polynomial with `i32` coefficients and `i32` (possibly
/// negative) exponents.
///
/// The term sequence is always canonical: exponents are unique, no
/// coefficient is zero and terms are sorted by strictly descending exponent.
/// The empty sequence is the zero polynomial. Because of this, the derived
/// equality (same length, same term at every index) is mathematical equality.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Polynomial {
    terms: Vec<Term>,
}

impl Polynomial {
    /// The zero polynomial.
    pub fn zero() -> Self {
        Self { terms: Vec::new() }
    }

    /// The constant polynomial 1x^0.
    pub fn one() -> Self {
        Self {
            terms: vec![Term::new(1, 0)],
        }
    }

    /// Create a polynomial from matching slices of coefficients and exponents.
    /// Duplicate exponents are merged and zero coefficients dropped, so the
    /// order of the pairs does not matter.
    ///
    /// Panics if the slices have different lengths.
    pub fn new(coeffs: &[i32], exps: &[i32]) -> Self {
        assert_eq!(
            coeffs.len(),
            exps.len(),
            "coefficient and exponent slices must have the same length"
        );
        Self::from_terms(coeffs.iter().zip(exps).map(|(&c, &e)| Term::new(c, e)))
    }

    /// Create a polynomial from an arbitrary collection of terms.
    pub fn from_terms<I: IntoIterator<Item = Term>>(terms: I) -> Self {
        let mut acc = TermAccumulator::new();
        for term in terms {
            acc.insert_term(&term);
        }
        acc.into_polynomial()
    }

    /// The terms, highest exponent first.
    pub fn terms(&self) -> &[Term] {
        &self.terms
    }

    /// The number of non-zero terms.
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_zero(&self) -> bool {
        self.terms.is_empty()
    }

    /// The largest exponent, or None for the zero polynomial.
    pub fn degree(&self) -> Option<i32> {
        self.terms.first().map(Term::exponent)
    }

    pub fn leading_term(&self) -> Option<&Term> {
        self.terms.first()
    }

    /// The coefficient of x^exponent, zero if no such term exists.
    pub fn coefficient(&self, exponent: i32) -> i32 {
        // Terms are sorted descending, so the comparison is flipped.
        self.terms
            .binary_search_by(|t| exponent.cmp(&t.exponent()))
            .map_or(0, |i| self.terms[i].coefficient())
    }

    /// Return self + other.
    pub fn add(&self, other: &Self) -> Self {
        let mut acc = TermAccumulator::from_polynomial(other);
        for term in self.terms.iter() {
            acc.insert_term(term);
        }
        acc.into_polynomial()
    }

    /// Return self - other.
    pub fn subtract(&self, other: &Self) -> Self {
        Polynomial::add(self, &other.negate())
    }

    /// Return self * other by expanding every pair of terms.
    pub fn multiply(&self, other: &Self) -> Self {
        let mut acc = TermAccumulator::new();
        for t1 in self.terms.iter() {
            for t2 in other.terms.iter() {
                acc.insert_term(&t1.multiply(t2));
            }
        }
        acc.into_polynomial()
    }

    /// Return -self. Negating a canonical sequence keeps it canonical, so
    /// the terms are mapped directly.
    pub fn negate(&self) -> Self {
        Self {
            terms: self.terms.iter().map(Term::negate).collect(),
        }
    }

    /// Return k * self.
    pub fn scale(&self, k: i32) -> Self {
        // Wrapping multiplication can produce zero coefficients, so this goes
        // through the accumulator rather than mapping in place.
        Self::from_terms(
            self.terms
                .iter()
                .map(|t| Term::new(t.coefficient().wrapping_mul(k), t.exponent())),
        )
    }

    /// Evaluate the polynomial at x. The zero polynomial is zero everywhere.
    ///
    /// Fails if any term would raise zero to an exponent below one.
    pub fn evaluate(&self, x: f64) -> Result<f64, EvaluationError> {
        self.terms
            .iter()
            .try_fold(0.0, |sum, term| Ok(sum + term.evaluate(x)?))
            .inspect_err(|err| debug!(%err, poly = %self, "evaluation failed"))
    }

    /// Return true iff self and other represent the same polynomial.
    pub fn equals(&self, other: &Self) -> bool {
        self == other
    }

    /// Parse the textual form produced by `Display`.
    ///
    /// Parsing is lenient: it stops at the first position that does not begin
    /// a term and ignores the rest of the input, so malformed input yields
    /// whatever prefix could be read (the zero polynomial if none).
    pub fn parse(s: &str) -> Self {
        parse::parse_lenient(s)
    }

    /// Parse the textual form, rejecting any input that is not made entirely
    /// of terms.
    pub fn try_parse(s: &str) -> Result<Self, ParseError> {
        parse::parse_strict(s)
    }

    /// Set self <- self + other
    fn set_add(&mut self, other: &Self) {
        *self = Polynomial::add(self, other);
    }

    /// Set self <- self - other
    fn set_sub(&mut self, other: &Self) {
        *self = Polynomial::subtract(self, other);
    }

    /// Set self <- self * other
    fn set_mul(&mut self, other: &Self) {
        *self = Polynomial::multiply(self, other);
    }
}

impl From<Term> for Polynomial {
    fn from(term: Term) -> Self {
        Self::from_terms([term])
    }
}

impl FromIterator<Term> for Polynomial {
    fn from_iter<I: IntoIterator<Item = Term>>(iter: I) -> Self {
        Self::from_terms(iter)
    }
}

impl FromStr for Polynomial {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_parse(s)
    }
}

impl Neg for Polynomial {
    type Output = Polynomial;

    #[inline(always)]
    fn neg(self) -> Polynomial {
        self.negate()
    }
}

impl Neg for &Polynomial {
    type Output = Polynomial;

    #[inline(always)]
    fn neg(self) -> Polynomial {
        self.negate()
    }
}

impl Add<Polynomial> for Polynomial {
    type Output = Polynomial;

    #[inline(always)]
    fn add(self, other: Polynomial) -> Polynomial {
        Polynomial::add(&self, &other)
    }
}

impl Add<&Polynomial> for &Polynomial {
    type Output = Polynomial;

    #[inline(always)]
    fn add(self, other: &Polynomial) -> Polynomial {
        Polynomial::add(self, other)
    }
}

impl AddAssign<Polynomial> for Polynomial {
    #[inline(always)]
    fn add_assign(&mut self, other: Polynomial) {
        self.set_add(&other);
    }
}

impl AddAssign<&Polynomial> for Polynomial {
    #[inline(always)]
    fn add_assign(&mut self, other: &Polynomial) {
        self.set_add(other);
    }
}

impl Sub<Polynomial> for Polynomial {
    type Output = Polynomial;

    #[inline(always)]
    fn sub(self, other: Polynomial) -> Polynomial {
        self.subtract(&other)
    }
}

impl Sub<&Polynomial> for &Polynomial {
    type Output = Polynomial;

    #[inline(always)]
    fn sub(self, other: &Polynomial) -> Polynomial {
        self.subtract(other)
    }
}

impl SubAssign<Polynomial> for Polynomial {
    #[inline(always)]
    fn sub_assign(&mut self, other: Polynomial) {
        self.set_sub(&other);
    }
}

impl SubAssign<&Polynomial> for Polynomial {
    #[inline(always)]
    fn sub_assign(&mut self, other: &Polynomial) {
        self.set_sub(other);
    }
}

impl Mul<Polynomial> for Polynomial {
    type Output = Polynomial;

    #[inline(always)]
    fn mul(self, other: Polynomial) -> Polynomial {
        self.multiply(&other)
    }
}

impl Mul<&Polynomial> for &Polynomial {
    type Output = Polynomial;

    #[inline(always)]
    fn mul(self, other: &Polynomial) -> Polynomial {
        self.multiply(other)
    }
}

impl MulAssign<Polynomial> for Polynomial {
    #[inline(always)]
    fn mul_assign(&mut self, other: Polynomial) {
        self.set_mul(&other);
    }
}

impl MulAssign<&Polynomial> for Polynomial {
    #[inline(always)]
    fn mul_assign(&mut self, other: &Polynomial) {
        self.set_mul(other);
    }
}

impl MulAssign<i32> for Polynomial {
    #[inline(always)]
    fn mul_assign(&mut self, k: i32) {
        *self = self.scale(k);
    }
}

impl ::std::fmt::Display for Polynomial {
    /// Terms are written highest exponent first with no separator; each
    /// term's sign separates it from the previous one. The zero polynomial
    /// is written as `0x^1`.
    fn fmt(&self, f: &mut ::std::fmt::Formatter) -> ::std::fmt::Result {
        if self.is_zero() {
            return f.write_str("0x^1");
        }
        for (i, term) in self.terms.iter().enumerate() {
            if i == 0 && term.coefficient() > 0 {
                write!(f, "{}x^{}", term.coefficient(), term.exponent())?
            } else {
                write!(f, "{}", term)?
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accumulator_merges_and_cancels() {
        let mut acc = TermAccumulator::new();
        acc.insert_term(&Term::new(2, 3));
        acc.insert_term(&Term::new(0, 7));
        acc.insert_term(&Term::new(5, -1));
        acc.insert_term(&Term::new(4, 3));
        acc.insert_term(&Term::new(-5, -1));

        let p = acc.into_polynomial();
        assert_eq!(p.terms(), &[Term::new(6, 3)]);
    }

    #[test]
    fn test_accumulator_orders_descending() {
        let mut acc = TermAccumulator::new();
        for e in [-2, 5, 0, 3, -7] {
            acc.insert_term(&Term::new(1, e));
        }
        let p = acc.into_polynomial();
        let exps: Vec<i32> = p.terms().iter().map(Term::exponent).collect();
        assert_eq!(exps, vec![5, 3, 0, -2, -7]);
    }

    #[test]
    fn test_coefficient_lookup() {
        let p = Polynomial::new(&[3, -1, 7], &[4, 0, -2]);
        assert_eq!(p.coefficient(4), 3);
        assert_eq!(p.coefficient(0), -1);
        assert_eq!(p.coefficient(-2), 7);
        assert_eq!(p.coefficient(1), 0);
        assert_eq!(Polynomial::zero().coefficient(0), 0);
    }

    #[test]
    #[should_panic]
    fn test_mismatched_lengths_panic() {
        let _ = Polynomial::new(&[1, 2], &[1]);
    }
}
