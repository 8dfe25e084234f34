//! Scanner for the textual form of a polynomial.
//!
//! The grammar is a run of terms with no separators other than the sign
//! carried by each coefficient:
//!
//! ```text
//! poly := term*
//! term := '+'? '-'? digit+ 'x' '^' '-'? digit+
//! ```
//!
//! Every term read is pushed through the same accumulator used by the
//! constructors, so parsing canonicalises exactly like `Polynomial::new`.

use tracing::debug;

use super::error::{ParseError, ParseErrorKind};
use super::poly::{Polynomial, TermAccumulator};
use super::term::Term;

struct Scanner<'a> {
    input: &'a str,
    idx: usize,
}

impl<'a> Scanner<'a> {
    fn new(input: &'a str) -> Self {
        Self { input, idx: 0 }
    }

    fn peek(&self) -> Option<u8> {
        self.input.as_bytes().get(self.idx).copied()
    }

    fn at_end(&self) -> bool {
        self.idx >= self.input.len()
    }

    fn rest(&self) -> &'a str {
        &self.input[self.idx..]
    }

    /// Consume `b` if it is the next byte.
    fn eat(&mut self, b: u8) -> bool {
        if self.peek() == Some(b) {
            self.idx += 1;
            true
        } else {
            false
        }
    }

    fn expect(&mut self, b: u8) -> Result<(), ParseError> {
        if self.eat(b) {
            Ok(())
        } else {
            Err(ParseError::new(self.idx, ParseErrorKind::UnexpectedInput))
        }
    }

    /// Read `-? digit+` as an i32.
    fn signed_int(&mut self) -> Result<i32, ParseError> {
        let start = self.idx;
        self.eat(b'-');
        let digits = self.idx;
        while self.peek().is_some_and(|b| b.is_ascii_digit()) {
            self.idx += 1;
        }
        if self.idx == digits {
            return Err(ParseError::new(digits, ParseErrorKind::UnexpectedInput));
        }
        // Only ASCII has been consumed, so both ends are char boundaries.
        self.input[start..self.idx]
            .parse()
            .map_err(|_| ParseError::new(start, ParseErrorKind::IntegerOverflow))
    }

    fn scan_term(&mut self) -> Result<Term, ParseError> {
        self.eat(b'+');
        let coefficient = self.signed_int()?;
        self.expect(b'x')?;
        self.expect(b'^')?;
        let exponent = self.signed_int()?;
        Ok(Term::new(coefficient, exponent))
    }

    /// Read the next term. On failure the cursor is left at the start of the
    /// term so that `rest` reports everything that was not consumed.
    fn next_term(&mut self) -> Result<Term, ParseError> {
        let start = self.idx;
        let term = self.scan_term();
        if term.is_err() {
            self.idx = start;
        }
        term
    }
}

/// Read as many leading terms as possible and ignore the remainder.
pub(crate) fn parse_lenient(input: &str) -> Polynomial {
    let mut scanner = Scanner::new(input);
    let mut acc = TermAccumulator::new();
    while !scanner.at_end() {
        match scanner.next_term() {
            Ok(term) => acc.insert_term(&term),
            Err(err) => {
                debug!(
                    offset = err.offset,
                    ignored = scanner.rest(),
                    "ignoring unparsed trailing input"
                );
                break;
            }
        }
    }
    acc.into_polynomial()
}

/// Read the whole input as terms, failing on anything else.
pub(crate) fn parse_strict(input: &str) -> Result<Polynomial, ParseError> {
    if input.is_empty() {
        return Err(ParseError::new(0, ParseErrorKind::Empty));
    }
    let mut scanner = Scanner::new(input);
    let mut acc = TermAccumulator::new();
    while !scanner.at_end() {
        let term = scanner.next_term()?;
        acc.insert_term(&term);
    }
    Ok(acc.into_polynomial())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scan_single_term() {
        let mut s = Scanner::new("+-12x^-3rest");
        assert_eq!(s.next_term(), Ok(Term::new(-12, -3)));
        assert_eq!(s.rest(), "rest");
    }

    #[test]
    fn test_failed_term_rewinds() {
        let mut s = Scanner::new("4x^2+5y^1");
        assert_eq!(s.next_term(), Ok(Term::new(4, 2)));
        let err = s.next_term().unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::UnexpectedInput);
        assert_eq!(err.offset, 6);
        assert_eq!(s.rest(), "+5y^1");
    }

    #[test]
    fn test_double_sign_is_rejected() {
        let mut s = Scanner::new("--3x^1");
        assert!(s.next_term().is_err());
        assert_eq!(s.rest(), "--3x^1");
    }

    #[test]
    fn test_overflow_reports_literal_start() {
        let mut s = Scanner::new("1x^99999999999");
        let err = s.next_term().unwrap_err();
        assert_eq!(err, ParseError::new(3, ParseErrorKind::IntegerOverflow));
    }

    #[test]
    fn test_i32_extremes() {
        let mut s = Scanner::new("-2147483648x^2147483647");
        assert_eq!(s.next_term(), Ok(Term::new(i32::MIN, i32::MAX)));
    }
}
