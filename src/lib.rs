//! Univariate polynomials with integer coefficients and integer, possibly
//! negative, exponents.
//!
//! A [`Polynomial`] is a value type kept in canonical form: unique exponents,
//! no zero coefficients, terms sorted by descending exponent. Arithmetic,
//! evaluation and parsing always return a fresh canonical value.
//!
//! ```
//! use intpoly::Polynomial;
//!
//! let p = Polynomial::new(&[2, 3], &[1, 2]);
//! assert_eq!(p.to_string(), "3x^2+2x^1");
//! assert_eq!(Polynomial::parse("3x^2+2x^1"), p);
//! ```

pub mod polynomial_ring;
pub mod utilities;

pub use polynomial_ring::error::{EvaluationError, ParseError, ParseErrorKind};
pub use polynomial_ring::poly::Polynomial;
pub use polynomial_ring::term::Term;
