use core::{error::Error, fmt::Display};

/// Errors raised while evaluating a polynomial at a point.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EvaluationError {
    /// Zero raised to an exponent below one, which has no value.
    ZeroToNonPositivePower { exponent: i32 },
}

impl Display for EvaluationError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            EvaluationError::ZeroToNonPositivePower { exponent } => {
                write!(f, "Cannot raise zero to exponent {exponent}")
            }
        }
    }
}

impl Error for EvaluationError {}

/// The reason a strict parse rejected its input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// The input contained no terms at all.
    Empty,
    /// Input remained that does not start a term.
    UnexpectedInput,
    /// A coefficient or exponent does not fit in an i32.
    IntegerOverflow,
}

/// Error returned by the strict parser, with the byte offset at which it gave up.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ParseError {
    pub offset: usize,
    pub kind: ParseErrorKind,
}

impl ParseError {
    pub(crate) const fn new(offset: usize, kind: ParseErrorKind) -> Self {
        Self { offset, kind }
    }
}

impl Display for ParseError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self.kind {
            ParseErrorKind::Empty => f.write_str("Expected at least one term, found empty input"),
            ParseErrorKind::UnexpectedInput => {
                write!(f, "Unexpected input at byte {}", self.offset)
            }
            ParseErrorKind::IntegerOverflow => {
                write!(f, "Integer literal at byte {} does not fit in 32 bits", self.offset)
            }
        }
    }
}

impl Error for ParseError {}
