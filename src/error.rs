use std::error::Error;
use std::fmt;

/// Failure conditions surfaced while evaluating an expression.
///
/// Every stage of the pipeline reports through this type, so callers can
/// match on the exact condition instead of a formatted message. Bracket
/// mismatches are detected lazily: an unmatched opening bracket is only
/// noticed once it reaches the evaluator.
#[derive(Debug, PartialEq)]
pub enum EvalError {
    DivideByZero,
    ExtraClosingBracket,
    ExtraOpeningBracket(String),
    ExtraOperator(String),
    NegativeRoot(f64),
    RootCollapsed,
    UnexpectedEndOfInput,
    UnexpectedRewrite(String),
    UnrecognizedSymbol(char),
}

use EvalError::*;

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            DivideByZero => write!(f, "attempted to divide by zero"),
            ExtraClosingBracket => write!(f, "extra closing bracket"),
            ExtraOpeningBracket(ref atom) => {
                write!(f, "extra opening bracket: '{}' is not a value", atom)
            }
            ExtraOperator(ref op) => {
                write!(f, "extra operator '{}' without operands", op)
            }
            NegativeRoot(radicand) => {
                write!(f, "no real root of negative number {}", radicand)
            }
            RootCollapsed => write!(f, "root collapsed to zero"),
            UnexpectedEndOfInput => write!(f, "unexpected end of input"),
            UnexpectedRewrite(ref atom) => {
                write!(f, "unexpected atom '{}' before a negated group", atom)
            }
            UnrecognizedSymbol(c) => {
                write!(f, "unrecognized symbol: {}", c)
            }
        }
    }
}

impl Error for EvalError {}
