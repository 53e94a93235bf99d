//! Parsing and evaluation of plain arithmetic expressions.
//!
//! The pipeline normalises the raw input into unambiguous atoms (every
//! minus sign resolved as either a subtraction or a literal sign),
//! converts the atoms to reverse Polish notation with the shunting-yard
//! algorithm, and folds the postfix sequence over an operand stack.
//! Exponentiation, fractional and negative exponents included, is
//! computed by the crate's own numeric kernel rather than the host
//! `powf`: repeated multiplication, decimal-to-fraction decomposition,
//! and a bisection root finder.
//!
//! ```
//! use evaluate::evaluate;
//!
//! assert_eq!(evaluate("(2+2)/4"), Ok(1.0));
//! ```

mod error;
mod eval;
mod num;
mod postfix;
mod token;


pub use crate::error::EvalError;
pub use crate::num::Fraction;

/// Evaluate an arithmetic expression.
///
/// Supports `+ - * / ^`, brackets, unary negation, and decimal literals.
/// Whitespace anywhere in the input is ignored. `^` is left-associative
/// like the other operators.
pub fn evaluate(input: &str) -> Result<f64, EvalError> {
    token::normalize(input)
        .and_then(postfix::to_postfix)
        .and_then(|rpn| eval::evaluate_postfix(&rpn))
}
