use std::fmt;

use crate::error::EvalError;

/// A lexical atom of a normalised expression.
///
/// `Number` keeps the literal text exactly as scanned, fused sign and
/// decimal point included, so the negation rewrites can operate on atom
/// text without reparsing.
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    Plus,
    Minus,
    Multiply,
    Divide,
    Exponent,
    OpenParen,
    CloseParen,
    Number(String),
}

impl Token {
    /// Source text of the atom.
    pub fn text(&self) -> &str {
        match *self {
            Token::Plus => "+",
            Token::Minus => "-",
            Token::Multiply => "*",
            Token::Divide => "/",
            Token::Exponent => "^",
            Token::OpenParen => "(",
            Token::CloseParen => ")",
            Token::Number(ref n) => n,
        }
    }

    fn from_symbol(c: char) -> Result<Token, EvalError> {
        match c {
            '+' => Ok(Token::Plus),
            '-' => Ok(Token::Minus),
            '*' => Ok(Token::Multiply),
            '/' => Ok(Token::Divide),
            '^' => Ok(Token::Exponent),
            '(' => Ok(Token::OpenParen),
            ')' => Ok(Token::CloseParen),
            _ => Err(EvalError::UnrecognizedSymbol(c)),
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.text())
    }
}

/// Scan an expression into a normalised atom sequence.
///
/// Whitespace is stripped up front. Every `-` is resolved into exactly one
/// of: a binary subtraction, a sign fused into the following numeric
/// literal, or a negated-group rewrite. A negated group at the very start
/// of the expression becomes `-1 * (`; anywhere else the atom two places
/// back in the emitted output decides how the sign propagates (see
/// `rewrite_negated_group`).
pub fn normalize(input: &str) -> Result<Vec<Token>, EvalError> {
    let chars: Vec<char> =
        input.chars().filter(|c| !c.is_whitespace()).collect();
    let mut output = Vec::with_capacity(chars.len());
    let mut literal = String::new();
    // Set once an operator has been emitted: the next `-` is a sign,
    // not a subtraction.
    let mut sign_pending = false;

    for i in 0..chars.len() {
        let c = chars[i];
        if c.is_ascii_digit() || c == '.' {
            literal.push(c);
            sign_pending = false;
        } else if sign_pending
            || (i == 0 && c == '-')
            || (i == 1 && chars[0] == '-')
        {
            if c == '-' {
                if digit_follows(&chars, i) {
                    literal.push('-');
                } else {
                    flush(&mut literal, &mut output);
                    output.push(Token::Minus);
                }
            } else if c == '(' && chars[i - 1] == '-' {
                if i == 1 {
                    output.remove(0);
                    output.insert(0, Token::Number("-1".into()));
                    output.insert(1, Token::Multiply);
                } else if i >= 3 {
                    rewrite_negated_group(&mut output)?;
                }
                flush(&mut literal, &mut output);
                output.push(Token::OpenParen);
            } else {
                flush(&mut literal, &mut output);
                output.push(Token::from_symbol(c)?);
            }
        } else {
            // A `-` after a closing bracket stays a binary subtraction.
            sign_pending = c != ')';
            flush(&mut literal, &mut output);
            output.push(Token::from_symbol(c)?);
        }
    }
    flush(&mut literal, &mut output);
    Ok(output)
}

/// True when the character after position `i` begins a numeric literal.
/// A bare decimal point does not count, so `-.5` keeps its minus as an
/// operator and fails downstream.
fn digit_follows(chars: &[char], i: usize) -> bool {
    match chars.get(i + 1) {
        Some(c) => c.is_ascii_digit(),
        None => false,
    }
}

fn flush(literal: &mut String, output: &mut Vec<Token>) {
    if !literal.is_empty() {
        output.push(Token::Number(literal.clone()));
        literal.clear();
    }
}

// The scanner has emitted `.. atom op -` and now sees `(`: the group is
// negated, and the minus must be folded away. The atom two places back
// decides the fold:
//   `+ -(`  drops the plus, leaving a subtraction of the group;
//   `- -(`  cancels both minuses into an addition;
//   `* -(` / `/ -(`  pulls the sign onto the left operand's text;
//   `) -(`  is left alone (the minus is an ordinary subtraction).
// Anything else two places back violates the scan invariant.
fn rewrite_negated_group(output: &mut Vec<Token>) -> Result<(), EvalError> {
    let len = output.len();
    if len < 2 {
        return Err(EvalError::UnexpectedRewrite("-".into()));
    }
    match output[len - 2].clone() {
        Token::CloseParen => Ok(()),
        Token::Plus => {
            output.remove(len - 2);
            Ok(())
        }
        Token::Minus => {
            output.truncate(len - 2);
            output.push(Token::Plus);
            Ok(())
        }
        op @ Token::Multiply | op @ Token::Divide => {
            if len < 3 {
                return Err(EvalError::UnexpectedRewrite(op.text().into()));
            }
            let signed = format!("-{}", output[len - 3].text());
            output.remove(len - 1);
            output.remove(len - 3);
            output.insert(len - 3, Token::Number(signed));
            Ok(())
        }
        other => Err(EvalError::UnexpectedRewrite(other.text().into())),
    }
}
