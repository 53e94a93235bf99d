use crate::error::EvalError;
use crate::token::Token;

/// Operator precedence. Brackets and numbers carry no precedence and
/// report zero.
fn precedence(token: &Token) -> u32 {
    match *token {
        Token::Plus | Token::Minus => 1,
        Token::Multiply | Token::Divide => 2,
        Token::Exponent => 3,
        _ => 0,
    }
}

/// Convert a normalised atom sequence to reverse Polish notation with the
/// shunting-yard algorithm.
///
/// Operators of equal precedence are popped before the current one is
/// pushed, so every operator is left-associative. That includes `^`,
/// which this crate groups as `(x^y)^z`.
pub fn to_postfix(atoms: Vec<Token>) -> Result<Vec<Token>, EvalError> {
    let mut output = Vec::with_capacity(atoms.len());
    let mut stack: Vec<Token> = Vec::new();

    for atom in atoms {
        let prec = precedence(&atom);
        if prec > 0 {
            while let Some(top) = stack.pop() {
                if precedence(&top) >= prec {
                    output.push(top);
                } else {
                    stack.push(top);
                    break;
                }
            }
            stack.push(atom);
        } else if atom == Token::CloseParen {
            // The opening bracket is discarded, not emitted.
            loop {
                match stack.pop() {
                    Some(Token::OpenParen) => break,
                    Some(op) => output.push(op),
                    None => return Err(EvalError::ExtraClosingBracket),
                }
            }
        } else if atom == Token::OpenParen {
            stack.push(atom);
        } else {
            output.push(atom);
        }
    }

    // Any operators still stacked belong to the output in pop order. An
    // unmatched opening bracket drains too and is caught by the evaluator.
    while let Some(op) = stack.pop() {
        output.push(op);
    }
    Ok(output)
}
