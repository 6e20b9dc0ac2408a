use std::iter::Peekable;

use crate::{
    ast::{BinaryOperator, Expr},
    interpreter::{
        lexer::Token,
        parser::{core::ParseResult, unary::parse_unary},
    },
};

/// Parses addition and subtraction expressions.
///
/// Handles left-associative binary operators: `+` and `-`.
///
/// The rule is: `additive := multiplicative (("+" | "-") multiplicative)*`
///
/// # Parameters
/// - `tokens`: Token stream with byte offsets.
///
/// # Returns
/// An `Expr::BinaryOp` tree representing the parsed expression.
pub fn parse_additive<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut left = parse_multiplicative(tokens)?;
    loop {
        if let Some((token, _)) = tokens.peek()
           && let Some(op) = token_to_binary_operator(token)
           && matches!(op, BinaryOperator::Add | BinaryOperator::Sub)
        {
            tokens.next();
            let right = parse_multiplicative(tokens)?;
            left = Expr::binary(op, left, right);
            continue;
        }
        break;
    }
    Ok(left)
}

/// Parses multiplication-level expressions.
///
/// Handles the left-associative operators `*` and `/`, plus implicit
/// multiplication: a factor starting directly after a completed factor with
/// no operator between them multiplies it, so `2(3+4)`, `2 3` and `x y`
/// are all products. Juxtaposition binds exactly like `*`, so `2 3 4`
/// parses as `(2*3)*4`.
///
/// The rule is:
/// `multiplicative := unary (("*" | "/") unary | unary)*`
///
/// # Parameters
/// - `tokens`: Token stream with byte offsets.
///
/// # Returns
/// A binary expression tree combining unary-level nodes.
pub fn parse_multiplicative<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut left = parse_unary(tokens)?;
    loop {
        if let Some((token, _)) = tokens.peek()
           && let Some(op) = token_to_binary_operator(token)
           && matches!(op, BinaryOperator::Mul | BinaryOperator::Div)
        {
            tokens.next();
            let right = parse_unary(tokens)?;
            left = Expr::binary(op, left, right);
            continue;
        }
        // A factor may begin here with no operator in between: implicit
        // multiplication. Only `(`, a literal or an identifier can start
        // one, so sign prefixes never trigger this branch.
        if let Some((Token::LParen | Token::Number(_) | Token::Identifier(_), _)) = tokens.peek() {
            let right = parse_unary(tokens)?;
            left = Expr::binary(BinaryOperator::Mul, left, right);
            continue;
        }
        break;
    }
    Ok(left)
}

/// Maps an operator token to its [`BinaryOperator`], if it is one.
fn token_to_binary_operator(token: &Token) -> Option<BinaryOperator> {
    match token {
        Token::Plus => Some(BinaryOperator::Add),
        Token::Minus => Some(BinaryOperator::Sub),
        Token::Star => Some(BinaryOperator::Mul),
        Token::Slash => Some(BinaryOperator::Div),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interpreter::{lexer::tokenize, parser::statement::parse_statement};

    fn parse(source: &str) -> Expr {
        let tokens = tokenize(source).unwrap();
        let mut iter = tokens.iter().peekable();
        parse_statement(&mut iter).unwrap()
    }

    #[test]
    fn multiplication_binds_tighter_than_addition() {
        assert_eq!(parse("2+3*4"),
                   Expr::binary(BinaryOperator::Add,
                                Expr::number(2.0),
                                Expr::binary(BinaryOperator::Mul,
                                             Expr::number(3.0),
                                             Expr::number(4.0))));
    }

    #[test]
    fn parentheses_override_precedence() {
        assert_eq!(parse("(2+3)*4"),
                   Expr::binary(BinaryOperator::Mul,
                                Expr::binary(BinaryOperator::Add,
                                             Expr::number(2.0),
                                             Expr::number(3.0)),
                                Expr::number(4.0)));
    }

    #[test]
    fn addition_is_left_associative() {
        assert_eq!(parse("1-2-3"),
                   Expr::binary(BinaryOperator::Sub,
                                Expr::binary(BinaryOperator::Sub,
                                             Expr::number(1.0),
                                             Expr::number(2.0)),
                                Expr::number(3.0)));
    }

    #[test]
    fn juxtaposed_factors_multiply_left_to_right() {
        assert_eq!(parse("2 3 4"),
                   Expr::binary(BinaryOperator::Mul,
                                Expr::binary(BinaryOperator::Mul,
                                             Expr::number(2.0),
                                             Expr::number(3.0)),
                                Expr::number(4.0)));
    }

    #[test]
    fn juxtaposition_binds_like_explicit_multiplication() {
        // `1 + 2 3` is `1 + (2*3)`, not `(1+2)*3`.
        assert_eq!(parse("1 + 2 3"),
                   Expr::binary(BinaryOperator::Add,
                                Expr::number(1.0),
                                Expr::binary(BinaryOperator::Mul,
                                             Expr::number(2.0),
                                             Expr::number(3.0))));
    }

    #[test]
    fn identifier_before_parenthesis_is_a_product() {
        assert_eq!(parse("x(1)"),
                   Expr::binary(BinaryOperator::Mul,
                                Expr::variable("x"),
                                Expr::number(1.0)));
    }
}
