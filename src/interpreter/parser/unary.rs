use std::iter::Peekable;

use crate::{
    ast::{BinaryOperator, Expr},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::core::{ParseResult, parse_expression},
    },
};

/// Parses a factor with optional sign prefixes.
///
/// Supports prefix operators:
/// - `+` (no-op: the following factor is returned unchanged)
/// - `-` (negation, lowered to `0 - factor`; the tree has no dedicated
///   negation node)
///
/// Sign prefixes are right-associative, so `--3` is `0 - (0 - 3)`.
/// Without a prefix the function delegates to [`parse_primary`].
///
/// Grammar:
/// ```text
///     unary := "+" unary
///            | "-" unary
///            | primary
/// ```
/// # Parameters
/// - `tokens`: Token iterator with lookahead.
///
/// # Returns
/// The parsed factor, wrapped in a subtraction from zero for each `-`.
pub(crate) fn parse_unary<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    match tokens.peek() {
        Some((Token::Plus, _)) => {
            tokens.next();
            parse_unary(tokens)
        },
        Some((Token::Minus, _)) => {
            tokens.next();
            let operand = parse_unary(tokens)?;
            Ok(Expr::binary(BinaryOperator::Sub, Expr::number(0.0), operand))
        },
        _ => parse_primary(tokens),
    }
}

/// Parses a primary (atomic) expression.
///
/// Primary expressions form the base of the grammar:
/// - numeric literals
/// - identifiers
/// - parenthesized expressions
///
/// Grammar:
/// ```text
///     primary := "(" expression ")"
///              | number
///              | identifier
/// ```
/// # Parameters
/// - `tokens`: Token iterator positioned at the start of a primary
///   expression.
///
/// # Returns
/// The parsed primary [`Expr`].
///
/// # Errors
/// - `ExpectedFactor` if the lookahead token can start no factor.
/// - `UnexpectedToken` if a grouping is not closed with `)`.
pub(crate) fn parse_primary<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    match tokens.next() {
        Some((Token::Number(literal), _)) => Ok(Expr::number(*literal)),
        Some((Token::Identifier(name), _)) => Ok(Expr::variable(name.clone())),
        Some((Token::LParen, _)) => {
            let expression = parse_expression(tokens)?;
            match tokens.next() {
                Some((Token::RParen, _)) => Ok(expression),
                Some((token, position)) => {
                    Err(ParseError::UnexpectedToken { expected: "')'",
                                                      found:    format!("{token:?}"),
                                                      position: *position, })
                },
                None => Err(ParseError::UnexpectedEndOfInput { position: 0 }),
            }
        },
        Some((token, position)) => {
            Err(ParseError::ExpectedFactor { found:    format!("{token:?}"),
                                             position: *position, })
        },
        None => Err(ParseError::UnexpectedEndOfInput { position: 0 }),
    }
}
