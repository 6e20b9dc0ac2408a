use std::iter::Peekable;

use crate::{
    ast::Expr,
    error::{CalcError, ParseError},
    interpreter::{
        evaluator::Context,
        lexer::Token,
        parser::core::{ParseResult, parse_expression},
    },
};

/// Parses a single statement.
///
/// A statement is either:
/// - an assignment, `<identifier> = <expression>`, or
/// - a bare expression.
///
/// The function performs a limited lookahead: only when the next token is
/// an identifier *and* the token after it is `=` is the statement an
/// assignment. Anything else falls through to expression parsing, so
/// `x + 1` is an expression even though it starts with an identifier, and
/// chained assignments like `x = y = 2` are not supported.
///
/// # Parameters
/// - `tokens`: Token iterator positioned at the start of a statement.
///
/// # Returns
/// A parsed [`Expr`], an `Expr::Assignment` for the assignment form.
pub fn parse_statement<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    if let Some((Token::Identifier(_), _)) = tokens.peek() {
        let mut lookahead = tokens.clone();
        lookahead.next();

        if let Some((Token::Equals, _)) = lookahead.peek() {
            let name = if let Some((Token::Identifier(n), _)) = tokens.next() {
                n.clone()
            } else {
                unreachable!()
            };
            tokens.next();

            let expr = parse_expression(tokens)?;
            return Ok(Expr::assignment(name, expr));
        }
    }

    parse_expression(tokens)
}

/// Parses a semicolon-separated statement list through the end of input.
///
/// Grammar: `statement_list := statement (";" statement)* EndOfInput`
///
/// Every statement followed by a `;` is evaluated against `context` as soon
/// as it is parsed, so its assignments are visible to the statements after
/// it and stay committed even when a later statement fails. Only the final
/// statement's tree is returned, still unevaluated; the caller evaluates
/// and renders that one as the line's result.
///
/// # Parameters
/// - `tokens`: The line's full token sequence.
/// - `context`: The session the non-final statements are committed to.
///
/// # Returns
/// The syntax tree of the last statement in the list.
///
/// # Errors
/// Returns the first [`CalcError`] raised while parsing any statement,
/// evaluating a non-final statement, or matching the closing
/// [`Token::EndOfInput`].
pub fn parse_statement_list<'a, I>(tokens: &mut Peekable<I>,
                                   context: &mut Context)
                                   -> Result<Expr, CalcError>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut statement = parse_statement(tokens)?;
    while let Some((Token::Semicolon, _)) = tokens.peek() {
        tokens.next();
        context.eval(&mut statement)?;
        statement = parse_statement(tokens)?;
    }

    match tokens.next() {
        Some((Token::EndOfInput, _)) => Ok(statement),
        Some((token, position)) => {
            Err(ParseError::UnexpectedToken { expected: "';' or end of input",
                                              found:    format!("{token:?}"),
                                              position: *position, }.into())
        },
        None => Err(ParseError::UnexpectedEndOfInput { position: 0 }.into()),
    }
}
