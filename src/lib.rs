//! # deskcalc
//!
//! deskcalc is an interactive calculator for a small arithmetic language
//! with variables, assignment, parenthesised grouping, unary signs and
//! implicit multiplication (`2(3+4)` or `x y` are products). Every input
//! line runs through a scanner, a recursive-descent parser and a
//! tree-walking evaluator that decorates the syntax tree with each node's
//! computed value; the decorated tree can then be rendered for inspection.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::interpreter::{
    evaluator::Context, lexer::tokenize, parser::statement::parse_statement_list,
};

/// Defines the structure of parsed code.
///
/// This module declares the `Expr` enum and related types that represent
/// the syntactic structure of one statement as a tree. The tree is built by
/// the parser, decorated in place by the evaluator and traversed by the
/// renderers.
///
/// # Responsibilities
/// - Defines the four node variants and the binary operator type.
/// - Carries a per-node decoration slot holding the last computed value.
/// - Guarantees exhaustive handling: every consumer matches on the tag.
pub mod ast;
/// Provides unified error types for scanning, parsing and evaluation.
///
/// This module defines all errors that can be raised while a line is
/// processed. It standardizes error reporting and carries detailed
/// information about failures, including offending characters, token
/// descriptions and byte offsets for user feedback.
///
/// # Responsibilities
/// - Defines one error type per pipeline phase.
/// - Wraps them in a single [`error::CalcError`] surface with `From` impls.
/// - Supports integration with standard error handling traits.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together the lexer, parser, evaluator and renderers to
/// provide a complete runtime for the language. It exposes the pieces the
/// shell composes: tokenizing a line, parsing its statements, evaluating
/// against the session and rendering the decorated result.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, evaluator, renderers.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;

pub use error::CalcError;

/// The decorated outcome of running one line.
#[derive(Debug, Clone, PartialEq)]
pub struct LineResult {
    /// Value of the line's final statement.
    pub value: f64,
    /// The final statement's decorated syntax tree, ready for rendering.
    pub ast:   crate::ast::Expr,
}

/// Runs one line of source through the full pipeline.
///
/// The line is scanned, its semicolon-separated statements are parsed —
/// each non-final statement is committed against `context` as soon as it is
/// parsed — and the final statement is evaluated. The returned
/// [`LineResult`] carries that statement's value together with its
/// decorated tree.
///
/// Assignments persist in `context` across calls; statements that
/// committed before a later failure in the same line stay committed.
///
/// # Errors
/// Returns the first error any phase raises: a lexical error, a syntax
/// error or an unknown-variable error. The line has no effect past the
/// statements already committed. Division by zero is not an error and
/// produces an IEEE-754 infinity or NaN.
///
/// # Examples
/// ```
/// use deskcalc::{interpreter::evaluator::Context, run_line};
///
/// let mut context = Context::new();
/// let result = run_line("x = 5; x + 1", &mut context).unwrap();
/// assert_eq!(result.value, 6.0);
/// assert_eq!(context.snapshot(), "{x=5}");
///
/// // Unknown variables are errors; division by zero is not.
/// assert!(run_line("q + 1", &mut context).is_err());
/// assert_eq!(run_line("1/0", &mut context).unwrap().value, f64::INFINITY);
/// ```
pub fn run_line(source: &str, context: &mut Context) -> Result<LineResult, CalcError> {
    let tokens = tokenize(source)?;
    let mut iter = tokens.iter().peekable();

    let mut ast = parse_statement_list(&mut iter, context)?;
    let value = context.eval(&mut ast)?;

    Ok(LineResult { value, ast })
}
