/// Addition/subtraction and multiplication/division levels.
///
/// Both levels are left-associative token loops; the multiplicative level
/// also resolves implicit multiplication by juxtaposition.
pub mod binary;
/// Expression entry point.
pub mod core;
/// Statement and statement-list parsing.
///
/// Distinguishes assignments from expressions with two tokens of lookahead
/// and drives the semicolon-separated statement list, committing every
/// non-final statement against the session as soon as it is parsed.
pub mod statement;
/// Sign prefixes and primary expressions.
pub mod unary;
