/// The evaluator module executes AST nodes and computes results.
///
/// The evaluator traverses the syntax tree bottom-up, computes every node's
/// value, decorates the nodes with their results and maintains the session
/// variable table. It is the core execution engine of the interpreter.
///
/// # Responsibilities
/// - Evaluates AST nodes, performing the four arithmetic operations.
/// - Owns the variable table and applies assignments to it.
/// - Reports runtime errors such as reading an unassigned variable.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer (scanner) reads one raw source line and produces the finite
/// sequence of tokens the parser consumes, each paired with its byte offset
/// and terminated by a single end-of-input marker. This is the first stage
/// of interpretation.
///
/// # Responsibilities
/// - Converts the input character stream into classified tokens.
/// - Handles numeric literals, identifiers, operators and delimiters.
/// - Reports lexical errors for characters outside the language.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser processes the token sequence produced by the lexer with one
/// token of lookahead and constructs the tree that represents the line's
/// statements. Only the final statement's tree is handed back; statements
/// before a `;` are committed against the session as soon as they are
/// complete.
///
/// # Responsibilities
/// - Converts tokens into structured AST nodes.
/// - Validates the grammar, reporting errors with byte offsets.
/// - Resolves implicit multiplication and assignment lookahead.
pub mod parser;
/// The render module formats a decorated syntax tree for inspection.
///
/// Two independent read-only renderers are provided: an indented listing
/// that shows each node's decoration, and an ASCII tree built from
/// box-drawing connectors. Neither mutates the tree; an undecorated node
/// renders a placeholder.
///
/// # Responsibilities
/// - Renders a tree as indented `label : val=...` lines.
/// - Renders a tree with `├──`/`└──` connectors.
/// - Distinguishes evaluated from never-evaluated nodes.
pub mod render;
